use std::borrow::Cow;
use std::fmt;

use super::ring::{edge_pairs, ConvexRing};
use super::{first_edge, Figure, Shape};
use crate::cfg::{eps, lit, MIN_VERTICES};
use crate::error::{CountRequirement, Irregularity};
use crate::point::Point;
use crate::{FigureError, Scalar};

/// Angle between consecutive edge vectors of a regular `n`-gon: `π - (n-2)·π/n`.
#[inline]
pub(crate) fn exterior_angle<T: Scalar>(n: usize) -> T {
    let n: T = lit(n as f64);
    let two: T = lit(2.0);
    T::pi() - T::pi() * (n - two) / n
}

/// Vertices of a regular polygon walked clockwise from `anchor`.
///
/// The first step is `(0, side)` rotated by `start_angle`; every further step is
/// turned by another `-exterior_angle`. With `side <= 0` or `count < 3` the
/// output is degenerate and will not validate.
pub fn regular_vertices<T: Scalar>(
    count: usize,
    anchor: Point<T>,
    start_angle: T,
    side: T,
) -> Vec<Point<T>> {
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }
    let turn: T = exterior_angle(count);
    let step = Point::new(lit(0.0), side);
    out.push(anchor);
    for i in 1..count {
        let k: T = lit((i - 1) as f64);
        let next = out[i - 1] + step.rotate(start_angle - turn * k);
        out.push(next);
    }
    out
}

/// Convex polygon with exactly `V` equal sides and equal angles.
///
/// Equality (`==`) is congruence: same `V` and same side length within `EPS`,
/// regardless of position or orientation.
#[derive(Clone, Debug)]
pub struct RegularPolygon<T: Scalar, const V: usize> {
    ring: ConvexRing<T>,
}

impl<T: Scalar, const V: usize> RegularPolygon<T, V> {
    const ARITY_OK: () = assert!(
        V >= MIN_VERTICES,
        "a regular polygon needs at least three vertices"
    );

    pub fn new(points: Vec<Point<T>>) -> Result<Self, FigureError> {
        Ok(Self {
            ring: Self::stage(points)?,
        })
    }

    /// Generated from `anchor`, heading `start_angle` and side length `side`.
    pub fn with_placement(anchor: Point<T>, start_angle: T, side: T) -> Result<Self, FigureError> {
        Self::new(regular_vertices(V, anchor, start_angle, side))
    }

    /// Unit `V`-gon anchored at the origin, heading straight up.
    ///
    /// Fails when `T` is too coarse for the generated ring to pass `EPS`
    /// (e.g. `f32` with a few dozen vertices or more).
    pub fn canonical() -> Result<Self, FigureError> {
        Self::with_placement(Point::origin(), lit(0.0), lit(1.0))
    }

    /// Full validation into a ring the caller commits on success.
    fn stage(points: Vec<Point<T>>) -> Result<ConvexRing<T>, FigureError> {
        if V < MIN_VERTICES {
            return Err(FigureError::InvalidVertexCount {
                expected: CountRequirement::AtLeast(MIN_VERTICES),
                found: points.len(),
            });
        }
        if points.len() != V {
            return Err(FigureError::InvalidVertexCount {
                expected: CountRequirement::Exactly(V),
                found: points.len(),
            });
        }
        let ring = ConvexRing::new(points)?;
        check_regular(ring.points())?;
        Ok(ring)
    }

    /// Length of the first edge; zero once taken from.
    pub fn side_length(&self) -> T {
        first_edge(self.ring.points())
            .map(|e| e.length())
            .unwrap_or_else(|| lit(0.0))
    }

    pub fn perimeter(&self) -> T {
        lit::<T>(V as f64) * self.side_length()
    }

    /// Distance from the center to the midpoint of a side.
    pub fn apothem(&self) -> T {
        let n: T = lit(V as f64);
        self.side_length() / (lit::<T>(2.0) * (T::pi() / n).tan())
    }

    /// Congruent copy shifted by `offset`.
    pub fn translated(&self, offset: Point<T>) -> Result<Self, FigureError> {
        Self::new(self.ring.points().iter().map(|&p| p + offset).collect())
    }

    /// Congruent copy turned counterclockwise about the centroid.
    pub fn rotated(&self, angle: T) -> Result<Self, FigureError> {
        let c = self.ring.centroid();
        Self::new(
            self.ring
                .points()
                .iter()
                .map(|&p| c + (p - c).rotate(angle))
                .collect(),
        )
    }

    /// Move out the vertices, leaving `self` with none; indexed access on it
    /// then fails until `set_vertices` succeeds.
    pub fn take(&mut self) -> Self {
        Self {
            ring: self.ring.take(),
        }
    }
}

/// Equal sides and the ideal turn between every consecutive edge pair.
fn check_regular<T: Scalar>(points: &[Point<T>]) -> Result<(), FigureError> {
    let tol: T = eps();
    let want: T = exterior_angle(points.len());
    let Some(side) = first_edge(points) else {
        return Ok(());
    };
    for (i, e1, e2) in edge_pairs(points) {
        if !e1.abs_eq(&side) {
            return Err(FigureError::IrregularPolygon {
                reason: Irregularity::UnequalSides,
                at: i,
            });
        }
        if (e1.angle_to(&e2)? - want).abs() > tol {
            return Err(FigureError::IrregularPolygon {
                reason: Irregularity::WrongAngle,
                at: i,
            });
        }
    }
    Ok(())
}

/// Same vertices as [`RegularPolygon::canonical`], without the `Result`.
///
/// Debug builds panic if the ring does not validate in `T`; use `canonical`
/// wherever that can happen.
impl<T: Scalar, const V: usize> Default for RegularPolygon<T, V> {
    fn default() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY_OK;
        let points = regular_vertices(V, Point::origin(), lit(0.0), lit(1.0));
        debug_assert!(
            Self::stage(points.clone()).is_ok(),
            "canonical {V}-gon does not validate at this precision"
        );
        Self {
            ring: ConvexRing::new_unchecked(points),
        }
    }
}

impl<T: Scalar, const V: usize> Figure for RegularPolygon<T, V> {
    type Coord = T;

    fn shape(&self) -> Shape {
        Shape::Regular { vertices: V }
    }

    fn vertices(&self) -> &[Point<T>] {
        self.ring.points()
    }

    /// Apothem formula: `½ · perimeter · apothem`.
    fn area(&self) -> T {
        lit::<T>(0.5) * self.perimeter() * self.apothem()
    }

    fn label(&self) -> Cow<'static, str> {
        match V {
            3 => "Triangle".into(),
            6 => "Hexagon".into(),
            8 => "Octagon".into(),
            n => format!("RegularPolygon({n})").into(),
        }
    }

    fn set_vertices(&mut self, points: Vec<Point<T>>) -> Result<(), FigureError> {
        self.ring = Self::stage(points)?;
        Ok(())
    }

    fn arity(&self) -> usize {
        V
    }
}

impl<T: Scalar, const V: usize> PartialEq for RegularPolygon<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.congruent_to(other)
    }
}

impl<T: Scalar, const V: usize> TryFrom<Vec<Point<T>>> for RegularPolygon<T, V> {
    type Error = FigureError;

    fn try_from(points: Vec<Point<T>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<T: Scalar, const V: usize> fmt::Display for RegularPolygon<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_figure(f)
    }
}
