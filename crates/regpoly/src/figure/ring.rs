use std::mem;

use crate::cfg::{eps, lit, MIN_VERTICES};
use crate::error::{CountRequirement, GeometryFault};
use crate::point::{centroid, Point};
use crate::{FigureError, Scalar};

/// Strictly convex, clockwise vertex ring.
///
/// Invariants (while not taken from):
/// - at least `MIN_VERTICES` vertices;
/// - every consecutive edge is at least `EPS` long;
/// - every consecutive edge pair turns clockwise by a cross product of at least `EPS`;
/// - the turns add up to one clockwise revolution, so stars are rejected.
#[derive(Clone, Debug)]
pub struct ConvexRing<T: Scalar> {
    points: Vec<Point<T>>,
}

impl<T: Scalar> ConvexRing<T> {
    pub fn new(points: Vec<Point<T>>) -> Result<Self, FigureError> {
        if points.len() < MIN_VERTICES {
            return Err(FigureError::InvalidVertexCount {
                expected: CountRequirement::AtLeast(MIN_VERTICES),
                found: points.len(),
            });
        }
        check_convex(&points)?;
        Ok(Self::new_unchecked(points))
    }

    /// Caller guarantees the invariants, e.g. for generator output.
    pub(crate) fn new_unchecked(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Point<T> {
        centroid(&self.points)
    }

    /// Move the vertices out, leaving `self` with none.
    pub fn take(&mut self) -> Self {
        Self {
            points: mem::take(&mut self.points),
        }
    }
}

/// Consecutive edge pairs `(p[i]→p[i+1], p[i+1]→p[i+2])`, wrapping around.
pub(crate) fn edge_pairs<T: Scalar>(
    points: &[Point<T>],
) -> impl Iterator<Item = (usize, Point<T>, Point<T>)> + '_ {
    let n = points.len();
    (0..n).map(move |i| {
        let (a, b, c) = (points[i], points[(i + 1) % n], points[(i + 2) % n]);
        (i, b - a, c - b)
    })
}

/// Reject degenerate edges, counterclockwise turns, near-collinear turns and
/// rings that wind around more than once.
pub fn check_convex<T: Scalar>(points: &[Point<T>]) -> Result<(), FigureError> {
    let tol: T = eps();
    let mut winding: T = lit(0.0);
    for (i, e1, e2) in edge_pairs(points) {
        let turn = e1.cross(&e2);
        let fault = if e1.length() < tol || e2.length() < tol {
            GeometryFault::DegenerateEdge
        } else if turn > lit(0.0) {
            GeometryFault::WrongWinding
        } else if turn.abs() < tol {
            GeometryFault::Collinear
        } else {
            winding += turn.atan2(e1.dot(&e2));
            continue;
        };
        return Err(geometry_error(points, i, fault));
    }
    // A convex ring turns by exactly -2π; a star by -4π or more.
    if winding < lit::<T>(-3.0) * T::pi() {
        return Err(geometry_error(points, 0, GeometryFault::Overwound));
    }
    Ok(())
}

fn geometry_error<T: Scalar>(points: &[Point<T>], at: usize, fault: GeometryFault) -> FigureError {
    let n = points.len();
    let rendered = (0..3)
        .map(|k| points[(at + k) % n].to_string())
        .collect::<Vec<_>>()
        .join(" ");
    FigureError::InvalidGeometry {
        fault,
        at,
        points: rendered,
    }
}
