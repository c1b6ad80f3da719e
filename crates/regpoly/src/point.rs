//! Planar points/vectors with tolerance-aware comparisons.
//!
//! Conventions
//! - A `Point` doubles as a position and as a direction vector; `rotate` and
//!   `angle_to` treat it as a vector anchored at the origin.
//! - `==` compares coordinates within `EPS`, while `abs_eq` compares lengths
//!   within `EPS`. The two are used for different things (placement vs. side
//!   lengths) and must not be swapped.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Rotation2, Vector2};

use crate::cfg::{eps, lit};
use crate::{FigureError, Scalar};

/// 2D point over a floating-point scalar.
#[derive(Clone, Copy, Debug)]
pub struct Point<T: Scalar>(Vector2<T>);

impl<T: Scalar> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn origin() -> Self {
        Self(Vector2::zeros())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0.y
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector2<T> {
        &self.0
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> T {
        self.0.norm()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.0.dot(&other.0)
    }

    /// Signed turn `x1·y2 - x2·y1`; negative for a clockwise turn.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.0.x * other.0.y - other.0.x * self.0.y
    }

    /// Lengths equal within `EPS`; positions are ignored.
    #[inline]
    pub fn abs_eq(&self, other: &Self) -> bool {
        (self.length() - other.length()).abs() < eps()
    }

    /// Unsigned angle in `[0, π]` between two origin-anchored vectors.
    ///
    /// Fails with `DegenerateVector` if either length is below `EPS`.
    pub fn angle_to(&self, other: &Self) -> Result<T, FigureError> {
        let (a, b) = (self.length(), other.length());
        if a < eps() || b < eps() {
            return Err(FigureError::DegenerateVector);
        }
        let one: T = lit(1.0);
        let cos = (self.dot(other) / a / b).clamp(-one, one);
        Ok(cos.acos())
    }

    /// Rotate counterclockwise about the origin.
    #[inline]
    pub fn rotate(&self, angle: T) -> Self {
        Self(Rotation2::new(angle) * self.0)
    }
}

/// Free-function form of [`Point::cross`].
#[inline]
pub fn cross<T: Scalar>(p1: &Point<T>, p2: &Point<T>) -> T {
    p1.cross(p2)
}

/// Free-function form of [`Point::dot`].
#[inline]
pub fn dot<T: Scalar>(p1: &Point<T>, p2: &Point<T>) -> T {
    p1.dot(p2)
}

/// Vertex centroid: mean of the coordinates.
///
/// An empty slice yields non-finite coordinates.
pub fn centroid<T: Scalar>(points: &[Point<T>]) -> Point<T> {
    let n: T = lit(points.len() as f64);
    points.iter().copied().sum::<Point<T>>() / n
}

impl<T: Scalar> Default for Point<T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.0.x - other.0.x).abs() < eps() && (self.0.y - other.0.y).abs() < eps()
    }
}

impl<T: Scalar> From<Vector2<T>> for Point<T> {
    fn from(v: Vector2<T>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Point<T>> for Vector2<T> {
    fn from(p: Point<T>) -> Self {
        p.0
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> AddAssign for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Scalar> SubAssign for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar> Neg for Point<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn mul(self, k: T) -> Self {
        Self(self.0 * k)
    }
}

/// No zero guard: dividing by zero yields non-finite coordinates.
impl<T: Scalar> Div<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn div(self, k: T) -> Self {
        Self(self.0 / k)
    }
}

impl<T: Scalar> MulAssign<T> for Point<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        self.0 *= k;
    }
}

impl<T: Scalar> DivAssign<T> for Point<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        self.0 /= k;
    }
}

impl<T: Scalar> Sum for Point<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::origin(), |acc, p| acc + p)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Point<$t>> for $t {
            type Output = Point<$t>;
            #[inline]
            fn mul(self, rhs: Point<$t>) -> Point<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);
