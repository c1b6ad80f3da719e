//! Planar figures: points, validated regular polygons and batches of them.
//!
//! Layout
//! - `point`: 2D vector/point arithmetic on top of `nalgebra::Vector2`.
//! - `figure`: the object-safe `Figure` capability, the shared convex-ring
//!   validation, and `RegularPolygon<T, V>`.
//! - `array`: `FigureArray<F>`, a batch that can own figures or hold borrowed
//!   handles, with batch reads and reports.
//! - `io`: whitespace-token reader for the textual format.
//! - `sample`: seeded, replayable random placements.
//!
//! Conventions
//! - Vertices are clockwise in a y-up frame (negative cross product per turn).
//! - One absolute tolerance, `cfg::EPS`, for every approximate comparison.

use std::fmt;
use std::str::FromStr;

pub mod array;
pub mod cfg;
mod error;
pub mod figure;
pub mod io;
pub mod point;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coordinate type: any real field that prints and parses (`f32`, `f64`).
pub trait Scalar: nalgebra::RealField + Copy + fmt::Display + FromStr {}

impl<T> Scalar for T where T: nalgebra::RealField + Copy + fmt::Display + FromStr {}

pub use array::{FigureArray, ReadOutcome};
pub use error::{CountRequirement, FigureError, GeometryFault, Irregularity};
pub use figure::{Figure, RegularPolygon, Shape};
pub use io::TokenReader;
pub use point::Point;

/// Named polygons used throughout tests and the CLI.
pub type Triangle<T = f64> = RegularPolygon<T, 3>;
pub type Hexagon<T = f64> = RegularPolygon<T, 6>;
pub type Octagon<T = f64> = RegularPolygon<T, 8>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::{FigureArray, ReadOutcome};
    pub use crate::cfg::EPS;
    pub use crate::figure::{regular_vertices, Figure, RegularPolygon, Shape};
    pub use crate::io::TokenReader;
    pub use crate::point::{centroid, Point};
    pub use crate::sample::{draw_batch, draw_regular, PlacementCfg, ReplayToken};
    pub use crate::{FigureError, Hexagon, Octagon, Scalar, Triangle};
}
