//! Figures: validated convex vertex rings and the capability shared by them.
//!
//! Purpose
//! - `Figure` is the object-safe interface the container and the text layer
//!   work against: vertex access, centroid, area, congruence, reassignment and
//!   reading.
//! - `ConvexRing` holds the validation every figure shares (count, winding,
//!   degeneracy). Concrete shapes wrap it and add their own invariants.
//!
//! Conventions
//! - Vertices are listed clockwise in a y-up frame: each consecutive edge pair
//!   must turn with a negative cross product of magnitude at least `EPS`.
//! - Equality is congruence within a shape family, never coordinate equality.

use std::borrow::Cow;
use std::fmt;

use crate::io::TokenReader;
use crate::point::{centroid, Point};
use crate::{FigureError, Scalar};

mod regular;
mod ring;

pub use regular::{regular_vertices, RegularPolygon};
pub use ring::{check_convex, ConvexRing};

/// Shape family tag compared before any congruence test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Shape {
    Regular { vertices: usize },
}

pub trait Figure {
    type Coord: Scalar;

    fn shape(&self) -> Shape;

    /// Live vertices; empty once the figure has been taken from.
    fn vertices(&self) -> &[Point<Self::Coord>];

    fn area(&self) -> Self::Coord;

    /// Short human label printed before the vertex list.
    fn label(&self) -> Cow<'static, str>;

    /// Replace every vertex at once, re-validating from scratch.
    ///
    /// On failure the figure keeps its previous vertices.
    fn set_vertices(&mut self, points: Vec<Point<Self::Coord>>) -> Result<(), FigureError>;

    /// Vertex count fixed at construction.
    fn arity(&self) -> usize {
        self.vertex_count()
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn vertex_at(&self, index: usize) -> Result<Point<Self::Coord>, FigureError> {
        self.vertices()
            .get(index)
            .copied()
            .ok_or(FigureError::IndexOutOfRange {
                index,
                len: self.vertex_count(),
            })
    }

    /// Mean of the vertex coordinates (not the area centroid).
    fn centroid(&self) -> Point<Self::Coord> {
        centroid(self.vertices())
    }

    /// Same shape family and same side length; placement is ignored.
    fn congruent_to(&self, other: &dyn Figure<Coord = Self::Coord>) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        match (first_edge(self.vertices()), first_edge(other.vertices())) {
            (Some(a), Some(b)) => a.abs_eq(&b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Read `arity()` points, then commit them through `set_vertices`.
    fn read(&mut self, input: &mut TokenReader<'_>) -> Result<(), FigureError> {
        let staged = input.read_points(self.arity())?;
        self.set_vertices(staged)
    }

    /// `Label: [ p0, p1, ... ]`
    fn fmt_figure(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.label())?;
        fmt_vertices(self.vertices(), f)
    }
}

pub(crate) fn first_edge<T: Scalar>(points: &[Point<T>]) -> Option<Point<T>> {
    match points {
        [a, b, ..] => Some(*b - *a),
        _ => None,
    }
}

/// Bracketed, comma-separated vertex list.
pub fn fmt_vertices<T: Scalar>(points: &[Point<T>], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[ ")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{p}")?;
    }
    f.write_str(" ]")
}

impl<T: Scalar> fmt::Display for dyn Figure<Coord = T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_figure(f)
    }
}

macro_rules! forward_figure {
    ($($ptr:ty),*) => {$(
        impl<F: Figure + ?Sized> Figure for $ptr {
            type Coord = F::Coord;

            fn shape(&self) -> Shape {
                (**self).shape()
            }
            fn vertices(&self) -> &[Point<F::Coord>] {
                (**self).vertices()
            }
            fn area(&self) -> F::Coord {
                (**self).area()
            }
            fn label(&self) -> Cow<'static, str> {
                (**self).label()
            }
            fn set_vertices(&mut self, points: Vec<Point<F::Coord>>) -> Result<(), FigureError> {
                (**self).set_vertices(points)
            }
            fn arity(&self) -> usize {
                (**self).arity()
            }
            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }
            fn vertex_at(&self, index: usize) -> Result<Point<F::Coord>, FigureError> {
                (**self).vertex_at(index)
            }
            fn centroid(&self) -> Point<F::Coord> {
                (**self).centroid()
            }
            fn congruent_to(&self, other: &dyn Figure<Coord = F::Coord>) -> bool {
                (**self).congruent_to(other)
            }
            fn read(&mut self, input: &mut TokenReader<'_>) -> Result<(), FigureError> {
                (**self).read(input)
            }
            fn fmt_figure(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (**self).fmt_figure(f)
            }
        }
    )*};
}

forward_figure!(&mut F, Box<F>);
