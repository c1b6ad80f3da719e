//! Error type shared by every fallible figure operation.

use std::fmt;

use thiserror::Error;

/// How many vertices an operation wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountRequirement {
    AtLeast(usize),
    Exactly(usize),
}

impl fmt::Display for CountRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountRequirement::AtLeast(n) => write!(f, "at least {n}"),
            CountRequirement::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}

/// Which convexity rule a vertex triple broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryFault {
    /// An edge shorter than the tolerance.
    DegenerateEdge,
    /// Positive turn: vertices are not listed in clockwise order.
    WrongWinding,
    /// Turn magnitude below the tolerance.
    Collinear,
    /// Every turn is clockwise but the ring winds around more than once (a star).
    Overwound,
}

impl fmt::Display for GeometryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeometryFault::DegenerateEdge => "degenerate edge",
            GeometryFault::WrongWinding => "non-convex turn",
            GeometryFault::Collinear => "collinear edges",
            GeometryFault::Overwound => "self-overlapping ring",
        };
        f.write_str(s)
    }
}

/// Which regularity rule an edge pair broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Irregularity {
    UnequalSides,
    WrongAngle,
}

impl fmt::Display for Irregularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Irregularity::UnequalSides => f.write_str("unequal sides"),
            Irregularity::WrongAngle => f.write_str("wrong interior angle"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("invalid vertex count {found}, expected {expected}")]
    InvalidVertexCount {
        expected: CountRequirement,
        found: usize,
    },

    /// `points` renders the vertex triple around the offending turn.
    #[error("invalid sides ({fault} at vertex {at}); points: {points}")]
    InvalidGeometry {
        fault: GeometryFault,
        at: usize,
        points: String,
    },

    #[error("irregular polygon: {reason} at vertex {at}")]
    IrregularPolygon { reason: Irregularity, at: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("angle with a null-length vector is not defined")]
    DegenerateVector,

    #[error("cannot parse {token:?} as a number")]
    Parse { token: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FigureError {
    /// Validation failures, as opposed to read or lookup failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FigureError::InvalidVertexCount { .. }
                | FigureError::InvalidGeometry { .. }
                | FigureError::IrregularPolygon { .. }
        )
    }
}
