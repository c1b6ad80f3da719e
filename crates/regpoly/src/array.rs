//! Resizable batch of figures with aggregate reporting.
//!
//! Ownership is chosen by the element type:
//! - `FigureArray<RegularPolygon<f64, 6>>` or `FigureArray<Box<dyn Figure<..>>>`
//!   own their figures;
//! - `FigureArray<&mut dyn Figure<..>>` holds borrowed handles and never outlives
//!   the figures it points at.
//!
//! Slots past `len()` are kept allocated but are not live: reads, prints and
//! totals only visit `0..len()`.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::cfg::lit;
use crate::figure::{Figure, RegularPolygon};
use crate::io::TokenReader;
use crate::{FigureError, Scalar};

#[derive(Clone, Debug)]
pub struct FigureArray<F> {
    slots: Vec<F>,
    len: usize,
}

/// Result of [`FigureArray::read_all`]: a partial success, not an error.
#[derive(Debug)]
pub struct ReadOutcome {
    /// Elements committed before the first rejection (the new `len()`).
    pub parsed: usize,
    pub failure: Option<FigureError>,
}

impl ReadOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

impl<T: Scalar, const V: usize> FigureArray<RegularPolygon<T, V>> {
    /// `n` live canonical polygons; fails if the canonical `V`-gon does not
    /// validate in `T`.
    pub fn with_len(n: usize) -> Result<Self, FigureError> {
        Ok(Self::filled(n, RegularPolygon::canonical()?))
    }
}

impl<F: Figure + Clone> FigureArray<F> {
    /// `n` live copies of `proto`.
    pub fn filled(n: usize, proto: F) -> Self {
        Self::from_vec(vec![proto; n])
    }
}

impl<F: Figure> FigureArray<F> {
    /// Every element starts live.
    pub fn from_vec(slots: Vec<F>) -> Self {
        let len = slots.len();
        Self { slots, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&F> {
        self.slots[..self.len].get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut F> {
        self.slots[..self.len].get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.slots[..self.len].iter()
    }

    /// Parse one element in place; the element keeps its state on failure.
    pub fn read_one(&mut self, index: usize, input: &mut TokenReader<'_>) -> Result<(), FigureError> {
        match self.slots[..self.len].get_mut(index) {
            Some(slot) => slot.read(input),
            None => Err(FigureError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Refill slots `0..len()` in order, stopping at the first rejected element.
    ///
    /// On rejection the rest of the current input line is discarded and `len()`
    /// shrinks to the number of elements read so far. Earlier writes stay.
    pub fn read_all(&mut self, input: &mut TokenReader<'_>) -> ReadOutcome {
        let old_len = self.len;
        self.len = 0;
        for slot in &mut self.slots[..old_len] {
            if let Err(err) = slot.read(input) {
                warn!(index = self.len, error = %err, "figure rejected, truncating batch");
                input.skip_line();
                return ReadOutcome {
                    parsed: self.len,
                    failure: Some(err),
                };
            }
            self.len += 1;
        }
        ReadOutcome {
            parsed: self.len,
            failure: None,
        }
    }

    /// Drop a live element, shifting the tail left by one.
    pub fn remove(&mut self, index: usize) -> Result<(), FigureError> {
        if index >= self.len {
            return Err(FigureError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        debug!(index, len = self.len, "removed figure");
        Ok(())
    }

    pub fn total_area(&self) -> F::Coord {
        self.iter().fold(lit(0.0), |acc, f| acc + f.area())
    }

    /// `i: Label: [ ... ]` per live element.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (i, fig) in self.iter().enumerate() {
            let fig: &dyn Figure<Coord = F::Coord> = fig;
            writeln!(out, "{i}: {fig}")?;
        }
        Ok(())
    }

    pub fn print_centroids<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (i, fig) in self.iter().enumerate() {
            writeln!(out, "{i}: {}", fig.centroid())?;
        }
        Ok(())
    }

    pub fn print_areas<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (i, fig) in self.iter().enumerate() {
            writeln!(out, "{i}: {}", fig.area())?;
        }
        Ok(())
    }
}

impl<F: Figure> FromIterator<F> for FigureArray<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, F: Figure> IntoIterator for &'a FigureArray<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
