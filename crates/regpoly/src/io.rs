//! Whitespace-token reader for the textual figure format.
//!
//! Format
//! - A point is two whitespace-separated reals, `x` then `y`.
//! - A figure of arity `n` is `n` consecutive points; line breaks carry no
//!   meaning except for `skip_line`, which drops what is left of the current
//!   line after a rejected record.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::point::Point;
use crate::{FigureError, Scalar};

pub struct TokenReader<'a> {
    input: Box<dyn BufRead + 'a>,
    line: VecDeque<String>,
}

impl<'a> TokenReader<'a> {
    pub fn new(input: impl BufRead + 'a) -> Self {
        Self {
            input: Box::new(input),
            line: VecDeque::new(),
        }
    }

    /// Read from an in-memory string.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    fn next_token(&mut self) -> Result<String, FigureError> {
        loop {
            if let Some(tok) = self.line.pop_front() {
                return Ok(tok);
            }
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Err(FigureError::UnexpectedEof);
            }
            self.line
                .extend(buf.split_whitespace().map(str::to_owned));
        }
    }

    pub fn next_scalar<T: Scalar>(&mut self) -> Result<T, FigureError> {
        let tok = self.next_token()?;
        match tok.parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => Err(FigureError::Parse { token: tok }),
        }
    }

    pub fn next_point<T: Scalar>(&mut self) -> Result<Point<T>, FigureError> {
        let x = self.next_scalar()?;
        let y = self.next_scalar()?;
        Ok(Point::new(x, y))
    }

    /// Stage `n` points in source order; nothing is committed anywhere.
    pub fn read_points<T: Scalar>(&mut self, n: usize) -> Result<Vec<Point<T>>, FigureError> {
        (0..n).map(|_| self.next_point()).collect()
    }

    /// Drop the unread rest of the current line.
    pub fn skip_line(&mut self) {
        self.line.clear();
    }

    /// True once every token has been consumed and the source is exhausted.
    pub fn is_exhausted(&mut self) -> Result<bool, FigureError> {
        while self.line.is_empty() {
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(true);
            }
            self.line
                .extend(buf.split_whitespace().map(str::to_owned));
        }
        Ok(false)
    }
}
