//! Subcommand bodies, generic over the vertex count and the output sink.

use anyhow::{Context, Result};
use regpoly::prelude::*;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use crate::summary::{self, BatchSummary};

/// `"x y angle side"`: anchor, heading of the first edge, side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementArg {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub side: f64,
}

impl FromStr for PlacementArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals = s
            .split_whitespace()
            .map(|t| t.parse::<f64>().map_err(|_| format!("not a number: {t:?}")))
            .collect::<Result<Vec<_>, _>>()?;
        match vals[..] {
            [x, y, angle, side] => Ok(Self { x, y, angle, side }),
            _ => Err(format!("expected 4 numbers \"x y angle side\", got {}", vals.len())),
        }
    }
}

impl PlacementArg {
    fn build<const V: usize>(self) -> Result<RegularPolygon<f64, V>> {
        RegularPolygon::with_placement(Point::new(self.x, self.y), self.angle, self.side)
            .with_context(|| format!("invalid placement {self:?}"))
    }
}

pub fn canonical<const V: usize>(out: &mut dyn Write) -> Result<()> {
    let p = RegularPolygon::<f64, V>::canonical()?;
    writeln!(out, "{p}")?;
    writeln!(out, "centroid: {}", p.centroid())?;
    writeln!(out, "area: {}", p.area())?;
    Ok(())
}

pub fn batch<const V: usize>(
    out: &mut dyn Write,
    count: usize,
    input: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let mut reader = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            TokenReader::new(BufReader::new(file))
        }
        None => TokenReader::new(std::io::stdin().lock()),
    };
    run_batch::<V>(out, count, &mut reader, json)
}

pub(crate) fn run_batch<const V: usize>(
    out: &mut dyn Write,
    count: usize,
    reader: &mut TokenReader<'_>,
    json: Option<&Path>,
) -> Result<()> {
    let mut figures = FigureArray::<RegularPolygon<f64, V>>::with_len(count)?;
    let outcome = figures.read_all(reader);
    if let Some(err) = &outcome.failure {
        writeln!(out, "read {} of {count}: {err}", outcome.parsed)?;
    }
    figures.print(out)?;
    writeln!(out, "centroids:")?;
    figures.print_centroids(out)?;
    writeln!(out, "areas:")?;
    figures.print_areas(out)?;
    writeln!(out, "total area: {}", figures.total_area())?;
    if let Some(path) = json {
        let doc = BatchSummary::collect(&figures, count, &outcome);
        summary::write_json(path, &doc)?;
        tracing::info!(path = %path.display(), "wrote summary");
    }
    Ok(())
}

pub fn equal<const V: usize>(out: &mut dyn Write, a: PlacementArg, b: PlacementArg) -> Result<()> {
    let pa = a.build::<V>()?;
    let pb = b.build::<V>()?;
    let verdict = if pa == pb { "congruent" } else { "not congruent" };
    writeln!(out, "{pa}")?;
    writeln!(out, "{pb}")?;
    writeln!(out, "{verdict}")?;
    Ok(())
}
