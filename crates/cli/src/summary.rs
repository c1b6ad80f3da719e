//! JSON summary written next to a batch report.
//!
//! Report-only: the same numbers the text report prints, for scripts that
//! post-process a run. The library never reads these files back, and
//! figures are never reconstructed from them; the text format in
//! `regpoly::io` stays the only input format.

use anyhow::{Context, Result};
use regpoly::{Figure, FigureArray, ReadOutcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct FigureSummary {
    pub label: String,
    pub centroid: [f64; 2],
    pub area: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub code_version: String,
    pub requested: usize,
    pub parsed: usize,
    /// Why reading stopped early, if it did.
    pub error: Option<String>,
    pub total_area: f64,
    pub figures: Vec<FigureSummary>,
}

impl BatchSummary {
    pub fn collect<F: Figure<Coord = f64>>(
        figures: &FigureArray<F>,
        requested: usize,
        outcome: &ReadOutcome,
    ) -> Self {
        Self {
            code_version: regpoly::VERSION.to_string(),
            requested,
            parsed: outcome.parsed,
            error: outcome.failure.as_ref().map(|e| e.to_string()),
            total_area: figures.total_area(),
            figures: figures
                .iter()
                .map(|f| {
                    let c = f.centroid();
                    FigureSummary {
                        label: f.label().into_owned(),
                        centroid: [c.x(), c.y()],
                        area: f.area(),
                    }
                })
                .collect(),
        }
    }
}

pub fn write_json<P: AsRef<Path>>(path: P, doc: &BatchSummary) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
