//! CSV loading and per-feature sample extraction
//!
//! One row per observed community, one numeric column per characteristic.
//! Loading is strict: a missing column, an empty cell, or a cell that does
//! not parse as a number aborts the run with the column named in the
//! diagnostic. Integer columns are accepted and widened to f64.

use crate::features::FeatureKind;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: PolarsError,
    },
    #[error("column '{0}' is missing from the input")]
    MissingColumn(String),
    #[error("column '{column}' has {cells} empty or non-numeric cell(s)")]
    NonNumeric { column: String, cells: usize },
    #[error("column '{0}' contains a non-finite value")]
    NonFinite(String),
    #[error("column '{0}' has no rows")]
    Empty(String),
}

/// All four feature samples from one CSV, in file order
#[derive(Debug)]
pub struct Dataset {
    pub rows: usize,
    samples: HashMap<FeatureKind, Vec<f64>>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let read_err = |source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        };
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(read_err)?
            .finish()
            .map_err(read_err)?;

        let mut samples = HashMap::new();
        for &kind in FeatureKind::all() {
            let name = kind.column();
            let series = df
                .column(name)
                .map_err(|_| DatasetError::MissingColumn(name.to_string()))?;

            // non-strict cast turns unparseable cells into nulls, so one
            // null count covers both empty and malformed cells
            let casted = series.cast(&DataType::Float64).map_err(|_| {
                DatasetError::NonNumeric {
                    column: name.to_string(),
                    cells: series.len(),
                }
            })?;
            let cells = casted.null_count();
            if cells > 0 {
                return Err(DatasetError::NonNumeric {
                    column: name.to_string(),
                    cells,
                });
            }

            let values: Vec<f64> = casted
                .f64()
                .map_err(|_| DatasetError::NonNumeric {
                    column: name.to_string(),
                    cells: casted.len(),
                })?
                .into_no_null_iter()
                .collect();

            if values.is_empty() {
                return Err(DatasetError::Empty(name.to_string()));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(DatasetError::NonFinite(name.to_string()));
            }
            samples.insert(kind, values);
        }

        Ok(Self {
            rows: df.height(),
            samples,
        })
    }

    /// Observations for one feature, in file order
    pub fn sample(&self, kind: FeatureKind) -> &[f64] {
        // load() populates every FeatureKind
        &self.samples[&kind]
    }
}
