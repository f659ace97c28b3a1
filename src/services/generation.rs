use crate::models::{MAX_KEY, MIN_KEY, ROWS_KEY, SampleConfig};
use crate::services::validation::parse_int;
use anyhow::{Context, Result};
use camino::Utf8Path;
use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use thiserror::Error;

/// Row count used when `sample_data_rows` is absent
pub const DEFAULT_ROWS: i64 = 100;

/// Lower bound used when `sample_data_min` is absent
pub const DEFAULT_MIN: i64 = 1;

/// Upper bound used when `sample_data_max` is absent
pub const DEFAULT_MAX: i64 = 100;

/// Errors that can occur during dataset generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid range: max ({max}) is less than min ({min})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Field {field} is not an integer: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolved generation parameters.
///
/// Unlike validation, absent fields are defaulted (100 rows, range 1..=100) rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub rows: usize,
    pub min: i64,
    pub max: i64,
}

impl GenerationParams {
    /// Extract parameters from a configuration, applying defaults for absent fields.
    ///
    /// A negative row count yields zero rows.
    ///
    /// # Errors
    /// [`GenerationError::InvalidValue`] for a present non-integer field,
    /// [`GenerationError::InvalidRange`] when max < min.
    pub fn from_config(config: &SampleConfig) -> Result<Self, GenerationError> {
        let rows = field_or_default(config, ROWS_KEY, DEFAULT_ROWS)?;
        let min = field_or_default(config, MIN_KEY, DEFAULT_MIN)?;
        let max = field_or_default(config, MAX_KEY, DEFAULT_MAX)?;

        if max < min {
            return Err(GenerationError::InvalidRange { min, max });
        }

        Ok(Self {
            rows: usize::try_from(rows).unwrap_or(0),
            min,
            max,
        })
    }
}

fn field_or_default(
    config: &SampleConfig,
    field: &'static str,
    default: i64,
) -> Result<i64, GenerationError> {
    match config.get(field) {
        None => Ok(default),
        Some(raw) => parse_int(raw).ok_or_else(|| GenerationError::InvalidValue {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Generate a file of random integers, one per line with no header.
///
/// Row count and range come from `config` (see [`GenerationParams::from_config`]).
/// The parent directory is created if needed and any existing file is overwritten.
///
/// # Returns
/// The number of rows written
pub fn generate_sample_data<P: AsRef<Utf8Path>>(path: P, config: &SampleConfig) -> Result<usize> {
    generate_sample_data_with_rng(path, config, &mut rand::thread_rng())
}

/// Same as [`generate_sample_data`], drawing values from the supplied generator.
pub fn generate_sample_data_with_rng<P, R>(
    path: P,
    config: &SampleConfig,
    rng: &mut R,
) -> Result<usize>
where
    P: AsRef<Utf8Path>,
    R: Rng,
{
    let path = path.as_ref();

    // Range is checked before anything touches the filesystem
    let params = GenerationParams::from_config(config)?;
    tracing::info!(
        "Generating {} rows in [{}, {}] to {}",
        params.rows,
        params.min,
        params.max,
        path
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {}", parent))?;
    }

    let file = File::create(path)
        .map_err(GenerationError::from)
        .with_context(|| format!("Failed to create data file: {}", path))?;
    let mut writer = BufWriter::new(file);

    for _ in 0..params.rows {
        let value = rng.gen_range(params.min..=params.max);
        writeln!(writer, "{}", value)
            .map_err(GenerationError::from)
            .with_context(|| format!("Failed to write data file: {}", path))?;
    }

    writer
        .flush()
        .map_err(GenerationError::from)
        .with_context(|| format!("Failed to flush data file: {}", path))?;

    tracing::info!("Wrote {} rows to {}", params.rows, path);
    Ok(params.rows)
}
