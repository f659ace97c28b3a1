use crate::models::Statistics;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Calculate mean, median, sum and count of a dataset.
///
/// For an empty slice, mean and median are `None` and sum/count are zero.
/// The median of an even-length dataset is the average of the two central values.
pub fn calculate_statistics(data: &[f64]) -> Statistics {
    if data.is_empty() {
        return Statistics::empty();
    }

    let count = data.len();
    let sum: f64 = data.iter().sum();

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Statistics {
        mean: Some(sum / count as f64),
        median: Some(median),
        sum,
        count,
    }
}

/// Parse one dataset line as an integer, falling back to a float.
pub fn parse_value(line: &str) -> Option<f64> {
    let line = line.trim();
    line.parse::<i64>()
        .map(|v| v as f64)
        .ok()
        .or_else(|| line.parse::<f64>().ok())
}

/// Read numeric values back from a dataset file.
///
/// Lines that parse as neither integer nor float are skipped, including lines that
/// are not valid UTF-8. Only I/O failures are errors.
pub fn read_dataset<P: AsRef<Utf8Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open data file: {}", path))?;

    let mut values = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let line = line.with_context(|| format!("Failed to read data file: {}", path))?;
        if let Some(value) = std::str::from_utf8(&line).ok().and_then(parse_value) {
            values.push(value);
        }
    }

    tracing::debug!("Read {} values from {}", values.len(), path);
    Ok(values)
}

/// Write the statistics report, one `label: value` line per statistic.
///
/// Creates the containing directory if needed and overwrites any existing report.
pub fn write_report<P: AsRef<Utf8Path>>(path: P, stats: &Statistics) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create report: {}", path))?;
    let mut writer = BufWriter::new(file);
    for line in stats.report_lines() {
        writeln!(writer, "{}", line).with_context(|| format!("Failed to write report: {}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush report: {}", path))?;

    tracing::info!("Wrote statistics report to {}", path);
    Ok(())
}
