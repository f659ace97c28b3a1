//! SampleData - Config-driven synthetic dataset generator
//!
//! Main entry point for the command-line pipeline.
//!
//! # Execution Flow
//!
//! 1. Load settings from `q2_settings.yaml` (defaults if absent)
//! 2. Initialize logging → logs/sampledata.<date>
//! 3. Parse `q2_config.txt` into key/value entries
//! 4. Validate the numeric fields (failures are warnings only)
//! 5. Generate `data/sample_data.csv`
//! 6. Re-read the dataset and compute statistics
//! 7. Write `output/statistics.txt`
//!
//! A missing config file or a failed generation exits non-zero with the error on stderr.

use anyhow::Result;
use sampledata::{APP_NAME, ConfigManager, PipelineMetrics, VERSION, run_pipeline};

fn main() -> Result<()> {
    let config_manager = ConfigManager::new(".");
    let (settings, settings_source) = config_manager.load_settings_with_source()?;

    // Guard must outlive the run so buffered log lines are flushed on exit
    let _log_guard = sampledata::logging::setup_logging_with_console(
        &settings.log_dir,
        APP_NAME,
        settings.debug_mode,
        settings.console_log,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    settings_source.log();

    let mut metrics = PipelineMetrics::new();
    let result = run_pipeline(&settings, &mut metrics);
    metrics.log_summary();

    let run = result.inspect_err(|e| tracing::error!("Pipeline failed: {:#}", e))?;

    println!("Validation results: {}", run.validation);
    println!("Calculated statistics: {}", run.statistics);
    println!("Finished writing statistics to {}", run.report_path);

    Ok(())
}
