// Pipeline metrics module
//
// Provides lightweight metrics tracking for a single pipeline run

use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// Per-run pipeline metrics
///
/// Records how long each stage took and how much data moved through it.
/// Metrics are logged once at the end of a run.
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Rows written by the dataset generator
    pub rows_generated: usize,

    /// Values successfully parsed back from the dataset file
    pub values_read: usize,

    /// Fields that failed validation
    pub invalid_fields: usize,

    /// Stage durations in execution order
    stage_timings: IndexMap<&'static str, Duration>,

    /// Run start time
    start_time: Instant,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            rows_generated: 0,
            values_read: 0,
            invalid_fields: 0,
            stage_timings: IndexMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Record the duration of a stage, accumulating if it ran more than once
    pub fn record_stage(&mut self, stage: &'static str, duration: Duration) {
        *self.stage_timings.entry(stage).or_default() += duration;
    }

    /// Run `f` and record how long it took under `stage`
    pub fn time_stage<T>(&mut self, stage: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record_stage(stage, start.elapsed());
        result
    }

    pub fn stage_duration(&self, stage: &str) -> Option<Duration> {
        self.stage_timings.get(stage).copied()
    }

    pub fn stages(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.stage_timings.iter().map(|(name, d)| (*name, *d))
    }

    /// Get total elapsed time since the run started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Pipeline Metrics Summary ===");
        tracing::info!("Elapsed: {:.3}s", self.elapsed().as_secs_f64());
        tracing::info!(
            "Rows generated: {}, values read: {}, invalid fields: {}",
            self.rows_generated,
            self.values_read,
            self.invalid_fields
        );
        for (stage, duration) in self.stages() {
            tracing::info!("  {}: {:.2}ms", stage, duration.as_secs_f64() * 1000.0);
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.rows_generated, 0);
        assert_eq!(metrics.values_read, 0);
        assert_eq!(metrics.stages().count(), 0);
    }

    #[test]
    fn test_record_stage_accumulates() {
        let mut metrics = PipelineMetrics::new();

        metrics.record_stage("generate", Duration::from_millis(100));
        metrics.record_stage("generate", Duration::from_millis(200));
        metrics.record_stage("report", Duration::from_millis(5));

        assert_eq!(
            metrics.stage_duration("generate"),
            Some(Duration::from_millis(300))
        );
        let order: Vec<_> = metrics.stages().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["generate", "report"]);
    }

    #[test]
    fn test_time_stage_returns_result() {
        let mut metrics = PipelineMetrics::new();
        let value = metrics.time_stage("load", || {
            thread::sleep(Duration::from_millis(5));
            42
        });

        assert_eq!(value, 42);
        assert!(metrics.stage_duration("load").unwrap() >= Duration::from_millis(5));
    }

    #[test]
    fn test_elapsed() {
        let metrics = PipelineMetrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.elapsed().as_millis() >= 10);
    }
}
