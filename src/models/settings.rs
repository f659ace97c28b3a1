use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Application settings from q2_settings.yaml
///
/// Controls where the pipeline reads and writes files, and how it logs.
/// Every key is optional; absent keys fall back to the fixed default locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    #[serde(default = "default_config_path")]
    pub config_path: Utf8PathBuf,

    #[serde(default = "default_data_path")]
    pub data_path: Utf8PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: Utf8PathBuf,

    #[serde(default = "default_log_dir")]
    pub log_dir: Utf8PathBuf,

    #[serde(default)]
    pub debug_mode: bool,

    #[serde(default = "default_console_log")]
    pub console_log: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            data_path: default_data_path(),
            output_path: default_output_path(),
            log_dir: default_log_dir(),
            debug_mode: false,
            console_log: default_console_log(),
        }
    }
}

fn default_config_path() -> Utf8PathBuf {
    Utf8PathBuf::from("q2_config.txt")
}

fn default_data_path() -> Utf8PathBuf {
    Utf8PathBuf::from("data/sample_data.csv")
}

fn default_output_path() -> Utf8PathBuf {
    Utf8PathBuf::from("output/statistics.txt")
}

fn default_log_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("logs")
}

fn default_console_log() -> bool {
    true
}
