use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub despike: DespikeConfig,
    #[serde(default)]
    pub recording: RecordingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DespikeConfig {
    /// Monitored joint names (e.g. "wrist_right"), paired positionally
    /// with `thresholds`
    #[serde(default = "default_despike_joints")]
    pub joints: Vec<String>,
    /// Second-difference norm above which a sample counts as a spike
    #[serde(default = "default_despike_thresholds")]
    pub thresholds: Vec<f32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecordingConfig {
    /// Directory the timestamped CSV recordings are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_despike_joints() -> Vec<String> {
    vec![
        "wrist_right".to_string(),
        "wrist_left".to_string(),
        "elbow_right".to_string(),
        "elbow_left".to_string(),
    ]
}

fn default_despike_thresholds() -> Vec<f32> {
    vec![0.1, 0.1, 0.05, 0.05]
}

fn default_output_dir() -> String {
    "recordings".to_string()
}

impl Default for DespikeConfig {
    fn default() -> Self {
        Self {
            joints: default_despike_joints(),
            thresholds: default_despike_thresholds(),
        }
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(_) => Self::default(),
        }
    }
}
