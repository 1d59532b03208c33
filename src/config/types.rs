//! Configuration type definitions.

use crate::constants::{DEFAULT_CHECKPOINT, DEFAULT_FFPROBE, DEFAULT_PYTHON, DEFAULT_SCRIPT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Inference process settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// External tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Default processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Path to the lip-sync model checkpoint.
    pub checkpoint: PathBuf,

    /// Whether to center audio within the video by padding with silence.
    pub pad_audio: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            checkpoint: PathBuf::from(DEFAULT_CHECKPOINT),
            pad_audio: true,
        }
    }
}

/// Inference process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Interpreter used to run the inference script.
    pub python: String,

    /// Path to the inference script.
    pub script: PathBuf,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

/// External tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Executable used to probe media durations.
    pub ffprobe: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffprobe: DEFAULT_FFPROBE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.defaults.checkpoint,
            PathBuf::from("checkpoints/wav2lip_gan.pth")
        );
        assert!(config.defaults.pad_audio);
        assert_eq!(config.inference.python, "python");
        assert_eq!(config.inference.script, PathBuf::from("inference.py"));
        assert_eq!(config.tools.ffprobe, "ffprobe");
    }
}
