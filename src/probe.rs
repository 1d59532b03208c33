//! Media duration probing via ffprobe.
//!
//! Video containers are treated as an external collaborator: duration
//! comes from `ffprobe` rather than an in-process demuxer, the same
//! contract as the inference process (invoke, check exit status).

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Probes media files for their duration using an ffprobe executable.
#[derive(Debug, Clone)]
pub struct DurationProber {
    program: String,
}

impl DurationProber {
    /// Create a prober that invokes the given ffprobe program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Return the duration of a media file in seconds.
    pub fn duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|e| Error::ProbeSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::ProbeFailed {
                path: path.to_path_buf(),
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let duration = parse_duration(&stdout).ok_or_else(|| Error::DurationParse {
            path: path.to_path_buf(),
            value: stdout.trim().to_string(),
        })?;

        debug!("Probed {}: {duration:.3}s", path.display());
        Ok(duration)
    }
}

/// Parse ffprobe's `format=duration` output into seconds.
fn parse_duration(output: &str) -> Option<f64> {
    let duration = output.trim().parse::<f64>().ok()?;
    duration.is_finite().then_some(duration)
}
