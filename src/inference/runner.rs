//! Synchronous invocation of the lip-sync inference process.

use crate::constants::batch_size;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs the external lip-sync inference script once per pair.
///
/// The process inherits stdio so model progress output reaches the
/// console directly. The call blocks until the process exits; no
/// timeout is enforced.
#[derive(Debug, Clone)]
pub struct InferenceRunner {
    python: String,
    script: PathBuf,
    checkpoint: PathBuf,
}

impl InferenceRunner {
    /// Create a runner for the given interpreter, script, and checkpoint.
    pub fn new(
        python: impl Into<String>,
        script: impl Into<PathBuf>,
        checkpoint: impl Into<PathBuf>,
    ) -> Self {
        Self {
            python: python.into(),
            script: script.into(),
            checkpoint: checkpoint.into(),
        }
    }

    /// Arguments passed to the interpreter for one pair.
    fn command_args(&self, video: &Path, audio: &Path, outfile: &Path) -> Vec<OsString> {
        vec![
            self.script.clone().into(),
            "--checkpoint_path".into(),
            self.checkpoint.clone().into(),
            "--face".into(),
            video.into(),
            "--audio".into(),
            audio.into(),
            "--outfile".into(),
            outfile.into(),
            "--face_det_batch_size".into(),
            batch_size::FACE_DETECTION.to_string().into(),
            "--wav2lip_batch_size".into(),
            batch_size::LIP_SYNC.to_string().into(),
        ]
    }

    /// Run inference for one video/audio pair, blocking until the
    /// process exits. Success is a zero exit status.
    pub fn run(&self, video: &Path, audio: &Path, outfile: &Path) -> Result<()> {
        let args = self.command_args(video, audio, outfile);
        debug!(
            "Running inference: {} {}",
            self.python,
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.python)
            .args(&args)
            .status()
            .map_err(|e| Error::InferenceSpawn {
                program: self.python.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(Error::InferenceFailed {
                video: video.to_path_buf(),
                audio: audio.to_path_buf(),
                status,
            });
        }

        Ok(())
    }
}
