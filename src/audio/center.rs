//! Audio centering within a video's timespan.
//!
//! When the audio track is shorter than the video, silence is added on
//! both sides so the speech sits in the middle of the video and the
//! padded track spans the full video duration.

use crate::audio::{DecodedAudio, decode_audio_file, silence, write_wav};
use crate::constants::suffixes;
use crate::error::Result;
use crate::probe::DurationProber;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Silence duration to add on each side of the audio, or `None` when the
/// audio already fills the video.
pub fn padding_duration(video_secs: f64, audio_secs: f64) -> Option<f64> {
    if audio_secs >= video_secs {
        None
    } else {
        Some((video_secs - audio_secs) / 2.0)
    }
}

/// Surround decoded samples with `padding_secs` of silence on each side.
pub fn pad_samples(decoded: &DecodedAudio, padding_secs: f64) -> Vec<f32> {
    let pad = silence(padding_secs, decoded.sample_rate, decoded.channels);
    let mut out = Vec::with_capacity(2 * pad.len() + decoded.samples.len());
    out.extend_from_slice(&pad);
    out.extend_from_slice(&decoded.samples);
    out.extend_from_slice(&pad);
    out
}

/// Derive the padded-audio path: `<stem>-padded.wav` beside the
/// original audio file.
pub fn padded_audio_path(audio: &Path) -> PathBuf {
    let stem = audio.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("audio"),
        |s| s.to_string_lossy(),
    );
    audio.with_file_name(format!(
        "{stem}{}.{}",
        suffixes::PADDED,
        suffixes::PADDED_EXTENSION
    ))
}

/// Center the audio within the video's duration.
///
/// Probes the video duration, decodes the audio, and if the audio is
/// shorter, writes a silence-padded copy beside the original and
/// returns its path. If the audio already covers the video, the
/// original path is returned unchanged and nothing is written.
///
/// Decoder and file handles are dropped before the padded file is
/// written; only the sample buffer is held across the write.
pub fn center_audio(video: &Path, audio: &Path, prober: &DurationProber) -> Result<PathBuf> {
    let video_secs = prober.duration(video)?;
    let decoded = decode_audio_file(audio)?;
    let audio_secs = decoded.duration_secs();

    let Some(padding_secs) = padding_duration(video_secs, audio_secs) else {
        debug!(
            "Audio {} ({audio_secs:.2}s) already covers video ({video_secs:.2}s), not padding",
            audio.display()
        );
        return Ok(audio.to_path_buf());
    };

    let padded = pad_samples(&decoded, padding_secs);
    let out_path = padded_audio_path(audio);
    write_wav(&out_path, &padded, decoded.channels, decoded.sample_rate)?;

    info!(
        "Centered audio written to {} ({padding_secs:.2}s silence each side)",
        out_path.display()
    );

    Ok(out_path)
}
