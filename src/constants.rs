//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "lipbatch";

/// Default path to the lip-sync model checkpoint, relative to the
/// working directory of the inference script.
pub const DEFAULT_CHECKPOINT: &str = "checkpoints/wav2lip_gan.pth";

/// Default interpreter used to run the inference script.
pub const DEFAULT_PYTHON: &str = "python";

/// Default path to the inference script.
pub const DEFAULT_SCRIPT: &str = "inference.py";

/// Default executable used to probe media durations.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Recognized media file extensions, matched case-insensitively.
pub mod extensions {
    /// Video file extensions.
    pub const VIDEO: &[&str] = &["mp4"];
    /// Audio file extensions.
    pub const AUDIO: &[&str] = &["mp3", "wav"];
}

/// Filename suffixes for derived files, appended to the input stem.
pub mod suffixes {
    /// Suffix for lip-synced output videos.
    pub const OUTPUT: &str = "-output";
    /// Extension for lip-synced output videos.
    pub const OUTPUT_EXTENSION: &str = "mp4";
    /// Suffix for centered (silence-padded) audio tracks.
    pub const PADDED: &str = "-padded";
    /// Extension for centered audio tracks.
    pub const PADDED_EXTENSION: &str = "wav";
}

/// Batch-size parameters passed to the inference process.
///
/// These match the fixed values the inference script was tuned with and
/// are not user-configurable.
pub mod batch_size {
    /// Face detection batch size.
    pub const FACE_DETECTION: usize = 32;
    /// Lip-sync generation batch size.
    pub const LIP_SYNC: usize = 256;
}

/// Bits per sample for written WAV files.
pub const WAV_BITS_PER_SAMPLE: u16 = 16;
