//! Error types for lipbatch.

/// Result type alias for lipbatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for lipbatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Input folder does not exist or is not a directory.
    #[error("input folder does not exist or is not a directory: {path}")]
    FolderNotFound {
        /// Path to the missing folder.
        path: std::path::PathBuf,
    },

    /// Failed to read a directory while scanning for pairs.
    #[error("failed to read folder '{path}'")]
    FolderRead {
        /// Path to the folder being scanned.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: std::path::PathBuf,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWrite {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to launch the duration probe executable.
    #[error("failed to launch duration probe '{program}'")]
    ProbeSpawn {
        /// Probe program name or path.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Duration probe exited with a failure status.
    #[error("duration probe failed for '{path}' ({status})")]
    ProbeFailed {
        /// Path to the media file being probed.
        path: std::path::PathBuf,
        /// Exit status of the probe process.
        status: std::process::ExitStatus,
    },

    /// Duration probe produced unparseable output.
    #[error("could not parse duration for '{path}' from probe output '{value}'")]
    DurationParse {
        /// Path to the media file being probed.
        path: std::path::PathBuf,
        /// Raw probe output.
        value: String,
    },

    /// Failed to launch the inference process.
    #[error("failed to launch inference process '{program}'")]
    InferenceSpawn {
        /// Inference program name or path.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Inference process exited with a failure status.
    #[error("inference failed for video '{video}' with audio '{audio}' ({status})")]
    InferenceFailed {
        /// Path to the input video.
        video: std::path::PathBuf,
        /// Path to the input audio.
        audio: std::path::PathBuf,
        /// Exit status of the inference process.
        status: std::process::ExitStatus,
    },
}
