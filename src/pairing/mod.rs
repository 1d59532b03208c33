//! Video/audio file pairing.
//!
//! Pairs video files with audio tracks that share a basename, skipping
//! pairs whose lip-synced output already exists.

mod scanner;

pub use scanner::{MatchedPair, MediaFile, MediaKind, ScanOutcome, output_path_for, scan_folder};
