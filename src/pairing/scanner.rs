//! Folder scanning and basename matching.

use crate::constants::{extensions, suffixes};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Kind of media file, inferred from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A video file.
    Video,
    /// An audio file.
    Audio,
}

impl MediaKind {
    /// Infer the media kind from a path's extension, case-insensitively.
    ///
    /// Returns `None` for unrecognized extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?;
        if matches_any(ext, extensions::VIDEO) {
            return Some(Self::Video);
        }
        if matches_any(ext, extensions::AUDIO) {
            return Some(Self::Audio);
        }
        None
    }
}

/// Compare extension directly as `OsStr` to handle non-UTF-8 filenames.
fn matches_any(ext: &OsStr, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|c| ext.eq_ignore_ascii_case(OsStr::new(c)))
}

/// A classified media file.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Filename without its extension, the join key for pairing.
    pub basename: String,
    /// Inferred media kind.
    pub kind: MediaKind,
}

impl MediaFile {
    /// Classify a path as a media file.
    ///
    /// Returns `None` if the extension is not a recognized media type.
    /// Invalid UTF-8 in the stem is replaced with the Unicode replacement
    /// character, same as output path derivation.
    pub fn classify(path: &Path) -> Option<Self> {
        let kind = MediaKind::from_path(path)?;
        let basename = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self {
            path: path.to_path_buf(),
            basename,
            kind,
        })
    }
}

/// A video file and an audio file sharing the same basename.
#[derive(Debug, Clone)]
pub struct MatchedPair {
    /// Shared basename of the pair.
    pub basename: String,
    /// Path to the video file.
    pub video: PathBuf,
    /// Path to the audio file.
    pub audio: PathBuf,
}

/// Result of scanning a folder for video/audio pairs.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Matched pairs, in directory enumeration order of the videos.
    pub pairs: Vec<MatchedPair>,
    /// Videos skipped because their output file already exists.
    pub already_done: Vec<PathBuf>,
}

/// Derive the lip-synced output path for a video: `<stem>-output.mp4`
/// beside the video.
pub fn output_path_for(video: &Path) -> PathBuf {
    let stem = video.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );
    video.with_file_name(format!(
        "{stem}{}.{}",
        suffixes::OUTPUT,
        suffixes::OUTPUT_EXTENSION
    ))
}

/// Scan a folder and match video files to audio files by basename.
///
/// Videos without a matching audio track are silently ignored. Videos
/// whose output file already exists are reported in
/// [`ScanOutcome::already_done`] rather than paired. If several files
/// fold to the same basename and kind (e.g. `.MP4` and `.mp4`
/// variants), the last-scanned file wins.
///
/// Pair order follows directory enumeration order, which is not stable
/// across filesystems; callers should not depend on it for correctness.
pub fn scan_folder(dir: &Path) -> Result<ScanOutcome> {
    if !dir.is_dir() {
        return Err(Error::FolderNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |e: std::io::Error| Error::FolderRead {
        path: dir.to_path_buf(),
        source: e,
    };

    // Videos keep first-seen order; audios only need lookup by basename.
    let mut videos: Vec<MediaFile> = Vec::new();
    let mut video_index: HashMap<String, usize> = HashMap::new();
    let mut audios: HashMap<String, PathBuf> = HashMap::new();

    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(media) = MediaFile::classify(&path) else {
            continue;
        };
        match media.kind {
            MediaKind::Video => {
                if let Some(&i) = video_index.get(&media.basename) {
                    videos[i] = media;
                } else {
                    video_index.insert(media.basename.clone(), videos.len());
                    videos.push(media);
                }
            }
            MediaKind::Audio => {
                audios.insert(media.basename.clone(), media.path);
            }
        }
    }

    let mut outcome = ScanOutcome::default();
    for video in videos {
        let Some(audio) = audios.get(&video.basename) else {
            continue; // unmatched video, not an error
        };
        if output_path_for(&video.path).exists() {
            outcome.already_done.push(video.path);
            continue;
        }
        outcome.pairs.push(MatchedPair {
            basename: video.basename,
            video: video.path,
            audio: audio.clone(),
        });
    }

    Ok(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"stub").unwrap();
        path
    }

    #[test]
    fn test_media_kind_from_path() {
        assert_eq!(
            MediaKind::from_path(Path::new("clip.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("clip.MP4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("track.mp3")),
            Some(MediaKind::Audio)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("track.Wav")),
            Some(MediaKind::Audio)
        );
        assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_classify_extracts_basename() {
        let media = MediaFile::classify(Path::new("/data/interview.mp4")).unwrap();
        assert_eq!(media.basename, "interview");
        assert_eq!(media.kind, MediaKind::Video);
    }

    #[test]
    fn test_output_path_beside_video() {
        let out = output_path_for(Path::new("/data/interview.mp4"));
        assert_eq!(out, PathBuf::from("/data/interview-output.mp4"));
    }

    #[test]
    fn test_scan_matches_shared_basename() {
        let dir = TempDir::new().unwrap();
        let video = touch(dir.path(), "a.mp4");
        let audio = touch(dir.path(), "a.mp3");

        let outcome = scan_folder(dir.path()).unwrap();
        assert_eq!(outcome.pairs.len(), 1);
        assert_eq!(outcome.pairs[0].basename, "a");
        assert_eq!(outcome.pairs[0].video, video);
        assert_eq!(outcome.pairs[0].audio, audio);
        assert!(outcome.already_done.is_empty());
    }

    #[test]
    fn test_scan_ignores_unmatched_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "video_only.mp4");
        touch(dir.path(), "audio_only.mp3");
        touch(dir.path(), "readme.txt");

        let outcome = scan_folder(dir.path()).unwrap();
        assert!(outcome.pairs.is_empty());
        assert!(outcome.already_done.is_empty());
    }

    #[test]
    fn test_scan_skips_when_output_exists() {
        let dir = TempDir::new().unwrap();
        let video = touch(dir.path(), "b.mp4");
        touch(dir.path(), "b.mp3");
        touch(dir.path(), "b-output.mp4");

        let outcome = scan_folder(dir.path()).unwrap();
        assert!(outcome.pairs.is_empty());
        assert_eq!(outcome.already_done, vec![video]);
    }

    #[test]
    fn test_scan_at_most_one_pair_per_basename() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "c.mp4");
        touch(dir.path(), "c.mp3");
        touch(dir.path(), "c.wav");

        let outcome = scan_folder(dir.path()).unwrap();
        assert_eq!(outcome.pairs.len(), 1);
        assert_eq!(outcome.pairs[0].basename, "c");
    }

    #[test]
    fn test_scan_case_insensitive_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "d.MP4");
        touch(dir.path(), "d.Mp3");

        let outcome = scan_folder(dir.path()).unwrap();
        assert_eq!(outcome.pairs.len(), 1);
    }

    #[test]
    fn test_scan_missing_folder_is_error() {
        let result = scan_folder(Path::new("/nonexistent/folder/for/lipbatch"));
        assert!(matches!(result, Err(Error::FolderNotFound { .. })));
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.mp4")).unwrap();
        touch(dir.path(), "e.mp3");

        let outcome = scan_folder(dir.path()).unwrap();
        assert!(outcome.pairs.is_empty());
    }
}
