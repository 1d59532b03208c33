//! Audio decoding using symphonia.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded audio data with the source channel layout preserved.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples as f32 in range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels.max(1))
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let frames = self.frames() as f64;
        frames / f64::from(self.sample_rate)
    }
}

/// Decode an audio file to interleaved f32 samples.
///
/// Supports MP3 and WAV formats. Unlike analysis pipelines that fold
/// everything to mono, the channel count is preserved so padded output
/// keeps the source layout.
pub fn decode_audio_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    // Create hint from file extension
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    // Probe the file
    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    // Find the first audio track
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;
    let channels = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);

    // Create decoder
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut samples = Vec::new();

    // Decode all packets
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        append_samples(&decoded, channels, &mut samples);
    }

    #[allow(clippy::cast_possible_truncation)]
    let channels = channels as u16;

    Ok(DecodedAudio {
        samples,
        channels,
        sample_rate,
    })
}

/// Append decoded samples to the output buffer, interleaving channels.
fn append_samples(buffer: &AudioBufferRef, channels: usize, output: &mut Vec<f32>) {
    match buffer {
        AudioBufferRef::F32(buf) => {
            for i in 0..buf.frames() {
                for ch in 0..channels {
                    output.push(buf.chan(ch)[i]);
                }
            }
        }
        AudioBufferRef::S16(buf) => {
            const I16_NORM: f32 = 32768.0;
            for i in 0..buf.frames() {
                for ch in 0..channels {
                    output.push(f32::from(buf.chan(ch)[i]) / I16_NORM);
                }
            }
        }
        AudioBufferRef::S32(buf) => {
            const I32_NORM: f32 = 2_147_483_648.0;
            for i in 0..buf.frames() {
                for ch in 0..channels {
                    #[allow(clippy::cast_precision_loss)]
                    output.push(buf.chan(ch)[i] as f32 / I32_NORM);
                }
            }
        }
        _ => {
            // Unsupported sample format, skip
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_and_duration() {
        let decoded = DecodedAudio {
            samples: vec![0.0; 16000],
            channels: 2,
            sample_rate: 8000,
        };
        assert_eq!(decoded.frames(), 8000);
        assert_eq!(decoded.duration_secs(), 1.0);
    }

    #[test]
    fn test_zero_channels_does_not_divide_by_zero() {
        let decoded = DecodedAudio {
            samples: vec![0.0; 100],
            channels: 0,
            sample_rate: 8000,
        };
        assert_eq!(decoded.frames(), 100);
    }

    #[test]
    fn test_decode_missing_file_is_open_error() {
        let result = decode_audio_file(Path::new("/nonexistent/audio.mp3"));
        assert!(matches!(result, Err(Error::AudioOpen { .. })));
    }
}
