//! WAV file writing.

use crate::constants::WAV_BITS_PER_SAMPLE;
use crate::error::{Error, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Write interleaved f32 samples to a 16-bit PCM WAV file.
pub fn write_wav(path: &Path, samples: &[f32], channels: u16, sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: WAV_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Convert f32 samples to i16
    for &sample in samples {
        #[allow(clippy::cast_possible_truncation)]
        let sample_i16 = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer
            .write_sample(sample_i16)
            .map_err(|e| Error::WavWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    writer.finalize().map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::audio::decode_audio_file;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_decode_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tone.wav");

        // 1 second of a quiet ramp, stereo at 8 kHz
        let frames = 8000usize;
        let mut samples = Vec::with_capacity(frames * 2);
        for i in 0..frames {
            #[allow(clippy::cast_precision_loss)]
            let v = (i as f32 / frames as f32) * 0.5;
            samples.push(v);
            samples.push(-v);
        }

        write_wav(&path, &samples, 2, 8000).unwrap();

        let decoded = decode_audio_file(&path).unwrap();
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.sample_rate, 8000);
        assert_eq!(decoded.frames(), frames);
        assert!((decoded.duration_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clipped.wav");

        write_wav(&path, &[2.0, -2.0], 1, 8000).unwrap();

        let decoded = decode_audio_file(&path).unwrap();
        assert_eq!(decoded.frames(), 2);
        assert!(decoded.samples[0] > 0.99);
        assert!(decoded.samples[1] < -0.99);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let result = write_wav(
            Path::new("/nonexistent/dir/out.wav"),
            &[0.0; 4],
            1,
            8000,
        );
        assert!(matches!(result, Err(Error::WavWrite { .. })));
    }
}
