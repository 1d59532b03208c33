//! Audio decoding, silence padding, and WAV writing.

mod center;
mod decode;
mod silence;
mod writer;

pub use center::{center_audio, pad_samples, padded_audio_path, padding_duration};
pub use decode::{DecodedAudio, decode_audio_file};
pub use silence::{silence, silent_frames};
pub use writer::write_wav;
