//! Export of rendered buffers
//!
//! - WAV container writing
//! - External compressed-audio encoder
//! - Manifest of generated files

pub mod encoder;
pub mod manifest;
pub mod wav;

pub use encoder::{Encoder, FfmpegEncoder};
pub use manifest::{file_checksum, Manifest, ManifestEntry, MANIFEST_FILE};
pub use wav::{to_pcm16, wav_spec, write_wav};
