//! WAV export
//!
//! Writes 16-bit PCM mono at 44.1kHz. Samples are clipped to [-1, 1] and
//! scaled by 32767 with truncation toward zero.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::dsp::{clip_sample, SampleBuffer, SAMPLE_RATE};
use crate::error::{Result, SfxError};

/// Bit depth of exported WAV files
pub const BIT_DEPTH: u16 = 16;

const PCM_SCALE: f64 = 32767.0;

/// WAV header for every exported file
pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BIT_DEPTH,
        sample_format: SampleFormat::Int,
    }
}

/// Quantize one sample to 16-bit PCM
#[inline]
pub fn to_pcm16(sample: f64) -> i16 {
    // `as` truncates toward zero
    (clip_sample(sample) * PCM_SCALE) as i16
}

/// Write `buffer` to `path` as a 16-bit mono WAV file
pub fn write_wav(buffer: &SampleBuffer, path: &Path) -> Result<()> {
    let wav_err = |e: hound::Error| SfxError::WavWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = WavWriter::create(path, wav_spec()).map_err(wav_err)?;
    for &sample in buffer {
        writer.write_sample(to_pcm16(sample)).map_err(wav_err)?;
    }
    writer.finalize().map_err(wav_err)?;

    Ok(())
}
