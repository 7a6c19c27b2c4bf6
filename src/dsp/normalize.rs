//! Post-processing: peak normalization and the export clip

use crate::dsp::buffer::SampleBuffer;

/// Peak level every rendered effect is normalized to
pub const PEAK_CEILING: f64 = 0.95;

/// Peaks at or below this are treated as silence and left alone
pub const SILENCE_THRESHOLD: f64 = 1e-9;

/// Scale `buffer` so its peak absolute sample is [`PEAK_CEILING`]
///
/// Silent (or near-silent) buffers are returned unchanged.
pub fn normalize(mut buffer: SampleBuffer) -> SampleBuffer {
    let peak = buffer.peak();
    if peak > SILENCE_THRESHOLD {
        buffer.scale(PEAK_CEILING / peak);
    }
    buffer
}

/// Clamp a single sample to [-1, 1]
#[inline]
pub fn clip_sample(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Clamp every sample to [-1, 1]
pub fn clip(mut buffer: SampleBuffer) -> SampleBuffer {
    for sample in buffer.samples_mut() {
        *sample = clip_sample(*sample);
    }
    buffer
}
