//! Mono sample buffer used by every synthesis stage
//!
//! All synthesis runs at a single fixed rate, so the buffer only carries its
//! samples; index 0 is always t = 0.

use std::ops::Index;

// ============================================================================
// Constants
// ============================================================================

/// Sample rate for all synthesis and export (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

/// Nyquist frequency for [`SAMPLE_RATE`]
pub const NYQUIST_HZ: f64 = SAMPLE_RATE as f64 / 2.0;

// ============================================================================
// Helper Functions
// ============================================================================

// Fixed durations from the recipe tables round to the nearest sample.
// Randomly drawn times and lengths floor, so a draw from `[low, high)`
// never lands on the sample after `high`.

/// Number of samples covering `seconds`, rounded to the nearest sample
#[inline]
pub fn samples_for(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).round().max(0.0) as usize
}

/// Index of the sample at or before `seconds`
#[inline]
pub fn sample_floor(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).floor().max(0.0) as usize
}

/// Time in seconds of the sample at `index`
#[inline]
pub fn time_at(index: usize) -> f64 {
    index as f64 / SAMPLE_RATE as f64
}

/// Convert decibels to linear amplitude
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert linear amplitude to decibels
///
/// Returns `f64::NEG_INFINITY` for zero input.
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

// ============================================================================
// Sample Buffer
// ============================================================================

/// Owned mono buffer of `f64` samples at [`SAMPLE_RATE`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Create a silent buffer of `len` samples
    pub fn silent(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// Wrap existing samples
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Build a buffer by evaluating `f` at each sample time
    pub fn from_fn(len: usize, mut f: impl FnMut(f64) -> f64) -> Self {
        (0..len).map(|i| f(time_at(i))).collect()
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    /// Get a reference to all samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get a mutable reference to all samples
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Consume the buffer, returning its samples
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Peak absolute amplitude (0.0 for an empty buffer)
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
    }

    /// Peak level in dBFS
    pub fn peak_db(&self) -> f64 {
        linear_to_db(self.peak())
    }

    /// Check buffer contains only finite samples
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }

    /// Multiply every sample by `gain`
    pub fn scale(&mut self, gain: f64) {
        for sample in self.samples.iter_mut() {
            *sample *= gain;
        }
    }

    /// Multiply sample-by-sample with a gain curve
    ///
    /// Samples past the end of `curve` are left untouched.
    pub fn apply_curve(&mut self, curve: &SampleBuffer) {
        for (sample, gain) in self.samples.iter_mut().zip(curve.iter()) {
            *sample *= gain;
        }
    }

    /// Add `other * gain` into this buffer starting at `offset`
    ///
    /// The overlap is additive; anything that would land past the end of
    /// this buffer is discarded.
    pub fn mix_at(&mut self, offset: usize, other: &SampleBuffer, gain: f64) {
        if offset >= self.samples.len() {
            return;
        }
        for (dst, src) in self.samples[offset..].iter_mut().zip(other.iter()) {
            *dst += src * gain;
        }
    }
}

impl FromIterator<f64> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for SampleBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
