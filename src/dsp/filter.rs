//! Brick-wall spectral band-pass
//!
//! The whole buffer is transformed at once, every bin outside the band is
//! zeroed and the result is transformed back. There is no windowing or
//! roll-off: the hard mask (and the ringing it causes at the band edges) is
//! part of the character of the short transients built on top of it.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::dsp::buffer::{SampleBuffer, SAMPLE_RATE};

/// Inclusive frequency range in Hz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub low_hz: f64,
    pub high_hz: f64,
}

impl FrequencyBand {
    pub const fn new(low_hz: f64, high_hz: f64) -> Self {
        Self { low_hz, high_hz }
    }

    /// True if `freq_hz` lies within `[low_hz, high_hz]`
    #[inline]
    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }

    /// Band-pass `buffer` through this band
    pub fn apply(&self, buffer: &SampleBuffer) -> SampleBuffer {
        bandpass(buffer, self.low_hz, self.high_hz)
    }
}

/// Frequency of FFT bin `index` for a transform of `len` samples
#[inline]
pub fn bin_frequency(index: usize, len: usize) -> f64 {
    index as f64 * SAMPLE_RATE as f64 / len as f64
}

/// Zero all spectral content of `buffer` outside `[low_hz, high_hz]`
///
/// Returns a buffer of the same length. An inverted band or one that lies
/// entirely above Nyquist passes nothing and yields silence.
pub fn bandpass(buffer: &SampleBuffer, low_hz: f64, high_hz: f64) -> SampleBuffer {
    let len = buffer.len();
    if len == 0 {
        return SampleBuffer::default();
    }

    let band = FrequencyBand::new(low_hz, high_hz);

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(len);
    let inverse = planner.plan_fft_inverse(len);

    let mut spectrum: Vec<Complex<f64>> = buffer
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();

    forward.process(&mut spectrum);

    // Bins above len/2 are the negative-frequency mirror of bin len - k;
    // masking both halves alike keeps the inverse real.
    for (index, bin) in spectrum.iter_mut().enumerate() {
        let mirrored = index.min(len - index);
        if !band.contains(bin_frequency(mirrored, len)) {
            *bin = Complex::new(0.0, 0.0);
        }
    }

    inverse.process(&mut spectrum);

    // rustfft leaves the inverse unnormalized
    let norm = 1.0 / len as f64;
    spectrum.iter().map(|c| c.re * norm).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::buffer::NYQUIST_HZ;
    use crate::dsp::noise::noise;
    use approx::assert_abs_diff_eq;

    /// Sine at `freq` over `len` samples
    fn sine(freq: f64, len: usize) -> SampleBuffer {
        SampleBuffer::from_fn(len, |t| (2.0 * std::f64::consts::PI * freq * t).sin())
    }

    fn max_abs_diff(a: &SampleBuffer, b: &SampleBuffer) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_preserves_length() {
        for len in [1, 2, 7, 1000, 1323] {
            let out = bandpass(&noise(len, 5), 200.0, 1200.0);
            assert_eq!(out.len(), len);
        }
    }

    #[test]
    fn test_full_band_is_identity() {
        let input = noise(4410, 11);
        let out = bandpass(&input, 0.0, NYQUIST_HZ);
        assert!(max_abs_diff(&input, &out) < 1e-9);

        // Odd length has no Nyquist bin
        let input = noise(2205, 12);
        let out = bandpass(&input, 0.0, NYQUIST_HZ);
        assert!(max_abs_diff(&input, &out) < 1e-9);
    }

    #[test]
    fn test_idempotent_on_pass_band() {
        let once = bandpass(&noise(3000, 4), 900.0, 9000.0);
        let twice = bandpass(&once, 900.0, 9000.0);
        assert!(max_abs_diff(&once, &twice) < 1e-9);
    }

    #[test]
    fn test_rejects_out_of_band_tone() {
        // 4410 samples -> 10 Hz bins, so 1 kHz sits exactly on bin 100
        let input = sine(1000.0, 4410);
        let out = bandpass(&input, 2000.0, 3000.0);
        assert!(out.peak() < 1e-9, "leaked peak {}", out.peak());
    }

    #[test]
    fn test_passes_in_band_tone() {
        let input = sine(1000.0, 4410);
        let out = bandpass(&input, 900.0, 1100.0);
        assert!(max_abs_diff(&input, &out) < 1e-9);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let input = sine(1000.0, 4410);
        let out = bandpass(&input, 1000.0, 1000.0);
        assert!(max_abs_diff(&input, &out) < 1e-9);
    }

    #[test]
    fn test_inverted_band_is_silent() {
        let out = bandpass(&noise(1000, 3), 5000.0, 1000.0);
        assert_eq!(out.len(), 1000);
        assert_abs_diff_eq!(out.peak(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_band_above_nyquist_is_silent() {
        let out = bandpass(&noise(1000, 3), NYQUIST_HZ + 1.0, 40_000.0);
        assert_abs_diff_eq!(out.peak(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_buffer() {
        assert!(bandpass(&SampleBuffer::default(), 0.0, 1000.0).is_empty());
    }

    #[test]
    fn test_band_apply_matches_function() {
        let input = noise(512, 9);
        let band = FrequencyBand::new(2200.0, 12000.0);
        assert_eq!(band.apply(&input), bandpass(&input, 2200.0, 12000.0));
        assert!(band.contains(2200.0));
        assert!(band.contains(12000.0));
        assert!(!band.contains(12000.1));
    }
}
