//! Sinusoidal tone components

use std::f64::consts::PI;

use crate::dsp::buffer::SampleBuffer;
use crate::dsp::envelope::exp_decay;

/// Unit-amplitude sine at `freq_hz`, phase 0 at t = 0
pub fn sine(len: usize, freq_hz: f64) -> SampleBuffer {
    SampleBuffer::from_fn(len, |t| (2.0 * PI * freq_hz * t).sin())
}

/// Sine at `freq_hz` shaped by `exp(-t / tau)`
pub fn decaying_sine(len: usize, freq_hz: f64, tau_secs: f64) -> SampleBuffer {
    let mut tone = sine(len, freq_hz);
    tone.apply_curve(&exp_decay(len, tau_secs));
    tone
}
