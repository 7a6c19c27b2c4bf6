//! Gain curves for shaping transients
//!
//! Curves are rendered per sample at [`SAMPLE_RATE`](crate::dsp::SAMPLE_RATE)
//! and have the same length as the buffer they are applied to.

use crate::dsp::buffer::{time_at, SampleBuffer};

/// Linear attack into an exponential decay
///
/// # Parameters
/// - `attack_secs`: length of the 0 -> 1 ramp (0 disables the ramp)
/// - `decay_secs`: time constant of `exp(-t / decay)`
///
/// The decay is measured from t = 0, not from the end of the attack, so the
/// curve steps down slightly at the attack boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEnvelope {
    pub attack_secs: f64,
    pub decay_secs: f64,
}

impl ClickEnvelope {
    pub const fn new(attack_secs: f64, decay_secs: f64) -> Self {
        Self {
            attack_secs,
            decay_secs,
        }
    }

    /// Gain at time `t` seconds
    ///
    /// A non-positive decay constant gives a silent curve.
    pub fn gain_at(&self, t: f64) -> f64 {
        if self.decay_secs <= 0.0 {
            return 0.0;
        }
        if t < self.attack_secs {
            t / self.attack_secs
        } else {
            (-t / self.decay_secs).exp()
        }
    }

    /// Render `len` samples of this envelope
    pub fn render(&self, len: usize) -> SampleBuffer {
        SampleBuffer::from_fn(len, |t| self.gain_at(t))
    }
}

/// Click envelope of `len` samples
pub fn click_envelope(len: usize, attack_secs: f64, decay_secs: f64) -> SampleBuffer {
    ClickEnvelope::new(attack_secs, decay_secs).render(len)
}

/// Plain `exp(-t / tau)` curve of `len` samples
pub fn exp_decay(len: usize, tau_secs: f64) -> SampleBuffer {
    ClickEnvelope::new(0.0, tau_secs).render(len)
}
