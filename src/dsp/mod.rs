//! Synthesis primitives
//!
//! Noise, band-pass filtering, envelopes and tones that the effect recipes
//! are composed from, plus the peak normalization applied to every result.
//! Everything here is a pure function of its arguments.

mod buffer;
mod envelope;
mod filter;
mod noise;
mod normalize;
mod tone;

pub use buffer::{
    db_to_linear, linear_to_db, sample_floor, samples_for, time_at, SampleBuffer, NYQUIST_HZ,
    SAMPLE_RATE,
};
pub use envelope::{click_envelope, exp_decay, ClickEnvelope};
pub use filter::{bandpass, bin_frequency, FrequencyBand};
pub use noise::{noise, NoiseSource};
pub use normalize::{clip, clip_sample, normalize, PEAK_CEILING, SILENCE_THRESHOLD};
pub use tone::{decaying_sine, sine};
