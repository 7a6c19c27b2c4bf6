//! A card pulled across the felt: a short zip, then friction and air

use crate::dsp::{click_envelope, noise, samples_for, FrequencyBand, SampleBuffer};

pub const DURATION_SECS: f64 = 0.65;

// Zip: high transient at the start only
const ZIP_SECS: f64 = 0.05;
const ZIP_SEED: u64 = 9;
const ZIP_BAND: FrequencyBand = FrequencyBand::new(2200.0, 12000.0);
const ZIP_ATTACK_SECS: f64 = 0.0005;
const ZIP_DECAY_SECS: f64 = 0.015;
const ZIP_GAIN: f64 = 0.55;

// Slide and air share one full-length envelope
const SWELL_ATTACK_SECS: f64 = 0.03;
const SWELL_DECAY_SECS: f64 = 0.45;

const SLIDE_SEED: u64 = 10;
const SLIDE_BAND: FrequencyBand = FrequencyBand::new(700.0, 7000.0);
const SLIDE_GAIN: f64 = 0.32;

const AIR_SEED: u64 = 11;
const AIR_BAND: FrequencyBand = FrequencyBand::new(120.0, 700.0);
const AIR_GAIN: f64 = 0.10;

/// Render the effect
pub fn card_slide_vacuum() -> SampleBuffer {
    let len = samples_for(DURATION_SECS);
    let mut audio = SampleBuffer::silent(len);

    let zip_len = samples_for(ZIP_SECS);
    let mut zip = ZIP_BAND.apply(&noise(zip_len, ZIP_SEED));
    zip.apply_curve(&click_envelope(zip_len, ZIP_ATTACK_SECS, ZIP_DECAY_SECS));
    audio.mix_at(0, &zip, ZIP_GAIN);

    let swell = click_envelope(len, SWELL_ATTACK_SECS, SWELL_DECAY_SECS);

    let mut slide = SLIDE_BAND.apply(&noise(len, SLIDE_SEED));
    slide.apply_curve(&swell);
    audio.mix_at(0, &slide, SLIDE_GAIN);

    let mut air = AIR_BAND.apply(&noise(len, AIR_SEED));
    air.apply_curve(&swell);
    audio.mix_at(0, &air, AIR_GAIN);

    audio
}
