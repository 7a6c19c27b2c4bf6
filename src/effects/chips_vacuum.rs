//! Chips swept off the table: a rising whoosh with scattered chip clatter

use log::debug;

use crate::dsp::{
    click_envelope, decaying_sine, exp_decay, noise, sample_floor, samples_for, time_at,
    FrequencyBand, NoiseSource, SampleBuffer,
};

// ============================================================================
// Constants
// ============================================================================

pub const DURATION_SECS: f64 = 1.05;

// Whoosh: one noise source cross-faded from a low band to a high band
const WHOOSH_SEED: u64 = 1;
const WHOOSH_LOW_BAND: FrequencyBand = FrequencyBand::new(200.0, 1200.0);
const WHOOSH_HIGH_BAND: FrequencyBand = FrequencyBand::new(800.0, 5000.0);
const WHOOSH_DECAY_SECS: f64 = 0.55;
const WHOOSH_GAIN: f64 = 0.55;

// Clatter: short band-passed clicks at random times
const CLATTER_SEED: u64 = 2;
pub const CLICK_COUNT: usize = 55;
pub const CLICK_WINDOW_SECS: (f64, f64) = (0.25, 0.95);
const CLICK_LENGTH_SECS: (f64, f64) = (0.012, 0.028);
const CLICK_NOISE_SEED_BASE: u64 = 100;
const CLICK_BAND: FrequencyBand = FrequencyBand::new(1200.0, 8500.0);
const CLICK_ATTACK_SECS: f64 = 0.0007;
const CLICK_DECAY_SECS: (f64, f64) = (0.010, 0.022);
const CLICK_GAIN: (f64, f64) = (0.12, 0.25);
const CLATTER_GAIN: f64 = 0.9;

// Thump: low sine at the very start
const THUMP_SECS: f64 = 0.06;
const THUMP_FREQ_HZ: f64 = 90.0;
const THUMP_DECAY_SECS: f64 = 0.04;
const THUMP_GAIN: f64 = 0.25;

// ============================================================================
// Clatter schedule
// ============================================================================

/// One chip click placed in the clatter layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClatterClick {
    /// Seed of the click's own noise burst
    pub noise_seed: u64,
    /// Start offset in samples
    pub start: usize,
    /// Length in samples
    pub len: usize,
    pub decay_secs: f64,
    pub gain: f64,
}

/// Draw the sorted click times in seconds
fn draw_click_times(rng: &mut NoiseSource) -> Vec<f64> {
    let (low, high) = CLICK_WINDOW_SECS;
    let mut times: Vec<f64> = (0..CLICK_COUNT).map(|_| rng.uniform(low, high)).collect();
    times.sort_by(f64::total_cmp);
    times
}

/// Sample offsets of all clicks before any are dropped, ascending
pub fn click_start_indices() -> Vec<usize> {
    let mut rng = NoiseSource::new(CLATTER_SEED);
    draw_click_times(&mut rng)
        .into_iter()
        .map(sample_floor)
        .collect()
}

/// Resolve every click for a clatter layer of `len` samples
///
/// Clicks that would reach the end of the layer are dropped whole, and no
/// further parameters are drawn for them.
pub fn clatter_schedule(len: usize) -> Vec<ClatterClick> {
    let mut rng = NoiseSource::new(CLATTER_SEED);
    let times = draw_click_times(&mut rng);

    let mut clicks = Vec::with_capacity(times.len());
    for (i, time) in times.into_iter().enumerate() {
        let start = sample_floor(time);
        let click_len = sample_floor(rng.uniform(CLICK_LENGTH_SECS.0, CLICK_LENGTH_SECS.1));
        if start + click_len >= len {
            debug!("chips_vacuum: dropping click {} at {} (len {})", i, start, click_len);
            continue;
        }

        let decay_secs = rng.uniform(CLICK_DECAY_SECS.0, CLICK_DECAY_SECS.1);
        let gain = rng.uniform(CLICK_GAIN.0, CLICK_GAIN.1);
        clicks.push(ClatterClick {
            noise_seed: CLICK_NOISE_SEED_BASE + i as u64,
            start,
            len: click_len,
            decay_secs,
            gain,
        });
    }
    clicks
}

// ============================================================================
// Layers
// ============================================================================

fn whoosh(len: usize) -> SampleBuffer {
    let base = noise(len, WHOOSH_SEED);
    let low = WHOOSH_LOW_BAND.apply(&base);
    let high = WHOOSH_HIGH_BAND.apply(&base);
    let decay = exp_decay(len, WHOOSH_DECAY_SECS);

    (0..len)
        .map(|i| {
            let sweep = (time_at(i) / DURATION_SECS).clamp(0.0, 1.0);
            ((1.0 - sweep) * low[i] + sweep * high[i]) * decay[i]
        })
        .collect()
}

fn clatter(len: usize) -> SampleBuffer {
    let mut layer = SampleBuffer::silent(len);
    for click in clatter_schedule(len) {
        let mut burst = CLICK_BAND.apply(&noise(click.len, click.noise_seed));
        burst.apply_curve(&click_envelope(click.len, CLICK_ATTACK_SECS, click.decay_secs));
        layer.mix_at(click.start, &burst, click.gain);
    }
    layer
}

/// Render the effect
pub fn chips_vacuum() -> SampleBuffer {
    let len = samples_for(DURATION_SECS);

    let mut audio = whoosh(len);
    audio.scale(WHOOSH_GAIN);
    audio.mix_at(0, &clatter(len), CLATTER_GAIN);

    let thump = decaying_sine(samples_for(THUMP_SECS), THUMP_FREQ_HZ, THUMP_DECAY_SECS);
    audio.mix_at(0, &thump, THUMP_GAIN);

    audio
}
