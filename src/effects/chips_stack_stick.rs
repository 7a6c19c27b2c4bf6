//! A single chip clacking onto a stack

use crate::dsp::{click_envelope, decaying_sine, noise, samples_for, FrequencyBand, SampleBuffer};

pub const DURATION_SECS: f64 = 0.18;

const CLACK_SEED: u64 = 3;
const CLACK_BAND: FrequencyBand = FrequencyBand::new(900.0, 9000.0);
const CLACK_ATTACK_SECS: f64 = 0.0008;
const CLACK_DECAY_SECS: f64 = 0.035;
const CLACK_GAIN: f64 = 0.75;

const LOW_FREQ_HZ: f64 = 180.0;
const LOW_DECAY_SECS: f64 = 0.06;
const LOW_GAIN: f64 = 0.18;

/// Render the effect
pub fn chips_stack_stick() -> SampleBuffer {
    let len = samples_for(DURATION_SECS);

    let mut clack = CLACK_BAND.apply(&noise(len, CLACK_SEED));
    clack.apply_curve(&click_envelope(len, CLACK_ATTACK_SECS, CLACK_DECAY_SECS));
    clack.scale(CLACK_GAIN);

    let low = decaying_sine(len, LOW_FREQ_HZ, LOW_DECAY_SECS);
    clack.mix_at(0, &low, LOW_GAIN);
    clack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::bandpass;

    #[test]
    fn test_matches_layer_mix() {
        let audio = chips_stack_stick();
        let n = samples_for(0.18);
        assert_eq!(audio.len(), n);

        let clack = bandpass(&noise(n, 3), 900.0, 9000.0);
        let env = click_envelope(n, 0.0008, 0.035);
        let low = decaying_sine(n, 180.0, 0.06);
        for i in 0..n {
            let expected = 0.75 * clack[i] * env[i] + 0.18 * low[i];
            assert!(
                (audio[i] - expected).abs() < 1e-12,
                "sample {}: {} vs {}",
                i,
                audio[i],
                expected
            );
        }
    }

    #[test]
    fn test_starts_silent() {
        // Attack ramp and sine both start at zero
        let audio = chips_stack_stick();
        assert_eq!(audio[0], 0.0);
    }

    #[test]
    fn test_energy_front_loaded() {
        let audio = chips_stack_stick();
        let split = audio.len() / 2;
        let head: f64 = audio.samples()[..split].iter().map(|s| s * s).sum();
        let tail: f64 = audio.samples()[split..].iter().map(|s| s * s).sum();
        assert!(head > tail * 10.0);
    }
}
