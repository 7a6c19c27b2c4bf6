//! Two muffled knuckle knocks on felt, the "check" gesture

use crate::dsp::{decaying_sine, exp_decay, noise, samples_for, FrequencyBand, SampleBuffer};

pub const DURATION_SECS: f64 = 0.45;

/// One knock placed in the output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thump {
    pub at_secs: f64,
    pub freq_hz: f64,
    pub gain: f64,
    pub noise_seed: u64,
}

pub const THUMPS: [Thump; 2] = [
    Thump {
        at_secs: 0.06,
        freq_hz: 120.0,
        gain: 0.55,
        noise_seed: 60,
    },
    Thump {
        at_secs: 0.19,
        freq_hz: 115.0,
        gain: 0.50,
        noise_seed: 190,
    },
];

const THUMP_SECS: f64 = 0.12;
const TONE_DECAY_SECS: f64 = 0.07;
const KNOCK_BAND: FrequencyBand = FrequencyBand::new(80.0, 900.0);
const KNOCK_GAIN: f64 = 0.25;
const KNOCK_DECAY_SECS: f64 = 0.08;

// Felt muffling over the finished mix
const MUFFLE_BAND: FrequencyBand = FrequencyBand::new(60.0, 1800.0);

fn render_thump(thump: &Thump) -> SampleBuffer {
    let len = samples_for(THUMP_SECS);

    let mut body = decaying_sine(len, thump.freq_hz, TONE_DECAY_SECS);
    let mut knock = KNOCK_BAND.apply(&noise(len, thump.noise_seed));
    knock.apply_curve(&exp_decay(len, KNOCK_DECAY_SECS));
    body.mix_at(0, &knock, KNOCK_GAIN);

    body.scale(thump.gain);
    body
}

/// Render the effect
pub fn hand_knock_check() -> SampleBuffer {
    let mut audio = SampleBuffer::silent(samples_for(DURATION_SECS));
    for thump in &THUMPS {
        audio.mix_at(samples_for(thump.at_secs), &render_thump(thump), 1.0);
    }
    MUFFLE_BAND.apply(&audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::bandpass;

    #[test]
    fn test_matches_layer_mix() {
        let n = samples_for(0.45);
        let thump_len = samples_for(0.12);
        let mut mix = vec![0.0; n];

        // (start, tone Hz, gain, noise seed)
        for (at, freq, gain, seed) in [(0.06, 120.0, 0.55, 60), (0.19, 115.0, 0.50, 190)] {
            let tone = decaying_sine(thump_len, freq, 0.07);
            let knock = bandpass(&noise(thump_len, seed), 80.0, 900.0);
            let decay = exp_decay(thump_len, 0.08);
            let start = samples_for(at);
            for j in 0..thump_len {
                mix[start + j] += gain * (tone[j] + 0.25 * knock[j] * decay[j]);
            }
        }
        let expected = bandpass(&SampleBuffer::from_samples(mix), 60.0, 1800.0);

        let audio = hand_knock_check();
        assert_eq!(audio.len(), n);
        for i in 0..n {
            assert!(
                (audio[i] - expected[i]).abs() < 1e-12,
                "sample {}: {} vs {}",
                i,
                audio[i],
                expected[i]
            );
        }
    }

    #[test]
    fn test_thumps_fit_in_buffer() {
        let len = samples_for(DURATION_SECS);
        for thump in &THUMPS {
            assert!(samples_for(thump.at_secs) + samples_for(THUMP_SECS) <= len);
        }
    }

    #[test]
    fn test_muffled_output_is_band_limited() {
        // The final band-pass leaves nothing for a second pass to remove
        let audio = hand_knock_check();
        let again = MUFFLE_BAND.apply(&audio);
        let diff = audio
            .iter()
            .zip(again.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(diff < 1e-9);
    }

    #[test]
    fn test_rendered_thump_is_finite() {
        let thump = render_thump(&THUMPS[0]);
        assert_eq!(thump.len(), samples_for(THUMP_SECS));
        assert!(thump.is_finite());
        assert!(thump.peak() > 0.0);
    }
}
