//! Effect catalog
//!
//! Maps effect names to recipes, together with the export gain and the cue
//! key the game's audio manager looks them up by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dsp::{normalize, SampleBuffer};
use crate::effects::{self, card_slide_vacuum, chips_stack_stick, chips_vacuum, hand_knock_check};
use crate::error::{Result, SfxError};

/// A sound effect the catalog knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    ChipsVacuum,
    ChipsStackStick,
    HandKnockCheck,
    CardSlideVacuum,
}

impl Effect {
    /// Every effect, in render order
    pub const ALL: [Effect; 4] = [
        Effect::ChipsVacuum,
        Effect::ChipsStackStick,
        Effect::HandKnockCheck,
        Effect::CardSlideVacuum,
    ];

    /// File stem and CLI name
    pub fn name(&self) -> &'static str {
        match self {
            Effect::ChipsVacuum => "chips_vacuum",
            Effect::ChipsStackStick => "chips_stack_stick",
            Effect::HandKnockCheck => "hand_knock_check",
            Effect::CardSlideVacuum => "card_slide_vacuum",
        }
    }

    /// Key the effect is played under in the game
    pub fn cue(&self) -> &'static str {
        match self {
            Effect::ChipsVacuum => "vacuum",
            Effect::ChipsStackStick => "stack",
            Effect::HandKnockCheck => "knock",
            Effect::CardSlideVacuum => "slide",
        }
    }

    /// Nominal duration of the rendered buffer
    pub fn duration_secs(&self) -> f64 {
        match self {
            Effect::ChipsVacuum => chips_vacuum::DURATION_SECS,
            Effect::ChipsStackStick => chips_stack_stick::DURATION_SECS,
            Effect::HandKnockCheck => hand_knock_check::DURATION_SECS,
            Effect::CardSlideVacuum => card_slide_vacuum::DURATION_SECS,
        }
    }

    /// Gain applied by the encoder stage, in dB
    pub fn export_gain_db(&self) -> f64 {
        match self {
            Effect::ChipsVacuum => 2.0,
            _ => 0.0,
        }
    }

    /// Run the recipe, without normalization
    pub fn synthesize(&self) -> SampleBuffer {
        match self {
            Effect::ChipsVacuum => effects::chips_vacuum(),
            Effect::ChipsStackStick => effects::chips_stack_stick(),
            Effect::HandKnockCheck => effects::hand_knock_check(),
            Effect::CardSlideVacuum => effects::card_slide_vacuum(),
        }
    }

    /// Synthesize and normalize, ready for export
    pub fn render(&self) -> OutputArtifact {
        OutputArtifact {
            effect: *self,
            buffer: normalize(self.synthesize()),
            gain_db: self.export_gain_db(),
        }
    }

    /// Look up effects by name, keeping the catalog order
    ///
    /// An empty list selects every effect.
    pub fn select(names: &[String]) -> Result<Vec<Effect>> {
        if names.is_empty() {
            return Ok(Effect::ALL.to_vec());
        }
        let wanted = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Effect>>>()?;
        Ok(Effect::ALL
            .into_iter()
            .filter(|effect| wanted.contains(effect))
            .collect())
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self> {
        Effect::ALL
            .into_iter()
            .find(|effect| effect.name() == s || effect.cue() == s)
            .ok_or_else(|| SfxError::UnknownEffect {
                name: s.to_string(),
            })
    }
}

/// A normalized buffer on its way to export
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    pub effect: Effect,
    pub buffer: SampleBuffer,
    pub gain_db: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::PEAK_CEILING;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_by_name_and_cue() {
        assert_eq!("chips_vacuum".parse::<Effect>().unwrap(), Effect::ChipsVacuum);
        assert_eq!("knock".parse::<Effect>().unwrap(), Effect::HandKnockCheck);

        let err = "whistle".parse::<Effect>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_EFFECT");
    }

    #[test]
    fn test_names_round_trip() {
        for effect in Effect::ALL {
            assert_eq!(effect.to_string().parse::<Effect>().unwrap(), effect);
        }
    }

    #[test]
    fn test_only_vacuum_is_boosted() {
        assert_eq!(Effect::ChipsVacuum.export_gain_db(), 2.0);
        for effect in &Effect::ALL[1..] {
            assert_eq!(effect.export_gain_db(), 0.0);
        }
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let picked = Effect::select(&["slide".to_string(), "chips_vacuum".to_string()]).unwrap();
        assert_eq!(picked, vec![Effect::ChipsVacuum, Effect::CardSlideVacuum]);
        assert_eq!(Effect::select(&[]).unwrap(), Effect::ALL.to_vec());
        assert!(Effect::select(&["nope".to_string()]).is_err());
    }

    #[test]
    fn test_render_normalizes() {
        let artifact = Effect::ChipsStackStick.render();
        assert_eq!(artifact.effect, Effect::ChipsStackStick);
        assert_relative_eq!(artifact.buffer.peak(), PEAK_CEILING, epsilon = 1e-12);
        assert_eq!(artifact.gain_db, 0.0);
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&Effect::HandKnockCheck).unwrap();
        assert_eq!(json, "\"hand_knock_check\"");
    }
}
