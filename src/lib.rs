//! sfxgen - Procedural Sound Effect Synthesis
//!
//! Renders a small catalog of table-game sound effects from nothing but
//! seeded noise, brick-wall spectral band-passes, envelopes and sine tones.
//!
//! # Architecture
//!
//! - [`dsp`]: pure synthesis primitives and peak normalization
//! - [`effects`]: the four recipes built from those primitives
//! - [`catalog`]: effect names, cues and export gains
//! - [`export`]: WAV writing, the external encoder and the manifest
//! - [`render`]: the synthesize -> normalize -> export pipeline

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dsp;
pub mod effects;
pub mod error;
pub mod export;
pub mod render;

pub use catalog::{Effect, OutputArtifact};
pub use config::RenderConfig;
pub use dsp::SampleBuffer;
pub use error::{Result, SfxError};
pub use render::{RenderReport, Renderer};
