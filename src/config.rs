//! Render configuration
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is a valid configuration. CLI flags are
//! applied on top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SfxError};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "assets/sounds";

/// External encoder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Program to invoke (looked up on PATH)
    pub program: String,
    /// Audio codec passed to `-codec:a`
    pub codec: String,
    /// VBR quality passed to `-q:a` (lower is better)
    pub quality: u8,
    /// File extension of the encoded artifact
    pub extension: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            codec: "libmp3lame".to_string(),
            quality: 2,
            extension: "mp3".to_string(),
        }
    }
}

/// Settings for one render run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory the artifacts are written to (created if missing)
    pub output_dir: PathBuf,
    pub encoder: EncoderConfig,
    /// Keep the intermediate WAV next to the encoded file
    pub keep_intermediate: bool,
    /// Write `manifest.json` after rendering
    pub write_manifest: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            encoder: EncoderConfig::default(),
            keep_intermediate: false,
            write_manifest: true,
        }
    }
}

impl RenderConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SfxError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| SfxError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
