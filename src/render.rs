//! Render pipeline
//!
//! For each selected effect: synthesize, normalize, write the intermediate
//! WAV, hand it to the encoder, remove the WAV. Every effect is rendered
//! independently; a failure is recorded for that effect and the run moves
//! on to the next one.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::catalog::{Effect, OutputArtifact};
use crate::config::RenderConfig;
use crate::error::{Result, SfxError};
use crate::export::{file_checksum, write_wav, Encoder, FfmpegEncoder, Manifest, ManifestEntry};

/// A successfully exported effect
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub effect: Effect,
    pub path: PathBuf,
    pub samples: usize,
    pub duration_secs: f64,
    pub gain_db: f64,
    pub sha256: String,
}

impl RenderedFile {
    /// File name without the directory
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn manifest_entry(&self) -> ManifestEntry {
        ManifestEntry {
            effect: self.effect.name().to_string(),
            cue: self.effect.cue().to_string(),
            file: self.file_name(),
            samples: self.samples,
            duration_secs: self.duration_secs,
            gain_db: self.gain_db,
            sha256: self.sha256.clone(),
        }
    }
}

/// Outcome for one effect
#[derive(Debug)]
pub struct ArtifactReport {
    pub effect: Effect,
    pub outcome: Result<RenderedFile>,
}

/// Outcome of a whole render run
#[derive(Debug, Default)]
pub struct RenderReport {
    pub artifacts: Vec<ArtifactReport>,
    pub manifest_path: Option<PathBuf>,
}

impl RenderReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &RenderedFile> {
        self.artifacts.iter().filter_map(|a| a.outcome.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (Effect, &SfxError)> {
        self.artifacts
            .iter()
            .filter_map(|a| a.outcome.as_ref().err().map(|e| (a.effect, e)))
    }

    pub fn all_succeeded(&self) -> bool {
        self.artifacts.iter().all(|a| a.outcome.is_ok())
    }
}

/// Drives effects through synthesis and export
pub struct Renderer {
    config: RenderConfig,
    // None writes the WAV as the final artifact
    encoder: Option<Box<dyn Encoder>>,
}

impl Renderer {
    /// Renderer using the configured ffmpeg encoder
    pub fn new(config: RenderConfig) -> Self {
        let encoder = FfmpegEncoder::new(config.encoder.clone());
        Self::with_encoder(config, Box::new(encoder))
    }

    /// Renderer with a custom encoder
    pub fn with_encoder(config: RenderConfig, encoder: Box<dyn Encoder>) -> Self {
        Self {
            config,
            encoder: Some(encoder),
        }
    }

    /// Renderer that stops at the WAV stage
    ///
    /// The WAV keeps the normalized level. Export gains only exist as the
    /// encoder's volume filter, so none is applied and none is recorded.
    pub fn wav_only(config: RenderConfig) -> Self {
        Self {
            config,
            encoder: None,
        }
    }

    fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    fn intermediate_path(&self, effect: Effect) -> PathBuf {
        self.output_dir().join(format!("{}.wav", effect.name()))
    }

    /// Path of the final artifact for `effect`
    pub fn output_path(&self, effect: Effect) -> PathBuf {
        match &self.encoder {
            Some(encoder) => self
                .output_dir()
                .join(format!("{}.{}", effect.name(), encoder.extension())),
            None => self.intermediate_path(effect),
        }
    }

    /// Create the output directory if needed
    pub fn prepare_output_dir(&self) -> Result<()> {
        let dir = self.output_dir();
        fs::create_dir_all(dir).map_err(|e| SfxError::OutputDir {
            path: dir.to_path_buf(),
            source: e,
        })
    }

    /// Render and export a single effect
    pub fn render_effect(&self, effect: Effect) -> Result<RenderedFile> {
        let OutputArtifact {
            buffer, gain_db, ..
        } = effect.render();
        info!(
            "[RENDER] {}: {} samples, peak {:.3}",
            effect,
            buffer.len(),
            buffer.peak()
        );

        let wav_path = self.intermediate_path(effect);
        let output_path = self.output_path(effect);

        let gain_db = match &self.encoder {
            Some(encoder) => {
                write_wav(&buffer, &wav_path)?;
                if let Err(e) = encoder.encode(&wav_path, &output_path, gain_db) {
                    warn!(
                        "[RENDER] {}: encoding failed, intermediate left at {}",
                        effect,
                        wav_path.display()
                    );
                    return Err(e);
                }
                if !self.config.keep_intermediate && wav_path != output_path {
                    if let Err(e) = fs::remove_file(&wav_path) {
                        warn!("[RENDER] could not remove {}: {}", wav_path.display(), e);
                    }
                }
                gain_db
            }
            None => {
                write_wav(&buffer, &output_path)?;
                0.0
            }
        };

        Ok(RenderedFile {
            effect,
            sha256: file_checksum(&output_path)?,
            path: output_path,
            samples: buffer.len(),
            duration_secs: buffer.duration(),
            gain_db,
        })
    }

    /// Render `effects` in order, recording each outcome
    ///
    /// Only a failure to create the output directory or to write the
    /// manifest aborts the run.
    pub fn render_all(&self, effects: &[Effect]) -> Result<RenderReport> {
        self.prepare_output_dir()?;

        let mut report = RenderReport::default();
        for &effect in effects {
            let outcome = self.render_effect(effect);
            if let Err(e) = &outcome {
                warn!("[RENDER] {} failed [{}]: {}", effect, e.error_code(), e);
            }
            report.artifacts.push(ArtifactReport { effect, outcome });
        }

        if self.config.write_manifest && report.succeeded().next().is_some() {
            let mut manifest = Manifest::new();
            for file in report.succeeded() {
                manifest.push(file.manifest_entry());
            }
            report.manifest_path = Some(manifest.save(self.output_dir())?);
        }

        Ok(report)
    }
}

/// Remove intermediate `<effect>.wav` files left in `dir`
///
/// Only the top level is scanned and only catalog names are touched. A
/// missing directory has nothing to clean.
pub fn clean_intermediates(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let names: Vec<String> = Effect::ALL
        .iter()
        .map(|effect| format!("{}.wav", effect.name()))
        .collect();

    let stale: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let file_name = entry.file_name().to_string_lossy();
            names.iter().any(|name| *name == file_name)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();

    for path in &stale {
        fs::remove_file(path).map_err(|e| SfxError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
        info!("[CLEAN] removed {}", path.display());
    }

    Ok(stale)
}
