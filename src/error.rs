//! Error handling for sfxgen
//!
//! Synthesis itself is total and never fails; every variant here comes from
//! the export side (files, the WAV writer, the external encoder) or from
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sfxgen operations
pub type Result<T> = std::result::Result<T, SfxError>;

/// Main error type for sfxgen operations
#[derive(Error, Debug)]
pub enum SfxError {
    // Catalog Errors
    #[error("Unknown effect: {name}")]
    UnknownEffect { name: String },

    // Configuration Errors
    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // File Errors
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write WAV file {path}: {source}")]
    WavWrite {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    // Encoder Errors
    #[error("Encoder '{program}' could not be started: {source}")]
    EncoderUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoder '{program}' failed on {path} ({status}): {stderr}")]
    EncodeFailed {
        program: String,
        path: PathBuf,
        status: String,
        stderr: String,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SfxError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SfxError::UnknownEffect { .. } => "UNKNOWN_EFFECT",
            SfxError::InvalidConfig { .. } => "INVALID_CONFIG",
            SfxError::OutputDir { .. } => "OUTPUT_DIR",
            SfxError::FileRead { .. } => "FILE_READ",
            SfxError::FileWrite { .. } => "FILE_WRITE",
            SfxError::WavWrite { .. } => "WAV_WRITE",
            SfxError::EncoderUnavailable { .. } => "ENCODER_UNAVAILABLE",
            SfxError::EncodeFailed { .. } => "ENCODE_FAILED",
            SfxError::Io(_) => "IO_ERROR",
            SfxError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for failures that belong to the external encoder stage
    pub fn is_encoder_failure(&self) -> bool {
        matches!(
            self,
            SfxError::EncoderUnavailable { .. } | SfxError::EncodeFailed { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SfxError::UnknownEffect { .. } => vec![
                "Run 'sfxgen list' to see the available effects",
                "Effect names use snake_case, e.g. chips_vacuum",
            ],
            SfxError::InvalidConfig { .. } => vec![
                "Check the configuration file is valid JSON",
                "Remove unknown fields or fix their types",
            ],
            SfxError::OutputDir { .. } | SfxError::FileWrite { .. } => vec![
                "Check the output directory is writable",
                "Pass a different directory with --out",
            ],
            SfxError::EncoderUnavailable { .. } => vec![
                "Install ffmpeg and make sure it is on PATH",
                "Set encoder.program in the configuration file",
                "Use --wav-only to skip compressed output",
            ],
            SfxError::EncodeFailed { .. } => vec![
                "Check the encoder supports the configured codec",
                "Run with --keep-wav and encode the WAV manually to inspect the error",
            ],
            _ => vec![],
        }
    }
}
