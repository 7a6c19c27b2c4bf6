//! Compressed-audio encoding through an external program
//!
//! The default [`FfmpegEncoder`] shells out to ffmpeg. A missing program or
//! a non-zero exit status is an error for that artifact; nothing is retried.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::config::EncoderConfig;
use crate::error::{Result, SfxError};

/// Gains smaller than this are passed as unity
const UNITY_GAIN_EPSILON_DB: f64 = 1e-6;

/// Turns an intermediate WAV file into the final artifact
pub trait Encoder {
    /// Encode `wav` into `output`, applying `gain_db` on the way
    fn encode(&self, wav: &Path, output: &Path, gain_db: f64) -> Result<()>;

    /// File extension of the encoded artifact, without the dot
    fn extension(&self) -> &str;
}

/// Encoder backed by the ffmpeg command line
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Volume filter expression for `gain_db`
    pub fn volume_filter(gain_db: f64) -> String {
        if gain_db.abs() > UNITY_GAIN_EPSILON_DB {
            format!("volume={:.2}dB", gain_db)
        } else {
            "volume=1.0".to_string()
        }
    }

    /// Full argument list passed to the encoder program
    pub fn command_args(&self, wav: &Path, output: &Path, gain_db: f64) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-hide_banner", "-loglevel", "error", "-i"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(wav.as_os_str().to_os_string());
        args.push("-filter:a".into());
        args.push(Self::volume_filter(gain_db).into());
        args.push("-codec:a".into());
        args.push(self.config.codec.clone().into());
        args.push("-q:a".into());
        args.push(self.config.quality.to_string().into());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, wav: &Path, output: &Path, gain_db: f64) -> Result<()> {
        let args = self.command_args(wav, output, gain_db);
        debug!("[ENCODE] {} {:?}", self.config.program, args);

        let result = Command::new(&self.config.program)
            .args(&args)
            .output()
            .map_err(|e| SfxError::EncoderUnavailable {
                program: self.config.program.clone(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(SfxError::EncodeFailed {
                program: self.config.program.clone(),
                path: output.to_path_buf(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        &self.config.extension
    }
}
