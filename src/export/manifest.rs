//! Manifest of generated artifacts
//!
//! Written as `manifest.json` next to the sounds so the game (and anyone
//! diffing asset builds) can see what was produced and verify it.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dsp::SAMPLE_RATE;
use crate::error::{Result, SfxError};

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// One generated sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub effect: String,
    pub cue: String,
    /// File name relative to the output directory
    pub file: String,
    pub samples: usize,
    pub duration_secs: f64,
    pub gain_db: f64,
    pub sha256: String,
}

/// All sounds produced by one render run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub sample_rate: u32,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            sample_rate: SAMPLE_RATE,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// Find an entry by effect name
    pub fn entry(&self, effect: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.effect == effect)
    }

    /// Write the manifest into `dir`, returning its path
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|e| SfxError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    /// Read a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SfxError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 of a file as lowercase hex
pub fn file_checksum(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).map_err(|e| SfxError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn entry(effect: &str) -> ManifestEntry {
        ManifestEntry {
            effect: effect.to_string(),
            cue: "stack".to_string(),
            file: format!("{}.mp3", effect),
            samples: 7938,
            duration_secs: 0.18,
            gain_db: 0.0,
            sha256: "00".repeat(32),
        }
    }

    #[test]
    fn test_checksum_known_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, b"abc").unwrap();

        assert_eq!(
            file_checksum(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut manifest = Manifest::new();
        manifest.push(entry("chips_stack_stick"));

        let path = manifest.save(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE));

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
        assert!(loaded.entry("chips_stack_stick").is_some());
        assert!(loaded.entry("chips_vacuum").is_none());
    }

    #[test]
    fn test_checksum_missing_file() {
        let err = file_checksum(Path::new("/nonexistent/file.mp3")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_READ");
    }
}
