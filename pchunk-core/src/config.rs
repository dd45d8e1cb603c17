use crate::error::{PchunkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const MIB: usize = 1024 * 1024;
pub const DEFAULT_ENDPOINT: &str = "https://pst.innomi.net/paste/new";

/// How successful identifiers are ordered in the manifest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestOrder {
    /// Order in which uploads finished. Labels do not track part numbers.
    #[default]
    Completion,
    /// Re-sorted by the part's sequence index.
    Sequence,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub source: PathBuf,
    /// Holds the encoded text and the part files; cleared before and after a run.
    pub staging_dir: PathBuf,
    /// File name of the encoded text inside `staging_dir`.
    pub encoded_name: String,
    pub manifest_path: PathBuf,
    /// Part size in bytes.
    pub part_size: usize,
    pub endpoint: String,
    pub workers: usize,
    /// Form value for `lang`.
    pub lang: String,
    /// Form value for `expire`; "-1" never expires.
    pub expire: String,
    pub order: ManifestOrder,
    /// Per-request timeout. None waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Also upload the manifest itself and report its identifier.
    pub publish_manifest: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("video.mp4"),
            staging_dir: PathBuf::from("output"),
            encoded_name: "video64.txt".to_string(),
            manifest_path: PathBuf::from("output/response.json"),
            part_size: 5 * MIB,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            workers: 10,
            lang: "text".to_string(),
            expire: "-1".to_string(),
            order: ManifestOrder::Completion,
            timeout_secs: None,
            publish_manifest: false,
        }
    }
}

impl UploadConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: UploadConfig = serde_json::from_str(&raw)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.part_size == 0 {
            return Err(PchunkError::Config("part_size must be greater than zero".into()));
        }
        if self.workers == 0 {
            return Err(PchunkError::Config("workers must be greater than zero".into()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(PchunkError::Config("endpoint must not be empty".into()));
        }
        if self.encoded_name.is_empty() {
            return Err(PchunkError::Config("encoded_name must not be empty".into()));
        }
        Ok(())
    }

    pub fn encoded_path(&self) -> PathBuf {
        self.staging_dir.join(&self.encoded_name)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
