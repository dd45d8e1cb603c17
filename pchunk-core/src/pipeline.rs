use crate::chunking::fixed::split_file;
use crate::config::UploadConfig;
use crate::domain::ShareId;
use crate::encode::encode_file;
use crate::error::Result;
use crate::manifest::{render_manifest, write_manifest};
use crate::pool::{into_failures, successful_ids, upload_all};
use crate::upload::{PasteBackend, UploadFailure};
use crate::workspace::clear_dir;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub struct RunSummary {
    pub parts_total: usize,
    pub uploaded: usize,
    /// `(part index, reason)` for every part left out of the manifest.
    pub failures: Vec<(usize, UploadFailure)>,
    pub manifest_path: PathBuf,
    /// Identifier of the uploaded manifest, when publishing is on and it worked.
    pub manifest_id: Option<ShareId>,
}

impl RunSummary {
    /// There was something to upload and none of it made it.
    pub fn nothing_uploaded(&self) -> bool {
        self.parts_total > 0 && self.uploaded == 0
    }
}

/// clear → encode → split → upload → clear → write manifest.
pub fn run(cfg: &UploadConfig, backend: &dyn PasteBackend) -> Result<RunSummary> {
    cfg.validate()?;

    clear_dir(&cfg.staging_dir)?;

    let encoded = cfg.encoded_path();
    let encoded_len = encode_file(&cfg.source, &encoded)?;
    info!(file = %encoded.display(), bytes = encoded_len, "base64-encoded file saved");

    let parts = split_file(&encoded, cfg.part_size)?;
    info!(
        parts = parts.len(),
        part_size = cfg.part_size,
        "encoded file split into parts, encoded file removed"
    );

    let completed = upload_all(&parts, backend, cfg.workers)?;
    let ids = successful_ids(&completed, cfg.order);
    let failures = into_failures(completed);
    if !failures.is_empty() {
        warn!(
            failed = failures.len(),
            total = parts.len(),
            "some parts were not uploaded and are missing from the manifest"
        );
    }

    clear_dir(&cfg.staging_dir)?;

    write_manifest(&ids, &cfg.manifest_path)?;
    info!(path = %cfg.manifest_path.display(), links = ids.len(), "all links saved");

    let manifest_id = if cfg.publish_manifest {
        publish_manifest(&ids, backend)?
    } else {
        None
    };

    Ok(RunSummary {
        parts_total: parts.len(),
        uploaded: ids.len(),
        failures,
        manifest_path: cfg.manifest_path.clone(),
        manifest_id,
    })
}

fn publish_manifest(ids: &[ShareId], backend: &dyn PasteBackend) -> Result<Option<ShareId>> {
    let text = render_manifest(ids)?;
    match backend.submit(&text) {
        Ok(id) => {
            info!(id = %id, "manifest published");
            Ok(Some(id))
        }
        Err(e) => {
            warn!(error = %e, "manifest could not be published");
            Ok(None)
        }
    }
}
