use crate::config::ManifestOrder;
use crate::domain::{CompletedUpload, Part, ShareId};
use crate::error::{PchunkError, Result};
use crate::upload::{PasteBackend, UploadFailure, upload_part};
use rayon::ThreadPoolBuilder;
use std::sync::mpsc;
use tracing::{info, warn};

/// Upload every part on a pool of `workers` threads.
///
/// Results come back in completion order, which generally differs from part
/// order. Each entry keeps its part index so callers can re-sort. All tasks
/// are awaited; a failed part never stops the others.
pub fn upload_all(
    parts: &[Part],
    backend: &dyn PasteBackend,
    workers: usize,
) -> Result<Vec<CompletedUpload>> {
    if workers == 0 {
        return Err(PchunkError::Config("workers must be greater than zero".into()));
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("pchunk-upload-{i}"))
        .build()
        .map_err(|e| PchunkError::Pool(e.to_string()))?;

    let total = parts.len();
    let (tx, rx) = mpsc::channel::<CompletedUpload>();

    let completed = pool.in_place_scope(|s| {
        for part in parts {
            let tx = tx.clone();
            s.spawn(move |_| {
                let result = upload_part(backend, &part.path);
                // receiver lives until every sender is gone
                let _ = tx.send(CompletedUpload {
                    index: part.index,
                    path: part.path.clone(),
                    result,
                });
            });
        }
        drop(tx);

        let mut out = Vec::with_capacity(total);
        for done in rx.iter() {
            match &done.result {
                Ok(id) => info!(part = done.index, id = %id, "{}/{} finished", out.len() + 1, total),
                Err(e) => warn!(part = done.index, error = %e, "{}/{} finished without link", out.len() + 1, total),
            }
            out.push(done);
        }
        out
    });

    Ok(completed)
}

/// Identifiers of the successful uploads, in the requested order.
pub fn successful_ids(completed: &[CompletedUpload], order: ManifestOrder) -> Vec<ShareId> {
    let mut ok: Vec<(usize, &ShareId)> = completed
        .iter()
        .filter_map(|c| c.result.as_ref().ok().map(|id| (c.index, id)))
        .collect();
    if order == ManifestOrder::Sequence {
        ok.sort_by_key(|(index, _)| *index);
    }
    ok.into_iter().map(|(_, id)| id.clone()).collect()
}

/// Failed uploads as `(part index, reason)`, sorted by part index.
pub fn into_failures(completed: Vec<CompletedUpload>) -> Vec<(usize, UploadFailure)> {
    let mut failed: Vec<_> = completed
        .into_iter()
        .filter_map(|c| c.result.err().map(|e| (c.index, e)))
        .collect();
    failed.sort_by_key(|(index, _)| *index);
    failed
}
