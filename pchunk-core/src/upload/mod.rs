// pchunk_core/src/upload/mod.rs
use crate::domain::ShareId;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod http;
pub mod title;

/// Why a single part produced no share identifier. Never aborts the batch.
#[derive(Error, Debug)]
pub enum UploadFailure {
    #[error("could not read part {}: {source}", .path.display())]
    ReadPart {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("paste service answered with status {0}")]
    Status(u16),

    #[error("response has no <title> element")]
    MissingTitle,

    #[error("response title carries an empty identifier")]
    EmptyIdentifier,
}

pub type UploadResult = std::result::Result<ShareId, UploadFailure>;

/// A paste service that turns a block of text into a share identifier.
pub trait PasteBackend: Send + Sync {
    fn submit(&self, text: &str) -> UploadResult;
}

/// Read one staged part and submit its content.
pub fn upload_part(backend: &dyn PasteBackend, path: &Path) -> UploadResult {
    let text = std::fs::read_to_string(path).map_err(|source| UploadFailure::ReadPart {
        path: path.to_path_buf(),
        source,
    })?;
    backend.submit(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl PasteBackend for Echo {
        fn submit(&self, text: &str) -> UploadResult {
            Ok(format!("id-{}", text.len()))
        }
    }

    #[test]
    fn upload_part_reads_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("part-1.txt");
        std::fs::write(&p, "QUJD").unwrap();
        assert_eq!(upload_part(&Echo, &p).unwrap(), "id-4");
    }

    #[test]
    fn unreadable_part_is_a_soft_failure() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("part-9.txt");
        match upload_part(&Echo, &p) {
            Err(UploadFailure::ReadPart { path, .. }) => assert_eq!(path, p),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
