use crate::error::{PchunkError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Base64-encode `source` into `dest`, creating missing parent directories.
/// Returns the encoded length in bytes.
pub fn encode_file(source: &Path, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = fs::read(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PchunkError::SourceNotFound(source.to_path_buf()),
        _ => PchunkError::Io(e),
    })?;

    let text = STANDARD.encode(&bytes);
    fs::write(dest, text.as_bytes())?;
    Ok(text.len() as u64)
}
