// pchunk_core/src/domain.rs
use std::path::PathBuf;

use crate::upload::UploadResult;

/// Share identifier returned by the paste service.
pub type ShareId = String;

/// One staged slice of the encoded text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// 1-based sequence index; also the number in the file name.
    pub index: usize,
    pub path: PathBuf,
    pub len: usize,
}

/// Outcome of one upload task, tagged with the part it came from.
#[derive(Debug)]
pub struct CompletedUpload {
    pub index: usize,
    pub path: PathBuf,
    pub result: UploadResult,
}
