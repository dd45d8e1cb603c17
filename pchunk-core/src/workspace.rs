use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Default)]
pub struct ClearReport {
    pub removed: usize,
    pub failed: Vec<PathBuf>,
}

/// Delete the regular files directly inside `dir`.
///
/// Subdirectories and their contents are left alone. A symlink whose target
/// is a file is removed (the link, not the target). A file that cannot be
/// removed is logged and skipped. A missing `dir` counts as already clear.
pub fn clear_dir(dir: &Path) -> Result<ClearReport> {
    clear_dir_with(dir, |p| fs::remove_file(p))
}

/// `clear_dir` with the per-file removal supplied by the caller.
pub fn clear_dir_with<F>(dir: &Path, mut remove: F) -> Result<ClearReport>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut report = ClearReport::default();
    if !dir.exists() {
        debug!(dir = %dir.display(), "staging dir absent, nothing to clear");
        return Ok(report);
    }

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "could not list entry");
                if let Some(p) = e.path() {
                    report.failed.push(p.to_path_buf());
                }
                continue;
            }
        };
        if !is_file_like(&entry) {
            continue;
        }
        match remove(entry.path()) {
            Ok(()) => report.removed += 1,
            Err(e) => {
                warn!(file = %entry.path().display(), error = %e, "error deleting file");
                report.failed.push(entry.path().to_path_buf());
            }
        }
    }
    Ok(report)
}

fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_files_but_keeps_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("part-1.txt"), "a").unwrap();
        fs::write(dir.path().join("response.json"), "[]").unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();
        fs::write(dir.path().join("keep/inner.txt"), "b").unwrap();

        let report = clear_dir(dir.path()).unwrap();

        assert_eq!(report.removed, 2);
        assert!(report.failed.is_empty());
        assert!(!dir.path().join("part-1.txt").exists());
        assert!(dir.path().join("keep/inner.txt").exists());
    }

    #[test]
    fn failed_removal_is_recorded_and_the_rest_still_go() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["part-1.txt", "part-2.txt", "part-3.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let locked = dir.path().join("part-2.txt");

        let report = clear_dir_with(dir.path(), |p| {
            if p == locked {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
            } else {
                fs::remove_file(p)
            }
        })
        .unwrap();

        assert_eq!(report.removed, 2);
        assert_eq!(report.failed, [locked.clone()]);
        assert!(locked.exists());
        assert!(!dir.path().join("part-1.txt").exists());
        assert!(!dir.path().join("part-3.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_symlinks_are_unlinked_but_targets_and_dir_links_stay() {
        use std::os::unix::fs::symlink;

        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("target.bin");
        fs::write(&target, "keep me").unwrap();

        let dir = tempfile::tempdir().unwrap();
        symlink(&target, dir.path().join("to-file")).unwrap();
        symlink(outside.path(), dir.path().join("to-dir")).unwrap();

        let report = clear_dir(dir.path()).unwrap();

        assert_eq!(report.removed, 1);
        assert!(fs::symlink_metadata(dir.path().join("to-file")).is_err());
        assert!(fs::symlink_metadata(dir.path().join("to-dir")).is_ok());
        assert!(target.exists());
    }

    #[test]
    fn clearing_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x"), "1").unwrap();

        assert_eq!(clear_dir(dir.path()).unwrap().removed, 1);
        let again = clear_dir(dir.path()).unwrap();
        assert_eq!(again.removed, 0);
        assert!(again.failed.is_empty());
    }

    #[test]
    fn missing_directory_is_already_clear() {
        let dir = tempfile::tempdir().unwrap();
        let report = clear_dir(&dir.path().join("not-there")).unwrap();
        assert_eq!(report.removed, 0);
    }
}
