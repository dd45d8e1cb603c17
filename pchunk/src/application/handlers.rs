use std::path::PathBuf;
use std::process::ExitCode;

use pchunk_core::chunking::fixed::split_file;
use pchunk_core::config::MIB;
use pchunk_core::encode::encode_file;
use pchunk_core::error::{PchunkError, Result};
use pchunk_core::upload_factory::{Backend, open_backend};
use pchunk_core::workspace::clear_dir;
use pchunk_core::{ManifestOrder, UploadConfig, run};
use tracing::warn;

use super::EXIT_NOTHING_UPLOADED;
use crate::presentation::cli::UploadArgs;

/// Config file (or defaults) with command-line flags applied on top.
pub fn config_from_args(args: UploadArgs) -> Result<UploadConfig> {
    let mut cfg = args
        .config
        .as_deref()
        .map(UploadConfig::load)
        .transpose()?
        .unwrap_or_default();

    if let Some(source) = args.source {
        cfg.source = source;
    }
    if let Some(dir) = args.staging_dir {
        cfg.staging_dir = dir;
    }
    if let Some(manifest) = args.manifest {
        cfg.manifest_path = manifest;
    }
    if let Some(mib) = args.part_size_mib {
        cfg.part_size = mib
            .checked_mul(MIB)
            .ok_or_else(|| PchunkError::Config(format!("--part-size-mib {mib} is too large")))?;
    }
    if let Some(bytes) = args.part_size_bytes {
        cfg.part_size = bytes;
    }
    if let Some(workers) = args.workers {
        cfg.workers = workers;
    }
    if let Some(endpoint) = args.endpoint {
        cfg.endpoint = endpoint;
    }
    if args.timeout_secs.is_some() {
        cfg.timeout_secs = args.timeout_secs;
    }
    if args.sequence_order {
        cfg.order = ManifestOrder::Sequence;
    }
    if args.publish_manifest {
        cfg.publish_manifest = true;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn handle_upload(args: UploadArgs) -> Result<ExitCode> {
    let cfg = config_from_args(args)?;
    let backend = open_backend(Backend::Http, &cfg)?;
    let summary = run(&cfg, backend.as_ref())?;

    for (index, reason) in &summary.failures {
        warn!(part = index, "not in manifest: {reason}");
    }
    eprintln!(
        "upload: {}/{} parts -> {}",
        summary.uploaded,
        summary.parts_total,
        summary.manifest_path.display()
    );
    if let Some(id) = &summary.manifest_id {
        println!("{id}");
    }

    if summary.nothing_uploaded() {
        return Ok(ExitCode::from(EXIT_NOTHING_UPLOADED));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn handle_encode(source: PathBuf, dest: PathBuf) -> Result<ExitCode> {
    let n = encode_file(&source, &dest)?;
    eprintln!("encode: {} -> {} ({n} bytes)", source.display(), dest.display());
    Ok(ExitCode::SUCCESS)
}

pub fn handle_split(encoded: PathBuf, part_size_bytes: usize) -> Result<ExitCode> {
    let parts = split_file(&encoded, part_size_bytes)?;
    for p in &parts {
        println!("{:<5} {:>10}  {}", p.index, p.len, p.path.display());
    }
    eprintln!("split: {} part(s), {} removed", parts.len(), encoded.display());
    Ok(ExitCode::SUCCESS)
}

pub fn handle_clear(dir: PathBuf) -> Result<ExitCode> {
    let report = clear_dir(&dir)?;
    eprintln!("clear: removed {} file(s) from {}", report.removed, dir.display());
    for p in &report.failed {
        eprintln!("clear: could not remove {}", p.display());
    }
    Ok(ExitCode::SUCCESS)
}
