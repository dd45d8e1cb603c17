use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "pchunk CLI: split a file into base64 pastes", long_about = None)]
pub struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct UploadArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File to upload
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Scratch directory for the encoded text and parts (cleared before and after)
    #[arg(long = "staging-dir")]
    pub staging_dir: Option<PathBuf>,

    /// Where to write the JSON manifest
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    #[arg(long = "part-size-mib", conflicts_with = "part_size_bytes")]
    pub part_size_mib: Option<usize>,

    #[arg(long = "part-size-bytes")]
    pub part_size_bytes: Option<usize>,

    /// Concurrent uploads
    #[arg(long)]
    pub workers: Option<usize>,

    /// Paste form endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout; none by default
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Label manifest entries by part order instead of completion order
    #[arg(long = "sequence-order")]
    pub sequence_order: bool,

    /// Upload the manifest as a paste too and print its identifier
    #[arg(long = "publish-manifest")]
    pub publish_manifest: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode, split, upload every part and write the manifest
    Upload(UploadArgs),

    /// Base64-encode a file
    Encode { source: PathBuf, dest: PathBuf },

    /// Split an encoded file into part-N.txt files (removes the encoded file)
    Split {
        encoded: PathBuf,
        #[arg(long = "part-size-bytes", default_value_t = 5 * 1024 * 1024)]
        part_size_bytes: usize,
    },

    /// Delete the regular files directly inside a directory
    Clear { dir: PathBuf },
}
