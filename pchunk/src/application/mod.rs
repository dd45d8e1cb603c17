pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use pchunk_core::error::{PchunkError, Result};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_SOURCE_MISSING: u8 = 2;
pub const EXIT_NOTHING_UPLOADED: u8 = 3;

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Upload(args) => handlers::handle_upload(args),
        Commands::Encode { source, dest } => handlers::handle_encode(source, dest),
        Commands::Split {
            encoded,
            part_size_bytes,
        } => handlers::handle_split(encoded, part_size_bytes),
        Commands::Clear { dir } => handlers::handle_clear(dir),
    }
}

pub fn exit_code_for(err: &PchunkError) -> ExitCode {
    match err {
        PchunkError::SourceNotFound(_) => ExitCode::from(EXIT_SOURCE_MISSING),
        _ => ExitCode::from(EXIT_FAILURE),
    }
}
