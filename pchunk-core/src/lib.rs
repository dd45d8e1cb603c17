#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;

pub mod encode;

pub mod chunking {
    pub mod fixed;
}

pub mod upload;
pub mod upload_factory;

pub mod pool;

pub mod manifest;
pub mod workspace;

pub mod pipeline;

// Re-exports: stable API surface
pub use config::{ManifestOrder, UploadConfig};
pub use pipeline::{RunSummary, run};
