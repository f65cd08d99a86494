// Per-framework route extraction
//
// Each extractor turns a project directory into an ordered list of raw
// endpoint strings. Every extraction fault is absorbed at the extractor
// boundary: the caller sees an empty list plus a logged diagnostic, never a
// propagated error. "Zero endpoints" is the single stop signal downstream.

pub mod codeigniter;
pub mod laravel;

pub use codeigniter::extract_codeigniter_routes;
pub use laravel::{extract_laravel_routes, ArtisanRouteLister, RouteLister};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Faults an extractor can hit before it degrades to an empty endpoint list
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to invoke php for {path}: {source}")]
    ProcessSpawn { path: PathBuf, source: io::Error },
    #[error("artisan exited with {status}: {stderr}")]
    ProcessExit { status: String, stderr: String },
    #[error("artisan reported an error: {stderr}")]
    ProcessDiagnostics { stderr: String },
    #[error("route listing timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("failed to parse artisan JSON output: {0}")]
    ParseFailed(#[from] serde_json::Error),
    #[error("failed to read routes file {path}: {source}")]
    SourceUnreadable { path: PathBuf, source: io::Error },
}
