//! Laravel route extraction via the project's `artisan` CLI
//!
//! Laravel ships its route table behind `php artisan route:list --json`, so
//! extraction means invoking the project's own entry point and parsing the
//! JSON it prints. The invocation is hidden behind [`RouteLister`] so the
//! parsing logic is testable without a PHP interpreter installed.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::ExtractError;

/// Captured output of one route-listing invocation
#[derive(Debug, Clone)]
pub struct RouteListOutput {
    pub success: bool,
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

/// Capability boundary around the external route-listing process
#[async_trait]
pub trait RouteLister: Send + Sync {
    /// Runs the route-listing command for the given `artisan` entry point and
    /// captures its output.
    async fn list_routes(&self, artisan_path: &Path) -> Result<RouteListOutput, ExtractError>;
}

/// Production [`RouteLister`] that spawns `php <artisan> route:list --json`
pub struct ArtisanRouteLister {
    php: PathBuf,
    timeout: Duration,
}

impl ArtisanRouteLister {
    pub fn new(timeout: Duration) -> Self {
        Self {
            php: PathBuf::from("php"),
            timeout,
        }
    }

    /// Overrides the interpreter binary used to run artisan
    pub fn with_php(mut self, php: impl Into<PathBuf>) -> Self {
        self.php = php.into();
        self
    }
}

impl Default for ArtisanRouteLister {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

#[async_trait]
impl RouteLister for ArtisanRouteLister {
    async fn list_routes(&self, artisan_path: &Path) -> Result<RouteListOutput, ExtractError> {
        // The artisan path travels as a discrete argv element; no shell is
        // involved, so spaces and metacharacters in the path are harmless.
        // kill_on_drop: the timeout below drops the output future; the
        // interpreter must not outlive it.
        let invocation = Command::new(&self.php)
            .arg(artisan_path)
            .arg("route:list")
            .arg("--json")
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, invocation)
            .await
            .map_err(|_| ExtractError::Timeout {
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|source| ExtractError::ProcessSpawn {
                path: artisan_path.to_path_buf(),
                source,
            })?;

        Ok(RouteListOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// One record of the `route:list --json` array; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct RouteRecord {
    uri: String,
}

/// Extracts the route URIs of a Laravel project, in declaration order.
///
/// Every fault (php missing, non-zero exit, diagnostics on stderr, malformed
/// JSON, timeout) is logged and collapsed into an empty list; the caller
/// treats "zero endpoints" as the stop signal.
pub async fn extract_laravel_routes(project_path: &Path, lister: &dyn RouteLister) -> Vec<String> {
    match try_extract(project_path, lister).await {
        Ok(uris) => {
            debug!(count = uris.len(), "extracted Laravel routes");
            uris
        }
        Err(err) => {
            warn!(error = %err, "Laravel route extraction failed");
            Vec::new()
        }
    }
}

async fn try_extract(
    project_path: &Path,
    lister: &dyn RouteLister,
) -> Result<Vec<String>, ExtractError> {
    let artisan_path = artisan_entry_point(project_path);
    let output = lister.list_routes(&artisan_path).await?;

    if !output.success {
        return Err(ExtractError::ProcessExit {
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    // artisan prints warnings and errors on stderr even when it exits zero;
    // anything there means the stdout payload is not trustworthy route data.
    if !output.stderr.trim().is_empty() {
        return Err(ExtractError::ProcessDiagnostics {
            stderr: output.stderr.trim().to_string(),
        });
    }

    let records: Vec<RouteRecord> = serde_json::from_str(&output.stdout)?;
    Ok(records.into_iter().map(|record| record.uri).collect())
}

fn artisan_entry_point(project_path: &Path) -> PathBuf {
    project_path.join("artisan")
}
