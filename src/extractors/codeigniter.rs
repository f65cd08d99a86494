//! CodeIgniter route extraction from `application/config/routes.php`
//!
//! CodeIgniter registers routes as `$route['<key>'] = '<handler>';` entries in
//! a fixed config file. Extraction is a textual scan for that idiom, not a PHP
//! parse: commented-out declarations and exotic string syntax will fool it.
//! That fragility is deliberate and documented; the alternative is embedding a
//! PHP front end for a convention that is stable in practice.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::ExtractError;

/// Relative location of the routes config inside a CodeIgniter project
const ROUTES_FILE: &str = "application/config/routes.php";

/// Placeholder tokens CodeIgniter allows inline in route keys; both are
/// stripped from every extracted endpoint.
const CASE_INSENSITIVE_FLAG: &str = "(?i)";
const ANY_SEGMENT_WILDCARD: &str = "(:any)";

fn route_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$route\['([^']+)'\]").expect("route declaration pattern is valid")
    })
}

/// Extracts the route keys of a CodeIgniter project, top-to-bottom.
///
/// A missing or unreadable routes file is logged and collapsed into an empty
/// list; the caller treats "zero endpoints" as the stop signal.
pub async fn extract_codeigniter_routes(project_path: &Path) -> Vec<String> {
    match try_extract(project_path).await {
        Ok(endpoints) => {
            debug!(count = endpoints.len(), "extracted CodeIgniter routes");
            endpoints
        }
        Err(err) => {
            warn!(error = %err, "CodeIgniter route extraction failed");
            Vec::new()
        }
    }
}

async fn try_extract(project_path: &Path) -> Result<Vec<String>, ExtractError> {
    let routes_path = project_path.join(ROUTES_FILE);
    let content = tokio::fs::read_to_string(&routes_path)
        .await
        .map_err(|source| ExtractError::SourceUnreadable {
            path: routes_path,
            source,
        })?;

    Ok(scan_routes(&content))
}

/// Scans file content for `$route['<key>']` declarations in order of
/// appearance and strips the known placeholder tokens from each key.
fn scan_routes(content: &str) -> Vec<String> {
    route_pattern()
        .captures_iter(content)
        .map(|captures| clean_endpoint(&captures[1]))
        .collect()
}

/// Removes every occurrence of the placeholder tokens. Plain substring
/// strips, so the operation is total and idempotent.
fn clean_endpoint(raw: &str) -> String {
    raw.replace(CASE_INSENSITIVE_FLAG, "")
        .replace(ANY_SEGMENT_WILDCARD, "")
}
