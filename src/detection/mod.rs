//! Project-type detection from directory signatures
//!
//! A project is classified by the presence of marker files and subdirectories
//! at its root, never by parsing its source. Absence of every known signature
//! is a normal outcome represented by [`ProjectType::Unknown`], not an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// The framework layout a project directory follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Laravel,
    CodeIgniter,
    Unknown,
}

impl ProjectType {
    pub fn name(&self) -> &'static str {
        match self {
            ProjectType::Laravel => "Laravel",
            ProjectType::CodeIgniter => "CodeIgniter",
            ProjectType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a project directory by its marker files.
///
/// - Laravel: an `artisan` file and a `composer.json` file at the root.
/// - CodeIgniter: `system` and `application` subdirectories at the root.
/// - The Laravel signature wins if both are present.
///
/// Only read-only existence checks are performed.
pub fn classify(project_path: &Path) -> ProjectType {
    if project_path.join("artisan").is_file() && project_path.join("composer.json").is_file() {
        debug!(path = %project_path.display(), "artisan + composer.json markers found");
        return ProjectType::Laravel;
    }

    if project_path.join("system").is_dir() && project_path.join("application").is_dir() {
        debug!(path = %project_path.display(), "system + application markers found");
        return ProjectType::CodeIgniter;
    }

    ProjectType::Unknown
}
