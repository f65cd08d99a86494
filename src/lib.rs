//! routemap - route-table extraction for PHP web projects
//!
//! This library inspects a project directory, detects which framework layout it
//! follows, extracts the routes that framework registers, and turns them into
//! fully-qualified URLs.
//!
//! # Core Concepts
//!
//! - **Detection**: a project is classified by its directory signature alone
//!   (marker files and subdirectories), never by parsing its source
//! - **Extractors**: one strategy per supported framework. Laravel routes come
//!   from the project's own `artisan` CLI in JSON form; CodeIgniter routes are
//!   scanned out of `application/config/routes.php` with a textual pattern
//! - **URL building**: extracted endpoints are joined to a base URL with
//!   exactly one separating slash, preserving declaration order
//!
//! # Example Usage
//!
//! ```ignore
//! use routemap::{build_urls, classify, ProjectType};
//! use std::path::Path;
//!
//! let project = Path::new("/srv/shop");
//! match classify(project) {
//!     ProjectType::Laravel => { /* run the artisan extractor */ }
//!     ProjectType::CodeIgniter => { /* scan routes.php */ }
//!     ProjectType::Unknown => println!("unsupported layout"),
//! }
//!
//! let urls = build_urls("https://api.example.com/", &["home".to_string()]);
//! assert_eq!(urls, vec!["https://api.example.com/home"]);
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: directory-signature classification
//! - [`extractors`]: per-framework route extraction
//! - [`urls`]: base URL + endpoint joining
//! - [`output`]: URL list serialization

// Public modules
pub mod cli;
pub mod detection;
pub mod extractors;
pub mod output;
pub mod urls;
pub mod util;

// Re-export key types for convenient access
pub use detection::{classify, ProjectType};
pub use extractors::codeigniter::extract_codeigniter_routes;
pub use extractors::laravel::{extract_laravel_routes, ArtisanRouteLister, RouteLister};
pub use extractors::ExtractError;
pub use output::write_urls;
pub use urls::build_urls;
pub use util::{init_logging, parse_level, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
