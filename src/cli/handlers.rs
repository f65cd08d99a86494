//! Subcommand handlers
//!
//! Handlers orchestrate the pipeline (classify, extract, build URLs, write)
//! and return a process exit code: 0 for success and informational stops,
//! 2 when the project path does not exist, 1 when the output file cannot be
//! written. Extraction faults never fail the run; they degrade to an empty
//! endpoint list inside the extractors.

use anyhow::Context;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

use crate::cli::commands::{DetectArgs, MapArgs};
use crate::detection::{classify, ProjectType};
use crate::extractors::codeigniter::extract_codeigniter_routes;
use crate::extractors::laravel::{extract_laravel_routes, ArtisanRouteLister};
use crate::output::write_urls;
use crate::urls::build_urls;

/// Runs the full extraction pipeline for one project
pub async fn handle_map(args: &MapArgs) -> i32 {
    let project_path = args.project_path.as_path();
    if !project_path.exists() {
        error!(path = %project_path.display(), "project path does not exist");
        eprintln!(
            "Error: the provided project path does not exist: {}",
            project_path.display()
        );
        return 2;
    }

    println!("Project path: {}", project_path.display());
    println!("Base URL: {}", args.base_url);
    println!("Output file: {}", args.output.display());

    let project_type = classify(project_path);
    println!("Project type: {}", project_type);

    let endpoints = match project_type {
        ProjectType::Laravel => {
            let lister = ArtisanRouteLister::new(Duration::from_secs(args.timeout));
            extract_laravel_routes(project_path, &lister).await
        }
        ProjectType::CodeIgniter => extract_codeigniter_routes(project_path).await,
        ProjectType::Unknown => {
            println!("Only Laravel and CodeIgniter projects are supported.");
            return 0;
        }
    };

    if endpoints.is_empty() {
        println!("No endpoints were found in the project.");
        return 0;
    }

    let urls = build_urls(&args.base_url, &endpoints);
    info!(count = urls.len(), "built full URLs");

    match write_output(&args.output, &urls).await {
        Ok(()) => {
            println!("Endpoints written to {}", args.output.display());
            0
        }
        Err(err) => {
            error!(error = ?err, "failed to write output file");
            eprintln!("Error: {err:#}");
            1
        }
    }
}

/// Runs only the classifier and prints the detected type
pub fn handle_detect(args: &DetectArgs) -> i32 {
    let project_path = args.project_path.as_path();
    if !project_path.exists() {
        error!(path = %project_path.display(), "project path does not exist");
        eprintln!(
            "Error: the provided project path does not exist: {}",
            project_path.display()
        );
        return 2;
    }

    println!("Project type: {}", classify(project_path));
    0
}

async fn write_output(path: &Path, urls: &[String]) -> anyhow::Result<()> {
    write_urls(path, urls)
        .await
        .with_context(|| format!("could not write {}", path.display()))
}
