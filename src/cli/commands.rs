use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Route-table extractor for Laravel and CodeIgniter projects
#[derive(Parser, Debug)]
#[command(
    name = "routemap",
    about = "Map framework route tables to fully-qualified URLs",
    version,
    long_about = "routemap inspects a project directory, detects whether it follows the \
                  Laravel or CodeIgniter layout, extracts the routes that framework \
                  registers, and writes them joined to a base URL, one URL per line."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error log output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract routes from a project and write full URLs to a file",
        long_about = "Detects the project's framework layout, extracts its route table, joins \
                      every endpoint to the base URL, and writes the result one URL per line.\n\n\
                      Examples:\n  \
                      routemap map /srv/shop --base-url https://api.example.com -o urls.txt\n  \
                      routemap map . -b http://localhost:8000 -o routes.txt --timeout 120"
    )]
    Map(MapArgs),

    #[command(
        about = "Detect the framework layout of a project directory",
        long_about = "Runs only the directory-signature check and prints the detected project \
                      type without extracting anything.\n\n\
                      Examples:\n  \
                      routemap detect /srv/shop"
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct MapArgs {
    #[arg(value_name = "PATH", help = "Path to the project directory")]
    pub project_path: PathBuf,

    #[arg(
        short = 'b',
        long,
        value_name = "URL",
        help = "Base URL joined to every extracted endpoint"
    )]
    pub base_url: String,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "File to write the URL list to (overwritten if it exists)"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "60",
        help = "Timeout for the artisan route listing"
    )]
    pub timeout: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "PATH", help = "Path to the project directory")]
    pub project_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_map_args() {
        let args = CliArgs::parse_from([
            "routemap",
            "map",
            "/srv/shop",
            "--base-url",
            "https://api.example.com",
            "--output",
            "urls.txt",
        ]);
        match args.command {
            Commands::Map(map_args) => {
                assert_eq!(map_args.project_path, PathBuf::from("/srv/shop"));
                assert_eq!(map_args.base_url, "https://api.example.com");
                assert_eq!(map_args.output, PathBuf::from("urls.txt"));
                assert_eq!(map_args.timeout, 60);
            }
            _ => panic!("Expected Map command"),
        }
    }

    #[test]
    fn test_map_short_flags() {
        let args = CliArgs::parse_from([
            "routemap",
            "map",
            ".",
            "-b",
            "http://localhost:8000",
            "-o",
            "routes.txt",
            "--timeout",
            "120",
        ]);
        match args.command {
            Commands::Map(map_args) => {
                assert_eq!(map_args.base_url, "http://localhost:8000");
                assert_eq!(map_args.timeout, 120);
            }
            _ => panic!("Expected Map command"),
        }
    }

    #[test]
    fn test_detect_command() {
        let args = CliArgs::parse_from(["routemap", "detect", "/srv/shop"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.project_path, PathBuf::from("/srv/shop"));
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["routemap", "-v", "detect", "."]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["routemap", "-q", "detect", "."]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["routemap", "--log-level", "debug", "detect", "."]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
