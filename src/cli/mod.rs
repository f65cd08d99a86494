pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, Commands, DetectArgs, MapArgs};
pub use handlers::{handle_detect, handle_map};
