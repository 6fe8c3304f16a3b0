pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, LibrariesArgs, ResolveArgs};
pub use output::{OutputFormat, OutputFormatter, ResolveRecord};
