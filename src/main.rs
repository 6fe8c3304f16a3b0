use jsxpragma::cli::commands::{CliArgs, Commands};
use jsxpragma::cli::handlers::{handle_libraries, handle_resolve};
use jsxpragma::util::logging::{init_from_env, init_logging, json_from_env, parse_level, LoggingConfig};
use jsxpragma::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Resolve(resolve_args) => handle_resolve(resolve_args, args.quiet).await,
        Commands::Libraries(libraries_args) => handle_libraries(libraries_args),
    };

    process::exit(exit_code);
}

/// Explicit flags pick the level; otherwise logging is configured from the
/// environment.
fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        init_from_env();
        return;
    };

    init_logging(LoggingConfig {
        level,
        use_json: json_from_env(),
        ..LoggingConfig::default()
    });
}
