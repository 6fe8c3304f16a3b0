use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// JSX pragma detection for bundler asset pipelines
#[derive(Parser, Debug)]
#[command(
    name = "jsxpragma",
    about = "JSX pragma detection for bundler asset pipelines",
    version,
    long_about = "jsxpragma decides whether a source file needs the Babel JSX transform and \
                  which factory function (pragma) it should target. The pragma comes from the \
                  owning package.json dependencies, falling back to import/require references \
                  in the file itself."
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
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Resolve the JSX transform config for source files",
        long_about = "Resolves the JSX transform configuration for each file. Files under a \
                      vendor directory (node_modules by default) are never transformed unless \
                      --source is given.\n\n\
                      Examples:\n  \
                      jsxpragma resolve src/App.jsx\n  \
                      jsxpragma resolve src/*.js --format json\n  \
                      jsxpragma resolve vendor/widget.js --source"
    )]
    Resolve(ResolveArgs),

    #[command(
        about = "List known JSX libraries and their pragmas",
        long_about = "Lists the known JSX libraries in match precedence order, together with \
                      the file extensions that always receive the JSX transform."
    )]
    Libraries(LibrariesArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    #[arg(value_name = "FILE", required = true, help = "Source files to resolve")]
    pub files: Vec<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        conflicts_with = "vendored",
        help = "Treat every file as project source"
    )]
    pub source: bool,

    #[arg(long, help = "Treat every file as vendored third-party code")]
    pub vendored: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

impl ResolveArgs {
    /// Explicit source-tree membership, or `None` to classify by path
    pub fn source_override(&self) -> Option<bool> {
        if self.source {
            Some(true)
        } else if self.vendored {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct LibrariesArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
