use crate::constants::{
    exit_codes, verbosity, CURRENT_DIR_SENTINEL, DEFAULT_TEMPLATE, TEMPLATES_DIR_ENV,
};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Helix - fullstack React + Express project generator.
#[derive(Parser, Debug)]
#[command(name = "helix", author, version, about, long_about = None)]
#[command(help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory containing the packaged templates.
    #[arg(long = "templates-dir", value_name = "DIR", env = TEMPLATES_DIR_ENV, global = true)]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new fullstack project.
    Create(CreateArgs),

    /// Check build artifacts and start the production server.
    Start(StartArgs),
}

/// Arguments for the create command.
#[derive(Parser, Debug, Clone)]
pub struct CreateArgs {
    /// Project directory to create, or `.` to generate in place.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Template to generate from (basicapp, welcomeapp, userapp, todoapp).
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,
}

/// Arguments for the start command.
#[derive(Parser, Debug, Clone)]
pub struct StartArgs {
    /// Project root holding the build output.
    #[arg(long = "project-dir", value_name = "DIR", default_value = CURRENT_DIR_SENTINEL)]
    pub project_dir: PathBuf,
}

/// Prints the usage text to stdout.
pub fn print_usage() {
    let mut command = Cli::command();
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
}

/// Parse command line arguments.
///
/// `--help` and `--version` behave as usual; any other parse failure prints
/// the error and the usage text and exits with status 1.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            eprintln!("{}", e.render());
            print_usage();
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
