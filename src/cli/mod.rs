pub mod args;
pub mod context;
pub mod processor;
pub mod runner;
pub mod start;

pub use args::{
    get_cli, get_log_level_from_verbose, print_usage, Cli, Commands, CreateArgs, StartArgs,
};
pub use context::{resolve_templates_root, GenerationContext, ProjectTarget};
pub use runner::{run, Collaborators, Runner};
