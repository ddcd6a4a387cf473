use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the template directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse JSON: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}.")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse ignore patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    #[error("Unknown template '{name}'. Available templates: {available}.")]
    UnknownTemplate { name: String, available: String },

    #[error("Template '{name}' is not yet available (expected at '{template_dir}').")]
    TemplateUnavailable { name: String, template_dir: String },

    #[error("Cannot proceed: destination directory '{output_dir}' already exists.")]
    DestinationExists { output_dir: String },

    #[error("Cannot proceed: a project name is required.")]
    MissingProjectName,

    #[error("No package.json at '{path}' and none was produced by the generators.")]
    MissingManifest { path: String },

    #[error("Manifest '{path}' is not a JSON object.")]
    ManifestShape { path: String },

    #[error("Failed to run '{program}': {source}")]
    CollaboratorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// When the collaborator ran but finished with an error.
    #[error("'{program}' failed with status: {status}")]
    CollaboratorFailed { program: String, status: ExitStatus },

    #[error("Missing build artifact '{path}'. Run `{rebuild}` to produce it.")]
    MissingArtifact { path: String, rebuild: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
