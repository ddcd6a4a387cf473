/// Command surface, generation context and orchestration.
pub mod cli;

/// External tools invoked as child processes.
pub mod collaborator;

/// Generator configuration.
pub mod config;

/// Shared constants.
pub mod constants;

/// `.env` maintenance.
pub mod envfile;

/// Defines custom error types.
pub mod error;

/// Build artifact checks for `helix start`.
pub mod guard;

/// Processes .helixignore files to exclude specific paths.
pub mod ignore;

/// `package.json` merging.
pub mod manifest;

/// Literal placeholder substitution.
pub mod placeholder;

/// Template classification and overlay operations.
pub mod template;
