use crate::{
    cli::args::StartArgs,
    collaborator::{invoke, Collaborator, ProcessCollaborator},
    config::Config,
    error::Result,
    guard::verify_artifacts,
    placeholder::{effective_project_name, PlaceholderTokens},
};
use std::path::{Path, PathBuf};

/// Verifies the build output, then hands over to the production start script.
///
/// The starter is never invoked when an artifact is missing.
pub fn start_project(project_root: &Path, config: &Config, starter: &dyn Collaborator) -> Result<()> {
    verify_artifacts(project_root, &config.artifacts)?;

    let name = effective_project_name(".", project_root)?;
    let tokens = PlaceholderTokens::resolve(&name, config);
    log::info!("Starting {} with `{}`", name, config.start.display());
    invoke(starter, &config.start, &tokens, &[], project_root)
}

/// Entry point for `helix start`.
pub fn run(args: &StartArgs, templates_root: PathBuf) -> Result<()> {
    let project_root = std::env::current_dir()?.join(&args.project_dir);
    let project_root = project_root.canonicalize().unwrap_or(project_root);
    let config = Config::load_config(&templates_root)?;
    let starter = ProcessCollaborator::new(config.start.program.clone());
    start_project(&project_root, &config, &starter)
}
