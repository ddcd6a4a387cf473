//! Build artifact precondition for the production start.

use std::path::Path;

use crate::config::ArtifactSpec;
use crate::error::{Error, Result};

/// Fails on the first artifact missing under `project_root`.
///
/// Never builds anything and never touches the filesystem.
pub fn verify_artifacts(project_root: &Path, artifacts: &[ArtifactSpec]) -> Result<()> {
    for artifact in artifacts {
        let path = project_root.join(&artifact.path);
        if !path.is_file() {
            log::debug!("Build artifact missing: {}", path.display());
            return Err(Error::MissingArtifact {
                path: artifact.path.clone(),
                rebuild: artifact.rebuild.clone(),
            });
        }
        log::debug!("Found build artifact {}", path.display());
    }
    Ok(())
}
