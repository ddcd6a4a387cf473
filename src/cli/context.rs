use crate::constants::{CURRENT_DIR_SENTINEL, TEMPLATES_DIR_NAME};
use crate::error::Result;
use crate::placeholder::effective_project_name;
use crate::template::TemplateId;
use std::path::{Path, PathBuf};

/// Where the project is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectTarget {
    /// A new directory that must not exist yet.
    Named,
    /// The working directory itself.
    CurrentDirectory,
}

/// State describing a single generation run.
///
/// Built once from the command line and handed to every step; nothing reads
/// verbosity or paths from global state.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    target: ProjectTarget,
    target_dir: PathBuf,
    project_name: String,
    template: TemplateId,
    verbose: bool,
}

impl GenerationContext {
    /// Validates the raw command line values.
    pub fn new(name: &str, template: &str, verbose: bool, working_dir: &Path) -> Result<Self> {
        let template = template.parse::<TemplateId>()?;
        let project_name = effective_project_name(name, working_dir)?;
        let (target, target_dir) = if name.trim() == CURRENT_DIR_SENTINEL {
            (ProjectTarget::CurrentDirectory, working_dir.to_path_buf())
        } else {
            (ProjectTarget::Named, working_dir.join(name.trim()))
        };
        Ok(Self { target, target_dir, project_name, template, verbose })
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn in_place(&self) -> bool {
        self.target == ProjectTarget::CurrentDirectory
    }
}

/// Picks the templates directory: explicit option (or environment), then
/// `templates/` beside the executable, then the one shipped with the crate.
pub fn resolve_templates_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR_NAME)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR_NAME),
    }
}
