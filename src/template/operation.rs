use std::path::PathBuf;

/// The instruction produced for one template entry.
#[derive(Debug)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { source: PathBuf, target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            TemplateOperation::Copy { target, .. }
            | TemplateOperation::Write { target, .. }
            | TemplateOperation::CreateDirectory { target, .. } => Some(target),
            TemplateOperation::Ignore { .. } => None,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, .. } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Write { source, target, .. } => {
                format!("render '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            TemplateOperation::Ignore { source } => {
                format!("ignore '{}'", source.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Copying '{}' to '{}' (overwriting existing file)",
                        source.display(),
                        target.display()
                    )
                } else {
                    format!("Copying '{}' to '{}'", source.display(), target.display())
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!("Writing to '{}' (overwriting existing file)", target.display())
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }

            TemplateOperation::Ignore { source } => {
                format!("Ignoring '{}' (matches ignore pattern)", source.display())
            }
        }
    }
}
