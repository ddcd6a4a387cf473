//! Template overlay engine
//!
//! This module contains the components that turn a packaged template tree
//! into files inside a generated project:
//! - `entry`: Classifies template entries (directory, plain file, placeholder file)
//! - `operation`: Defines the instruction produced for each entry
//! - `processor`: Maps template entries to instructions

pub mod entry;
pub mod operation;
pub mod processor;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// The templates a project can be generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    BasicApp,
    WelcomeApp,
    UserApp,
    TodoApp,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] =
        [TemplateId::BasicApp, TemplateId::WelcomeApp, TemplateId::UserApp, TemplateId::TodoApp];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::BasicApp => "basicapp",
            TemplateId::WelcomeApp => "welcomeapp",
            TemplateId::UserApp => "userapp",
            TemplateId::TodoApp => "todoapp",
        }
    }

    /// Directory holding this template inside the templates root.
    pub fn directory(&self, templates_root: &Path) -> PathBuf {
        templates_root.join(self.as_str())
    }

    /// Returns the template directory, or an error when this template is
    /// not shipped.
    pub fn locate(&self, templates_root: &Path) -> Result<PathBuf> {
        let dir = self.directory(templates_root);
        if !dir.is_dir() {
            return Err(Error::TemplateUnavailable {
                name: self.as_str().to_string(),
                template_dir: dir.display().to_string(),
            });
        }
        Ok(dir)
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TemplateId::ALL.into_iter().find(|id| id.as_str() == s).ok_or_else(|| {
            Error::UnknownTemplate {
                name: s.to_string(),
                available: TemplateId::ALL
                    .iter()
                    .map(TemplateId::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_known_identifiers() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "BasicApp".parse::<TemplateId>().unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { .. }));
        assert!(err.to_string().contains("basicapp, welcomeapp, userapp, todoapp"));
    }

    #[test]
    fn missing_template_directory_is_unavailable() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("basicapp")).unwrap();

        assert!(TemplateId::BasicApp.locate(root.path()).is_ok());
        let err = TemplateId::TodoApp.locate(root.path()).unwrap_err();
        assert!(err.to_string().contains("not yet available"));
    }
}
