//! Generator configuration loading and management

use crate::constants::{CONFIG_FILENAMES, DEFAULT_TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// A child-process invocation: the program and its arguments.
///
/// Arguments may contain placeholder tokens such as `{{PROJECT_NAME}}`; they
/// are resolved against the run's tokens right before the process starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }

    /// The command line as a user would type it.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A build output that must exist before the production start.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactSpec {
    /// Path relative to the project root.
    pub path: String,
    /// Command that produces the artifact.
    pub rebuild: String,
}

/// Main configuration structure, read from the templates directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub template_suffix: String,
    pub default_theme: String,
    pub default_mode: String,
    pub frontend: CommandSpec,
    pub backend: CommandSpec,
    pub package_manager: CommandSpec,
    pub start: CommandSpec,
    /// Manifests the generators write, relative to the project root. They are
    /// folded into the root manifest before the template merge.
    pub generated_manifests: Vec<String>,
    pub cleanup: Vec<String>,
    pub artifacts: Vec<ArtifactSpec>,
    pub env: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
            default_theme: "default".to_string(),
            default_mode: "light".to_string(),
            frontend: CommandSpec::new(
                "npx",
                &[
                    "--yes",
                    "create-react-ui-app@latest",
                    "src/web",
                    "--theme",
                    "{{DEFAULT_THEME}}",
                    "--routing",
                    "file-based",
                ],
            ),
            backend: CommandSpec::new(
                "npx",
                &["--yes", "express-generator-typescript", "src/api"],
            ),
            package_manager: CommandSpec::new("npm", &["install"]),
            start: CommandSpec::new("npm", &["run", "start:prod"]),
            generated_manifests: vec![
                "src/web/package.json".to_string(),
                "src/api/package.json".to_string(),
            ],
            cleanup: vec!["src/web/pages".to_string(), "src/api/public".to_string()],
            artifacts: vec![
                ArtifactSpec {
                    path: "dist/api/server.js".to_string(),
                    rebuild: "npm run build:api".to_string(),
                },
                ArtifactSpec {
                    path: "dist/web/index.html".to_string(),
                    rebuild: "npm run build:web".to_string(),
                },
            ],
            env: IndexMap::from([(
                "VITE_API_URL".to_string(),
                "http://localhost:3000/api".to_string(),
            )]),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.template_suffix.starts_with('.') || self.template_suffix.len() < 2 {
            return Err(Error::ConfigValidation(
                "template_suffix must start with '.' and have at least 1 character after it"
                    .into(),
            ));
        }
        for (name, spec) in [
            ("frontend", &self.frontend),
            ("backend", &self.backend),
            ("package_manager", &self.package_manager),
            ("start", &self.start),
        ] {
            if spec.program.trim().is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "{name}.program must not be empty"
                )));
            }
        }
        if let Some(artifact) = self.artifacts.iter().find(|a| a.path.trim().is_empty()) {
            return Err(Error::ConfigValidation(format!(
                "artifact path must not be empty (rebuild: '{}')",
                artifact.rebuild
            )));
        }
        Ok(())
    }

    /// Loads the first configuration file found in `templates_root`,
    /// falling back to the defaults when there is none.
    pub fn load_config<P: AsRef<Path>>(templates_root: P) -> Result<Self> {
        let templates_root = templates_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = templates_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let config: Config = if config_file_name.ends_with(".json") {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };
                config.validate()?;
                return Ok(config);
            }
        }

        log::debug!(
            "No configuration file found in '{}', using defaults.",
            templates_root.display()
        );
        Ok(Config::default())
    }
}
