//! Literal placeholder substitution for marked template files.
//!
//! Tokens are matched by exact string comparison; there is no expression
//! language, escaping or conditional logic.

use std::path::Path;

use crate::config::Config;
use crate::constants::{tokens, CURRENT_DIR_SENTINEL};
use crate::error::{Error, Result};

/// The resolved token → value pairs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTokens {
    pairs: Vec<(String, String)>,
}

impl PlaceholderTokens {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds or replaces a token.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, token: K, value: V) -> Self {
        let token = token.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(t, _)| *t == token) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((token, value)),
        }
        self
    }

    /// Resolves the standard tokens for a project.
    pub fn resolve(project_name: &str, config: &Config) -> Self {
        Self::new()
            .with(tokens::PROJECT_NAME, project_name)
            .with(tokens::DEFAULT_THEME, config.default_theme.as_str())
            .with(tokens::DEFAULT_MODE, config.default_mode.as_str())
    }

    /// Replaces every occurrence of every token in `content`.
    ///
    /// The scan runs once over the input, so replacement values are never
    /// themselves searched for tokens. When two tokens match at the same
    /// position the longer one wins.
    pub fn substitute(&self, content: &str) -> String {
        let mut output = String::with_capacity(content.len());
        let mut rest = content;

        loop {
            let next = self
                .pairs
                .iter()
                .filter(|(token, _)| !token.is_empty())
                .filter_map(|(token, value)| rest.find(token.as_str()).map(|at| (at, token, value)))
                .min_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())));

            match next {
                Some((at, token, value)) => {
                    output.push_str(&rest[..at]);
                    output.push_str(value);
                    rest = &rest[at + token.len()..];
                }
                None => {
                    output.push_str(rest);
                    return output;
                }
            }
        }
    }

    /// Substitutes tokens in each element of `args`.
    pub fn substitute_all(&self, args: &[String]) -> Vec<String> {
        args.iter().map(|arg| self.substitute(arg)).collect()
    }
}

impl Default for PlaceholderTokens {
    fn default() -> Self {
        Self::new()
    }
}

/// Determines the effective project name: the last segment of the target
/// directory, or of `working_dir` for the current directory sentinel.
pub fn effective_project_name(target: &str, working_dir: &Path) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        return Err(Error::MissingProjectName);
    }
    let directory = if target == CURRENT_DIR_SENTINEL { working_dir } else { Path::new(target) };
    directory
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or(Error::MissingProjectName)
}
