//! External tools the generator drives as black boxes: the frontend and
//! backend scaffolding generators, the package manager and the production
//! start script.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::config::CommandSpec;
use crate::error::{Error, Result};
use crate::placeholder::PlaceholderTokens;

/// A blocking child-process invocation.
///
/// Implementations must not return until the process has exited.
pub trait Collaborator {
    /// Program name, used in messages.
    fn name(&self) -> &str;

    /// Runs the collaborator with `args` inside `working_dir`.
    fn run(&self, args: &[String], working_dir: &Path) -> Result<ExitStatus>;
}

/// Runs a program from `PATH` with inherited stdio.
pub struct ProcessCollaborator {
    program: String,
}

impl ProcessCollaborator {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl Collaborator for ProcessCollaborator {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[String], working_dir: &Path) -> Result<ExitStatus> {
        log::debug!("Running {} {:?} in {}", self.program, args, working_dir.display());

        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CollaboratorSpawn { program: self.program.clone(), source })
    }
}

/// Runs `collaborator` with the command's arguments (tokens substituted) plus
/// `extra_args`, failing on a non-zero exit.
pub fn invoke(
    collaborator: &dyn Collaborator,
    spec: &CommandSpec,
    tokens: &PlaceholderTokens,
    extra_args: &[&str],
    working_dir: &Path,
) -> Result<()> {
    let mut args = tokens.substitute_all(&spec.args);
    args.extend(extra_args.iter().map(|a| a.to_string()));

    let status = collaborator.run(&args, working_dir)?;
    if !status.success() {
        return Err(Error::CollaboratorFailed {
            program: collaborator.name().to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn reports_non_zero_exit_as_failure() {
        let dir = TempDir::new().unwrap();
        let sh = ProcessCollaborator::new("sh");
        let spec = CommandSpec::new("sh", &["-c", "exit 3"]);

        let err = invoke(&sh, &spec, &PlaceholderTokens::new(), &[], dir.path()).unwrap_err();
        match err {
            Error::CollaboratorFailed { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn substitutes_tokens_and_runs_in_working_dir() {
        let dir = TempDir::new().unwrap();
        let sh = ProcessCollaborator::new("sh");
        let spec = CommandSpec::new("sh", &["-c", "echo {{PROJECT_NAME}} > name.txt"]);
        let tokens = PlaceholderTokens::new().with("{{PROJECT_NAME}}", "acme");

        invoke(&sh, &spec, &tokens, &[], dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("name.txt")).unwrap();
        assert_eq!(written.trim(), "acme");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let missing = ProcessCollaborator::new("helix-no-such-program-xyz");

        let err = missing.run(&[], dir.path()).unwrap_err();
        assert!(matches!(err, Error::CollaboratorSpawn { .. }));
    }
}
