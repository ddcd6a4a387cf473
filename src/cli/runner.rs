use crate::{
    cli::{
        args::CreateArgs,
        context::GenerationContext,
        processor::{FileProcessor, WalkSummary},
    },
    collaborator::{invoke, Collaborator, ProcessCollaborator},
    config::Config,
    constants::{ENV_FILE, MANIFEST_FILE},
    envfile,
    error::{Error, Result},
    ignore::parse_helixignore_file,
    manifest,
    placeholder::PlaceholderTokens,
    template::processor::TemplateProcessor,
};
use std::path::{Path, PathBuf};

/// The external tools a generation run drives.
pub struct Collaborators<'a> {
    pub frontend: &'a dyn Collaborator,
    pub backend: &'a dyn Collaborator,
    pub package_manager: &'a dyn Collaborator,
}

/// Orchestrates the generation of one project.
///
/// Steps run strictly in order and the first failure ends the run. Nothing is
/// retried and nothing is rolled back.
pub struct Runner<'a> {
    ctx: GenerationContext,
    config: Config,
    templates_root: PathBuf,
    tokens: PlaceholderTokens,
    collaborators: Collaborators<'a>,
}

impl<'a> Runner<'a> {
    pub fn new(
        ctx: GenerationContext,
        config: Config,
        templates_root: PathBuf,
        collaborators: Collaborators<'a>,
    ) -> Self {
        let tokens = PlaceholderTokens::resolve(ctx.project_name(), &config);
        Self { ctx, config, templates_root, tokens, collaborators }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<WalkSummary> {
        let template_dir = self.validate()?;

        self.run_generators()?;
        self.merge_manifest(&template_dir)?;
        self.install_dependencies()?;

        // The overlay runs after install so an install step cannot wipe it.
        let summary = self.overlay_template(&template_dir)?;
        self.cleanup()?;

        log::info!(
            "Overlay processed {} entries ({} ignored)",
            summary.processed(),
            summary.ignored
        );
        Ok(summary)
    }

    /// Checks everything that can be checked before touching the disk.
    fn validate(&self) -> Result<PathBuf> {
        let template_dir = self.ctx.template().locate(&self.templates_root)?;
        let template_manifest = template_dir.join(MANIFEST_FILE);
        if !template_manifest.is_file() {
            return Err(Error::TemplateUnavailable {
                name: self.ctx.template().to_string(),
                template_dir: template_manifest.display().to_string(),
            });
        }

        let target_dir = self.ctx.target_dir();
        if self.ctx.in_place() {
            let existing = target_dir.join(MANIFEST_FILE);
            if existing.exists() {
                println!(
                    "Found an existing {} in {}; it will be merged.",
                    MANIFEST_FILE,
                    target_dir.display()
                );
            }
        } else if target_dir.exists() {
            return Err(Error::DestinationExists {
                output_dir: target_dir.display().to_string(),
            });
        }

        log::debug!(
            "Generating '{}' from template {} into {}",
            self.ctx.project_name(),
            self.ctx.template(),
            target_dir.display()
        );
        Ok(template_dir)
    }

    /// Runs the frontend and backend scaffolding generators
    fn run_generators(&self) -> Result<()> {
        let target_dir = self.ctx.target_dir();
        std::fs::create_dir_all(target_dir)?;

        println!("Scaffolding frontend with {}...", self.collaborators.frontend.name());
        invoke(self.collaborators.frontend, &self.config.frontend, &self.tokens, &[], target_dir)?;

        println!("Scaffolding backend with {}...", self.collaborators.backend.name());
        invoke(self.collaborators.backend, &self.config.backend, &self.tokens, &[], target_dir)?;
        Ok(())
    }

    /// Folds the generators' manifests into the root one, then merges the
    /// template manifest over it.
    fn merge_manifest(&self, template_dir: &Path) -> Result<()> {
        let target_dir = self.ctx.target_dir();
        manifest::consolidate(
            target_dir,
            &self.config.generated_manifests,
            self.ctx.project_name(),
        )?;

        let destination = target_dir.join(MANIFEST_FILE);
        log::debug!("Merging {} into {}", MANIFEST_FILE, destination.display());
        manifest::merge_files(destination, template_dir.join(MANIFEST_FILE))?;
        Ok(())
    }

    fn install_dependencies(&self) -> Result<()> {
        println!("Installing dependencies with {}...", self.collaborators.package_manager.name());
        let extra: &[&str] = if self.ctx.verbose() { &[] } else { &["--silent"] };
        invoke(
            self.collaborators.package_manager,
            &self.config.package_manager,
            &self.tokens,
            extra,
            self.ctx.target_dir(),
        )
    }

    fn overlay_template(&self, template_dir: &Path) -> Result<WalkSummary> {
        let ignored = parse_helixignore_file(template_dir)?;
        let processor = TemplateProcessor::new(
            &self.tokens,
            template_dir.to_path_buf(),
            self.ctx.target_dir().to_path_buf(),
            &ignored,
            self.config.template_suffix.as_str(),
        );
        FileProcessor::new(processor, self.ctx.verbose()).process_all_files()
    }

    /// Removes empty scaffold directories and fills in missing `.env` entries.
    fn cleanup(&self) -> Result<()> {
        let target_dir = self.ctx.target_dir();
        for relative in &self.config.cleanup {
            let dir = target_dir.join(relative);
            if dir.is_dir() && std::fs::read_dir(&dir)?.next().is_none() {
                log::debug!("Removing empty directory {}", dir.display());
                std::fs::remove_dir(&dir)?;
            }
        }

        let added = envfile::ensure_vars(&target_dir.join(ENV_FILE), &self.config.env)?;
        if !added.is_empty() {
            log::info!("Added {} to {}", added.join(", "), ENV_FILE);
        }
        Ok(())
    }
}

/// Entry point for `helix create`.
pub fn run(args: &CreateArgs, verbose: bool, templates_root: PathBuf) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let ctx = GenerationContext::new(&args.name, &args.template, verbose, &working_dir)?;
    let config = Config::load_config(&templates_root)?;

    let frontend = ProcessCollaborator::new(config.frontend.program.clone());
    let backend = ProcessCollaborator::new(config.backend.program.clone());
    let package_manager = ProcessCollaborator::new(config.package_manager.program.clone());
    let collaborators = Collaborators {
        frontend: &frontend,
        backend: &backend,
        package_manager: &package_manager,
    };

    let target_dir = ctx.target_dir().to_path_buf();
    let project_name = ctx.project_name().to_string();
    Runner::new(ctx, config, templates_root, collaborators).run()?;

    println!("Project '{}' generated successfully in {}.", project_name, target_dir.display());
    Ok(())
}
