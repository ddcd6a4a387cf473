use crate::{
    error::{Error, Result},
    template::{operation::TemplateOperation, processor::TemplateProcessor},
};
use std::path::Path;
use walkdir::WalkDir;

/// Counts of what a template walk did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub copied: usize,
    pub rendered: usize,
    pub ignored: usize,
}

impl WalkSummary {
    pub fn processed(&self) -> usize {
        self.directories + self.copied + self.rendered
    }
}

/// Walks a template tree and applies each entry's operation.
///
/// Entries are visited directories-first in directory-listing order. Any
/// failure aborts the walk; files already written are left in place.
pub struct FileProcessor<'a> {
    processor: TemplateProcessor<'a>,
    verbose: bool,
}

impl<'a> FileProcessor<'a> {
    pub fn new(processor: TemplateProcessor<'a>, verbose: bool) -> Self {
        Self { processor, verbose }
    }

    /// Processes all files in the template directory
    pub fn process_all_files(&self) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        for dir_entry in WalkDir::new(self.processor.template_root()) {
            let dir_entry = dir_entry?;
            let operation =
                self.processor.process(dir_entry.path(), dir_entry.file_type().is_dir())?;

            self.handle_file_operation(&operation).map_err(|e| Error::ProcessError {
                source_path: operation.error_context(),
                e: e.to_string(),
            })?;

            match &operation {
                TemplateOperation::CreateDirectory { .. } => summary.directories += 1,
                TemplateOperation::Copy { .. } => summary.copied += 1,
                TemplateOperation::Write { .. } => summary.rendered += 1,
                TemplateOperation::Ignore { .. } => summary.ignored += 1,
            }

            let message = operation.get_message();
            if self.verbose {
                log::info!("{message}");
            } else {
                log::debug!("{message}");
            }
        }

        Ok(summary)
    }

    fn handle_file_operation(&self, operation: &TemplateOperation) -> std::io::Result<()> {
        match operation {
            TemplateOperation::Write { target, content, .. } => {
                ensure_parent(target)?;
                std::fs::write(target, content)
            }
            TemplateOperation::Copy { source, target, .. } => {
                ensure_parent(target)?;
                std::fs::copy(source, target).map(|_| ())
            }
            TemplateOperation::CreateDirectory { target, .. } => std::fs::create_dir_all(target),
            TemplateOperation::Ignore { .. } => Ok(()),
        }
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}
