use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::placeholder::PlaceholderTokens;

use super::entry::{EntryKind, TemplateEntry};
use super::operation::TemplateOperation;

pub struct TemplateProcessor<'a> {
    /// Dependencies
    tokens: &'a PlaceholderTokens,
    ignored: &'a GlobSet,

    /// Other
    template_root: PathBuf,
    output_root: PathBuf,
    template_suffix: &'a str,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        tokens: &'a PlaceholderTokens,
        template_root: PathBuf,
        output_root: PathBuf,
        ignored: &'a GlobSet,
        template_suffix: &'a str,
    ) -> Self {
        Self { tokens, ignored, template_root, output_root, template_suffix }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Classifies a template path relative to the template root.
    pub fn classify(&self, template_entry: &Path, is_dir: bool) -> Result<TemplateEntry> {
        TemplateEntry::classify(&self.template_root, template_entry, is_dir, self.template_suffix)
            .ok_or_else(|| Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: format!("not inside '{}'", self.template_root.display()),
            })
    }

    /// Processes a template entry and determines the appropriate operation.
    ///
    /// Placeholder files are read and substituted here, so a `Write`
    /// operation already carries the final content.
    pub fn process(&self, template_entry: &Path, is_dir: bool) -> Result<TemplateOperation> {
        if !is_dir && self.ignored.is_match(template_entry) {
            return Ok(TemplateOperation::Ignore { source: template_entry.to_path_buf() });
        }

        let entry = self.classify(template_entry, is_dir)?;
        let target = entry.destination(&self.output_root);
        let target_exists = target.exists();

        match entry.kind {
            EntryKind::Directory => Ok(TemplateOperation::CreateDirectory { target, target_exists }),
            EntryKind::PlainFile => Ok(TemplateOperation::Copy {
                source: template_entry.to_path_buf(),
                target,
                target_exists,
            }),
            EntryKind::PlaceholderFile { .. } => {
                let raw = fs::read_to_string(template_entry).map_err(|e| Error::ProcessError {
                    source_path: template_entry.display().to_string(),
                    e: e.to_string(),
                })?;
                Ok(TemplateOperation::Write {
                    source: template_entry.to_path_buf(),
                    target,
                    content: self.tokens.substitute(&raw),
                    target_exists,
                })
            }
        }
    }
}
