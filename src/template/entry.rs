use std::path::{Path, PathBuf};

/// What a template entry is, decided once when the tree is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    PlainFile,
    /// A file whose name ends in the marker suffix; the suffix is stripped
    /// at the destination.
    PlaceholderFile { suffix: String },
}

/// A node under the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path relative to the template root. Empty for the root itself.
    pub relative: PathBuf,
    pub kind: EntryKind,
}

impl TemplateEntry {
    /// Classifies `path` (which must live under `template_root`).
    ///
    /// Returns `None` when `path` is outside the template root.
    pub fn classify(
        template_root: &Path,
        path: &Path,
        is_dir: bool,
        suffix: &str,
    ) -> Option<Self> {
        let relative = path.strip_prefix(template_root).ok()?.to_path_buf();
        let kind = if is_dir {
            EntryKind::Directory
        } else if has_suffix(&relative, suffix) {
            EntryKind::PlaceholderFile { suffix: suffix.to_string() }
        } else {
            EntryKind::PlainFile
        };
        Some(Self { relative, kind })
    }

    /// The path this entry is written to under `output_root`.
    pub fn destination(&self, output_root: &Path) -> PathBuf {
        match &self.kind {
            EntryKind::PlaceholderFile { suffix } => {
                let stripped = self
                    .relative
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_suffix(suffix.as_str()));
                match stripped {
                    Some(name) => output_root.join(self.relative.with_file_name(name)),
                    None => output_root.join(&self.relative),
                }
            }
            _ => output_root.join(&self.relative),
        }
    }
}

/// True when the file name ends with `suffix` and has something before it.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > suffix.len() && name.ends_with(suffix))
}
