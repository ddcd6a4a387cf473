use crate::constants::{CONFIG_FILENAMES, IGNORE_FILE, MANIFEST_FILE};
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns always excluded from the template copy, relative to the template root.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git", ".git/**", "**/.DS_Store", IGNORE_FILE];

/// Builds the exclusion set for a template directory.
///
/// The identity manifest is excluded at any depth so that manifests produced
/// by the upstream generators are only ever touched by the merge step.
/// Patterns from an optional `.helixignore` are added on top.
pub fn parse_helixignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let template_root = template_root.as_ref();
    let mut builder = GlobSetBuilder::new();

    let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
        .iter()
        .chain(CONFIG_FILENAMES.iter())
        .map(|pattern| rooted(template_root, pattern))
        .collect();
    patterns.push(rooted(template_root, &format!("**/{MANIFEST_FILE}")));

    if let Ok(contents) = read_to_string(template_root.join(IGNORE_FILE)) {
        patterns.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(|line| rooted(template_root, line)),
        );
    } else {
        debug!("No {IGNORE_FILE} file found, using default patterns.");
    }

    for pattern in &patterns {
        debug!("Adding ignore pattern: {pattern} to globset");
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

fn rooted(template_root: &Path, pattern: &str) -> String {
    template_root.join(pattern).display().to_string()
}
