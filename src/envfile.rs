//! Minimal `.env` maintenance: append variables that are not defined yet.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;

/// Names of the variables assigned in `content`.
fn defined_keys(content: &str) -> HashSet<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_prefix("export ").unwrap_or(line))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim())
        .collect()
}

/// Appends every entry of `vars` whose key `path` does not define. Existing
/// values are left alone. Returns the keys that were added.
pub fn ensure_vars(path: &Path, vars: &IndexMap<String, String>) -> Result<Vec<String>> {
    let existing = if path.exists() { std::fs::read_to_string(path)? } else { String::new() };
    let defined = defined_keys(&existing);

    let missing: Vec<(&String, &String)> =
        vars.iter().filter(|(key, _)| !defined.contains(key.as_str())).collect();
    if missing.is_empty() {
        return Ok(Vec::new());
    }

    let mut content = existing.clone();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for (key, value) in &missing {
        content.push_str(&format!("{key}={value}\n"));
    }
    std::fs::write(path, content)?;

    Ok(missing.into_iter().map(|(key, _)| key.clone()).collect())
}
