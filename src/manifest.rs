//! Merging the fullstack `package.json` template into a generated project.
//!
//! The generators write their manifests under their own output directories;
//! those are first folded into the project root manifest. The root manifest
//! then owns the project identity and any dependency versions it already
//! pins. The template manifest owns the script set and contributes missing
//! dependencies.

use serde_json::{Map, Value};
use std::path::Path;

use crate::constants::manifest::{DESCRIPTION, KEYWORD, LEGACY_MODULE_TYPE, MODULE_TYPE};
use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};

const TYPE: &str = "type";
const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";
const SCRIPTS: &str = "scripts";
const DESCRIPTION_KEY: &str = "description";
const KEYWORDS: &str = "keywords";

/// A `package.json` document. Key order is preserved on round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest(Map<String, Value>);

impl PackageManifest {
    /// Parses a manifest, requiring the top level to be a JSON object.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Error::ManifestShape { path: origin.to_string() }),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Writes the manifest as pretty JSON with a trailing newline.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.0)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A manifest holding only a `name`.
    pub fn named(name: &str) -> Self {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(name.to_string()));
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Merges `template` into `self` and returns the result.
    pub fn merge(mut self, template: &PackageManifest) -> PackageManifest {
        self.normalize_module_type();
        self.add_missing_entries(DEPENDENCIES, template);
        self.add_missing_entries(DEV_DEPENDENCIES, template);
        self.install_scripts(template);
        self.0
            .insert(DESCRIPTION_KEY.to_string(), Value::String(DESCRIPTION.to_string()));
        self.add_keyword(KEYWORD);
        self
    }

    /// Adds the dependency entries of a generator's manifest. Packages
    /// already present keep their version.
    pub fn absorb(&mut self, generated: &PackageManifest) {
        self.add_missing_entries(DEPENDENCIES, generated);
        self.add_missing_entries(DEV_DEPENDENCIES, generated);
    }

    fn normalize_module_type(&mut self) {
        let legacy = match self.0.get(TYPE) {
            None => true,
            Some(Value::String(kind)) => kind == LEGACY_MODULE_TYPE,
            Some(_) => false,
        };
        if legacy {
            self.0.insert(TYPE.to_string(), Value::String(MODULE_TYPE.to_string()));
        }
    }

    /// Returns a copy of the object stored under `key`, or an empty one when
    /// it is missing or not an object.
    fn object_entry(&self, key: &str) -> Map<String, Value> {
        match self.0.get(key) {
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                log::warn!("Manifest field '{key}' is not an object, replacing it");
                Map::new()
            }
            None => Map::new(),
        }
    }

    /// Inserts template entries whose keys the destination lacks. Existing
    /// entries keep their version.
    fn add_missing_entries(&mut self, key: &str, template: &PackageManifest) {
        let mut target = self.object_entry(key);
        if let Some(Value::Object(source)) = template.0.get(key) {
            for (name, version) in source {
                if !target.contains_key(name) {
                    log::debug!("Adding {key} entry {name}@{version}");
                    target.insert(name.clone(), version.clone());
                }
            }
        }
        self.0.insert(key.to_string(), Value::Object(target));
    }

    /// Template scripts always replace the destination's.
    fn install_scripts(&mut self, template: &PackageManifest) {
        let mut target = self.object_entry(SCRIPTS);
        if let Some(Value::Object(source)) = template.0.get(SCRIPTS) {
            for (name, command) in source {
                target.insert(name.clone(), command.clone());
            }
        }
        self.0.insert(SCRIPTS.to_string(), Value::Object(target));
    }

    fn add_keyword(&mut self, keyword: &str) {
        let mut keywords = match self.0.get(KEYWORDS) {
            Some(Value::Array(keywords)) => keywords.clone(),
            Some(_) => {
                log::warn!("Manifest field '{KEYWORDS}' is not an array, replacing it");
                Vec::new()
            }
            None => Vec::new(),
        };
        if !keywords.iter().any(|k| k.as_str() == Some(keyword)) {
            keywords.push(Value::String(keyword.to_string()));
        }
        self.0.insert(KEYWORDS.to_string(), Value::Array(keywords));
    }
}

/// Folds the manifests the generators left under `project_root` into the
/// root manifest and removes them.
///
/// An existing root manifest comes first, then `generated` in order; the first
/// version seen for a package wins. Fails when neither the root nor any
/// generator provides a manifest.
pub fn consolidate<P: AsRef<Path>>(
    project_root: P,
    generated: &[String],
    project_name: &str,
) -> Result<PackageManifest> {
    let project_root = project_root.as_ref();
    let root_path = project_root.join(MANIFEST_FILE);
    let mut root = if root_path.is_file() {
        Some(PackageManifest::load(&root_path)?)
    } else {
        None
    };

    for relative in generated {
        let path = project_root.join(relative);
        if path == root_path || !path.is_file() {
            log::debug!("No generator manifest at {}", path.display());
            continue;
        }
        let sub = PackageManifest::load(&path)?;
        root.get_or_insert_with(|| PackageManifest::named(project_name)).absorb(&sub);
        std::fs::remove_file(&path)?;
        log::debug!("Folded {} into {}", path.display(), root_path.display());
    }

    let root = root.ok_or_else(|| Error::MissingManifest {
        path: root_path.display().to_string(),
    })?;
    root.save(&root_path)?;
    Ok(root)
}

/// Loads both manifests, merges them and writes the result over the
/// destination, which must exist.
pub fn merge_files<P: AsRef<Path>>(destination: P, template: P) -> Result<PackageManifest> {
    let destination = destination.as_ref();
    if !destination.is_file() {
        return Err(Error::MissingManifest { path: destination.display().to_string() });
    }
    let template = PackageManifest::load(template)?;

    let merged = PackageManifest::load(destination)?.merge(&template);
    merged.save(destination)?;
    Ok(merged)
}
