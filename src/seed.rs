//! Seed dataset the store starts from.
//!
//! A built-in fixture is compiled into the crate; a YAML or JSON file with the
//! same shape can replace it (chosen by file extension).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::content::{ContentSet, SyntheticFolders};
use crate::models::{File, Folder};

const BUILTIN_SEED: &str = include_str!("../fixtures/seed.yaml");

/// Initial folders, files and synthetic per-folder children
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub files: Vec<File>,
    /// Children shown for path segments not backed by the store
    #[serde(default)]
    pub synthetic: HashMap<String, ContentSet>,
}

impl Seed {
    /// The dataset shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_SEED).context("built-in seed is invalid")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let seed: Seed = serde_yaml::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load a seed file; `.json` files are parsed as JSON, everything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let seed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };
        seed.with_context(|| format!("failed to load seed file {}", path.display()))
    }

    /// Reject datasets where an id or name breaks the store invariants
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let sets = std::iter::once((None, &self.folders, &self.files)).chain(
            self.synthetic
                .iter()
                .map(|(segment, set)| (Some(segment.as_str()), &set.folders, &set.files)),
        );

        for (segment, folders, files) in sets {
            let entries = folders
                .iter()
                .map(|f| (&f.id, &f.name))
                .chain(files.iter().map(|f| (&f.id, &f.name)));
            for (id, name) in entries {
                if name.trim().is_empty() {
                    bail!("entry {} has an empty name", id);
                }
                if !seen.insert(id.clone()) {
                    match segment {
                        Some(segment) => bail!("duplicate id {} in synthetic folder {}", id, segment),
                        None => bail!("duplicate id {}", id),
                    }
                }
            }
        }
        Ok(())
    }

    /// Split into the backing collections and the synthetic content source
    pub fn into_parts(self) -> (Vec<Folder>, Vec<File>, SyntheticFolders) {
        (self.folders, self.files, SyntheticFolders::new(self.synthetic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_seed_loads() {
        let seed = Seed::builtin().unwrap();
        assert_eq!(seed.folders.len(), 6);
        assert_eq!(seed.files.len(), 10);
        assert!(seed.synthetic.contains_key("Projects"));
        assert!(seed.synthetic.contains_key("Design Assets"));
        assert!(seed.synthetic.contains_key("Documents"));
        assert_eq!(seed.synthetic["Documents"].files.len(), 4);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = r#"
folders:
  - { id: same, name: A, last_modified: "2024-01-01T00:00:00Z" }
files:
  - { id: same, name: b.pdf, file_type: pdf, size: 1 KB, last_modified: "2024-01-01T00:00:00Z" }
"#;
        let err = Seed::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate id same"));
    }

    #[test]
    fn test_blank_names_rejected() {
        let json = r#"{"folders":[{"id":"f","name":"  ","last_modified":"2024-01-01T00:00:00Z"}]}"#;
        assert!(Seed::from_json_str(json).is_err());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"files":[{{"id":"file-1","name":"a.png","file_type":"image","size":"2 MB","last_modified":"2024-01-01T00:00:00Z"}}]}}"#
        )
        .unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert!(seed.folders.is_empty());
        assert_eq!(seed.files[0].id, "file-1");
        assert!(seed.files[0].uploaded.is_none());
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "folders:\n  - {{ id: folder-1, name: Inbox, last_modified: \"2024-01-01T00:00:00Z\" }}").unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.folders[0].name, "Inbox");
        assert!(seed.files.is_empty());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Seed::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read seed file"));
    }
}
