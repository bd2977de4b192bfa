//! Component registry types and parsing (templates/registry.yaml)

use crate::config::paths::ensure_inside_root;
use crate::language::Language;
use crate::utilities::UTILITY_NAMES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Registry file name inside the template directory
pub const REGISTRY_FILE: &str = "registry.yaml";

/// Placeholder in template paths replaced by the language's file extension
pub const EXT_PLACEHOLDER: &str = "{ext}";

/// A template file and where it lands under the component directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the template directory
    pub source: String,

    /// Path relative to the manifest's component directory
    pub dest: String,
}

impl FileEntry {
    pub fn source_for(&self, language: Language) -> String {
        self.source.replace(EXT_PLACEHOLDER, language.extension())
    }

    pub fn dest_for(&self, language: Language) -> String {
        self.dest.replace(EXT_PLACEHOLDER, language.extension())
    }
}

/// One installable component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique registry key
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Components that must be installed first
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Shared utilities the component imports
    #[serde(default)]
    pub utilities: Vec<String>,

    /// Files to install, in order
    pub files: Vec<FileEntry>,
}

/// Root registry manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Semver version of the template set, checked against the CLI version
    pub version: String,

    pub components: Vec<ComponentDescriptor>,
}

impl Registry {
    /// Parse and validate registry YAML
    pub fn parse(content: &str) -> Result<Self, String> {
        let registry: Registry = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        registry.validate()?;
        Ok(registry)
    }

    /// Structural checks; dangling `depends_on` names are left to the resolver
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(format!("duplicate component '{}'", component.name));
            }
            if component.files.is_empty() {
                return Err(format!("component '{}' lists no files", component.name));
            }
            if let Some(unknown) = component
                .utilities
                .iter()
                .find(|u| !UTILITY_NAMES.contains(&u.as_str()))
            {
                return Err(format!(
                    "component '{}' requires unknown utility '{}'",
                    component.name, unknown
                ));
            }
            for file in &component.files {
                ensure_inside_root("dest", Path::new(&file.dest)).map_err(|_| {
                    format!(
                        "component '{}' writes outside the component directory: {}",
                        component.name, file.dest
                    )
                })?;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Component names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version: 0.1.0
components:
  - name: label
    description: Accessible form label
    files:
      - source: label/label.{ext}
        dest: label.{ext}
  - name: button
    depends_on: [label]
    utilities: [cn]
    files:
      - source: button/button.{ext}
        dest: button.{ext}
"#;

    #[test]
    fn test_parse_registry() {
        let registry = Registry::parse(SAMPLE).unwrap();
        assert_eq!(registry.names(), vec!["label", "button"]);
        let button = registry.get("button").unwrap();
        assert_eq!(button.depends_on, vec!["label"]);
        assert_eq!(button.utilities, vec!["cn"]);
        assert!(registry.get("label").unwrap().utilities.is_empty());
    }

    #[test]
    fn test_ext_placeholder() {
        let entry = FileEntry {
            source: "button/button.{ext}".to_string(),
            dest: "button.{ext}".to_string(),
        };
        assert_eq!(entry.source_for(Language::TypeScript), "button/button.ts");
        assert_eq!(entry.dest_for(Language::JavaScript), "button.js");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = r#"
version: 0.1.0
components:
  - name: a
    files: [{ source: a.ts, dest: a.ts }]
  - name: a
    files: [{ source: b.ts, dest: b.ts }]
"#;
        assert!(Registry::parse(yaml).unwrap_err().contains("duplicate"));
    }

    #[test]
    fn test_unknown_utility_rejected() {
        let yaml = r#"
version: 0.1.0
components:
  - name: a
    utilities: [lodash]
    files: [{ source: a.ts, dest: a.ts }]
"#;
        assert!(Registry::parse(yaml).unwrap_err().contains("lodash"));
    }

    #[test]
    fn test_escaping_dest_rejected() {
        let yaml = r#"
version: 0.1.0
components:
  - name: a
    files: [{ source: a.ts, dest: ../../a.ts }]
"#;
        assert!(Registry::parse(yaml).is_err());
    }
}
