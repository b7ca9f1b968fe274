//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Project configuration, read from `markdownify.yaml`.
///
/// ```yaml
/// source: ./docs
/// output: _html
/// extensions: [md, markdown]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory containing the documents to convert
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Directory the HTML fragments are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// File extensions treated as documents (lowercase, without dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_source() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from("_html")
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            extensions: default_extensions(),
        }
    }
}

impl ProjectConfig {
    /// Check whether `path` has one of the configured document extensions.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: ProjectConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config: ProjectConfig = serde_yaml::from_str("output: public\n").unwrap();
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.source, PathBuf::from("."));
    }

    #[test]
    fn test_is_document() {
        let config = ProjectConfig::default();
        assert!(config.is_document(Path::new("docs/intro.md")));
        assert!(config.is_document(Path::new("guide.MARKDOWN")));
        assert!(!config.is_document(Path::new("image.png")));
        assert!(!config.is_document(Path::new("README")));
    }
}
