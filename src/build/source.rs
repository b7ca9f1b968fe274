//! Document discovery in the source directory.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("source path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("source path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A source directory after validation.
#[derive(Debug, Clone)]
pub struct SourceDir {
    /// The resolved path to the source directory
    pub root: PathBuf,
    /// Directory to leave out of discovery (the output, if nested in the source)
    pub exclude: Option<PathBuf>,
}

impl SourceDir {
    /// Validate that `root` exists and is a directory.
    pub fn resolve(root: PathBuf, exclude: Option<PathBuf>) -> Result<Self, SourceError> {
        if !root.exists() {
            return Err(SourceError::PathNotFound(root));
        }
        if !root.is_dir() {
            return Err(SourceError::NotADirectory(root));
        }
        Ok(Self { root, exclude })
    }

    /// Discover all documents in this source.
    ///
    /// Returns paths relative to the source root, sorted for stable output.
    pub fn discover_documents(&self, config: &ProjectConfig) -> Result<Vec<PathBuf>, SourceError> {
        let mut documents = Vec::new();
        self.walk_directory(&self.root, &PathBuf::new(), config, &mut documents)?;
        documents.sort();
        Ok(documents)
    }

    /// Recursively walk a directory and collect documents.
    fn walk_directory(
        &self,
        dir: &Path,
        relative_path: &Path,
        config: &ProjectConfig,
        documents: &mut Vec<PathBuf>,
    ) -> Result<(), SourceError> {
        let entries = std::fs::read_dir(dir).map_err(|e| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SourceError::ReadEntry {
                path: dir.to_path_buf(),
                source: e,
            })?;

            let path = entry.path();
            let file_name = entry.file_name();
            let file_name_str = file_name.to_string_lossy();

            // Skip hidden files and directories
            if file_name_str.starts_with('.') {
                continue;
            }

            if path.is_dir() {
                if matches!(file_name_str.as_ref(), "node_modules" | "target")
                    || self.exclude.as_deref() == Some(path.as_path())
                {
                    tracing::debug!("skipping directory {}", path.display());
                    continue;
                }
                self.walk_directory(&path, &relative_path.join(&file_name), config, documents)?;
            } else if path.is_file() && config.is_document(&path) {
                documents.push(relative_path.join(&file_name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "# doc\n").unwrap();
    }

    #[test]
    fn test_discover_documents() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("index.md"));
        touch(&dir.path().join("guides/setup.markdown"));
        touch(&dir.path().join("image.png"));
        touch(&dir.path().join(".hidden/secret.md"));
        touch(&dir.path().join("node_modules/pkg/readme.md"));

        let source = SourceDir::resolve(dir.path().to_path_buf(), None).unwrap();
        let documents = source.discover_documents(&ProjectConfig::default()).unwrap();

        assert_eq!(
            documents,
            vec![
                PathBuf::from("guides/setup.markdown"),
                PathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn test_excluded_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.md"));
        touch(&dir.path().join("_html/stale.md"));

        let source = SourceDir::resolve(
            dir.path().to_path_buf(),
            Some(dir.path().join("_html")),
        )
        .unwrap();
        let documents = source.discover_documents(&ProjectConfig::default()).unwrap();

        assert_eq!(documents, vec![PathBuf::from("a.md")]);
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourceDir::resolve(dir.path().join("missing"), None);
        assert!(matches!(result, Err(SourceError::PathNotFound(_))));
    }

    #[test]
    fn test_source_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.md");
        touch(&file);
        let result = SourceDir::resolve(file, None);
        assert!(matches!(result, Err(SourceError::NotADirectory(_))));
    }
}
