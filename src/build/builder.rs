use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::config::ProjectConfig;

use super::paths::{resolve_path, source_to_output_path};
use super::source::{SourceDir, SourceError};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("conversion task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub documents: usize,
}

pub struct Builder {
    config: ProjectConfig,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: ProjectConfig, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// Convert every document under the source directory and write the
    /// fragments to the output directory, mirroring the source layout.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let output_dir = self.output_dir();
        let source = SourceDir::resolve(self.source_dir(), Some(output_dir.clone()))?;

        let documents = source.discover_documents(&self.config)?;
        if documents.is_empty() {
            tracing::warn!(
                "no documents with extensions {:?} in {}",
                self.config.extensions,
                source.root.display()
            );
        } else {
            tracing::info!(
                "found {} document(s) in {}",
                documents.len(),
                source.root.display()
            );
        }

        tokio::fs::create_dir_all(&output_dir).await?;

        // Conversion is CPU-bound, so each document runs on the blocking pool.
        let mut tasks = JoinSet::new();
        for relative in &documents {
            let input = source.root.join(relative);
            let output = source_to_output_path(relative, &output_dir);
            tasks.spawn(convert_document(input, output));
        }

        let mut written = 0;
        while let Some(result) = tasks.join_next().await {
            result??;
            written += 1;
        }

        tracing::info!("wrote {} fragment(s) to {}", written, output_dir.display());

        Ok(BuildResult {
            output_dir,
            documents: written,
        })
    }

    /// Get the source directory path, resolved against base_path.
    pub fn source_dir(&self) -> PathBuf {
        resolve_path(&self.base_path, &self.config.source)
    }

    /// Get the output directory path, resolved against base_path.
    pub fn output_dir(&self) -> PathBuf {
        resolve_path(&self.base_path, &self.config.output)
    }
}

async fn convert_document(input: PathBuf, output: PathBuf) -> Result<(), BuildError> {
    let text = tokio::fs::read_to_string(&input)
        .await
        .map_err(|e| BuildError::Read {
            path: input.clone(),
            source: e,
        })?;

    let html = tokio::task::spawn_blocking(move || markdownify::convert(&text)).await?;

    write_fragment(&output, html).await?;
    tracing::debug!("converted {} -> {}", input.display(), output.display());
    Ok(())
}

async fn write_fragment(output: &Path, html: String) -> Result<(), std::io::Error> {
    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, html).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_build_mirrors_source_layout() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("docs/index.md"), "# Home\n");
        write(&dir.path().join("docs/guides/setup.md"), "**bold**\n");
        write(&dir.path().join("docs/notes.txt"), "ignored\n");

        let config = ProjectConfig {
            source: PathBuf::from("docs"),
            output: PathBuf::from("public"),
            ..ProjectConfig::default()
        };
        let builder = Builder::new(config, dir.path().to_path_buf());
        let result = builder.build().await.unwrap();

        assert_eq!(result.documents, 2);
        assert_eq!(result.output_dir, dir.path().join("public"));

        let index = std::fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert_eq!(index, "<h1>Home</h1>\n");

        let setup = std::fs::read_to_string(dir.path().join("public/guides/setup.html")).unwrap();
        assert!(setup.contains("<strong>bold</strong>"));

        assert!(!dir.path().join("public/notes.html").exists());
    }

    #[tokio::test]
    async fn test_rebuild_skips_output_inside_source() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("a.md"), "text\n");

        let builder = Builder::new(ProjectConfig::default(), dir.path().to_path_buf());
        builder.build().await.unwrap();
        // A stray document inside the output must not be picked up as a source.
        write(&dir.path().join("_html/stray.md"), "text\n");
        let result = builder.build().await.unwrap();

        assert_eq!(result.documents, 1);
        assert!(!dir.path().join("_html/_html").exists());
    }

    #[tokio::test]
    async fn test_missing_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig {
            source: PathBuf::from("missing"),
            ..ProjectConfig::default()
        };
        let result = Builder::new(config, dir.path().to_path_buf()).build().await;
        assert!(matches!(
            result,
            Err(BuildError::Source(SourceError::PathNotFound(_)))
        ));
    }
}
