//! Path conversion utilities.
//!
//! This module handles conversions between:
//! - Paths in the config file (relative to the config file's directory)
//! - Source document paths (relative to the source directory)
//! - Output fragment paths (where HTML is written in the output directory)

use std::path::{Path, PathBuf};

/// Extension given to every converted fragment.
const OUTPUT_EXTENSION: &str = "html";

/// Convert a source-relative document path to its output path.
///
/// # Examples
/// ```ignore
/// source_to_output_path("intro.md", out) => out/intro.html
/// source_to_output_path("guides/setup.markdown", out) => out/guides/setup.html
/// ```
pub fn source_to_output_path(relative_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(relative_path.with_extension(OUTPUT_EXTENSION))
}

/// Resolve a config path against the config file's directory.
pub fn resolve_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_to_output_path() {
        let output = Path::new("/site");
        assert_eq!(
            source_to_output_path(Path::new("intro.md"), output),
            PathBuf::from("/site/intro.html")
        );
        assert_eq!(
            source_to_output_path(Path::new("guides/setup.markdown"), output),
            PathBuf::from("/site/guides/setup.html")
        );
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/project");
        assert_eq!(
            resolve_path(base, Path::new("docs")),
            PathBuf::from("/project/docs")
        );
        assert_eq!(
            resolve_path(base, Path::new("/abs/docs")),
            PathBuf::from("/abs/docs")
        );
    }

    #[test]
    fn test_base_path_from_config() {
        assert_eq!(
            base_path_from_config(Path::new("/project/markdownify.yaml")),
            PathBuf::from("/project")
        );
        assert_eq!(
            base_path_from_config(Path::new("markdownify.yaml")),
            PathBuf::from("")
        );
    }
}
