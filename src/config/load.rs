//! Configuration loading from files.
//!
//! The YAML file is layered first and `MARKDOWNIFY_*` environment
//! variables override it, e.g. `MARKDOWNIFY_OUTPUT=public`.

use std::path::{Component, Path, PathBuf};

use super::{ConfigError, ProjectConfig};

/// Config file name used when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "markdownify.yaml";

const ENV_PREFIX: &str = "MARKDOWNIFY";

impl ProjectConfig {
    /// Resolve the config path from the command line argument, defaulting
    /// to `markdownify.yaml` in the current directory.
    pub fn path_from_arg(config_file: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        if config_file.is_relative() {
            Ok(std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file))
        } else {
            Ok(config_file.to_path_buf())
        }
    }

    /// Load the config from a file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Yaml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extensions"),
            )
            .build()?;

        let config: ProjectConfig = settings.try_deserialize()?;
        let base_path = path.parent().unwrap_or(Path::new("."));
        config.validate(base_path)?;
        Ok(config)
    }

    /// Check the config against the directory it was loaded from.
    ///
    /// `clean` deletes the output directory, so it must never be the project
    /// directory itself or contain the source.
    fn validate(&self, base_path: &Path) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'extensions' must list at least one file extension\n\nExample:\n  extensions: [md, markdown]".to_string(),
            ));
        }
        let base = normalize(base_path);
        let source = normalize(&base.join(&self.source));
        let output = normalize(&base.join(&self.output));
        if output == base || base.starts_with(&output) {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'output' must not be the project directory or one of its parents ({})",
                self.output.display()
            )));
        }
        if source.starts_with(&output) {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'output' ({}) must not be or contain 'source' ({})",
                self.output.display(),
                self.source.display()
            )));
        }
        Ok(())
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
