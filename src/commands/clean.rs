use crate::{
    CleanArgs,
    build::{base_path_from_config, resolve_path},
    config::ProjectConfig,
};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let config_path = ProjectConfig::path_from_arg(args.config_file.as_deref())?;
    let config = ProjectConfig::load_from_file(&config_path)?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    // Delete the generated output folder
    let output_path = resolve_path(&base_path, &config.output);
    let output_path = output_path.canonicalize().unwrap_or(output_path);
    if output_path.exists() {
        if args.dry_run {
            println!("Would delete {}", output_path.display());
        } else {
            tokio::fs::remove_dir_all(&output_path).await?;
            println!("Deleted {}", output_path.display());
        }
    } else {
        tracing::info!("nothing to clean at {}", output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn project(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/index.md"), "# Home\n").unwrap();
        let config_file = dir.path().join("markdownify.yaml");
        std::fs::write(&config_file, contents).unwrap();
        (dir, config_file)
    }

    fn args(config_file: &Path, dry_run: bool) -> CleanArgs {
        CleanArgs {
            config_file: Some(config_file.to_path_buf()),
            dry_run,
        }
    }

    #[tokio::test]
    async fn test_clean_deletes_output_only() {
        let (dir, config_file) = project("source: docs\noutput: public\n");
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::write(dir.path().join("public/index.html"), "<h1>Home</h1>\n").unwrap();

        run(&args(&config_file, false)).await.unwrap();

        assert!(!dir.path().join("public").exists());
        assert!(dir.path().join("docs/index.md").exists());
        assert!(config_file.exists());
    }

    #[tokio::test]
    async fn test_dry_run_keeps_output() {
        let (dir, config_file) = project("source: docs\noutput: public\n");
        std::fs::create_dir_all(dir.path().join("public")).unwrap();

        run(&args(&config_file, true)).await.unwrap();

        assert!(dir.path().join("public").exists());
    }

    #[tokio::test]
    async fn test_output_enclosing_the_project_is_refused() {
        for contents in ["source: docs\noutput: .\n", "source: docs/sub\noutput: docs\n"] {
            let (dir, config_file) = project(contents);

            assert!(run(&args(&config_file, false)).await.is_err());

            assert!(config_file.exists());
            assert!(dir.path().join("docs/index.md").exists());
        }
    }
}
