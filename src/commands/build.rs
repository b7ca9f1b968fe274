use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::ProjectConfig,
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let config_path = ProjectConfig::path_from_arg(args.config_file.as_deref())?;
    let config = ProjectConfig::load_from_file(&config_path)?;
    tracing::debug!("loaded config from {}", config_path.display());

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    let builder = Builder::new(config, base_path);
    let result = builder.build().await?;

    println!(
        "Converted {} document(s) to {}",
        result.documents,
        result.output_dir.display()
    );

    Ok(())
}
