use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::ConvertArgs;

/// Path that stands for stdin or stdout.
const STDIO: &str = "-";

pub async fn run(args: &ConvertArgs) -> Result<(), anyhow::Error> {
    let document = read_input(&args.input).await?;

    let html = tokio::task::spawn_blocking(move || markdownify::convert(&document)).await?;

    match args.output.as_deref() {
        Some(path) if path != Path::new(STDIO) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

async fn read_input(input: &Path) -> Result<String, anyhow::Error> {
    if input == Path::new(STDIO) {
        let mut document = String::new();
        std::io::stdin()
            .read_to_string(&mut document)
            .context("failed to read stdin")?;
        return Ok(document);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))
}
