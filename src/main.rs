use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;

#[derive(Parser)]
#[command(version, about = "Convert Markdown documents to HTML fragments")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: MarkdownifyCommand,
}

#[derive(Parser)]
struct ConvertArgs {
    /// The document to convert, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Where to write the HTML fragment (stdout when omitted or `-`)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum MarkdownifyCommand {
    /// Convert a single document
    Convert(ConvertArgs),

    /// Convert every document of a project
    Build(BuildArgs),

    /// Initialize a new project config
    Init(InitArgs),

    /// Delete the generated output directory
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Logs go to stderr so `convert` can stream HTML on stdout.
    let log_level = if args.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("markdownify={log_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        MarkdownifyCommand::Convert(args) => {
            commands::convert::run(&args).await?;
        }
        MarkdownifyCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        MarkdownifyCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        MarkdownifyCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
