//! kubetree - print the ownership tree of a Kubernetes cluster
//!
//! Lists workloads, storage and services once, links them by owner
//! references, label selectors and volume claims, and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kubetree::cli::{self, ConfigSubcommand};
use kubetree::config::ConfigLoader;
use kubetree::kube::{KubeResourceSource, create_client, current_context};
use kubetree::{Palette, Scope};

/// Print the ownership tree of Kubernetes workloads and storage
#[derive(Parser, Debug)]
#[command(name = "kubetree")]
#[command(about = "Print the ownership tree of Kubernetes workloads and storage", long_about = None)]
struct Args {
    /// Namespace to show ("all" or empty for every namespace)
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Colour resources by health
    #[arg(long, short = 'c')]
    color: bool,

    /// Path to a kubeconfig file
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Config { subcommand }) => return cli::handle_config_command(subcommand),
        Some(Command::Version) => {
            cli::display_version();
            return Ok(());
        }
        None => {}
    }

    cli::init_logging(args.debug);

    let config = ConfigLoader::load().context("Failed to load configuration")?;

    // Flags win over env and file
    let namespace = args.namespace.unwrap_or(config.namespace);
    let scope = Scope::parse(&namespace);
    let palette = Palette::new(args.color || config.color);
    let kubeconfig = args.kubeconfig.or(config.kubeconfig);

    tracing::debug!(
        "Scope: {}, color: {}, context: {}",
        scope,
        palette.is_colored(),
        current_context(kubeconfig.as_deref()).unwrap_or_else(|| "<in-cluster>".to_string())
    );

    let client = create_client(kubeconfig.as_deref()).await?;
    let source = KubeResourceSource::new(client);

    let output = kubetree::kubetree(&source, &scope, &palette)
        .await
        .context("Failed to build resource tree")?;
    print!("{}", output);

    Ok(())
}
