use anagram_cli::cli::{Cli, Commands};
use anagram_cli::{commands, logging};
use anagram_config::AppConfig;
use anyhow::{Context, Result};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref(), cli.overrides())
        .context("Failed to load configuration")?;

    logging::init(cli.level_override(), &config.logging.level);
    tracing::debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Serve { .. } => commands::serve::execute(config).await,
        Commands::Stats { format } => commands::stats::execute(&config, format),
        Commands::Group {
            word,
            limit,
            exclude_self,
        } => commands::group::execute(&config, &word, limit, exclude_self),
        Commands::Config => commands::config::execute(&config),
    }
}
