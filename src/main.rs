use anagram_finder::core::ConfigProvider;
use anagram_finder::utils::{logger, validation::Validate};
use anagram_finder::{CliConfig, FilePipeline, JobRunner, LocalStorage, TomlConfig};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting anagrams");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let mut config = match load_config(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("{:#}", e);
                    eprintln!("{:#}", e);
                    std::process::exit(1);
                }
            };
            config.apply_cli_overrides(&cli);
            run(config).await;
        }
        None => run(cli).await,
    }

    Ok(())
}

/// Loads a TOML file. `{:#}` renders the error and its cause on one line.
fn load_config(path: &str) -> anyhow::Result<TomlConfig> {
    TomlConfig::from_file(path).with_context(|| format!("Failed to load config file '{}'", path))
}

/// Validates, runs the job and reports the outcome. Failures print one
/// diagnostic line and exit with status 1.
async fn run<C: ConfigProvider + Validate>(config: C) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::default();
    let runner = JobRunner::new(FilePipeline::new(storage, config));

    match runner.run().await {
        Ok(output_path) => {
            println!("Anagram groups written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Anagram search failed: {}", e);
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
