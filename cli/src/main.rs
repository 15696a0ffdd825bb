//! CLI entrypoint for chameleon
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chameleon_application::{
    NoProgress, RunSessionInput, RunSessionUseCase, TournamentProgress, expected_calls,
};
use chameleon_domain::{Model, builtin_prompts};
use chameleon_infrastructure::{AnthropicConfig, AnthropicGateway, ConfigLoader, JsonResultsWriter};
use chameleon_presentation::{Cli, ConsoleFormatter, ConsoleProgress};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting chameleon tournament");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };

    // Resolve candidate models: CLI flags beat the config file
    let models: Vec<Model> = if cli.model.is_empty() {
        config.models.parse_candidates()
    } else {
        cli.model.iter().map(|s| s.parse().unwrap()).collect()
    };

    let prompt_pool = builtin_prompts();
    let num_prompts = cli
        .num_prompts
        .or(config.session.num_prompts)
        .unwrap_or(prompt_pool.len());
    let capacity = cli.capacity.unwrap_or(config.session.capacity);
    let output: PathBuf = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.session.output));

    // === Dependency Injection ===
    let api_key = std::env::var(&config.anthropic.api_key_env).with_context(|| {
        format!(
            "Set {} to your Anthropic API key",
            config.anthropic.api_key_env
        )
    })?;
    let gateway = Arc::new(AnthropicGateway::new(
        AnthropicConfig::new(api_key)
            .with_max_tokens(config.anthropic.max_tokens)
            .with_temperature(config.anthropic.temperature),
    ));

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|        chameleon - style-imitation tournament              |");
        println!("+============================================================+");
        println!();
        println!(
            "Models: {}",
            models
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "Prompts: {} of {} (capacity {})",
            num_prompts,
            prompt_pool.len(),
            capacity
        );
        println!(
            "Expected API calls: {}",
            expected_calls(num_prompts, models.len())
        );
        println!();
    }

    let input = RunSessionInput::new(models.clone(), prompt_pool, num_prompts)
        .with_capacity(capacity);
    let use_case = RunSessionUseCase::new(gateway);

    let reporter = if cli.quiet {
        None
    } else {
        Some(Arc::new(ConsoleProgress::new(expected_calls(
            num_prompts,
            models.len(),
        ))))
    };
    let progress: Arc<dyn TournamentProgress> = match &reporter {
        Some(r) => Arc::clone(r) as Arc<dyn TournamentProgress>,
        None => Arc::new(NoProgress),
    };

    let start = Instant::now();
    let results = use_case.execute_with_progress(input, progress).await?;
    if let Some(reporter) = &reporter {
        reporter.finish();
    }

    info!("Saving results to JSON file...");
    JsonResultsWriter::write(&results, &output)
        .with_context(|| format!("Failed to write results to {}", output.display()))?;

    if !cli.quiet {
        println!("{}", ConsoleFormatter::format_summary(&results));
        println!("{}", ConsoleFormatter::format_fooling_table(&results));
        println!("Results saved to {}", output.display());
    }

    info!(
        "Total execution time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
