//! CLI entrypoint for council
//!
//! Wires together all layers using dependency injection: configuration and
//! the HTTP gateway from infrastructure, the consult use case from the
//! application layer, and console output from presentation.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{ConsultInput, ConsultUseCase, NoProgress, ProgressNotifier};
use council_domain::{ComplexityClassifier, Question, chunk};
use council_infrastructure::{ChatCompletionsGateway, ConfigLoader};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let question = match &cli.question {
        Some(text) => match Question::try_new(text.as_str()) {
            Some(question) => question,
            None => bail!("Question cannot be empty"),
        },
        None => bail!("A question is required"),
    };

    let classifier = ComplexityClassifier::new(config.classifier.clone());

    // Suggestion-only mode: classify and exit without consulting anyone.
    if cli.suggest {
        let classification = classifier.classify(&question);
        println!(
            "Suggested tier: {} ({})",
            classification.tier, classification.reason
        );
        return Ok(());
    }

    // === Dependency Injection ===
    let registry = config.build_registry()?;
    let api_key = std::env::var(&config.gateway.api_key_env).ok();
    if api_key.is_none() {
        warn!(
            "environment variable {} is not set; requests will be unauthenticated",
            config.gateway.api_key_env
        );
    }
    let gateway = Arc::new(
        ChatCompletionsGateway::new(config.gateway.base_url.clone(), api_key)
            .with_timeout(Duration::from_secs(config.behavior.timeout_seconds)),
    );

    let use_case = ConsultUseCase::new(gateway, registry)
        .with_classifier(classifier)
        .with_max_concurrency(config.behavior.max_concurrency);

    let mut input = ConsultInput::new(question);
    if let Some(tier) = cli.tier {
        input = input.with_tier(tier.into());
    }

    // Ctrl-C cancels in-flight panel calls cooperatively.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling consultation");
            signal_cancel.cancel();
        }
    });

    // Log lines would garble the progress bar, so verbose runs fall back
    // to plain line-by-line progress.
    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };
    let answer = use_case
        .execute_with_progress(input, progress.as_ref(), cancel)
        .await?;

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&answer),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&answer),
        OutputFormat::Json => ConsoleFormatter::format_json(&answer),
    };

    // Deliver in transport-sized segments, in order.
    let max_segment_len = cli
        .max_segment_len
        .unwrap_or(config.behavior.max_segment_len);
    let segments = chunk(&rendered, max_segment_len)?;
    let total = segments.len();
    for (index, segment) in segments.iter().enumerate() {
        if total > 1 && !cli.quiet {
            eprintln!("--- segment {}/{} ---", index + 1, total);
        }
        print!("{segment}");
    }
    println!();

    Ok(())
}
