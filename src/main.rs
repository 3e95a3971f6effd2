//! CLI entry point for the paper summarizer.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use paper_summarizer_core::generation::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use paper_summarizer_core::{
    FetchConfig, OpenAiGenerator, PaperExtractor, PipelineOutcome, Summarizer, SummaryPipeline,
    find_reference,
};
use tracing::{debug, info};

mod app_config;
mod cli;

use app_config::{FileConfig, load_default_file_config};
use cli::Args;

/// Exit status when no reference was found or extraction failed.
const EXIT_NO_SUMMARY: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();
    dotenvy::dotenv().ok();
    let file_config = load_default_file_config()?;

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > info
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => file_config
                .verbosity
                .map_or("info", app_config::VerbositySetting::filter_directive),
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, ?file_config, "CLI arguments parsed");

    // Read input: from positional args or stdin
    let input_text = if !args.input.is_empty() {
        args.input.join(" ")
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        String::new()
    };

    let Some(reference) = find_reference(&input_text) else {
        eprintln!("{}", PipelineOutcome::NoReference.user_message());
        return Ok(ExitCode::from(EXIT_NO_SUMMARY));
    };
    info!(reference = %reference, "Paper reference found");

    let extractor = PaperExtractor::new(&fetch_config(&file_config))?;

    if args.extract_only {
        return match extractor.extract(&reference).await {
            Ok(record) => {
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                let outcome = PipelineOutcome::ExtractionFailed { reference, error };
                eprintln!("{}", outcome.user_message());
                Ok(ExitCode::from(EXIT_NO_SUMMARY))
            }
        };
    }

    let generator = build_generator(&args, &file_config)?;
    info!(model = generator.model(), base_url = generator.base_url(), "Generator ready");
    let pipeline = SummaryPipeline::new(extractor, Summarizer::new(Arc::new(generator)));

    info!("{}", PipelineOutcome::status_message(&reference));
    let outcome = pipeline.handle_reference(reference).await;
    match outcome.report() {
        Some(report) => {
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{}", outcome.user_message());
            Ok(ExitCode::from(EXIT_NO_SUMMARY))
        }
    }
}

fn fetch_config(file_config: &FileConfig) -> FetchConfig {
    FetchConfig {
        connect_timeout: file_config
            .fetch_connect_timeout_secs
            .map(Duration::from_secs),
        read_timeout: file_config.fetch_read_timeout_secs.map(Duration::from_secs),
        ..FetchConfig::default()
    }
}

fn build_generator(args: &Args, file_config: &FileConfig) -> Result<OpenAiGenerator> {
    let api_key = env_non_empty("OPENAI_API_KEY")
        .context("OPENAI_API_KEY is not set; export it or add it to a .env file")?;
    if api_key.trim().is_empty() {
        bail!("OPENAI_API_KEY is blank");
    }

    let model = args
        .model
        .clone()
        .or_else(|| file_config.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let base_url = env_non_empty("OPENAI_BASE_URL")
        .or_else(|| file_config.api_base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = file_config.generation_timeout_secs.map(Duration::from_secs);

    let generator = OpenAiGenerator::new(api_key, timeout)?
        .with_base_url(base_url)
        .with_model(model);
    Ok(generator)
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
