// Generate the massive X25519/Ed25519 conformance and benchmark harness
// Run: cargo run --release --bin gen_massive_harness -- --output test-massive.js

use std::path::PathBuf;

use anyhow::{Context, Result};
use c25519_harness_gen::{generate_to_file, DalekOracle, GeneratorConfig, Variant};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Write a harness that checks every implementation variant against fresh
/// reference vectors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the harness
    #[arg(short, long, default_value = "test-massive.js")]
    output: PathBuf,

    /// YAML file with generator settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random X25519 cases
    #[arg(long)]
    exchange_cases: Option<usize>,

    /// Number of random Ed25519 cases
    #[arg(long)]
    signature_cases: Option<usize>,

    /// Width in bytes of sampled private keys and seeds
    #[arg(long)]
    key_width: Option<usize>,

    /// Shortest random message in bytes
    #[arg(long)]
    min_message_len: Option<usize>,

    /// Longest random message in bytes
    #[arg(long)]
    max_message_len: Option<usize>,

    /// Implementation variant as label=path, repeatable; replaces the defaults
    #[arg(long = "variant", value_parser = parse_variant)]
    variants: Vec<Variant>,

    /// Skip the published RFC vectors
    #[arg(long, default_value_t = false)]
    no_known_answers: bool,

    /// Log Level (ERROR/WARN/INFO/DEBUG/TRACE)
    #[arg(long, default_value_t = String::from("info"))]
    log_level: String,
}

fn parse_variant(text: &str) -> std::result::Result<Variant, String> {
    Variant::parse(text).map_err(|e| e.to_string())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_yaml_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(n) = args.exchange_cases {
        config.exchange_cases = n;
    }
    if let Some(n) = args.signature_cases {
        config.signature_cases = n;
    }
    if let Some(n) = args.key_width {
        config.private_key_width = n;
    }
    if let Some(n) = args.min_message_len {
        config.min_message_len = n;
    }
    if let Some(n) = args.max_message_len {
        config.max_message_len = n;
    }
    if !args.variants.is_empty() {
        config.variants = args.variants.clone();
    }
    if args.no_known_answers {
        config.known_answers = false;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = load_config(&args)?;
    info!(
        exchange = config.exchange_cases,
        signature = config.signature_cases,
        variants = config.variants.len(),
        "generating harness"
    );

    let summary = generate_to_file(
        &DalekOracle::new(),
        &config,
        &mut rand::thread_rng(),
        &args.output,
    )
    .context("harness generation failed")?;

    eprintln!(
        "Written to {} ({} X25519 cases, {} Ed25519 cases, {} bytes)",
        args.output.display(),
        summary.exchange_cases,
        summary.signature_cases,
        summary.artifact_bytes
    );
    Ok(())
}
