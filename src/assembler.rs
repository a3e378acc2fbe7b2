//! Batch to artifact: render every case, assemble the harness, persist it.

use std::io::Write;
use std::path::Path;

use rand::Rng;
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::emitter::{render_exchange_case, render_signature_case};
use crate::error::Result;
use crate::harness::HarnessBuilder;
use crate::oracle::ReferenceProvider;
use crate::vectors::{TestBatch, VectorGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub exchange_cases: usize,
    pub signature_cases: usize,
    pub message_bytes: usize,
    pub artifact_bytes: usize,
}

/// Render `batch` into a complete harness for the configured variants.
pub fn assemble(batch: &TestBatch, config: &GeneratorConfig) -> String {
    let mut builder = HarnessBuilder::new(config.variants.clone());
    builder
        .header_line(concat!(
            "Generated by ",
            env!("CARGO_PKG_NAME"),
            " ",
            env!("CARGO_PKG_VERSION")
        ))
        .header_line(format!(
            "{} X25519 cases, {} Ed25519 cases, {} message bytes",
            batch.exchange.len(),
            batch.signature.len(),
            batch.message_bytes()
        ));

    for case in &batch.exchange {
        builder.push_exchange(render_exchange_case(case));
    }
    for case in &batch.signature {
        builder.push_signature(render_signature_case(case));
    }
    builder.render()
}

/// Write `text` to `path` through a temporary file in the same directory,
/// so a failed write never leaves a partial artifact behind.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Generate a batch, assemble it and write it to `path`.
///
/// Nothing touches `path` unless every case was generated.
pub fn generate_to_file<P, R>(
    oracle: &P,
    config: &GeneratorConfig,
    rng: &mut R,
    path: &Path,
) -> Result<GenerationSummary>
where
    P: ReferenceProvider + ?Sized,
    R: Rng + ?Sized,
{
    let batch = VectorGenerator::new(oracle, config).generate(rng)?;
    let text = assemble(&batch, config);
    write_artifact(path, &text)?;

    let summary = GenerationSummary {
        exchange_cases: batch.exchange.len(),
        signature_cases: batch.signature.len(),
        message_bytes: batch.message_bytes(),
        artifact_bytes: text.len(),
    };
    info!(path = %path.display(), bytes = summary.artifact_bytes, "wrote harness");
    Ok(summary)
}
