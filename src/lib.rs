//! Conformance and benchmark harness generator for X25519 and Ed25519.
//!
//! A trusted [`oracle::ReferenceProvider`] produces a batch of random test
//! vectors; each case is rendered into JavaScript that replays it against
//! every build of an implementation under test, checks the outputs byte for
//! byte and accumulates timings. The result is one self-contained harness
//! file.

pub mod assembler;
pub mod config;
pub mod emitter;
pub mod encoding;
pub mod error;
pub mod harness;
pub mod known_answer;
pub mod oracle;
pub mod vectors;

pub use assembler::{assemble, generate_to_file, write_artifact, GenerationSummary};
pub use config::{GeneratorConfig, Variant};
pub use error::{Error, Result};
pub use oracle::{DalekOracle, ReferenceProvider};
pub use vectors::{ExchangeCase, KeyPair, SignatureCase, TestBatch, VectorGenerator};
