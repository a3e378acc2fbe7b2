//! Test vector generation.
//!
//! Inputs are sampled here and every expected output is asked of a
//! [`ReferenceProvider`]. Any provider error aborts the whole batch.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::known_answer;
use crate::oracle::{
    ReferenceProvider, ED25519_PUBLIC_KEY_SIZE, ED25519_SIGNATURE_SIZE, X25519_KEY_SIZE,
};

/// A private key and the public key the oracle derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: Vec<u8>,
    pub public_key: [u8; X25519_KEY_SIZE],
}

/// One X25519 exchange between two parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCase {
    pub label: String,
    pub a: KeyPair,
    pub b: KeyPair,
    /// Equal to both `exchange(a, B)` and `exchange(b, A)`.
    pub shared: [u8; X25519_KEY_SIZE],
}

/// One Ed25519 sign and verify round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCase {
    pub label: String,
    pub seed: Vec<u8>,
    pub message: Vec<u8>,
    pub public_key: [u8; ED25519_PUBLIC_KEY_SIZE],
    pub signature: [u8; ED25519_SIGNATURE_SIZE],
    pub verifies: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestBatch {
    pub exchange: Vec<ExchangeCase>,
    pub signature: Vec<SignatureCase>,
}

impl TestBatch {
    pub fn message_bytes(&self) -> usize {
        self.signature.iter().map(|c| c.message.len()).sum()
    }
}

pub struct VectorGenerator<'a, P: ReferenceProvider + ?Sized> {
    oracle: &'a P,
    config: &'a GeneratorConfig,
}

impl<'a, P: ReferenceProvider + ?Sized> VectorGenerator<'a, P> {
    pub fn new(oracle: &'a P, config: &'a GeneratorConfig) -> Self {
        VectorGenerator { oracle, config }
    }

    pub fn x25519_keypair(&self, private_key: &[u8]) -> Result<KeyPair> {
        let public_key = self.oracle.x25519_public(private_key)?;
        Ok(KeyPair {
            private_key: private_key.to_vec(),
            public_key,
        })
    }

    /// Build an exchange case from fixed private keys.
    pub fn exchange_case(
        &self,
        label: impl Into<String>,
        private_a: &[u8],
        private_b: &[u8],
    ) -> Result<ExchangeCase> {
        let label = label.into();
        let a = self.x25519_keypair(private_a)?;
        let b = self.x25519_keypair(private_b)?;

        let shared_ab = self.oracle.x25519_shared(&a.private_key, &b.public_key)?;
        let shared_ba = self.oracle.x25519_shared(&b.private_key, &a.public_key)?;
        if shared_ab != shared_ba {
            return Err(Error::AsymmetricSharedSecret(label));
        }

        debug!(case = %label, shared = %hex::encode(shared_ab), "exchange case");
        Ok(ExchangeCase {
            label,
            a,
            b,
            shared: shared_ab,
        })
    }

    /// Build a signature case from a fixed seed and message.
    ///
    /// The oracle's signature is trusted as is; `verifies` is always true.
    pub fn signature_case(
        &self,
        label: impl Into<String>,
        seed: &[u8],
        message: Vec<u8>,
    ) -> Result<SignatureCase> {
        let label = label.into();
        let public_key = self.oracle.ed25519_public(seed)?;
        let signature = self.oracle.ed25519_sign(seed, &message)?;

        debug!(case = %label, message_len = message.len(), "signature case");
        Ok(SignatureCase {
            label,
            seed: seed.to_vec(),
            message,
            public_key,
            signature,
            verifies: true,
        })
    }

    pub fn random_exchange_case<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<ExchangeCase> {
        let mut private_a = vec![0u8; self.config.private_key_width];
        let mut private_b = vec![0u8; self.config.private_key_width];
        rng.fill_bytes(&mut private_a);
        rng.fill_bytes(&mut private_b);
        self.exchange_case(format!("random_{index}"), &private_a, &private_b)
    }

    pub fn random_signature_case<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<SignatureCase> {
        let mut seed = vec![0u8; self.config.private_key_width];
        rng.fill_bytes(&mut seed);

        let len = rng.gen_range(self.config.min_message_len..=self.config.max_message_len);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        self.signature_case(format!("random_{index}"), &seed, message)
    }

    /// Produce the full batch: known answers first (if enabled), then the
    /// configured number of random cases per family.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TestBatch> {
        self.config.validate()?;
        let mut batch = TestBatch::default();

        if self.config.known_answers {
            for input in known_answer::exchange_inputs()? {
                batch
                    .exchange
                    .push(self.exchange_case(input.label, &input.private_a, &input.private_b)?);
            }
            for input in known_answer::signature_inputs()? {
                batch
                    .signature
                    .push(self.signature_case(input.label, &input.seed, input.message)?);
            }
        }

        batch.exchange.reserve(self.config.exchange_cases);
        for index in 0..self.config.exchange_cases {
            batch.exchange.push(self.random_exchange_case(index, rng)?);
        }
        batch.signature.reserve(self.config.signature_cases);
        for index in 0..self.config.signature_cases {
            batch.signature.push(self.random_signature_case(index, rng)?);
        }

        info!(
            oracle = self.oracle.name(),
            exchange = batch.exchange.len(),
            signature = batch.signature.len(),
            message_bytes = batch.message_bytes(),
            "generated test batch"
        );
        Ok(batch)
    }
}
