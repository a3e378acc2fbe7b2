//! Reference primitive providers.
//!
//! The generator never computes curve arithmetic itself; it asks a trusted
//! provider for every expected value. Widths are checked by the provider so
//! a malformed input surfaces as [`Error::Oracle`] instead of a panic.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::{Error, Result};

pub const X25519_KEY_SIZE: usize = 32;
pub const ED25519_SEED_SIZE: usize = 32;
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Ground truth for X25519 and Ed25519.
///
/// Implementations must be deterministic: the same inputs always yield the
/// same outputs.
pub trait ReferenceProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Public key for an X25519 private key. Clamping is the provider's job.
    fn x25519_public(&self, private: &[u8]) -> Result<[u8; X25519_KEY_SIZE]>;

    /// Shared secret of `private` with `peer_public`.
    fn x25519_shared(&self, private: &[u8], peer_public: &[u8]) -> Result<[u8; X25519_KEY_SIZE]>;

    /// Public key for an Ed25519 seed.
    fn ed25519_public(&self, seed: &[u8]) -> Result<[u8; ED25519_PUBLIC_KEY_SIZE]>;

    /// Deterministic signature over `message` by the key expanded from `seed`.
    fn ed25519_sign(&self, seed: &[u8], message: &[u8]) -> Result<[u8; ED25519_SIGNATURE_SIZE]>;

    /// Whether `signature` is valid for `message` under `public`.
    fn ed25519_verify(&self, public: &[u8], message: &[u8], signature: &[u8]) -> Result<bool>;
}

fn fixed<const N: usize>(operation: &'static str, what: &str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        Error::oracle(
            operation,
            format!("{what} must be {N} bytes, got {}", bytes.len()),
        )
    })
}

/// Provider backed by `x25519-dalek` and `ed25519-dalek`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DalekOracle;

impl DalekOracle {
    pub fn new() -> Self {
        DalekOracle
    }

    fn signing_key(operation: &'static str, seed: &[u8]) -> Result<SigningKey> {
        let seed: [u8; ED25519_SEED_SIZE] = fixed(operation, "seed", seed)?;
        Ok(SigningKey::from_bytes(&seed))
    }
}

impl ReferenceProvider for DalekOracle {
    fn name(&self) -> &str {
        "dalek"
    }

    fn x25519_public(&self, private: &[u8]) -> Result<[u8; X25519_KEY_SIZE]> {
        let private: [u8; X25519_KEY_SIZE] = fixed("x25519 public key", "private key", private)?;
        let secret = StaticSecret::from(private);
        Ok(PublicKey::from(&secret).to_bytes())
    }

    fn x25519_shared(&self, private: &[u8], peer_public: &[u8]) -> Result<[u8; X25519_KEY_SIZE]> {
        let private: [u8; X25519_KEY_SIZE] = fixed("x25519 exchange", "private key", private)?;
        let peer: [u8; X25519_KEY_SIZE] = fixed("x25519 exchange", "peer public key", peer_public)?;
        let secret = StaticSecret::from(private);
        let shared = secret.diffie_hellman(&PublicKey::from(peer));
        Ok(shared.to_bytes())
    }

    fn ed25519_public(&self, seed: &[u8]) -> Result<[u8; ED25519_PUBLIC_KEY_SIZE]> {
        let signing_key = Self::signing_key("ed25519 public key", seed)?;
        Ok(signing_key.verifying_key().to_bytes())
    }

    fn ed25519_sign(&self, seed: &[u8], message: &[u8]) -> Result<[u8; ED25519_SIGNATURE_SIZE]> {
        let signing_key = Self::signing_key("ed25519 sign", seed)?;
        Ok(signing_key.sign(message).to_bytes())
    }

    fn ed25519_verify(&self, public: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        let public: [u8; ED25519_PUBLIC_KEY_SIZE] =
            fixed("ed25519 verify", "public key", public)?;
        let signature: [u8; ED25519_SIGNATURE_SIZE] =
            fixed("ed25519 verify", "signature", signature)?;
        let verifying_key = VerifyingKey::from_bytes(&public)
            .map_err(|e| Error::oracle("ed25519 verify", e))?;
        let signature = Signature::from_bytes(&signature);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex<const N: usize>(s: &str) -> [u8; N] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn rfc7748_exchange() {
        let oracle = DalekOracle::new();
        let alice: [u8; 32] =
            unhex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let bob: [u8; 32] =
            unhex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

        let alice_public = oracle.x25519_public(&alice).unwrap();
        let bob_public = oracle.x25519_public(&bob).unwrap();
        assert_eq!(
            hex::encode(alice_public),
            "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
        );
        assert_eq!(
            hex::encode(bob_public),
            "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
        );

        let shared_ab = oracle.x25519_shared(&alice, &bob_public).unwrap();
        let shared_ba = oracle.x25519_shared(&bob, &alice_public).unwrap();
        assert_eq!(shared_ab, shared_ba);
        assert_eq!(
            hex::encode(shared_ab),
            "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742"
        );
    }

    #[test]
    fn rfc8032_test2_sign_and_verify() {
        let oracle = DalekOracle::new();
        let seed: [u8; 32] =
            unhex("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
        let message = [0x72u8];

        let public = oracle.ed25519_public(&seed).unwrap();
        assert_eq!(
            hex::encode(public),
            "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"
        );
        let signature = oracle.ed25519_sign(&seed, &message).unwrap();
        assert_eq!(
            hex::encode(signature),
            "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
             085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
        );
        assert!(oracle.ed25519_verify(&public, &message, &signature).unwrap());
        assert!(!oracle.ed25519_verify(&public, &[0x73], &signature).unwrap());
    }

    #[test]
    fn wrong_width_is_an_oracle_error() {
        let oracle = DalekOracle::new();
        assert!(matches!(
            oracle.x25519_public(&[0u8; 31]),
            Err(Error::Oracle { .. })
        ));
        assert!(matches!(
            oracle.x25519_shared(&[0u8; 32], &[9u8; 33]),
            Err(Error::Oracle { .. })
        ));
        assert!(matches!(
            oracle.ed25519_sign(&[0u8; 16], b"m"),
            Err(Error::Oracle { .. })
        ));
        assert!(matches!(
            oracle.ed25519_verify(&[0u8; 32], b"m", &[0u8; 63]),
            Err(Error::Oracle { .. })
        ));
    }
}
