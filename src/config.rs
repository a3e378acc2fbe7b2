//! Generator configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! whatever the command line overrides.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_EXCHANGE_CASES: usize = 512;
pub const DEFAULT_SIGNATURE_CASES: usize = 256;
pub const DEFAULT_PRIVATE_KEY_WIDTH: usize = 32;
pub const DEFAULT_MIN_MESSAGE_LEN: usize = 1;
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 131072;
/// Upper bound accepted for `max_message_len`; every random message is
/// held in memory and inlined into the artifact.
pub const MESSAGE_LEN_LIMIT: usize = 16 * 1024 * 1024;

/// One build of the implementation under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Label printed in front of every report line.
    pub label: String,
    /// Module path handed to `require` by the harness.
    pub module: String,
}

impl Variant {
    pub fn new(label: impl Into<String>, module: impl Into<String>) -> Self {
        Variant {
            label: label.into(),
            module: module.into(),
        }
    }

    /// Parse the `label=path` form used on the command line.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once('=') {
            Some((label, module)) if !label.trim().is_empty() && !module.trim().is_empty() => {
                Ok(Variant::new(label.trim(), module.trim()))
            }
            _ => Err(Error::Config(format!(
                "variant `{text}` is not of the form label=path"
            ))),
        }
    }
}

/// The size-optimized and speed-optimized builds, in that order.
pub fn default_variants() -> Vec<Variant> {
    vec![
        Variant::new("size", "./dist/c25519-wasm.size.min.js"),
        Variant::new("speed", "./dist/c25519-wasm.speed.min.js"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub exchange_cases: usize,
    pub signature_cases: usize,
    pub private_key_width: usize,
    pub min_message_len: usize,
    pub max_message_len: usize,
    /// Prepend the published RFC vectors before the random cases.
    pub known_answers: bool,
    pub variants: Vec<Variant>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            exchange_cases: DEFAULT_EXCHANGE_CASES,
            signature_cases: DEFAULT_SIGNATURE_CASES,
            private_key_width: DEFAULT_PRIVATE_KEY_WIDTH,
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            known_answers: true,
            variants: default_variants(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(text)?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Key width is not checked here: a wrong width is left for the oracle
    /// to reject.
    pub fn validate(&self) -> Result<()> {
        if self.min_message_len == 0 {
            return Err(Error::Config("min_message_len must be at least 1".into()));
        }
        if self.max_message_len > MESSAGE_LEN_LIMIT {
            return Err(Error::Config(format!(
                "max_message_len {} exceeds the limit of {MESSAGE_LEN_LIMIT} bytes",
                self.max_message_len
            )));
        }
        if self.min_message_len > self.max_message_len {
            return Err(Error::Config(format!(
                "message length range [{}, {}] is empty",
                self.min_message_len, self.max_message_len
            )));
        }
        if self.variants.is_empty() {
            return Err(Error::Config("at least one variant is required".into()));
        }
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if variant.label.is_empty() || variant.module.is_empty() {
                return Err(Error::Config(format!(
                    "variant `{}` has an empty label or module",
                    variant.label
                )));
            }
            if !seen.insert(variant.label.as_str()) {
                return Err(Error::Config(format!(
                    "variant label `{}` is used twice",
                    variant.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_massive_suite() {
        let config = GeneratorConfig::default();
        assert_eq!(config.exchange_cases, 512);
        assert_eq!(config.signature_cases, 256);
        assert_eq!(config.private_key_width, 32);
        assert_eq!((config.min_message_len, config.max_message_len), (1, 131072));
        assert_eq!(config.variants.len(), 2);
        assert_eq!(config.variants[0].label, "size");
        assert_eq!(config.variants[1].label, "speed");
        config.validate().unwrap();
    }

    #[test]
    fn yaml_overrides_only_what_it_names() {
        let config = GeneratorConfig::from_yaml_str(concat!(
            "exchange_cases: 4\n",
            "max_message_len: 64\n",
            "variants:\n",
            "  - label: ref\n",
            "    module: ./ref.js\n",
        ))
        .unwrap();
        assert_eq!(config.exchange_cases, 4);
        assert_eq!(config.signature_cases, DEFAULT_SIGNATURE_CASES);
        assert_eq!(config.max_message_len, 64);
        assert_eq!(config.variants, vec![Variant::new("ref", "./ref.js")]);
    }

    #[test]
    fn unknown_yaml_keys_are_rejected() {
        assert!(matches!(
            GeneratorConfig::from_yaml_str("exchange_case: 4\n"),
            Err(Error::ConfigFile(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_ranges_and_variants() {
        let mut config = GeneratorConfig {
            min_message_len: 10,
            max_message_len: 9,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.max_message_len = 10;
        config.validate().unwrap();

        config.min_message_len = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        config.min_message_len = 10;

        config.max_message_len = usize::MAX;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        config.max_message_len = MESSAGE_LEN_LIMIT;
        config.validate().unwrap();
        config.max_message_len = 10;

        config.variants.push(Variant::new("size", "./other.js"));
        assert!(config.validate().is_err());

        config.variants.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn variant_parse() {
        assert_eq!(
            Variant::parse("simd=./dist/c25519-wasm.simd.min.js").unwrap(),
            Variant::new("simd", "./dist/c25519-wasm.simd.min.js")
        );
        assert!(Variant::parse("no-separator").is_err());
        assert!(Variant::parse("=./x.js").is_err());
    }
}
