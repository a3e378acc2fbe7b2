//! Rendering of single cases into harness statements.
//!
//! Each case becomes one braced block. Inputs are rebuilt from literals,
//! every call into the implementation under test is bracketed by
//! `performance.now()` and recorded into the `results` accumulator, and the
//! block ends in an `assertAll` that throws on the first mismatch.

use crate::encoding::encode_literal;
use crate::harness::js_string;
use crate::vectors::{ExchangeCase, SignatureCase};

pub const EXCHANGE_FAMILY: &str = "X25519";
pub const SIGNATURE_FAMILY: &str = "Ed25519";

fn check_label(family: &str, label: &str) -> String {
    js_string(&format!("{family} case {label}"))
}

/// Statements checking `getPublic` and `getShared` for one exchange.
pub fn render_exchange_case(case: &ExchangeCase) -> String {
    format!(
        r#"    {{
        const privateA = {private_a};
        const privateB = {private_b};
        let timeStart = performance.now();
        const publicA = X25519.getPublic(privateA);
        const publicB = X25519.getPublic(privateB);
        results.x25519Public.record(performance.now() - timeStart, 2);
        timeStart = performance.now();
        const sharedA = X25519.getShared(privateA, publicB);
        const sharedB = X25519.getShared(privateB, publicA);
        results.x25519Shared.record(performance.now() - timeStart, 2);
        assertAll({label}, [
            bytesEqual({public_a}, publicA),
            bytesEqual({public_b}, publicB),
            bytesEqual({shared}, sharedA),
            bytesEqual({shared}, sharedB),
        ]);
    }}
"#,
        private_a = encode_literal(&case.a.private_key),
        private_b = encode_literal(&case.b.private_key),
        label = check_label(EXCHANGE_FAMILY, &case.label),
        public_a = encode_literal(&case.a.public_key),
        public_b = encode_literal(&case.b.public_key),
        shared = encode_literal(&case.shared),
    )
}

/// Statements checking `getPublic`, `sign` and `verify` for one message.
///
/// Sign and verify time is recorded against the message length, not the
/// call count.
pub fn render_signature_case(case: &SignatureCase) -> String {
    format!(
        r#"    {{
        const privateC = {seed};
        const messageC = {message};
        let timeStart = performance.now();
        const publicC = Ed25519.getPublic(privateC);
        results.ed25519Public.record(performance.now() - timeStart, 1);
        timeStart = performance.now();
        const signC = Ed25519.sign(messageC, privateC);
        results.ed25519Sign.record(performance.now() - timeStart, messageC.length);
        timeStart = performance.now();
        const verifyC = Ed25519.verify(messageC, signC, publicC);
        results.ed25519Verify.record(performance.now() - timeStart, messageC.length);
        assertAll({label}, [
            bytesEqual({public_key}, publicC),
            bytesEqual({signature}, signC),
            verifyC === {verifies},
        ]);
    }}
"#,
        seed = encode_literal(&case.seed),
        message = encode_literal(&case.message),
        label = check_label(SIGNATURE_FAMILY, &case.label),
        public_key = encode_literal(&case.public_key),
        signature = encode_literal(&case.signature),
        verifies = case.verifies,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_literal;
    use crate::vectors::KeyPair;

    fn exchange() -> ExchangeCase {
        ExchangeCase {
            label: "fixture".into(),
            a: KeyPair {
                private_key: vec![1; 32],
                public_key: [2; 32],
            },
            b: KeyPair {
                private_key: vec![3; 32],
                public_key: [4; 32],
            },
            shared: [5; 32],
        }
    }

    fn literal_after<'a>(block: &'a str, binding: &str) -> &'a str {
        let start = block.find(binding).unwrap() + binding.len();
        let rest = &block[start..];
        &rest[..rest.find(';').unwrap()]
    }

    #[test]
    fn exchange_block_rebuilds_inputs_and_checks_all_outputs() {
        let block = render_exchange_case(&exchange());

        let private_a = decode_literal(literal_after(&block, "const privateA = ")).unwrap();
        let private_b = decode_literal(literal_after(&block, "const privateB = ")).unwrap();
        assert_eq!(private_a, vec![1; 32]);
        assert_eq!(private_b, vec![3; 32]);
        assert!(block.contains(r#"assertAll("X25519 case fixture", ["#));
        assert!(block.contains(&format!("bytesEqual({}, publicA)", encode_literal(&[2; 32]))));
        assert!(block.contains(&format!("bytesEqual({}, publicB)", encode_literal(&[4; 32]))));
        assert!(block.contains(&format!("bytesEqual({}, sharedA)", encode_literal(&[5; 32]))));
        assert!(block.contains(&format!("bytesEqual({}, sharedB)", encode_literal(&[5; 32]))));
        assert_eq!(block.matches("performance.now()").count(), 4);
        assert!(block.starts_with("    {\n") && block.ends_with("    }\n"));
    }

    #[test]
    fn signature_block_counts_bytes_for_sign_and_verify() {
        let case = SignatureCase {
            label: "one_byte".into(),
            seed: vec![9; 32],
            message: vec![0x72],
            public_key: [6; 32],
            signature: [7; 64],
            verifies: true,
        };
        let block = render_signature_case(&case);

        assert_eq!(decode_literal(literal_after(&block, "const messageC = ")).unwrap(), vec![0x72]);
        assert!(block.contains("results.ed25519Public.record(performance.now() - timeStart, 1);"));
        assert!(block.contains(
            "results.ed25519Sign.record(performance.now() - timeStart, messageC.length);"
        ));
        assert!(block.contains(
            "results.ed25519Verify.record(performance.now() - timeStart, messageC.length);"
        ));
        assert!(block.contains(&format!("bytesEqual({}, signC)", encode_literal(&[7; 64]))));
        assert!(block.contains("verifyC === true,"));
        assert!(block.contains(r#"assertAll("Ed25519 case one_byte", ["#));
    }

    #[test]
    fn labels_are_escaped() {
        let mut case = exchange();
        case.label = "quote\"and\\slash".into();
        let block = render_exchange_case(&case);
        assert!(block.contains(r#"assertAll("X25519 case quote\"and\\slash", ["#));
    }
}
