//! The harness skeleton and the builder that fills it.
//!
//! Case blocks are appended to one of two buckets and the whole program is
//! rendered in a single pass; there are no textual markers to replace.
//! Timing state lives in a per-variant `results` object created inside the
//! driver loop, so nothing carries over from one variant to the next.

use crate::config::Variant;

/// Quote `text` as a JavaScript string literal.
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_owned()).to_string()
}

const PRELUDE: &str = r#"'use strict';

if (typeof btoa === 'undefined') {
    global.btoa = str => Buffer.from(str, 'binary').toString('base64');
}

if (typeof atob === 'undefined') {
    global.atob = b64Encoded => Buffer.from(b64Encoded, 'base64').toString('binary');
}

const { performance } = require('perf_hooks');

class Counter {
    constructor() {
        this.time = 0;
        this.count = 0;
    }

    record(elapsed, count) {
        this.time += elapsed;
        this.count += count;
    }
}

const newResults = () => ({
    x25519Public: new Counter(),
    x25519Shared: new Counter(),
    ed25519Public: new Counter(),
    ed25519Sign: new Counter(),
    ed25519Verify: new Counter(),
});

const bytesEqual = (expected, actual) => Buffer.from(expected).equals(Buffer.from(actual));

const assertAll = (label, checks) => {
    if (!checks.every(Boolean)) throw new Error(`Test failed: ${label}`);
};
"#;

const REPORT: &str = r#"
const report = (label, results) => {
    const {
        x25519Public,
        x25519Shared,
        ed25519Public,
        ed25519Sign,
        ed25519Verify,
    } = results;
    console.log(`[${label}] Finished X25519.getPublic tests (${x25519Public.count}) in ${x25519Public.time}ms, ${x25519Public.time / x25519Public.count} ms/key`);
    console.log(`[${label}] Finished X25519.getShared tests (${x25519Shared.count}) in ${x25519Shared.time}ms, ${x25519Shared.time / x25519Shared.count} ms/key`);
    console.log(`[${label}] Finished Ed25519.getPublic tests (${ed25519Public.count}) in ${ed25519Public.time}ms, ${ed25519Public.time / ed25519Public.count} ms/key`);
    console.log(`[${label}] Finished Ed25519.sign tests (${ed25519Sign.count}) in ${ed25519Sign.time}ms, ${ed25519Sign.count / ed25519Sign.time} bytes/ms`);
    console.log(`[${label}] Finished Ed25519.verify tests (${ed25519Verify.count}) in ${ed25519Verify.time}ms, ${ed25519Verify.count / ed25519Verify.time} bytes/ms`);
};
"#;

const DRIVER: &str = r#"
(async () => {
    for (const [label, modulePath] of VARIANTS) {
        const { X25519, Ed25519 } = require(modulePath);
        await Promise.all([
            X25519.ready,
            Ed25519.ready,
        ]);

        const results = newResults();
        runX25519(X25519, results);
        runEd25519(Ed25519, results);
        report(label, results);
    }
})().catch(err => {
    console.error(err);
    process.exit(1);
});
"#;

/// Accumulates rendered case blocks and renders the finished program.
#[derive(Debug, Clone, Default)]
pub struct HarnessBuilder {
    header: Vec<String>,
    variants: Vec<Variant>,
    exchange: Vec<String>,
    signature: Vec<String>,
}

impl HarnessBuilder {
    pub fn new(variants: Vec<Variant>) -> Self {
        HarnessBuilder {
            variants,
            ..Default::default()
        }
    }

    /// Add to the comment block at the top of the artifact. Every JS line
    /// terminator in `text` starts a new `//` line.
    pub fn header_line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let lines = text
            .as_ref()
            .lines()
            .flat_map(|line| line.split(['\r', '\u{2028}', '\u{2029}']));
        self.header.extend(lines.map(str::to_owned));
        self
    }

    pub fn push_exchange(&mut self, block: String) -> &mut Self {
        self.exchange.push(block);
        self
    }

    pub fn push_signature(&mut self, block: String) -> &mut Self {
        self.signature.push(block);
        self
    }

    pub fn exchange_len(&self) -> usize {
        self.exchange.len()
    }

    pub fn signature_len(&self) -> usize {
        self.signature.len()
    }

    fn render_variants(&self, out: &mut String) {
        out.push_str("\nconst VARIANTS = [\n");
        for variant in &self.variants {
            out.push_str("    [");
            out.push_str(&js_string(&variant.label));
            out.push_str(", ");
            out.push_str(&js_string(&variant.module));
            out.push_str("],\n");
        }
        out.push_str("];\n");
    }

    fn render_bucket(out: &mut String, function: &str, api: &str, blocks: &[String]) {
        out.push('\n');
        out.push_str(&format!("const {function} = ({api}, results) => {{\n"));
        for block in blocks {
            out.push_str(block);
        }
        out.push_str("};\n");
    }

    pub fn render(&self) -> String {
        let body: usize = self
            .exchange
            .iter()
            .chain(self.signature.iter())
            .map(String::len)
            .sum();
        let mut out =
            String::with_capacity(body + PRELUDE.len() + REPORT.len() + DRIVER.len() + 1024);

        for line in &self.header {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
        if !self.header.is_empty() {
            out.push('\n');
        }
        out.push_str(PRELUDE);
        self.render_variants(&mut out);
        Self::render_bucket(&mut out, "runX25519", "X25519", &self.exchange);
        Self::render_bucket(&mut out, "runEd25519", "Ed25519", &self.signature);
        out.push_str(REPORT);
        out.push_str(DRIVER);
        out
    }
}
