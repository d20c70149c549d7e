#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_share::{SecretSharing, Share};

// Fuzzing target for SecretSharing::combine
//
// Feeds arbitrary share strings and forged Share records through the
// combine pipeline. Every path must return a Result; nothing here may
// panic, whatever the input:
// - malformed share strings (wrong arity, garbage numerics, bad checksums)
// - values that fail base64 decoding or JSON payload parsing
// - zero or duplicate share indices
// - payload arrays of mismatched lengths or oversized field values
fuzz_target!(|data: &[u8]| {
    let sharing = SecretSharing::default();

    // Interpret the raw input as newline-separated candidate share strings
    if let Ok(text) = std::str::from_utf8(data) {
        let lines: Vec<&str> = text.lines().take(16).collect();
        if !lines.is_empty() {
            let _result = sharing.combine(lines);
        }
    }

    // Build structurally valid shares with fuzzer-driven parameters; the
    // checksums are consistent, so failures happen deeper in the pipeline
    if data.len() >= 4 {
        let count = (data[0] % 8).max(1);
        let threshold = u32::from(data[1] % 8);
        let mut shares = Vec::new();
        for i in 0..count {
            let start = usize::from(i) * 4 % data.len();
            let value: String = data[start..]
                .iter()
                .take(40)
                .map(|b| char::from(b'A' + (b % 26)))
                .collect();
            let index = u32::from(data[2] % 4) + u32::from(i);
            shares.push(Share::new(index, value, threshold));
        }
        let _result = sharing.combine(shares);
    }

    // The empty input is always an error, never a panic
    let _result = sharing.combine(Vec::<Share>::new());
});
