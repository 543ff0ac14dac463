#![no_main]

use arbitrary::Arbitrary;
use envbind::derive_key;
use libfuzzer_sys::fuzz_target;

/// Structured input for testing key derivation
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Field name segments, applied from the root down
    segments: Vec<String>,
    /// Root prefix
    prefix: String,
}

fuzz_target!(|input: FuzzInput| {
    let mut key = input.prefix.clone();

    for segment in &input.segments {
        let next = derive_key(segment, &key);

        // Deterministic
        assert_eq!(next, derive_key(segment, &key));

        // An empty segment only upper-cases the key
        let upper = derive_key("", &key);
        if segment.is_empty() {
            assert_eq!(next, upper);
        }

        // Upper-casing never changes the character count
        assert_eq!(upper.chars().count(), key.chars().count());

        // A non-empty key is always kept as the head of the derived key
        if !segment.is_empty() && !upper.is_empty() {
            assert!(next.starts_with(&format!("{upper}_")));
        }

        key = next;
    }
});
