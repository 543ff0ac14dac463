//! Environment key derivation.
//!
//! Every leaf reached during a bind is looked up under a key built from the
//! path of field names leading to it. [`derive_key`] extends the key of a
//! parent node with one more field name:
//!
//! ```text
//! derive_key("db", "APP")      -> "APP_DB"
//! derive_key("maxConns", "DB") -> "DB_MAX_CONNS"
//! derive_key("FooBAR", "")     -> "FOO_BAR"
//! derive_key("", "PORT")       -> "PORT"
//! ```

/// Derives the environment key for `name` nested under `prefix`.
///
/// Upper-casing maps every character to exactly one character; characters
/// whose upper-case form is longer than one character (`ß`) are kept as they
/// are. The prefix is upper-cased as a whole. The name is converted from camel
/// case to upper snake case: a separator goes in front of every upper-case
/// character that starts a new word, but runs of consecutive upper-case
/// characters stay joined, so acronyms are not split letter by letter.
///
/// An empty `name` yields the upper-cased prefix on its own, which is how a
/// scalar bound at the root picks up the caller's key verbatim.
#[must_use]
pub fn derive_key(name: &str, prefix: &str) -> String {
    let prefix: String = prefix.chars().map(upper_char).collect();

    if name.is_empty() {
        return prefix;
    }

    let mut key = String::with_capacity(prefix.len() + name.len() + 4);
    if !prefix.is_empty() {
        key.push_str(&prefix);
        key.push('_');
    }

    let mut in_upper_run = false;
    for (pos, ch) in name.chars().enumerate() {
        let is_upper = ch.is_uppercase();
        if pos != 0 && is_upper && !in_upper_run {
            key.push('_');
        }
        key.push(upper_char(ch));
        in_upper_run = is_upper;
    }

    key
}

fn upper_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
