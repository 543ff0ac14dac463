#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use envbind::{Bind, Binder, Error, Kind};
use libfuzzer_sys::fuzz_target;

#[derive(Bind, Default)]
pub struct Target {
    pub name: String,
    pub count: i64,
    pub small: i8,
    pub enabled: bool,
    pub items: Vec<Item>,
}

#[derive(Bind, Default)]
pub struct Item {
    pub weight: i32,
}

/// Arbitrary values for the keys `Target` reads
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    values: Vec<(u8, String)>,
    items: u8,
}

const KEYS: [&str; 5] = ["NAME", "COUNT", "SMALL", "ENABLED", "ITEMS_WEIGHT"];

fuzz_target!(|input: FuzzInput| {
    let lookup: HashMap<String, String> = input
        .values
        .into_iter()
        .map(|(k, v)| (KEYS[usize::from(k) % KEYS.len()].to_string(), v))
        .collect();

    let mut target = Target {
        items: (0..input.items % 8).map(|_| Item::default()).collect(),
        ..Target::default()
    };

    match Binder::new().with_lookup(lookup.clone()).load(&mut target) {
        Ok(()) => {
            if let Some(name) = lookup.get("NAME") {
                assert_eq!(&target.name, name);
            }
        }

        // Only the supported kinds can fail, and only on keys that were set
        Err(err) => {
            assert!(matches!(err, Error::Coercion { .. }));
            assert!(matches!(err.kind(), Kind::Int | Kind::Bool));
            assert!(lookup.contains_key(err.key()));
        }
    }
});
