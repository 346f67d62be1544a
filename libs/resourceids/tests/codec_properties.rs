//! Property-based tests for the resource ID codec.
//!
//! These exercise the parser and formatter through the shared IDs with
//! randomized values and randomized literal casing.

use arm_resourceids::commonids::{AppServiceEnvironmentId, SqlManagedInstanceDatabaseId};
use arm_resourceids::ResourceId;
use proptest::prelude::*;

/// A data value: non-empty, no `/`.
fn arb_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._()-]{0,40}"
}

fn arb_database_id() -> impl Strategy<Value = SqlManagedInstanceDatabaseId> {
    (arb_value(), arb_value(), arb_value(), arb_value())
        .prop_map(|(sub, rg, mi, db)| SqlManagedInstanceDatabaseId::new(sub, rg, mi, db))
}

/// Flips the case of the characters selected by `mask`.
fn scramble(input: &str, mask: &[bool]) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask.get(i % mask.len().max(1)).copied().unwrap_or(false) {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
        })
        .collect()
}

/// Scrambles only the literal segments of a formatted ID.
fn scramble_literals<T: ResourceId>(id: &T, mask: &[bool]) -> String {
    let values = id.field_values();
    let mut values = values.iter();
    let mut out = String::new();
    for segment in T::SEGMENTS {
        out.push('/');
        match segment.fixed_value() {
            Some(fixed) => out.push_str(&scramble(fixed, mask)),
            None => out.push_str(values.next().unwrap()),
        }
    }
    out
}

proptest! {
    /// Formatting then parsing yields the same ID
    #[test]
    fn roundtrip(id in arb_database_id()) {
        let formatted = id.id();
        let parsed = SqlManagedInstanceDatabaseId::parse(&formatted).unwrap();
        prop_assert_eq!(&parsed, &id);
        prop_assert_eq!(parsed.id(), formatted);
    }

    /// Insensitive parsing ignores literal casing and keeps values verbatim
    #[test]
    fn insensitive_parse_matches_canonical(
        id in arb_database_id(),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let scrambled = scramble_literals(&id, &mask);
        let parsed = SqlManagedInstanceDatabaseId::parse_insensitively(&scrambled).unwrap();
        prop_assert_eq!(&parsed, &id);
        prop_assert_eq!(parsed.id(), id.id());

        if scrambled != id.id() {
            prop_assert!(SqlManagedInstanceDatabaseId::parse(&scrambled).is_err());
        }
    }

    /// Every strict prefix of a valid ID fails to parse
    #[test]
    fn truncation_fails(id in arb_database_id()) {
        let formatted = id.id();
        let tokens: Vec<&str> = formatted[1..].split('/').collect();
        for len in 0..tokens.len() {
            let prefix = format!("/{}", tokens[..len].join("/"));
            let err = SqlManagedInstanceDatabaseId::parse(&prefix).unwrap_err();
            prop_assert!(err.is_incomplete(), "{} gave {:?}", prefix, err);
        }
    }

    /// Appending anything to a valid ID fails to parse
    #[test]
    fn extra_segment_fails(id in arb_database_id(), extra in "[A-Za-z0-9]{0,12}") {
        let input = format!("{}/{}", id.id(), extra);
        let err = SqlManagedInstanceDatabaseId::parse_insensitively(&input).unwrap_err();
        prop_assert!(err.is_extra_segment());
    }

    /// Serde uses the canonical ID and accepts API casing
    #[test]
    fn serde_roundtrip(
        values in (arb_value(), arb_value(), arb_value()),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let id = AppServiceEnvironmentId::new(values.0, values.1, values.2);
        let json = serde_json::to_string(&id).unwrap();
        prop_assert_eq!(&json, &serde_json::to_string(&id.id()).unwrap());
        let parsed: AppServiceEnvironmentId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &id);

        let from_api = serde_json::to_string(&scramble_literals(&id, &mask)).unwrap();
        let parsed: AppServiceEnvironmentId = serde_json::from_str(&from_api).unwrap();
        prop_assert_eq!(parsed, id);
    }
}
