//! Codec properties checked against every registered resource kind.

use std::collections::BTreeMap;

use arm_resource_manager::{kinds, ResourceKind};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = &'static ResourceKind> {
    (0..kinds().len()).prop_map(|i| &kinds()[i])
}

fn arb_values(kind: &'static ResourceKind) -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::vec("[A-Za-z0-9][A-Za-z0-9._-]{0,24}", kind.fields.len()).prop_map(
        move |values| {
            kind.fields
                .iter()
                .map(|f| f.to_string())
                .zip(values)
                .collect()
        },
    )
}

fn arb_kind_and_values() -> impl Strategy<Value = (&'static ResourceKind, BTreeMap<String, String>)> {
    arb_kind().prop_flat_map(|kind| (Just(kind), arb_values(kind)))
}

/// Upper-cases every literal segment.
fn shout_literals(kind: &ResourceKind, id: &str) -> String {
    id[1..]
        .split('/')
        .zip(kind.segments)
        .map(|(token, segment)| match segment.fixed_value() {
            Some(_) => token.to_ascii_uppercase(),
            None => token.to_string(),
        })
        .fold(String::new(), |mut out, token| {
            out.push('/');
            out.push_str(&token);
            out
        })
}

#[test]
fn test_every_template_is_consistent() {
    for kind in kinds() {
        kind.check().unwrap_or_else(|e| panic!("{}: {e}", kind.key()));
    }
}

#[test]
fn test_example_ids_roundtrip() {
    for kind in kinds() {
        let example = kind.example_id();
        let values: BTreeMap<String, String> = kind
            .parse(&example, false)
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(kind.format(&values).unwrap(), example, "{}", kind.key());
    }
}

#[test]
fn test_dns_zone_keeps_default_literal() {
    let kind = arm_resource_manager::find("vmware/2022-05-01/workloadnetworks/DnsZoneId").unwrap();
    let example = kind.example_id();
    assert!(example.contains("/workloadNetworks/default/dnsZones/"));
    assert!(kind
        .parse(&example.replace("/default/", "/other/"), true)
        .is_err());
}

#[test]
fn test_management_group_diagnostic_setting_has_two_providers() {
    let kind = arm_resource_manager::find("Providers2DiagnosticSettingId").unwrap();
    assert_eq!(
        kind.example_id(),
        "/providers/Microsoft.Management/managementGroups/managementGroupIdValue/providers/Microsoft.Insights/diagnosticSettings/diagnosticSettingValue"
    );
}

proptest! {
    /// Formatting then parsing yields the same values
    #[test]
    fn roundtrip((kind, values) in arb_kind_and_values()) {
        let id = kind.format(&values).unwrap();
        let parsed: BTreeMap<String, String> = kind
            .parse(&id, false)
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        prop_assert_eq!(parsed, values);
    }

    /// Literal casing only matters to the strict parse
    #[test]
    fn case_scrambled_literals((kind, values) in arb_kind_and_values()) {
        let id = kind.format(&values).unwrap();
        let shouted = shout_literals(kind, &id);

        let strict = kind.parse(&id, false).unwrap();
        let relaxed = kind.parse(&shouted, true).unwrap();
        prop_assert_eq!(strict, relaxed);

        if shouted != id {
            prop_assert!(kind.parse(&shouted, false).is_err());
        }
    }

    /// Dropping trailing tokens always fails
    #[test]
    fn truncation_fails((kind, values) in arb_kind_and_values()) {
        let id = kind.format(&values).unwrap();
        let mut prefix = id.as_str();
        while let Some(cut) = prefix.rfind('/') {
            prefix = &prefix[..cut];
            prop_assert!(kind.parse(prefix, true).is_err(), "{} accepted {}", kind.key(), prefix);
        }
    }

    /// Appending a token always fails
    #[test]
    fn extra_segment_fails((kind, values) in arb_kind_and_values(), extra in "[a-z]{1,8}") {
        let id = format!("{}/{}", kind.format(&values).unwrap(), extra);
        prop_assert!(kind.parse(&id, true).is_err());
    }
}
