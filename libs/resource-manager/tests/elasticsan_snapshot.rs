//! End-to-end parsing of an Elastic SAN Snapshot ID.

use arm_resource_manager::elasticsan::v2023_01_01::snapshots::{self, SnapshotId, VolumeGroupId};
use arm_resourceids::ResourceIdError;

const CANONICAL: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.ElasticSan/elasticSans/elasticSanValue/volumeGroups/volumeGroupValue/snapshots/snapshotValue";

const MIXED_CASE: &str = "/sUbScRiPtIoNs/12345678-1234-9876-4563-123456789012/rEsOuRcEgRoUpS/example-resource-group/pRoViDeRs/mIcRoSoFt.eLaStIcSaN/eLaStIcSaNs/elasticSanValue/vOlUmEgRoUpS/volumeGroupValue/sNaPsHoTs/snapshotValue";

fn expected() -> SnapshotId {
    SnapshotId {
        subscription_id: "12345678-1234-9876-4563-123456789012".to_string(),
        resource_group_name: "example-resource-group".to_string(),
        elastic_san_name: "elasticSanValue".to_string(),
        volume_group_name: "volumeGroupValue".to_string(),
        snapshot_name: "snapshotValue".to_string(),
    }
}

#[test]
fn test_parse_canonical() {
    let id = SnapshotId::parse(CANONICAL).unwrap();
    assert_eq!(id, expected());
    assert_eq!(id.id(), CANONICAL);
}

#[test]
fn test_new_formats_canonical() {
    let id = SnapshotId::new(
        "12345678-1234-9876-4563-123456789012",
        "example-resource-group",
        "elasticSanValue",
        "volumeGroupValue",
        "snapshotValue",
    );
    assert_eq!(id.id(), CANONICAL);
}

#[test]
fn test_extra_segment_rejected() {
    let input = format!("{}/extra", CANONICAL);

    let err = SnapshotId::parse(&input).unwrap_err();
    assert!(matches!(err, ResourceIdError::ExtraSegment { ref extra, .. } if extra == "extra"));
    assert!(SnapshotId::parse_insensitively(&input).is_err());
}

#[test]
fn test_missing_snapshot_name_is_incomplete() {
    let input = CANONICAL.trim_end_matches("/snapshotValue");
    assert!(input.ends_with("/snapshots"));

    let err = SnapshotId::parse(input).unwrap_err();
    assert!(matches!(
        err,
        ResourceIdError::Incomplete { segment: "snapshotName", .. }
    ));
}

#[test]
fn test_mixed_case_only_parses_insensitively() {
    let id = SnapshotId::parse_insensitively(MIXED_CASE).unwrap();
    assert_eq!(id, expected());
    assert_eq!(id.id(), CANONICAL);

    let err = SnapshotId::parse(MIXED_CASE).unwrap_err();
    assert!(err.is_mismatch());
}

#[test]
fn test_every_strict_prefix_fails() {
    let tokens: Vec<&str> = CANONICAL[1..].split('/').collect();
    for len in 0..tokens.len() {
        let prefix = format!("/{}", tokens[..len].join("/"));
        let err = SnapshotId::parse(&prefix).unwrap_err();
        assert!(err.is_incomplete(), "{prefix}: {err}");
    }
}

#[test]
fn test_display_lists_components() {
    let display = expected().to_string();
    assert!(display.starts_with("Snapshot ("));
    assert!(display.contains("Subscription: \"12345678-1234-9876-4563-123456789012\""));
    assert!(display.contains("\nSnapshot Name: \"snapshotValue\""));
    assert!(display.ends_with(')'));
}

#[test]
fn test_validate() {
    let valid = SnapshotId::validate(&serde_json::json!(CANONICAL), "snapshot_id");
    assert!(valid.is_valid());
    assert!(valid.warnings.is_empty());

    let invalid = SnapshotId::validate(&serde_json::json!(MIXED_CASE), "snapshot_id");
    assert_eq!(invalid.errors.len(), 1);

    let not_a_string = SnapshotId::validate(&serde_json::json!(42), "snapshot_id");
    assert!(matches!(
        not_a_string.errors.as_slice(),
        [ResourceIdError::NotAString { key }] if key == "snapshot_id"
    ));
}

#[test]
fn test_parent_and_child_helpers() {
    let id = expected();
    let group: VolumeGroupId = id.volume_group();
    assert_eq!(group.volume_group_name, "volumeGroupValue");
    assert_eq!(group.snapshot("snapshotValue"), id);
}

#[test]
fn test_operations() {
    let id = expected();

    let get = snapshots::get(&id);
    assert_eq!(get.path, CANONICAL);
    assert!(!get.is_long_running());

    let create = snapshots::create(&id);
    assert!(create.is_long_running());
    assert_eq!(create.expected_status_codes, vec![200, 201]);

    let delete = snapshots::delete(&id);
    assert!(delete.accepts(204));

    let list = snapshots::list_by_volume_group(&id.volume_group());
    assert!(list.is_paged());
    assert_eq!(
        list.path,
        CANONICAL.trim_end_matches("/snapshotValue")
    );
}
