//! API version 2023-01-01.

pub mod snapshots {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Volume Group within an Elastic SAN.
        VolumeGroupId("Volume Group") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            elastic_san_name: "elasticSanName" => "Elastic San Name",
            volume_group_name: "volumeGroupName" => "Volume Group Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftElasticSan", "Microsoft.ElasticSan", "Microsoft.ElasticSan"),
            Segment::static_segment("staticElasticSans", "elasticSans", "elasticSans"),
            Segment::user_specified("elasticSanName", "elasticSanValue"),
            Segment::static_segment("staticVolumeGroups", "volumeGroups", "volumeGroups"),
            Segment::user_specified("volumeGroupName", "volumeGroupValue"),
        ]
    }

    define_resource_id! {
        /// A Snapshot of a Volume within an Elastic SAN Volume Group.
        SnapshotId("Snapshot") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            elastic_san_name: "elasticSanName" => "Elastic San Name",
            volume_group_name: "volumeGroupName" => "Volume Group Name",
            snapshot_name: "snapshotName" => "Snapshot Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftElasticSan", "Microsoft.ElasticSan", "Microsoft.ElasticSan"),
            Segment::static_segment("staticElasticSans", "elasticSans", "elasticSans"),
            Segment::user_specified("elasticSanName", "elasticSanValue"),
            Segment::static_segment("staticVolumeGroups", "volumeGroups", "volumeGroups"),
            Segment::user_specified("volumeGroupName", "volumeGroupValue"),
            Segment::static_segment("staticSnapshots", "snapshots", "snapshots"),
            Segment::user_specified("snapshotName", "snapshotValue"),
        ]
    }

    impl SnapshotId {
        /// The Volume Group this Snapshot belongs to.
        #[must_use]
        pub fn volume_group(&self) -> VolumeGroupId {
            VolumeGroupId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.elastic_san_name.clone(),
                self.volume_group_name.clone(),
            )
        }
    }

    impl VolumeGroupId {
        /// The ID of a Snapshot in this Volume Group.
        #[must_use]
        pub fn snapshot(&self, snapshot_name: impl Into<String>) -> SnapshotId {
            SnapshotId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.elastic_san_name.clone(),
                self.volume_group_name.clone(),
                snapshot_name,
            )
        }
    }

    pub fn get(id: &SnapshotId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create(id: &SnapshotId) -> RequestOptions {
        RequestOptions::put(id.id())
            .expecting(&[200, 201])
            .long_running()
    }

    pub fn delete(id: &SnapshotId) -> RequestOptions {
        RequestOptions::delete(id.id())
            .expecting(&[200, 202, 204])
            .long_running()
    }

    pub fn list_by_volume_group(id: &VolumeGroupId) -> RequestOptions {
        RequestOptions::list(nested(id, "snapshots"))
    }
}
