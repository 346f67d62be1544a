//! API version 2022-05-01.

pub mod workloadnetworks {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A DNS Zone of the default workload network of a Private Cloud.
        DnsZoneId("Dns Zone") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            private_cloud_name: "privateCloudName" => "Private Cloud Name",
            dns_zone_id: "dnsZoneId" => "Dns Zone",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftAVS", "Microsoft.AVS", "Microsoft.AVS"),
            Segment::static_segment("staticPrivateClouds", "privateClouds", "privateClouds"),
            Segment::user_specified("privateCloudName", "privateCloudValue"),
            Segment::static_segment("staticWorkloadNetworks", "workloadNetworks", "workloadNetworks"),
            Segment::static_segment("staticDefault", "default", "default"),
            Segment::static_segment("staticDnsZones", "dnsZones", "dnsZones"),
            Segment::user_specified("dnsZoneId", "dnsZoneIdValue"),
        ]
    }

    pub fn get_dns_zone(id: &DnsZoneId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create_dns_zone(id: &DnsZoneId) -> RequestOptions {
        RequestOptions::put(id.id())
            .expecting(&[200, 201])
            .long_running()
    }

    pub fn delete_dns_zone(id: &DnsZoneId) -> RequestOptions {
        RequestOptions::delete(id.id())
            .expecting(&[200, 202, 204])
            .long_running()
    }
}
