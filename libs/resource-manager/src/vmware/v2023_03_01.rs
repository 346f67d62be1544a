//! API version 2023-03-01.

pub mod workloadnetworks {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// An Azure VMware Solution Private Cloud.
        PrivateCloudId("Private Cloud") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            private_cloud_name: "privateCloudName" => "Private Cloud Name",
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
        ]
    }

    define_resource_id! {
        /// A DHCP configuration of the default workload network of a Private Cloud.
        DhcpConfigurationId("Dhcp Configuration") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            private_cloud_name: "privateCloudName" => "Private Cloud Name",
            dhcp_id: "dhcpId" => "Dhcp",
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
            Segment::static_segment("staticDhcpConfigurations", "dhcpConfigurations", "dhcpConfigurations"),
            Segment::user_specified("dhcpId", "dhcpIdValue"),
        ]
    }

    impl PrivateCloudId {
        /// The ID of a DHCP configuration on this Private Cloud.
        #[must_use]
        pub fn dhcp_configuration(&self, dhcp_id: impl Into<String>) -> DhcpConfigurationId {
            DhcpConfigurationId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.private_cloud_name.clone(),
                dhcp_id,
            )
        }
    }

    pub fn list_virtual_machines(id: &PrivateCloudId) -> RequestOptions {
        RequestOptions::list(nested(id, "workloadNetworks/default/virtualMachines"))
    }

    pub fn list_dhcp(id: &PrivateCloudId) -> RequestOptions {
        RequestOptions::list(nested(id, "workloadNetworks/default/dhcpConfigurations"))
    }

    pub fn update_dhcp(id: &DhcpConfigurationId) -> RequestOptions {
        RequestOptions::patch(id.id())
            .expecting(&[200, 202])
            .long_running()
    }
}
