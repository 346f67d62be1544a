//! API version 2023-10-01.

pub mod hosts {
    use arm_resourceids::{define_resource_id, Segment};

    define_resource_id! {
        /// A vSphere Host connected through Azure Arc.
        HostId("Host") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            host_name: "hostName" => "Host Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftConnectedVMwarevSphere", "Microsoft.ConnectedVMwarevSphere", "Microsoft.ConnectedVMwarevSphere"),
            Segment::static_segment("staticHosts", "hosts", "hosts"),
            Segment::user_specified("hostName", "hostValue"),
        ]
    }
}
