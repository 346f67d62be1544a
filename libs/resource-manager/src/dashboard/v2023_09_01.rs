//! API version 2023-09-01.

pub mod managedprivateendpoints {
    use arm_resourceids::{define_resource_id, Segment};

    define_resource_id! {
        /// A Managed Private Endpoint of a Grafana workspace.
        ManagedPrivateEndpointId("Managed Private Endpoint") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            grafana_name: "grafanaName" => "Grafana Name",
            managed_private_endpoint_name: "managedPrivateEndpointName" => "Managed Private Endpoint Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDashboard", "Microsoft.Dashboard", "Microsoft.Dashboard"),
            Segment::static_segment("staticGrafana", "grafana", "grafana"),
            Segment::user_specified("grafanaName", "grafanaValue"),
            Segment::static_segment("staticManagedPrivateEndpoints", "managedPrivateEndpoints", "managedPrivateEndpoints"),
            Segment::user_specified("managedPrivateEndpointName", "managedPrivateEndpointValue"),
        ]
    }
}
