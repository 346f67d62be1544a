//! API version 2022-01-01-preview.

pub mod namespacesnetworksecurityperimeterconfigurations {
    use arm_resourceids::{define_resource_id, Segment};

    define_resource_id! {
        /// A Network Security Perimeter Configuration of an Event Hubs Namespace.
        NetworkSecurityPerimeterConfigurationId("Network Security Perimeter Configuration") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            namespace_name: "namespaceName" => "Namespace Name",
            network_security_perimeter_configuration_name: "networkSecurityPerimeterConfigurationName"
                => "Network Security Perimeter Configuration Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftEventHub", "Microsoft.EventHub", "Microsoft.EventHub"),
            Segment::static_segment("staticNamespaces", "namespaces", "namespaces"),
            Segment::user_specified("namespaceName", "namespaceValue"),
            Segment::static_segment(
                "staticNetworkSecurityPerimeterConfigurations",
                "networkSecurityPerimeterConfigurations",
                "networkSecurityPerimeterConfigurations",
            ),
            Segment::user_specified(
                "networkSecurityPerimeterConfigurationName",
                "networkSecurityPerimeterConfigurationValue",
            ),
        ]
    }
}
