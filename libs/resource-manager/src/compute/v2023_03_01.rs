//! API version 2023-03-01.

pub mod virtualmachinescalesetvmextensions {
    use arm_resourceids::{define_resource_id, Segment};

    define_resource_id! {
        /// An Extension installed on one Virtual Machine of a Scale Set.
        VirtualMachineExtensionId("Virtual Machine Extension") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            virtual_machine_scale_set_name: "virtualMachineScaleSetName" => "Virtual Machine Scale Set Name",
            instance_id: "instanceId" => "Instance",
            extension_name: "extensionName" => "Extension Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute", "Microsoft.Compute"),
            Segment::static_segment("staticVirtualMachineScaleSets", "virtualMachineScaleSets", "virtualMachineScaleSets"),
            Segment::user_specified("virtualMachineScaleSetName", "virtualMachineScaleSetValue"),
            Segment::static_segment("staticVirtualMachines", "virtualMachines", "virtualMachines"),
            Segment::user_specified("instanceId", "instanceIdValue"),
            Segment::static_segment("staticExtensions", "extensions", "extensions"),
            Segment::user_specified("extensionName", "extensionValue"),
        ]
    }
}
