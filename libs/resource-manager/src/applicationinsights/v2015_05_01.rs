//! API version 2015-05-01.

pub mod componentcontinuousexportapis {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A continuous export configuration of an Application Insights component.
        ExportConfigurationId("Export Configuration") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            component_name: "componentName" => "Component Name",
            export_id: "exportId" => "Export",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftInsights", "Microsoft.Insights", "Microsoft.Insights"),
            Segment::static_segment("staticComponents", "components", "components"),
            Segment::user_specified("componentName", "componentValue"),
            Segment::static_segment("staticExportConfiguration", "exportConfiguration", "exportConfiguration"),
            Segment::user_specified("exportId", "exportIdValue"),
        ]
    }

    pub fn export_configurations_get(id: &ExportConfigurationId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn export_configurations_delete(id: &ExportConfigurationId) -> RequestOptions {
        RequestOptions::delete(id.id())
    }
}
