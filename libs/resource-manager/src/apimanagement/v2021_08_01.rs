//! API version 2021-08-01.

pub mod contenttype {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A Content Type within an API Management Service.
        ContentTypeId("Content Type") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            content_type_id: "contentTypeId" => "Content Type",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftApiManagement", "Microsoft.ApiManagement", "Microsoft.ApiManagement"),
            Segment::static_segment("staticService", "service", "service"),
            Segment::user_specified("serviceName", "serviceValue"),
            Segment::static_segment("staticContentTypes", "contentTypes", "contentTypes"),
            Segment::user_specified("contentTypeId", "contentTypeIdValue"),
        ]
    }

    pub fn content_type_get(id: &ContentTypeId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn content_type_create_or_update(id: &ContentTypeId) -> RequestOptions {
        RequestOptions::put(id.id()).expecting(&[200, 201])
    }

    pub fn content_type_delete(id: &ContentTypeId) -> RequestOptions {
        RequestOptions::delete(id.id()).expecting(&[200, 204])
    }
}

pub mod quotabycounterkeys {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// The quota counters for one counter key of an API Management Service.
        QuotaId("Quota") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            quota_counter_key: "quotaCounterKey" => "Quota Counter Key",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftApiManagement", "Microsoft.ApiManagement", "Microsoft.ApiManagement"),
            Segment::static_segment("staticService", "service", "service"),
            Segment::user_specified("serviceName", "serviceValue"),
            Segment::static_segment("staticQuotas", "quotas", "quotas"),
            Segment::user_specified("quotaCounterKey", "quotaCounterKeyValue"),
        ]
    }

    pub fn list_by_service(id: &QuotaId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn update(id: &QuotaId) -> RequestOptions {
        RequestOptions::patch(id.id())
    }
}
