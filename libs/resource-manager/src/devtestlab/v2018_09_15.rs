//! API version 2018-09-15.

pub mod servicerunners {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A Service Runner of a DevTest Lab.
        ServiceRunnerId("Service Runner") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            lab_name: "labName" => "Lab Name",
            service_runner_name: "serviceRunnerName" => "Service Runner Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDevTestLab", "Microsoft.DevTestLab", "Microsoft.DevTestLab"),
            Segment::static_segment("staticLabs", "labs", "labs"),
            Segment::user_specified("labName", "labValue"),
            Segment::static_segment("staticServiceRunners", "serviceRunners", "serviceRunners"),
            Segment::user_specified("serviceRunnerName", "serviceRunnerValue"),
        ]
    }

    pub fn get(id: &ServiceRunnerId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create_or_update(id: &ServiceRunnerId) -> RequestOptions {
        RequestOptions::put(id.id()).expecting(&[200, 201])
    }

    pub fn delete(id: &ServiceRunnerId) -> RequestOptions {
        RequestOptions::delete(id.id()).expecting(&[200, 204])
    }
}
