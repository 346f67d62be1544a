//! API version 2018-06-01.

pub mod changedatacapture {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A change data capture resource within a Data Factory.
        AdfcdcId("Adfcdc") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            factory_name: "factoryName" => "Factory Name",
            adfcdc_name: "adfcdcName" => "Adfcdc Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDataFactory", "Microsoft.DataFactory", "Microsoft.DataFactory"),
            Segment::static_segment("staticFactories", "factories", "factories"),
            Segment::user_specified("factoryName", "factoryValue"),
            Segment::static_segment("staticAdfcdcs", "adfcdcs", "adfcdcs"),
            Segment::user_specified("adfcdcName", "adfcdcValue"),
        ]
    }

    pub fn start(id: &AdfcdcId) -> RequestOptions {
        RequestOptions::post(nested(id, "start"))
    }

    pub fn stop(id: &AdfcdcId) -> RequestOptions {
        RequestOptions::post(nested(id, "stop"))
    }
}

pub mod pipelineruns {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// One run of a Data Factory pipeline.
        PipelineRunId("Pipeline Run") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            factory_name: "factoryName" => "Factory Name",
            run_id: "runId" => "Run",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDataFactory", "Microsoft.DataFactory", "Microsoft.DataFactory"),
            Segment::static_segment("staticFactories", "factories", "factories"),
            Segment::user_specified("factoryName", "factoryValue"),
            Segment::static_segment("staticPipelineRuns", "pipelineRuns", "pipelineRuns"),
            Segment::user_specified("runId", "runIdValue"),
        ]
    }

    pub fn get(id: &PipelineRunId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn cancel(id: &PipelineRunId) -> RequestOptions {
        RequestOptions::post(nested(id, "cancel"))
    }
}

pub mod pipelines {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Data Factory.
        FactoryId("Factory") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            factory_name: "factoryName" => "Factory Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDataFactory", "Microsoft.DataFactory", "Microsoft.DataFactory"),
            Segment::static_segment("staticFactories", "factories", "factories"),
            Segment::user_specified("factoryName", "factoryValue"),
        ]
    }

    pub fn list_by_factory(id: &FactoryId) -> RequestOptions {
        RequestOptions::list(nested(id, "pipelines"))
    }
}
