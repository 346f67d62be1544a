//! API version 2022-09-01.

pub mod appserviceenvironments {
    use arm_resourceids::commonids::AppServiceEnvironmentId;
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Worker Pool of an App Service Environment.
        WorkerPoolId("Worker Pool") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            hosting_environment_name: "hostingEnvironmentName" => "Hosting Environment Name",
            worker_pool_name: "workerPoolName" => "Worker Pool Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
            Segment::static_segment("staticHostingEnvironments", "hostingEnvironments", "hostingEnvironments"),
            Segment::user_specified("hostingEnvironmentName", "hostingEnvironmentValue"),
            Segment::static_segment("staticWorkerPools", "workerPools", "workerPools"),
            Segment::user_specified("workerPoolName", "workerPoolValue"),
        ]
    }

    impl WorkerPoolId {
        /// The App Service Environment this Worker Pool belongs to.
        #[must_use]
        pub fn environment(&self) -> AppServiceEnvironmentId {
            AppServiceEnvironmentId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.hosting_environment_name.clone(),
            )
        }
    }

    pub fn list_multi_role_pool_skus(id: &AppServiceEnvironmentId) -> RequestOptions {
        RequestOptions::list(nested(id, "multiRolePools/default/skus"))
    }

    pub fn list_worker_pool_skus(id: &WorkerPoolId) -> RequestOptions {
        RequestOptions::list(nested(id, "skus"))
    }
}

pub mod diagnostics {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A diagnostic Analysis of a Web App.
        AnalysisId("Analysis") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            site_name: "siteName" => "Site Name",
            diagnostic_name: "diagnosticName" => "Diagnostic Name",
            analysis_name: "analysisName" => "Analysis Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
            Segment::static_segment("staticSites", "sites", "sites"),
            Segment::user_specified("siteName", "siteValue"),
            Segment::static_segment("staticDiagnostics", "diagnostics", "diagnostics"),
            Segment::user_specified("diagnosticName", "diagnosticValue"),
            Segment::static_segment("staticAnalyses", "analyses", "analyses"),
            Segment::user_specified("analysisName", "analysisValue"),
        ]
    }

    pub fn get_site_analysis(id: &AnalysisId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn execute_site_analysis(id: &AnalysisId) -> RequestOptions {
        RequestOptions::post(nested(id, "execute"))
    }
}

pub mod webapps {
    use arm_resourceids::commonids::AppServiceId;
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A deployment Slot of a Web App.
        SlotId("Slot") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            site_name: "siteName" => "Site Name",
            slot_name: "slotName" => "Slot Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
            Segment::static_segment("staticSites", "sites", "sites"),
            Segment::user_specified("siteName", "siteValue"),
            Segment::static_segment("staticSlots", "slots", "slots"),
            Segment::user_specified("slotName", "slotValue"),
        ]
    }

    define_resource_id! {
        /// A triggered WebJob running in a Web App deployment Slot.
        SlotTriggeredWebJobId("Slot Triggered Web Job") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            site_name: "siteName" => "Site Name",
            slot_name: "slotName" => "Slot Name",
            triggered_web_job_name: "triggeredWebJobName" => "Triggered Web Job Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
            Segment::static_segment("staticSites", "sites", "sites"),
            Segment::user_specified("siteName", "siteValue"),
            Segment::static_segment("staticSlots", "slots", "slots"),
            Segment::user_specified("slotName", "slotValue"),
            Segment::static_segment("staticTriggeredWebJobs", "triggeredWebJobs", "triggeredWebJobs"),
            Segment::user_specified("triggeredWebJobName", "triggeredWebJobValue"),
        ]
    }

    impl SlotId {
        /// The Web App owning this slot.
        #[must_use]
        pub fn site(&self) -> AppServiceId {
            AppServiceId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.site_name.clone(),
            )
        }

        #[must_use]
        pub fn triggered_web_job(&self, name: impl Into<String>) -> SlotTriggeredWebJobId {
            SlotTriggeredWebJobId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.site_name.clone(),
                self.slot_name.clone(),
                name,
            )
        }
    }

    pub fn create_ms_deploy_operation_slot(id: &SlotId) -> RequestOptions {
        RequestOptions::put(nested(id, "extensions/mSDeploy"))
            .expecting(&[201])
            .long_running()
    }

    pub fn list_triggered_web_job_history_slot(id: &SlotTriggeredWebJobId) -> RequestOptions {
        RequestOptions::list(nested(id, "history"))
    }
}
