//! API version 2023-10-01.

pub mod onlinedeployment {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A Deployment behind an Online Endpoint of a Machine Learning Workspace.
        OnlineEndpointDeploymentId("Online Endpoint Deployment") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            workspace_name: "workspaceName" => "Workspace Name",
            online_endpoint_name: "onlineEndpointName" => "Online Endpoint Name",
            deployment_name: "deploymentName" => "Deployment Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider(
                "staticMicrosoftMachineLearningServices",
                "Microsoft.MachineLearningServices",
                "Microsoft.MachineLearningServices",
            ),
            Segment::static_segment("staticWorkspaces", "workspaces", "workspaces"),
            Segment::user_specified("workspaceName", "workspaceValue"),
            Segment::static_segment("staticOnlineEndpoints", "onlineEndpoints", "onlineEndpoints"),
            Segment::user_specified("onlineEndpointName", "onlineEndpointValue"),
            Segment::static_segment("staticDeployments", "deployments", "deployments"),
            Segment::user_specified("deploymentName", "deploymentValue"),
        ]
    }

    pub fn get(id: &OnlineEndpointDeploymentId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create_or_update(id: &OnlineEndpointDeploymentId) -> RequestOptions {
        RequestOptions::put(id.id())
            .expecting(&[200, 201])
            .long_running()
    }

    pub fn delete(id: &OnlineEndpointDeploymentId) -> RequestOptions {
        RequestOptions::delete(id.id())
            .expecting(&[200, 202, 204])
            .long_running()
    }
}
