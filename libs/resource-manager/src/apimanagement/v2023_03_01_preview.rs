//! API version 2023-03-01-preview.

pub mod apischema {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// An API within an API Management Workspace.
        WorkspaceApiId("Workspace Api") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            workspace_id: "workspaceId" => "Workspace",
            api_id: "apiId" => "Api",
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
            Segment::static_segment("staticWorkspaces", "workspaces", "workspaces"),
            Segment::user_specified("workspaceId", "workspaceIdValue"),
            Segment::static_segment("staticApis", "apis", "apis"),
            Segment::user_specified("apiId", "apiIdValue"),
        ]
    }

    pub fn workspace_api_schema_list_by_api(id: &WorkspaceApiId) -> RequestOptions {
        RequestOptions::list(nested(id, "schemas"))
    }
}

pub mod authorizationconfirmconsentcode {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// An Authorization issued by an API Management Authorization Provider.
        AuthorizationId("Authorization") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            authorization_provider_id: "authorizationProviderId" => "Authorization Provider",
            authorization_id: "authorizationId" => "Authorization",
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
            Segment::static_segment("staticAuthorizationProviders", "authorizationProviders", "authorizationProviders"),
            Segment::user_specified("authorizationProviderId", "authorizationProviderIdValue"),
            Segment::static_segment("staticAuthorizations", "authorizations", "authorizations"),
            Segment::user_specified("authorizationId", "authorizationIdValue"),
        ]
    }

    pub fn authorization_confirm_consent_code(id: &AuthorizationId) -> RequestOptions {
        RequestOptions::post(nested(id, "confirmConsentCode"))
    }
}

pub mod productgrouplink {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Product within an API Management Service.
        ProductId("Product") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            product_id: "productId" => "Product",
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
            Segment::static_segment("staticProducts", "products", "products"),
            Segment::user_specified("productId", "productIdValue"),
        ]
    }

    define_resource_id! {
        /// A link between a Product and a Group.
        GroupLinkId("Group Link") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            product_id: "productId" => "Product",
            group_link_id: "groupLinkId" => "Group Link",
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
            Segment::static_segment("staticProducts", "products", "products"),
            Segment::user_specified("productId", "productIdValue"),
            Segment::static_segment("staticGroupLinks", "groupLinks", "groupLinks"),
            Segment::user_specified("groupLinkId", "groupLinkIdValue"),
        ]
    }

    impl ProductId {
        #[must_use]
        pub fn group_link(&self, group_link_id: impl Into<String>) -> GroupLinkId {
            GroupLinkId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.service_name.clone(),
                self.product_id.clone(),
                group_link_id,
            )
        }
    }

    pub fn list_by_product(id: &ProductId) -> RequestOptions {
        RequestOptions::list(nested(id, "groupLinks"))
    }

    pub fn get(id: &GroupLinkId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create_or_update(id: &GroupLinkId) -> RequestOptions {
        RequestOptions::put(id.id()).expecting(&[200, 201])
    }

    pub fn delete(id: &GroupLinkId) -> RequestOptions {
        RequestOptions::delete(id.id()).expecting(&[200, 204])
    }
}

pub mod tagapilink {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Tag within an API Management Service.
        TagId("Tag") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            tag_id: "tagId" => "Tag",
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
            Segment::static_segment("staticTags", "tags", "tags"),
            Segment::user_specified("tagId", "tagIdValue"),
        ]
    }

    pub fn list_by_product(id: &TagId) -> RequestOptions {
        RequestOptions::list(nested(id, "apiLinks"))
    }
}

pub mod tagoperationlink {
    use super::tagapilink::TagId;
    use crate::request::{nested, RequestOptions};

    pub fn list_by_product(id: &TagId) -> RequestOptions {
        RequestOptions::list(nested(id, "operationLinks"))
    }
}

pub mod tagproductlink {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A link between a workspace Tag and a Product.
        TagProductLinkId("Tag Product Link") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            workspace_id: "workspaceId" => "Workspace",
            tag_id: "tagId" => "Tag",
            product_link_id: "productLinkId" => "Product Link",
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
            Segment::static_segment("staticWorkspaces", "workspaces", "workspaces"),
            Segment::user_specified("workspaceId", "workspaceIdValue"),
            Segment::static_segment("staticTags", "tags", "tags"),
            Segment::user_specified("tagId", "tagIdValue"),
            Segment::static_segment("staticProductLinks", "productLinks", "productLinks"),
            Segment::user_specified("productLinkId", "productLinkIdValue"),
        ]
    }

    pub fn workspace_tag_product_link_get(id: &TagProductLinkId) -> RequestOptions {
        RequestOptions::get(id.id())
    }
}

pub mod tenantconfiguration {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// An API Management Service.
        ServiceId("Service") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
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
        ]
    }

    /// Deploys the configuration from the service's Git repository.
    pub fn deploy(id: &ServiceId) -> RequestOptions {
        RequestOptions::post(nested(id, "tenant/configuration/deploy"))
            .expecting(&[200, 202])
            .long_running()
    }
}

pub mod workspacepolicy {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Workspace within an API Management Service.
        WorkspaceId("Workspace") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            service_name: "serviceName" => "Service Name",
            workspace_id: "workspaceId" => "Workspace",
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
            Segment::static_segment("staticWorkspaces", "workspaces", "workspaces"),
            Segment::user_specified("workspaceId", "workspaceIdValue"),
        ]
    }

    pub fn list_by_api(id: &WorkspaceId) -> RequestOptions {
        RequestOptions::list(nested(id, "policies"))
    }
}
