//! Resource IDs shared across resource providers.
//!
//! Operations in many packages take these as the parent of the resources
//! they list or create, so they live next to the codec instead of being
//! redeclared per package.

use crate::{define_resource_id, Segment};

const EXAMPLE_SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";

// =============================================================================
// Scopes
// =============================================================================

define_resource_id! {
    /// A Subscription.
    SubscriptionId("Subscription") {
        subscription_id: "subscriptionId" => "Subscription",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
    ]
}

define_resource_id! {
    /// A Resource Group within a Subscription.
    ResourceGroupId("Resource Group") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
    ]
}

define_resource_id! {
    /// A Management Group.
    ManagementGroupId("Management Group") {
        group_id: "groupId" => "Group",
    }
    segments: [
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftManagement", "Microsoft.Management", "Microsoft.Management"),
        Segment::static_segment("staticManagementGroups", "managementGroups", "managementGroups"),
        Segment::user_specified("groupId", "groupIdValue"),
    ]
}

// =============================================================================
// SQL
// =============================================================================

define_resource_id! {
    /// A SQL Server.
    SqlServerId("Sql Server") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        server_name: "serverName" => "Server Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftSql", "Microsoft.Sql", "Microsoft.Sql"),
        Segment::static_segment("staticServers", "servers", "servers"),
        Segment::user_specified("serverName", "serverValue"),
    ]
}

define_resource_id! {
    /// A SQL Managed Instance.
    SqlManagedInstanceId("Sql Managed Instance") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        managed_instance_name: "managedInstanceName" => "Managed Instance Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftSql", "Microsoft.Sql", "Microsoft.Sql"),
        Segment::static_segment("staticManagedInstances", "managedInstances", "managedInstances"),
        Segment::user_specified("managedInstanceName", "managedInstanceValue"),
    ]
}

define_resource_id! {
    /// A Database within a SQL Managed Instance.
    SqlManagedInstanceDatabaseId("Sql Managed Instance Database") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        managed_instance_name: "managedInstanceName" => "Managed Instance Name",
        database_name: "databaseName" => "Database Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftSql", "Microsoft.Sql", "Microsoft.Sql"),
        Segment::static_segment("staticManagedInstances", "managedInstances", "managedInstances"),
        Segment::user_specified("managedInstanceName", "managedInstanceValue"),
        Segment::static_segment("staticDatabases", "databases", "databases"),
        Segment::user_specified("databaseName", "databaseValue"),
    ]
}

// =============================================================================
// App Service
// =============================================================================

define_resource_id! {
    /// An App Service (Web App).
    AppServiceId("App Service") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        site_name: "siteName" => "Site Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
        Segment::static_segment("staticSites", "sites", "sites"),
        Segment::user_specified("siteName", "siteValue"),
    ]
}

define_resource_id! {
    /// An App Service Environment.
    AppServiceEnvironmentId("App Service Environment") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        hosting_environment_name: "hostingEnvironmentName" => "Hosting Environment Name",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", EXAMPLE_SUBSCRIPTION),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
        Segment::static_segment("staticHostingEnvironments", "hostingEnvironments", "hostingEnvironments"),
        Segment::user_specified("hostingEnvironmentName", "hostingEnvironmentValue"),
    ]
}

impl ResourceGroupId {
    /// The Subscription this Resource Group belongs to.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

impl SqlManagedInstanceDatabaseId {
    /// The Managed Instance hosting this Database.
    #[must_use]
    pub fn managed_instance(&self) -> SqlManagedInstanceId {
        SqlManagedInstanceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.managed_instance_name.clone(),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
