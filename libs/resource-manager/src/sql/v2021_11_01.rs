//! API version 2021-11-01.

pub mod ipv6firewallrules {
    use arm_resourceids::commonids::SqlServerId;

    use crate::request::{nested, RequestOptions};

    pub fn list_by_server(id: &SqlServerId) -> RequestOptions {
        RequestOptions::list(nested(id, "ipv6FirewallRules"))
    }
}

pub mod jobtargetgroups {
    use arm_resourceids::commonids::SqlServerId;
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// An elastic Job Agent hosted on a SQL Server.
        JobAgentId("Job Agent") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            server_name: "serverName" => "Server Name",
            job_agent_name: "jobAgentName" => "Job Agent Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftSql", "Microsoft.Sql", "Microsoft.Sql"),
            Segment::static_segment("staticServers", "servers", "servers"),
            Segment::user_specified("serverName", "serverValue"),
            Segment::static_segment("staticJobAgents", "jobAgents", "jobAgents"),
            Segment::user_specified("jobAgentName", "jobAgentValue"),
        ]
    }

    impl JobAgentId {
        /// The SQL Server hosting this Job Agent.
        #[must_use]
        pub fn server(&self) -> SqlServerId {
            SqlServerId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.server_name.clone(),
            )
        }
    }

    pub fn list_by_agent(id: &JobAgentId) -> RequestOptions {
        RequestOptions::list(nested(id, "targetGroups"))
    }
}

pub mod managedserverdnsaliases {
    use arm_resourceids::commonids::SqlManagedInstanceId;

    use crate::request::{nested, RequestOptions};

    pub fn list_by_managed_instance(id: &SqlManagedInstanceId) -> RequestOptions {
        RequestOptions::list(nested(id, "dnsAliases"))
    }
}
