//! API version 2023-02-01-preview.

pub mod databasetables {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Schema within a SQL Database.
        SchemaId("Schema") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            server_name: "serverName" => "Server Name",
            database_name: "databaseName" => "Database Name",
            schema_name: "schemaName" => "Schema Name",
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
            Segment::static_segment("staticDatabases", "databases", "databases"),
            Segment::user_specified("databaseName", "databaseValue"),
            Segment::static_segment("staticSchemas", "schemas", "schemas"),
            Segment::user_specified("schemaName", "schemaValue"),
        ]
    }

    pub fn list_by_schema(id: &SchemaId) -> RequestOptions {
        RequestOptions::list(nested(id, "tables"))
    }
}

pub mod manageddatabaseschemas {
    use arm_resourceids::commonids::SqlManagedInstanceDatabaseId;

    use crate::request::{nested, RequestOptions};

    pub fn list_by_database(id: &SqlManagedInstanceDatabaseId) -> RequestOptions {
        RequestOptions::list(nested(id, "schemas"))
    }
}
