//! API version 2019-11-01.

pub mod trigger {
    use arm_resourceids::{define_resource_id, Segment};

    define_resource_id! {
        /// A synchronization Trigger of a Data Share subscription.
        TriggerId("Trigger") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            account_name: "accountName" => "Account Name",
            share_subscription_name: "shareSubscriptionName" => "Share Subscription Name",
            trigger_name: "triggerName" => "Trigger Name",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName", "example-resource-group"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftDataShare", "Microsoft.DataShare", "Microsoft.DataShare"),
            Segment::static_segment("staticAccounts", "accounts", "accounts"),
            Segment::user_specified("accountName", "accountValue"),
            Segment::static_segment("staticShareSubscriptions", "shareSubscriptions", "shareSubscriptions"),
            Segment::user_specified("shareSubscriptionName", "shareSubscriptionValue"),
            Segment::static_segment("staticTriggers", "triggers", "triggers"),
            Segment::user_specified("triggerName", "triggerValue"),
        ]
    }
}
