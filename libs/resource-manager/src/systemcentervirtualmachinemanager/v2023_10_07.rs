//! API version 2023-10-07.

pub mod vmmservers {
    use arm_resourceids::commonids::SubscriptionId;

    use crate::request::{nested, RequestOptions};

    pub fn list_by_subscription(id: &SubscriptionId) -> RequestOptions {
        RequestOptions::list(nested(id, "providers/Microsoft.ScVmm/vmmServers"))
    }
}
