//! API version 2021-01-01.

pub mod proxy {
    use arm_resourceids::commonids::SubscriptionId;

    use crate::request::{nested, RequestOptions};

    pub fn remote_rendering_accounts_list_by_subscription(id: &SubscriptionId) -> RequestOptions {
        RequestOptions::list(nested(
            id,
            "providers/Microsoft.MixedReality/remoteRenderingAccounts",
        ))
    }
}
