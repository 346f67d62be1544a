//! API version 2021-01-01.

pub mod agreements {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A marketplace Plan whose terms can be accepted within a Subscription.
        PlanId("Plan") {
            subscription_id: "subscriptionId" => "Subscription",
            publisher_id: "publisherId" => "Publisher",
            offer_id: "offerId" => "Offer",
            plan_id: "planId" => "Plan",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftMarketplaceOrdering", "Microsoft.MarketplaceOrdering", "Microsoft.MarketplaceOrdering"),
            Segment::static_segment("staticAgreements", "agreements", "agreements"),
            Segment::user_specified("publisherId", "publisherIdValue"),
            Segment::static_segment("staticOffers", "offers", "offers"),
            Segment::user_specified("offerId", "offerIdValue"),
            Segment::static_segment("staticPlans", "plans", "plans"),
            Segment::user_specified("planId", "planIdValue"),
        ]
    }

    pub fn get_agreement(id: &PlanId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn sign(id: &PlanId) -> RequestOptions {
        RequestOptions::post(nested(id, "sign"))
    }

    pub fn cancel(id: &PlanId) -> RequestOptions {
        RequestOptions::post(nested(id, "cancel"))
    }
}
