//! API version 2023-01-01.

pub mod appserviceenvironments {
    use arm_resourceids::commonids::AppServiceEnvironmentId;

    use crate::request::{nested, RequestOptions};

    pub fn get_private_endpoint_connection_list(id: &AppServiceEnvironmentId) -> RequestOptions {
        RequestOptions::list(nested(id, "privateEndpointConnections"))
    }

    pub fn list_web_apps(id: &AppServiceEnvironmentId) -> RequestOptions {
        RequestOptions::list(nested(id, "sites"))
    }
}

pub mod deletedwebapps {
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::RequestOptions;

    define_resource_id! {
        /// A deleted Web App, addressed through the location it was deleted from.
        LocationDeletedSiteId("Location Deleted Site") {
            subscription_id: "subscriptionId" => "Subscription",
            location_name: "locationName" => "Location Name",
            deleted_site_id: "deletedSiteId" => "Deleted Site",
        }
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web", "Microsoft.Web"),
            Segment::static_segment("staticLocations", "locations", "locations"),
            Segment::user_specified("locationName", "locationValue"),
            Segment::static_segment("staticDeletedSites", "deletedSites", "deletedSites"),
            Segment::user_specified("deletedSiteId", "deletedSiteIdValue"),
        ]
    }

    pub fn get_deleted_web_app_by_location(id: &LocationDeletedSiteId) -> RequestOptions {
        RequestOptions::get(id.id())
    }
}

pub mod webapps {
    use arm_resourceids::commonids::AppServiceId;
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Network Feature of a Web App deployment Slot.
        SlotNetworkFeatureId("Slot Network Feature") {
            subscription_id: "subscriptionId" => "Subscription",
            resource_group_name: "resourceGroupName" => "Resource Group Name",
            site_name: "siteName" => "Site Name",
            slot_name: "slotName" => "Slot Name",
            network_feature_name: "networkFeatureName" => "Network Feature Name",
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
            Segment::static_segment("staticNetworkFeatures", "networkFeatures", "networkFeatures"),
            Segment::user_specified("networkFeatureName", "networkFeatureValue"),
        ]
    }

    impl SlotNetworkFeatureId {
        /// The Web App owning the slot.
        #[must_use]
        pub fn site(&self) -> AppServiceId {
            AppServiceId::new(
                self.subscription_id.clone(),
                self.resource_group_name.clone(),
                self.site_name.clone(),
            )
        }
    }

    pub fn list_network_features_slot(id: &SlotNetworkFeatureId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn list_instance_identifiers(id: &AppServiceId) -> RequestOptions {
        RequestOptions::list(nested(id, "instances"))
    }
}
