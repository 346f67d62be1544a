//! API version 2021-05-01-preview.

pub mod managementgroupdiagnosticsettings {
    use arm_resourceids::commonids::ManagementGroupId;
    use arm_resourceids::{define_resource_id, Segment};

    use crate::request::{nested, RequestOptions};

    define_resource_id! {
        /// A Diagnostic Setting scoped to a Management Group.
        ///
        /// The template carries two `providers` literals, so the second one
        /// gets its own segment name.
        Providers2DiagnosticSettingId("Providers 2 Diagnostic Setting") {
            management_group_id: "managementGroupId" => "Management Group",
            diagnostic_setting_name: "diagnosticSettingName" => "Diagnostic Setting Name",
        }
        segments: [
            Segment::static_segment("staticProviders", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftManagement", "Microsoft.Management", "Microsoft.Management"),
            Segment::static_segment("staticManagementGroups", "managementGroups", "managementGroups"),
            Segment::user_specified("managementGroupId", "managementGroupIdValue"),
            Segment::static_segment("staticProviders2", "providers", "providers"),
            Segment::resource_provider("staticMicrosoftInsights", "Microsoft.Insights", "Microsoft.Insights"),
            Segment::static_segment("staticDiagnosticSettings", "diagnosticSettings", "diagnosticSettings"),
            Segment::user_specified("diagnosticSettingName", "diagnosticSettingValue"),
        ]
    }

    impl Providers2DiagnosticSettingId {
        /// The Management Group the setting applies to.
        #[must_use]
        pub fn management_group(&self) -> ManagementGroupId {
            ManagementGroupId::new(self.management_group_id.clone())
        }
    }

    pub fn get(id: &Providers2DiagnosticSettingId) -> RequestOptions {
        RequestOptions::get(id.id())
    }

    pub fn create_or_update(id: &Providers2DiagnosticSettingId) -> RequestOptions {
        RequestOptions::put(id.id())
    }

    pub fn delete(id: &Providers2DiagnosticSettingId) -> RequestOptions {
        RequestOptions::delete(id.id()).expecting(&[200, 204])
    }

    pub fn list(id: &ManagementGroupId) -> RequestOptions {
        RequestOptions::get(nested(id, "providers/Microsoft.Insights/diagnosticSettings"))
    }
}
