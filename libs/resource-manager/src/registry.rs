//! Runtime catalogue of every declared resource ID kind.
//!
//! The typed IDs are the primary API. The registry exposes the same
//! templates by name so tools can parse, format and describe IDs whose
//! kind is only known at runtime.

use std::collections::BTreeMap;

use arm_resourceids::{
    check_template, commonids, example_id, format_segments, Parser, ResourceId, ResourceIdError,
    Segment, TemplateError,
};
use thiserror::Error;

use crate::{
    apimanagement, applicationinsights, compute, connectedvmware, dashboard, datafactory,
    datashare, devtestlab, elasticsan, eventhub, insights, machinelearningservices,
    marketplaceordering, sql, vmware, web,
};

/// Registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("{kind} has no field named {field:?}")]
    UnknownField { kind: String, field: String },

    #[error("missing value for {field:?} of {kind}")]
    MissingValue { kind: String, field: &'static str },

    #[error(transparent)]
    Parse(#[from] ResourceIdError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl RegistryError {
    /// Returns true if the input could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, RegistryError::Parse(_))
    }
}

/// One declared resource ID kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Provider package, e.g. `elasticsan`, or `commonids` for shared IDs.
    pub provider: &'static str,
    /// API version, e.g. `2023-01-01`. Empty for shared IDs.
    pub api_version: &'static str,
    /// Package within the provider, e.g. `snapshots`. Empty for shared IDs.
    pub package: &'static str,
    /// Rust type name, e.g. `SnapshotId`.
    pub type_name: &'static str,
    /// Human-readable resource name, e.g. `Snapshot`.
    pub resource: &'static str,
    pub segments: &'static [Segment],
    pub fields: &'static [&'static str],
}

impl ResourceKind {
    pub const fn of<T: ResourceId>(
        provider: &'static str,
        api_version: &'static str,
        package: &'static str,
        type_name: &'static str,
    ) -> Self {
        Self {
            provider,
            api_version,
            package,
            type_name,
            resource: T::RESOURCE_NAME,
            segments: T::SEGMENTS,
            fields: T::FIELD_NAMES,
        }
    }

    /// Lookup key, e.g. `elasticsan/2023-01-01/snapshots/SnapshotId` or
    /// `commonids/SubscriptionId`.
    pub fn key(&self) -> String {
        [self.provider, self.api_version, self.package, self.type_name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Parses `input` and returns the data values in template order.
    pub fn parse(
        &self,
        input: &str,
        insensitively: bool,
    ) -> Result<Vec<(&'static str, String)>, RegistryError> {
        let parsed = Parser::new(self.resource, self.segments).parse(input, insensitively)?;
        self.fields
            .iter()
            .map(|field| {
                parsed
                    .require(self.resource, *field)
                    .map(|value| (*field, value.to_string()))
                    .map_err(RegistryError::from)
            })
            .collect()
    }

    /// Formats the canonical ID from values keyed by field name.
    ///
    /// Every field must be present and non-empty; unknown keys are rejected.
    pub fn format(&self, values: &BTreeMap<String, String>) -> Result<String, RegistryError> {
        if let Some(unknown) = values
            .keys()
            .find(|k| !self.fields.iter().any(|field| *field == k.as_str()))
        {
            return Err(RegistryError::UnknownField {
                kind: self.key(),
                field: unknown.clone(),
            });
        }

        let ordered = self
            .fields
            .iter()
            .map(|field| match values.get(*field) {
                Some(value) if !value.is_empty() => Ok(value.as_str()),
                _ => Err(RegistryError::MissingValue {
                    kind: self.key(),
                    field: *field,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format_segments(self.segments, &ordered))
    }

    /// An ID built from the example value of every segment.
    pub fn example_id(&self) -> String {
        example_id(self.segments)
    }

    /// Runs the template consistency checks.
    pub fn check(&self) -> Result<(), RegistryError> {
        check_template(self.resource, self.segments, self.fields)?;
        Ok(())
    }
}

macro_rules! kind {
    ($provider:literal, $version:literal, $package:literal, $($path:ident)::+) => {
        ResourceKind::of::<$($path)::+>($provider, $version, $package, last_ident!($($path)::+))
    };
}

macro_rules! last_ident {
    ($head:ident :: $($rest:ident)::+) => {
        last_ident!($($rest)::+)
    };
    ($last:ident) => {
        stringify!($last)
    };
}

static KINDS: &[ResourceKind] = &[
    kind!("commonids", "", "", commonids::SubscriptionId),
    kind!("commonids", "", "", commonids::ResourceGroupId),
    kind!("commonids", "", "", commonids::ManagementGroupId),
    kind!("commonids", "", "", commonids::SqlServerId),
    kind!("commonids", "", "", commonids::SqlManagedInstanceId),
    kind!("commonids", "", "", commonids::SqlManagedInstanceDatabaseId),
    kind!("commonids", "", "", commonids::AppServiceId),
    kind!("commonids", "", "", commonids::AppServiceEnvironmentId),
    kind!("apimanagement", "2021-08-01", "contenttype", apimanagement::v2021_08_01::contenttype::ContentTypeId),
    kind!("apimanagement", "2021-08-01", "quotabycounterkeys", apimanagement::v2021_08_01::quotabycounterkeys::QuotaId),
    kind!("apimanagement", "2023-03-01-preview", "apischema", apimanagement::v2023_03_01_preview::apischema::WorkspaceApiId),
    kind!(
        "apimanagement",
        "2023-03-01-preview",
        "authorizationconfirmconsentcode",
        apimanagement::v2023_03_01_preview::authorizationconfirmconsentcode::AuthorizationId
    ),
    kind!("apimanagement", "2023-03-01-preview", "productgrouplink", apimanagement::v2023_03_01_preview::productgrouplink::ProductId),
    kind!("apimanagement", "2023-03-01-preview", "productgrouplink", apimanagement::v2023_03_01_preview::productgrouplink::GroupLinkId),
    kind!("apimanagement", "2023-03-01-preview", "tagapilink", apimanagement::v2023_03_01_preview::tagapilink::TagId),
    kind!("apimanagement", "2023-03-01-preview", "tagproductlink", apimanagement::v2023_03_01_preview::tagproductlink::TagProductLinkId),
    kind!("apimanagement", "2023-03-01-preview", "tenantconfiguration", apimanagement::v2023_03_01_preview::tenantconfiguration::ServiceId),
    kind!("apimanagement", "2023-03-01-preview", "workspacepolicy", apimanagement::v2023_03_01_preview::workspacepolicy::WorkspaceId),
    kind!(
        "applicationinsights",
        "2015-05-01",
        "componentcontinuousexportapis",
        applicationinsights::v2015_05_01::componentcontinuousexportapis::ExportConfigurationId
    ),
    kind!(
        "compute",
        "2023-03-01",
        "virtualmachinescalesetvmextensions",
        compute::v2023_03_01::virtualmachinescalesetvmextensions::VirtualMachineExtensionId
    ),
    kind!("connectedvmware", "2023-10-01", "hosts", connectedvmware::v2023_10_01::hosts::HostId),
    kind!(
        "dashboard",
        "2023-09-01",
        "managedprivateendpoints",
        dashboard::v2023_09_01::managedprivateendpoints::ManagedPrivateEndpointId
    ),
    kind!("datafactory", "2018-06-01", "changedatacapture", datafactory::v2018_06_01::changedatacapture::AdfcdcId),
    kind!("datafactory", "2018-06-01", "pipelineruns", datafactory::v2018_06_01::pipelineruns::PipelineRunId),
    kind!("datafactory", "2018-06-01", "pipelines", datafactory::v2018_06_01::pipelines::FactoryId),
    kind!("datashare", "2019-11-01", "trigger", datashare::v2019_11_01::trigger::TriggerId),
    kind!("devtestlab", "2018-09-15", "servicerunners", devtestlab::v2018_09_15::servicerunners::ServiceRunnerId),
    kind!("elasticsan", "2023-01-01", "snapshots", elasticsan::v2023_01_01::snapshots::VolumeGroupId),
    kind!("elasticsan", "2023-01-01", "snapshots", elasticsan::v2023_01_01::snapshots::SnapshotId),
    kind!(
        "eventhub",
        "2022-01-01-preview",
        "namespacesnetworksecurityperimeterconfigurations",
        eventhub::v2022_01_01_preview::namespacesnetworksecurityperimeterconfigurations::NetworkSecurityPerimeterConfigurationId
    ),
    kind!(
        "insights",
        "2021-05-01-preview",
        "managementgroupdiagnosticsettings",
        insights::v2021_05_01_preview::managementgroupdiagnosticsettings::Providers2DiagnosticSettingId
    ),
    kind!(
        "machinelearningservices",
        "2023-10-01",
        "onlinedeployment",
        machinelearningservices::v2023_10_01::onlinedeployment::OnlineEndpointDeploymentId
    ),
    kind!("marketplaceordering", "2021-01-01", "agreements", marketplaceordering::v2021_01_01::agreements::PlanId),
    kind!("sql", "2021-11-01", "jobtargetgroups", sql::v2021_11_01::jobtargetgroups::JobAgentId),
    kind!("sql", "2023-02-01-preview", "databasetables", sql::v2023_02_01_preview::databasetables::SchemaId),
    kind!("vmware", "2022-05-01", "workloadnetworks", vmware::v2022_05_01::workloadnetworks::DnsZoneId),
    kind!("vmware", "2023-03-01", "workloadnetworks", vmware::v2023_03_01::workloadnetworks::PrivateCloudId),
    kind!("vmware", "2023-03-01", "workloadnetworks", vmware::v2023_03_01::workloadnetworks::DhcpConfigurationId),
    kind!("web", "2022-09-01", "appserviceenvironments", web::v2022_09_01::appserviceenvironments::WorkerPoolId),
    kind!("web", "2022-09-01", "diagnostics", web::v2022_09_01::diagnostics::AnalysisId),
    kind!("web", "2022-09-01", "webapps", web::v2022_09_01::webapps::SlotId),
    kind!("web", "2022-09-01", "webapps", web::v2022_09_01::webapps::SlotTriggeredWebJobId),
    kind!("web", "2023-01-01", "deletedwebapps", web::v2023_01_01::deletedwebapps::LocationDeletedSiteId),
    kind!("web", "2023-01-01", "webapps", web::v2023_01_01::webapps::SlotNetworkFeatureId),
];

/// Every declared kind, shared IDs first, then by provider.
pub fn kinds() -> &'static [ResourceKind] {
    KINDS
}

/// Looks a kind up by its key, ignoring ASCII case.
///
/// A bare type name (`SnapshotId`) is accepted when it is unambiguous.
pub fn find(key: &str) -> Result<&'static ResourceKind, RegistryError> {
    if let Some(kind) = KINDS.iter().find(|k| k.key().eq_ignore_ascii_case(key)) {
        return Ok(kind);
    }

    let mut by_name = KINDS.iter().filter(|k| k.type_name.eq_ignore_ascii_case(key));
    match (by_name.next(), by_name.next()) {
        (Some(kind), None) => Ok(kind),
        _ => Err(RegistryError::UnknownKind(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<String> = kinds().iter().map(|k| k.key().to_lowercase()).collect();
        keys.sort();
        let total = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_key_format() {
        let kind = find("elasticsan/2023-01-01/snapshots/SnapshotId").unwrap();
        assert_eq!(kind.resource, "Snapshot");
        assert_eq!(kind.type_name, "SnapshotId");

        let kind = find("commonids/subscriptionid").unwrap();
        assert_eq!(kind.key(), "commonids/SubscriptionId");
    }

    #[test]
    fn test_find_by_type_name() {
        assert_eq!(find("planid").unwrap().provider, "marketplaceordering");
        assert!(matches!(
            find("NoSuchId"),
            Err(RegistryError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_parse_returns_fields_in_order() {
        let kind = find("commonids/ResourceGroupId").unwrap();
        let values = kind
            .parse("/subscriptions/sub/resourceGroups/rg", false)
            .unwrap();
        assert_eq!(
            values,
            vec![
                ("subscriptionId", "sub".to_string()),
                ("resourceGroupName", "rg".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_error_is_surfaced() {
        let kind = find("commonids/ResourceGroupId").unwrap();
        let err = kind.parse("/subscriptions/sub", false).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_format_requires_every_field() {
        let kind = find("commonids/ResourceGroupId").unwrap();
        let mut values = BTreeMap::new();
        values.insert("subscriptionId".to_string(), "sub".to_string());

        let err = kind.format(&values).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingValue { field: "resourceGroupName", .. }
        ));

        values.insert("resourceGroupName".to_string(), "rg".to_string());
        assert_eq!(
            kind.format(&values).unwrap(),
            "/subscriptions/sub/resourceGroups/rg"
        );

        values.insert("bogus".to_string(), "x".to_string());
        assert!(matches!(
            kind.format(&values),
            Err(RegistryError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_example_id_parses() {
        for kind in kinds() {
            let example = kind.example_id();
            assert!(kind.parse(&example, false).is_ok(), "{}", kind.key());
        }
    }
}
