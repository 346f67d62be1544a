//! # arm-resource-manager
//!
//! Resource ID declarations and operation request descriptors for Azure
//! Resource Manager providers.
//!
//! ## Layout
//!
//! Modules follow `provider::api_version::package`, e.g.
//! [`elasticsan::v2023_01_01::snapshots`]. A package declares the typed IDs
//! its operations take (through [`arm_resourceids::define_resource_id!`])
//! and one function per operation returning a [`request::RequestOptions`].
//! IDs shared across providers live in [`arm_resourceids::commonids`].
//!
//! ## Example
//!
//! ```
//! use arm_resource_manager::elasticsan::v2023_01_01::snapshots::{self, SnapshotId};
//!
//! let id = SnapshotId::parse(
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group\
//!      /providers/Microsoft.ElasticSan/elasticSans/san/volumeGroups/vg/snapshots/nightly",
//! )
//! .unwrap();
//!
//! let request = snapshots::list_by_volume_group(&id.volume_group());
//! assert!(request.path.ends_with("/volumeGroups/vg/snapshots"));
//! ```
//!
//! [`registry`] lists every declared kind for tools that only learn the
//! kind at runtime.

pub mod registry;
pub mod request;

pub mod apimanagement;
pub mod applicationinsights;
pub mod compute;
pub mod connectedvmware;
pub mod dashboard;
pub mod datafactory;
pub mod datashare;
pub mod devtestlab;
pub mod elasticsan;
pub mod eventhub;
pub mod insights;
pub mod machinelearningservices;
pub mod marketplaceordering;
pub mod mixedreality;
pub mod sql;
pub mod systemcentervirtualmachinemanager;
pub mod vmware;
pub mod web;

pub use registry::{find, kinds, RegistryError, ResourceKind};
pub use request::{HttpMethod, OperationKind, RequestOptions, CONTENT_TYPE_JSON};
