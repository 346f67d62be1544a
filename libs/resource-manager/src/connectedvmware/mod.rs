//! Microsoft.ConnectedVMwarevSphere

pub mod v2023_10_01;
