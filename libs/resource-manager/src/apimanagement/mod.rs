//! Microsoft.ApiManagement

pub mod v2021_08_01;
pub mod v2023_03_01_preview;
