//! Microsoft.Web

pub mod v2022_09_01;
pub mod v2023_01_01;
