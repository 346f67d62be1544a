//! Microsoft.Sql

pub mod v2021_11_01;
pub mod v2023_02_01_preview;
