//! Microsoft.Compute

pub mod v2023_03_01;
