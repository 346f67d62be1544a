//! Microsoft.AVS

pub mod v2022_05_01;
pub mod v2023_03_01;
