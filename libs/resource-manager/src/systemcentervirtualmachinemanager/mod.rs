//! Microsoft.ScVmm

pub mod v2023_10_07;
