//! Microsoft.Dashboard (Managed Grafana)

pub mod v2023_09_01;
