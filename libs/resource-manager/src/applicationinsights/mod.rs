//! Microsoft.Insights (Application Insights components)

pub mod v2015_05_01;
