//! Microsoft.Insights (diagnostic settings)

pub mod v2021_05_01_preview;
