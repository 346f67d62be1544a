//! Microsoft.EventHub

pub mod v2022_01_01_preview;
