//! Microsoft.DevTestLab

pub mod v2018_09_15;
