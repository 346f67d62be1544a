//! Microsoft.MachineLearningServices

pub mod v2023_10_01;
