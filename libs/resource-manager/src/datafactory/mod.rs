//! Microsoft.DataFactory

pub mod v2018_06_01;
