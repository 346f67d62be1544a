//! Microsoft.DataShare

pub mod v2019_11_01;
