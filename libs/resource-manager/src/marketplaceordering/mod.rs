//! Microsoft.MarketplaceOrdering

pub mod v2021_01_01;
