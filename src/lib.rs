pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use adapters::{
    memory::{CatalogDataset, InMemoryCatalog},
    voucher::StaticVoucherCatalog,
};
pub use core::composer::OfferComposer;
pub use domain::model::Offer;
pub use utils::error::{OfferError, Result};
