//! This crate contains the static chain registry and the UI-free data model
//! shared by all frontends.

pub mod asset;
pub mod asset_list;
pub mod asset_option;
pub mod catalog;
pub mod chain;
pub mod prefs;

pub use asset::Asset;
pub use asset::LogoUris;
pub use asset_list::AssetList;
pub use asset_list::AssetListItem;
pub use asset_option::AssetOption;
pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use chain::Chain;
