//! Assets decorated for the asset search dropdown.

use crate::asset::Asset;
use crate::asset_list::AssetList;

/// Upper bound on the candidates offered by the add-asset dropdown.
pub const MAX_ASSET_OPTIONS: usize = 10;

/// An [`Asset`] decorated with the fields the search dropdown matches and
/// displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetOption {
    asset: Asset,
    /// The asset's symbol.
    pub label: String,
    /// The asset's name.
    pub value: String,
    pub icon_url: Option<String>,
}

impl AssetOption {
    pub fn from_asset(asset: Asset) -> Self {
        Self {
            label: asset.symbol.clone(),
            value: asset.name.clone(),
            icon_url: asset.icon_url().map(String::from),
            asset,
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Drops the UI-only fields and returns the underlying asset.
    pub fn into_asset(self) -> Asset {
        self.asset
    }
}

impl From<Asset> for AssetOption {
    fn from(asset: Asset) -> Self {
        Self::from_asset(asset)
    }
}

/// Builds the dropdown candidates for a chain.
///
/// Assets whose symbol already appears in `asset_list` are left out; the
/// survivors keep catalog order and at most `limit` of them are returned.
pub fn derive_asset_options(
    chain_assets: &[Asset],
    asset_list: &AssetList,
    limit: usize,
) -> Vec<AssetOption> {
    chain_assets
        .iter()
        .filter(|asset| !asset_list.contains_symbol(&asset.symbol))
        .take(limit)
        .cloned()
        .map(AssetOption::from_asset)
        .collect()
}
