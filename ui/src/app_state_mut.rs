//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use registry::Asset;
use registry::AssetList;
use registry::Chain;

/// A reactive store provided as a Dioxus context.
///
/// Components read it through the selector methods, which subscribe them to
/// changes, and mutate it only through [`AppStateMut::add_asset_list`]. It is
/// separate from the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    selected_chain: Signal<Chain>,
    asset_list: Signal<AssetList>,
}

impl AppStateMut {
    pub fn new(selected_chain: Signal<Chain>, asset_list: Signal<AssetList>) -> Self {
        Self {
            selected_chain,
            asset_list,
        }
    }

    pub fn selected_chain(&self) -> Chain {
        self.selected_chain.cloned()
    }

    pub fn with_asset_list<O>(&self, f: impl FnOnce(&AssetList) -> O) -> O {
        self.asset_list.with(f)
    }

    /// Appends `asset` with a fresh mock balance. The append is a single
    /// signal write, so readers see the list either before or after it.
    pub fn add_asset_list(&mut self, asset: Asset) {
        let symbol = asset.symbol.clone();
        let len = self.asset_list.with_mut(|list| {
            list.add_asset(asset, &mut rand::thread_rng());
            list.len()
        });
        info!("added {} to the asset list ({} entries)", symbol, len);
    }
}
