//! The user's asset list and its mock balances.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::asset::Asset;

/// An [`Asset`] in the user's list, decorated with a mock balance.
///
/// The balance strings are generated once, when the item is created.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetListItem {
    asset: Asset,
    pub img_src: String,
    pub token_amount: String,
    pub token_amount_price: String,
}

impl AssetListItem {
    /// Decorates `asset` with two independent amounts drawn below a shared
    /// random base of at most 100, each formatted with two decimals.
    pub fn from_asset<R: Rng + ?Sized>(asset: Asset, rng: &mut R) -> Self {
        let base = rng.gen::<f64>() * 100.0;
        let token_amount = format!("{:.2}", rng.gen::<f64>() * base);
        let token_amount_price = format!("{:.2}", rng.gen::<f64>() * base);

        Self {
            img_src: asset.image_src(),
            token_amount,
            token_amount_price,
            asset,
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn symbol(&self) -> &str {
        &self.asset.symbol
    }

    pub fn name(&self) -> &str {
        &self.asset.name
    }
}

/// Ordered list of assets the user has added; insertion order is display
/// order.
///
/// The list only grows. It does not reject duplicates, callers filter
/// candidates before adding them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetList(Vec<AssetListItem>);

impl AssetList {
    /// Seeds a list with `count` distinct assets picked at random from
    /// `chain_assets`. Asks for more than the chain has yield every asset once.
    pub fn sample<R: Rng + ?Sized>(chain_assets: &[Asset], count: usize, rng: &mut R) -> Self {
        let picked: Vec<Asset> = chain_assets.choose_multiple(rng, count).cloned().collect();

        let mut list = Self::default();
        for asset in picked {
            list.add_asset(asset, rng);
        }
        list
    }

    /// Appends `asset` with a freshly generated mock balance.
    pub fn add_asset<R: Rng + ?Sized>(&mut self, asset: Asset, rng: &mut R) {
        self.0.push(AssetListItem::from_asset(asset, rng));
    }

    pub fn items(&self) -> &[AssetListItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AssetListItem::symbol)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbols().any(|s| s == symbol)
    }
}

impl<'a> IntoIterator for &'a AssetList {
    type Item = &'a AssetListItem;
    type IntoIter = std::slice::Iter<'a, AssetListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
