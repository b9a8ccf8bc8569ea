//! The static chain registry bundled with the application.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::asset::Asset;
use crate::chain::Chain;

const BUNDLED_REGISTRY: &str = include_str!("../data/chain_registry.json");

/// An error raised while loading the registry or resolving the configured chain.
///
/// Both variants are startup-time misconfigurations; nothing at runtime
/// recovers from them.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The registry document could not be parsed.
    #[error("malformed chain registry: {0}")]
    Malformed(#[from] serde_json::Error),
    /// No chain with the requested name is listed.
    #[error("chain `{0}` is not listed in the registry")]
    UnknownChain(String),
}

/// The assets listed for one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainAssets {
    pub chain_name: String,
    pub assets: Vec<Asset>,
}

/// Read-only catalog of chains and their assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    chains: Vec<Chain>,
    assets: Vec<ChainAssets>,
}

impl Catalog {
    /// Parses the registry compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_REGISTRY)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn chain(&self, chain_name: &str) -> Result<&Chain, CatalogError> {
        self.chains
            .iter()
            .find(|chain| chain.chain_name == chain_name)
            .ok_or_else(|| CatalogError::UnknownChain(chain_name.to_string()))
    }

    /// Returns the assets of `chain_name`, or an empty slice when the chain
    /// has no asset list.
    pub fn chain_assets(&self, chain_name: &str) -> &[Asset] {
        self.assets
            .iter()
            .find(|list| list.chain_name == chain_name)
            .map(|list| list.assets.as_slice())
            .unwrap_or_default()
    }
}
