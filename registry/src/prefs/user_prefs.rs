use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

/// Which option field the shell's asset search matches against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, Display, EnumString, strum::EnumIs)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AssetSearchField {
    /// The asset symbol.
    #[default]
    Label,
    /// The asset name.
    Value,
}

/// Represents all user prefs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    chain_name: String,
    initial_asset_count: usize,
    search_field: AssetSearchField,
}

impl UserPrefs {
    pub const DEFAULT_CHAIN: &'static str = "osmosis";
    pub const DEFAULT_INITIAL_ASSET_COUNT: usize = 2;

    /// Creates the prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `ASSET_CHAIN`: registry name of the chain to browse.
    /// - `INITIAL_ASSET_COUNT`: number of assets the list starts with.
    /// - `ASSET_SEARCH_KEY`: "label" or "value".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`UserPrefs::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let chain_name = lookup("ASSET_CHAIN")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_CHAIN.to_string());

        Self {
            chain_name,
            initial_asset_count: parse_or("INITIAL_ASSET_COUNT", &lookup, Self::DEFAULT_INITIAL_ASSET_COUNT),
            search_field: parse_or("ASSET_SEARCH_KEY", &lookup, AssetSearchField::default()),
        }
    }

    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    pub fn initial_asset_count(&self) -> usize {
        self.initial_asset_count
    }

    pub fn search_field(&self) -> AssetSearchField {
        self.search_field
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring unparseable {key}={raw:?}");
            default
        }),
        None => default,
    }
}
