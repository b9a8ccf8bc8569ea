use std::ops::Deref;
use std::sync::Arc;

use registry::prefs::user_prefs::UserPrefs;
use registry::Asset;
use registry::Catalog;
use registry::CatalogError;
use registry::Chain;

/// Data loaded once at startup and never changed afterwards.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub catalog: Catalog,
    /// The configured chain, resolved against the catalog.
    pub chain: Chain,
    pub prefs: UserPrefs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    /// Loads the bundled catalog and resolves the chain named in `prefs`.
    pub fn load(prefs: UserPrefs) -> Result<Self, CatalogError> {
        let catalog = Catalog::bundled()?;
        Self::new(catalog, prefs)
    }

    pub fn new(catalog: Catalog, prefs: UserPrefs) -> Result<Self, CatalogError> {
        let chain = catalog.chain(prefs.chain_name())?.clone();
        Ok(Self(Arc::new(AppStateData {
            catalog,
            chain,
            prefs,
        })))
    }

    pub fn chain_assets(&self, chain_name: &str) -> &[Asset] {
        self.catalog.chain_assets(chain_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(chain: &str) -> UserPrefs {
        let chain = chain.to_string();
        UserPrefs::from_lookup(move |key| (key == "ASSET_CHAIN").then(|| chain.clone()))
    }

    #[test]
    fn resolves_the_configured_chain() {
        let state = AppState::load(prefs("juno")).unwrap();
        assert_eq!(state.chain.pretty_name, "Juno");
        assert!(!state.chain_assets("juno").is_empty());
    }

    #[test]
    fn unknown_chain_fails_at_startup() {
        let err = AppState::load(prefs("atlantis")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownChain(_)));
    }
}
