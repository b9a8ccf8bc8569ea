use serde::Deserialize;
use serde::Serialize;

/// A chain entry of the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub chain_name: String,
    pub pretty_name: String,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub bech32_prefix: Option<String>,
}
