//! Registry assets and their icon resolution.

use serde::Deserialize;
use serde::Serialize;

/// Icon locations published for an asset, in the registry's wire format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoUris {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub jpeg: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// A token listed for a chain.
///
/// `symbol` is the display ticker, `name` is unique within a chain and is used
/// as the row key by the views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "logo_URIs")]
    pub logo_uris: Option<LogoUris>,
}

impl Asset {
    /// Returns the first non-empty icon uri, trying png, then jpeg, then svg.
    pub fn icon_url(&self) -> Option<&str> {
        let logos = self.logo_uris.as_ref()?;
        [&logos.png, &logos.jpeg, &logos.svg]
            .into_iter()
            .filter_map(|uri| uri.as_deref())
            .find(|uri| !uri.is_empty())
    }

    /// Like [`Asset::icon_url`], but yields an empty string when the asset has
    /// no usable icon.
    pub fn image_src(&self) -> String {
        self.icon_url().unwrap_or_default().to_string()
    }
}
