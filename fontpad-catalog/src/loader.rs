//! Best-effort catalog loading.
//!
//! One fetch at startup, from a local file or an HTTP(S) URL. There is no
//! retry and no partial recovery: any failure (missing file, network error,
//! non-success status, malformed body) is logged and mapped to the empty
//! catalog, which the editor treats as a valid degraded state.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

use crate::catalog::FontCatalog;

/// Default relative location of the catalog resource.
pub const DEFAULT_CATALOG_PATH: &str = "fonts.json";

/// Global timeout for the catalog fetch (30 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum catalog body size (10 MB) to bound memory on a misbehaving server.
const MAX_CATALOG_SIZE: u64 = 10 * 1024 * 1024;

/// Where the catalog resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a user-supplied source string: `http`/`https` URLs fetch
    /// over the network, anything else is a filesystem path.
    pub fn parse(raw: &str) -> Self {
        if let Ok(parsed) = url::Url::parse(raw)
            && matches!(parsed.scheme(), "http" | "https")
        {
            return Self::Url(raw.to_string());
        }
        Self::File(PathBuf::from(raw))
    }

    /// The default source: `fonts.json` next to the working directory.
    pub fn default_location() -> Self {
        Self::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load the catalog from `source`, degrading to the empty catalog on any
/// failure. Never fails; failures are reported through the log.
pub fn load_catalog(source: &CatalogSource) -> FontCatalog {
    let body = match source {
        CatalogSource::File(path) => read_file(path),
        CatalogSource::Url(url) => fetch_url(url),
    };

    let body = match body {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Failed to load font catalog from {source}: {e}");
            return FontCatalog::default();
        }
    };

    match FontCatalog::from_json(&body) {
        Ok(catalog) => {
            log::info!("Loaded font catalog from {source}: {} families", catalog.len());
            catalog
        }
        Err(e) => {
            log::warn!("Failed to parse font catalog from {source}: {e}");
            FontCatalog::default()
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

fn fetch_url(url: &str) -> Result<String, String> {
    agent()
        .get(url)
        .header("User-Agent", "fontpad")
        .header("Accept", "application/json")
        .call()
        .map_err(|e| format!("request failed: {e}"))?
        .into_body()
        .with_config()
        .limit(MAX_CATALOG_SIZE)
        .read_to_string()
        .map_err(|e| format!("failed to read response body: {e}"))
}

/// Create the HTTP agent configured with native-tls and a global timeout.
fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}
