// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version manifest types and sources
//!
//! The manifest is a YAML document with a `latest` list, one entry per
//! published build. It is fetched over HTTP in production and supplied
//! directly in tests through the [`ManifestSource`] trait.

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Default location of the OpenTTD CDN manifest
pub const DEFAULT_MANIFEST_URL: &str = "https://cdn.openttd.org/latest.yaml";

/// One published build listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRecord {
    /// Either a plain tag ("1.10.3") or "<date>-<stability>-g<hash>"
    pub version: String,
    /// Stability channel label (e.g. "master", "testing", "stable")
    pub name: String,
    /// Product this build belongs to (e.g. "openttd")
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub folder: String,
}

/// Parsed manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub latest: Vec<VersionRecord>,
}

impl Manifest {
    /// Parse a manifest from its YAML text
    ///
    /// A document without a `latest` key parses as an empty manifest.
    ///
    /// # Errors
    /// Returns `Error::ManifestParse` if the text is not a valid manifest
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Somewhere the raw manifest text can be read from
pub trait ManifestSource {
    /// Fetch the manifest document as text
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be retrieved
    fn fetch(&self) -> Result<String>;
}

/// Manifest served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    url: String,
    insecure: bool,
}

impl HttpManifestSource {
    #[must_use]
    pub fn new(url: impl Into<String>, insecure: bool) -> Self {
        Self {
            url: url.into(),
            insecure,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpManifestSource {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_URL, false)
    }
}

impl ManifestSource for HttpManifestSource {
    fn fetch(&self) -> Result<String> {
        debug!("Fetching manifest from: {}", self.url);

        let fetch_error = |source| Error::ManifestFetch {
            url: self.url.clone(),
            source,
        };

        let resp = attohttpc::get(&self.url)
            .header(
                "User-Agent",
                format!("openttd-version/{}", env!("CARGO_PKG_VERSION")),
            )
            .danger_accept_invalid_certs(self.insecure)
            .send()
            .map_err(fetch_error)?;

        if !resp.is_success() {
            return Err(Error::ManifestStatus {
                url: self.url.clone(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().map_err(fetch_error)
    }
}

/// Fetch and parse the manifest, rejecting one without any entries
///
/// # Errors
/// Returns the source's fetch error, `Error::ManifestParse` for malformed
/// YAML, or `Error::EmptyManifest` if no versions are listed
pub fn load_manifest(source: &dyn ManifestSource) -> Result<Vec<VersionRecord>> {
    let text = source.fetch()?;
    let manifest = Manifest::parse(&text)?;

    if manifest.latest.is_empty() {
        return Err(Error::EmptyManifest);
    }

    debug!("Manifest lists {} versions", manifest.latest.len());
    Ok(manifest.latest)
}
