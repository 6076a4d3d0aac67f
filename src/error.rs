// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error taxonomy for a single resolution run
//!
//! Every variant is fatal. Semantic version parse failures are not errors and
//! have no variant here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("usage: {program} <CHANNEL>\navailable channels: {channels}")]
    Usage { program: String, channels: String },

    #[error("failed to read manifest from {url}: {source}")]
    ManifestFetch {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("failed to read manifest from {url}: HTTP {status}")]
    ManifestStatus { url: String, status: u16 },

    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("no versions found in manifest - check CDN sanity")]
    EmptyManifest,

    #[error("no valid {category} versions found of stability {channel} or higher")]
    NoAcceptableVersion { channel: String, category: String },

    #[error("failed to write output to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
