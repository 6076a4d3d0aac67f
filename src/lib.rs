// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! OpenTTD Version Resolution Library
//!
//! This library resolves the current OpenTTD build for a release channel from
//! the CDN version manifest, decodes its version string, and renders the
//! result as KEY=value pairs for a CI step.

pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod resolver;
pub mod stability;

// Re-export commonly used items at the crate root for convenience
pub use config::{Config, Profile, select_channel};
pub use decode::{ResolvedVersion, decode, decode_version_string, parse_semver};
pub use error::{Error, Result};
pub use manifest::{HttpManifestSource, Manifest, ManifestSource, VersionRecord, load_manifest};
pub use output::{OutputFields, OutputTarget, emit, write_pairs};
pub use resolver::{resolve, resolve_from_source};
pub use stability::{Stability, StabilityLadder};
