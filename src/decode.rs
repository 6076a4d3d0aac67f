// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version string decoding
//!
//! CDN builds are named `<date>-<stability>-g<hash>`; tagged releases carry a
//! plain version such as `1.10.3`. This module turns either form into the
//! canonical identifier that is exported, and pulls semantic version fields
//! out of it when it has them.

use semver::Version;
use tracing::debug;

use crate::manifest::VersionRecord;

/// Extract the canonical identifier from a record's version string
///
/// A version with exactly three dash-separated fields yields its third field
/// (the `g<hash>` git descriptor) verbatim. Anything else is returned
/// unchanged.
///
/// # Examples
/// ```
/// use openttd_version::decode::decode_version_string;
/// assert_eq!(decode_version_string("20200412-master-g4bfa3ff619"), "g4bfa3ff619");
/// assert_eq!(decode_version_string("1.10.3"), "1.10.3");
/// ```
#[must_use]
pub fn decode_version_string(version: &str) -> &str {
    let parts: Vec<&str> = version.split('-').collect();
    match parts.as_slice() {
        [_, _, descriptor] => *descriptor,
        _ => version,
    }
}

/// Canonical identifier for a manifest record
#[must_use]
pub fn decode(record: &VersionRecord) -> &str {
    decode_version_string(&record.version)
}

/// Parse a canonical identifier as a semantic version
///
/// A leading `v` is ignored and partial versions are padded with zeros, so
/// "1.10" reads as 1.10.0. Git descriptors and other non-numeric identifiers
/// return `None`. Components with leading zeros such as "1.01.3" are
/// rejected, since strict semver does not allow them.
///
/// # Examples
/// ```
/// use openttd_version::decode::parse_semver;
/// let version = parse_semver("1.10.3").unwrap();
/// assert_eq!((version.major, version.minor, version.patch), (1, 10, 3));
/// assert!(parse_semver("g4bfa3ff619").is_none());
/// ```
#[must_use]
pub fn parse_semver(identifier: &str) -> Option<Version> {
    let identifier = identifier.strip_prefix('v').unwrap_or(identifier);

    // Only the core may be partial; pre-release and build suffixes stay as-is
    let split_at = identifier.find(['-', '+']).unwrap_or(identifier.len());
    let (core, suffix) = identifier.split_at(split_at);

    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => identifier.to_string(),
    };

    Version::parse(&normalized).ok()
}

/// Version selected for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Canonical identifier (git descriptor or release tag)
    pub version: String,
    /// Semantic version fields, when the identifier has them
    pub semver: Option<Version>,
}

impl ResolvedVersion {
    /// Decode a record into its exported form
    #[must_use]
    pub fn from_record(record: &VersionRecord) -> Self {
        let version = decode(record).to_string();
        let semver = parse_semver(&version);

        if semver.is_none() {
            debug!("{version} is not a semantic version, exporting identifier only");
        }

        Self { version, semver }
    }
}
