// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Channel resolution against the manifest

use tracing::{debug, info};

use crate::config::Config;
use crate::decode::ResolvedVersion;
use crate::error::{Error, Result};
use crate::manifest::{ManifestSource, VersionRecord, load_manifest};
use crate::stability::StabilityLadder;

/// Default product category eligible for resolution
pub const DEFAULT_CATEGORY: &str = "openttd";

/// Find the build to use for a requested channel
///
/// Acceptable levels are tried least stable first; within a level the first
/// record in manifest order for `category` wins. Duplicate entries after the
/// first are ignored.
///
/// # Errors
/// Returns `Error::NoAcceptableVersion` if no record in `category` matches
/// the requested channel or any more stable level
///
/// # Examples
/// ```
/// use openttd_version::manifest::VersionRecord;
/// use openttd_version::resolver::resolve;
/// use openttd_version::stability::StabilityLadder;
///
/// let record = |version: &str, name: &str| VersionRecord {
///     version: version.to_string(),
///     name: name.to_string(),
///     category: "openttd".to_string(),
///     date: String::new(),
///     folder: String::new(),
/// };
/// let records = vec![record("1.10.3", "stable"), record("20200412-testing-gabc123", "testing")];
///
/// let found = resolve(&records, &StabilityLadder::full(), "master", "openttd").unwrap();
/// assert_eq!(found.name, "testing");
/// ```
pub fn resolve<'a>(
    records: &'a [VersionRecord],
    ladder: &StabilityLadder,
    channel: &str,
    category: &str,
) -> Result<&'a VersionRecord> {
    for level in ladder.acceptable_levels(channel) {
        debug!("Looking for a {category} build on {level}");

        if let Some(record) = records
            .iter()
            .find(|record| record.category == category && record.name == level.as_str())
        {
            return Ok(record);
        }
    }

    Err(Error::NoAcceptableVersion {
        channel: channel.to_string(),
        category: category.to_string(),
    })
}

/// Load the manifest from `source` and resolve the configured channel
///
/// # Errors
/// Returns any manifest error from [`load_manifest`] or
/// `Error::NoAcceptableVersion` from [`resolve`]
pub fn resolve_from_source(
    source: &dyn ManifestSource,
    config: &Config,
) -> Result<ResolvedVersion> {
    let records = load_manifest(source)?;
    let ladder = config.profile.ladder();

    let record = resolve(&records, &ladder, &config.channel, &config.category)?;
    let resolved = ResolvedVersion::from_record(record);

    info!(
        "Resolved {} to {} ({})",
        config.channel, resolved.version, record.name
    );
    Ok(resolved)
}
