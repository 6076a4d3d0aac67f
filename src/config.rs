// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Run configuration
//!
//! A [`Profile`] bundles the stability ladder and the exported field set, so
//! the nightly-aware semver export and the plain `OPENTTD_VERSION` export are
//! the same resolver with different settings.

use crate::error::{Error, Result};
use crate::manifest::DEFAULT_MANIFEST_URL;
use crate::output::{OutputFields, OutputTarget};
use crate::resolver::DEFAULT_CATEGORY;
use crate::stability::StabilityLadder;

/// Channel requested by the CI plugin
pub const CHANNEL_ENV: &str = "PLUGIN_CHANNEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// master, testing and stable; exports `version` and semver fields
    #[default]
    Semver,
    /// testing and stable; exports `OPENTTD_VERSION`
    Legacy,
}

impl Profile {
    #[must_use]
    pub fn ladder(self) -> StabilityLadder {
        match self {
            Profile::Semver => StabilityLadder::full(),
            Profile::Legacy => StabilityLadder::releases(),
        }
    }

    #[must_use]
    pub fn output_fields(self) -> OutputFields {
        match self {
            Profile::Semver => OutputFields::Semver,
            Profile::Legacy => OutputFields::Legacy,
        }
    }
}

/// Pick the requested channel
///
/// A non-empty `PLUGIN_CHANNEL` value takes precedence over the positional
/// argument.
///
/// # Errors
/// Returns `Error::Usage` listing the ladder's channels if neither is given
///
/// # Examples
/// ```
/// use openttd_version::config::select_channel;
/// use openttd_version::stability::StabilityLadder;
///
/// let ladder = StabilityLadder::full();
/// let channel = select_channel(Some("stable".into()), Some("testing".into()), &ladder, "prog");
/// assert_eq!(channel.unwrap(), "stable");
/// ```
pub fn select_channel(
    env_channel: Option<String>,
    arg_channel: Option<String>,
    ladder: &StabilityLadder,
    program: &str,
) -> Result<String> {
    env_channel
        .filter(|channel| !channel.is_empty())
        .or(arg_channel)
        .ok_or_else(|| Error::Usage {
            program: program.to_string(),
            channels: ladder.to_string(),
        })
}

/// Everything a single resolution run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub channel: String,
    pub profile: Profile,
    pub category: String,
    pub manifest_url: String,
    pub insecure: bool,
    pub output: OutputTarget,
}

impl Config {
    /// Configuration for a channel with every other setting at its default
    #[must_use]
    pub fn for_channel(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            profile: Profile::default(),
            category: DEFAULT_CATEGORY.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            insecure: false,
            output: OutputTarget::Stdout,
        }
    }
}
