// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Stability levels and the ladder used to pick acceptable release channels
//!
//! Levels are ordered from least to most stable. A requested channel accepts
//! itself and every more stable level, and the resolver tries them in that
//! order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Release maturity of a published build
///
/// The derived `Ord` is the resolution priority: declaration order runs from
/// least to most stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stability {
    /// Nightly builds from the development branch
    Master,
    /// Betas and release candidates
    Testing,
    /// Tagged releases
    Stable,
}

impl Stability {
    /// Every known level, least stable first
    pub const ALL: [Stability; 3] = [Stability::Master, Stability::Testing, Stability::Stable];

    /// Channel name as it appears in the manifest `name` field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Master => "master",
            Stability::Testing => "testing",
            Stability::Stable => "stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a channel name is not a known stability level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stability level: {0}")]
pub struct UnknownStability(pub String);

impl FromStr for Stability {
    type Err = UnknownStability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stability::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownStability(s.to_string()))
    }
}

/// Ordered set of stability levels a profile resolves against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityLadder {
    levels: Vec<Stability>,
}

impl StabilityLadder {
    /// Create a ladder from any set of levels
    ///
    /// The levels are sorted by stability and deduplicated, so the ladder is
    /// always monotonically increasing regardless of input order.
    pub fn new(levels: impl IntoIterator<Item = Stability>) -> Self {
        let mut levels: Vec<Stability> = levels.into_iter().collect();
        levels.sort_unstable();
        levels.dedup();
        Self { levels }
    }

    /// Ladder including nightly builds: master, testing, stable
    #[must_use]
    pub fn full() -> Self {
        Self::new(Stability::ALL)
    }

    /// Ladder of published releases only: testing, stable
    #[must_use]
    pub fn releases() -> Self {
        Self::new([Stability::Testing, Stability::Stable])
    }

    /// Levels on this ladder, least stable first
    #[must_use]
    pub fn levels(&self) -> &[Stability] {
        &self.levels
    }

    /// Levels that satisfy a requested channel, in the order to try them
    ///
    /// Returns the requested level followed by every more stable level on the
    /// ladder. A channel that is unknown or absent from this ladder yields an
    /// empty list.
    ///
    /// # Examples
    /// ```
    /// use openttd_version::stability::{Stability, StabilityLadder};
    ///
    /// let ladder = StabilityLadder::full();
    /// assert_eq!(
    ///     ladder.acceptable_levels("testing"),
    ///     vec![Stability::Testing, Stability::Stable]
    /// );
    /// assert!(ladder.acceptable_levels("nightly").is_empty());
    /// ```
    #[must_use]
    pub fn acceptable_levels(&self, requested: &str) -> Vec<Stability> {
        let Ok(requested) = requested.parse::<Stability>() else {
            debug!("channel {requested:?} is not a stability level");
            return Vec::new();
        };

        if !self.levels.contains(&requested) {
            debug!("channel {requested} is not on this ladder");
            return Vec::new();
        }

        self.levels
            .iter()
            .copied()
            .filter(|level| *level >= requested)
            .collect()
    }
}

impl fmt::Display for StabilityLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.levels.iter().map(|level| level.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}
