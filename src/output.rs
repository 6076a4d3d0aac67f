// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! KEY=value export of a resolved version
//!
//! Lines go either to stdout or are appended to a file that the CI platform
//! reads back as step outputs (e.g. `$GITHUB_OUTPUT`).

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::decode::ResolvedVersion;
use crate::error::{Error, Result};

/// Explicit output file for the plugin
pub const OUTPUT_FILE_ENV: &str = "PLUGIN_OUTPUT_FILE";
/// Set to "true" when running inside GitHub Actions
pub const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";
/// Step output file provided by GitHub Actions
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Single variable written by the legacy profile
pub const LEGACY_VERSION_KEY: &str = "OPENTTD_VERSION";

/// Set of keys exported for a resolved version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFields {
    /// `version` plus `semver_major`, `semver_minor` and `semver_patch` when
    /// the identifier is a semantic version
    Semver,
    /// `OPENTTD_VERSION` only
    Legacy,
}

impl OutputFields {
    /// Key/value pairs to export, in output order
    ///
    /// # Examples
    /// ```
    /// use openttd_version::decode::ResolvedVersion;
    /// use openttd_version::output::OutputFields;
    ///
    /// let resolved = ResolvedVersion { version: "gabc123".to_string(), semver: None };
    /// assert_eq!(
    ///     OutputFields::Semver.key_values(&resolved),
    ///     vec![("version", "gabc123".to_string())]
    /// );
    /// ```
    #[must_use]
    pub fn key_values(self, resolved: &ResolvedVersion) -> Vec<(&'static str, String)> {
        match self {
            OutputFields::Legacy => vec![(LEGACY_VERSION_KEY, resolved.version.clone())],
            OutputFields::Semver => {
                let mut pairs = vec![("version", resolved.version.clone())];
                if let Some(semver) = &resolved.semver {
                    pairs.push(("semver_major", semver.major.to_string()));
                    pairs.push(("semver_minor", semver.minor.to_string()));
                    pairs.push(("semver_patch", semver.patch.to_string()));
                }
                pairs
            }
        }
    }
}

/// Where the KEY=value lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Pick the output target from environment variables
    ///
    /// `PLUGIN_OUTPUT_FILE` wins. Inside GitHub Actions `GITHUB_OUTPUT` is used
    /// instead; if Actions does not provide it, an `::error::` workflow command
    /// is printed and output falls back to stdout. Empty values count as
    /// unset.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(path) = lookup(OUTPUT_FILE_ENV) {
            return Self::File(PathBuf::from(path));
        }

        if lookup(GITHUB_ACTIONS_ENV).as_deref() == Some("true") {
            match lookup(GITHUB_OUTPUT_ENV) {
                Some(path) => return Self::File(PathBuf::from(path)),
                None => {
                    warn!("running in GitHub Actions without {GITHUB_OUTPUT_ENV}");
                    println!("::error::No Github Actions Environment file value");
                }
            }
        }

        Self::Stdout
    }
}

/// Write pairs as `KEY=value` lines
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_pairs<W: Write>(writer: &mut W, pairs: &[(&str, String)]) -> io::Result<()> {
    for (key, value) in pairs {
        writeln!(writer, "{key}={value}")?;
    }
    Ok(())
}

fn append_to_file(path: &Path, pairs: &[(&str, String)]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_pairs(&mut file, pairs)?;
    file.sync_all()
}

/// Emit pairs to the chosen target
///
/// Files are created if missing and appended to, then synced to disk.
///
/// # Errors
/// Returns `Error::OutputWrite` if the file cannot be opened, written or
/// synced, or `Error::Stdout` if stdout is closed
pub fn emit(pairs: &[(&str, String)], target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            write_pairs(&mut stdout, pairs)
                .and_then(|()| stdout.flush())
                .map_err(Error::Stdout)
        }
        OutputTarget::File(path) => {
            debug!("Writing {} outputs to {}", pairs.len(), path.display());
            append_to_file(path, pairs).map_err(|source| Error::OutputWrite {
                path: path.clone(),
                source,
            })
        }
    }
}
