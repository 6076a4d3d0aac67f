// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for openttd-version
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::{Parser, ValueEnum};

/// Profile selecting the stability ladder and exported fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// master, testing and stable; exports version and semver fields
    Semver,
    /// testing and stable; exports OPENTTD_VERSION
    Legacy,
}

/// CLI argument parser
#[derive(Parser)]
#[command(
    name = "openttd-version",
    version,
    about = "Resolve the current OpenTTD build for a release channel",
    long_about = "Resolve the current OpenTTD build for a release channel and export it as \
                  KEY=value lines for a CI step.\n\nThe channel is read from PLUGIN_CHANNEL \
                  first and from the positional argument otherwise. Output goes to \
                  PLUGIN_OUTPUT_FILE, or GITHUB_OUTPUT inside GitHub Actions, or stdout."
)]
pub struct Cli {
    /// Release channel to resolve (e.g. master, testing, stable)
    #[arg(value_name = "CHANNEL")]
    pub channel: Option<String>,

    /// Configuration profile selecting the stability ladder and output fields
    #[arg(
        long = "profile",
        env = "PLUGIN_PROFILE",
        value_name = "PROFILE",
        default_value = "semver",
        ignore_case = true
    )]
    pub profile: ProfileArg,

    /// Product category a manifest entry must belong to
    #[arg(
        long = "category",
        env = "PLUGIN_CATEGORY",
        value_name = "CATEGORY",
        default_value = "openttd"
    )]
    pub category: String,

    /// URL of the YAML version manifest
    #[arg(
        long = "manifest-url",
        env = "PLUGIN_MANIFEST_URL",
        value_name = "URL",
        default_value = "https://cdn.openttd.org/latest.yaml"
    )]
    pub manifest_url: String,

    /// Allow insecure TLS connections (skip certificate verification)
    #[arg(short = 'k', long = "insecure")]
    pub insecure: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,
}

