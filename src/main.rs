// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! OpenTTD version resolver - Main Application
//!
//! Resolves the current OpenTTD build for a release channel from the CDN
//! manifest and exports it as KEY=value lines, either on stdout or appended
//! to the CI platform's output file.

use std::process::exit;

use clap::Parser;
use tracing::debug;

use openttd_version::config::CHANNEL_ENV;
use openttd_version::logging::init_tracing;
use openttd_version::{
    Config, HttpManifestSource, OutputTarget, Profile, emit, resolve_from_source, select_channel,
};

mod cli;

use cli::{Cli, ProfileArg};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle errors by printing to stderr and exiting with non-zero status
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        exit(1);
    }
}

/// Read a non-empty environment variable
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Semver => Profile::Semver,
            ProfileArg::Legacy => Profile::Legacy,
        }
    }
}

fn build_config(cli: Cli) -> openttd_version::Result<Config> {
    let profile = Profile::from(cli.profile);
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "openttd-version".to_string());

    let channel = select_channel(
        env_value(CHANNEL_ENV),
        cli.channel,
        &profile.ladder(),
        &program,
    )?;

    Ok(Config {
        channel,
        profile,
        category: cli.category,
        manifest_url: cli.manifest_url,
        insecure: cli.insecure,
        output: OutputTarget::from_env(env_value),
    })
}

fn run(cli: Cli) -> openttd_version::Result<()> {
    let config = build_config(cli)?;
    debug!("Configuration: {config:?}");

    let source = HttpManifestSource::new(&config.manifest_url, config.insecure);
    let resolved = resolve_from_source(&source, &config)?;

    let pairs = config.profile.output_fields().key_values(&resolved);
    emit(&pairs, &config.output)
}
