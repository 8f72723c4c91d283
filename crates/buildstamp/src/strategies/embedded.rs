// Embedded-metadata strategy: the compile-time table baked into the binary.

use crate::build_constants;
use crate::constants::UNKNOWN;
use crate::error::StrategyError;
use crate::resolver::Strategy;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Keys understood by [`EmbeddedMetadata`].
pub mod keys {
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const BUILD_TIME: &str = "build_time";
    pub const BUILD_MODE: &str = "build_mode";
    pub const TARGET: &str = "target";
    pub const GIT_BRANCH: &str = "git_branch";
    pub const GIT_COMMIT: &str = "git_commit";
    pub const GIT_STATUS: &str = "git_status";
    pub const RUSTC_VERSION: &str = "rustc_version";
    pub const CARGO_VERSION: &str = "cargo_version";
}

static EMBEDDED: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (keys::NAME, build_constants::PKG_NAME),
        (keys::VERSION, build_constants::PKG_VERSION),
        (keys::BUILD_TIME, build_constants::BUILD_TIME),
        (keys::BUILD_MODE, build_constants::BUILD_MODE),
        (keys::TARGET, build_constants::TARGET_TRIPLE),
        (keys::GIT_BRANCH, build_constants::GIT_BRANCH),
        (keys::GIT_COMMIT, build_constants::GIT_COMMIT),
        (keys::GIT_STATUS, build_constants::GIT_STATUS),
        (keys::RUSTC_VERSION, build_constants::RUSTC_VERSION),
        (keys::CARGO_VERSION, build_constants::CARGO_VERSION),
    ])
});

/// Looks a field up in the compile-time metadata table.
///
/// The build script substitutes "unknown" for anything it could not determine
/// (no git checkout, missing toolchain binary). Such placeholders are treated
/// as absent here so later strategies and caller defaults still apply.
pub struct EmbeddedMetadata {
    key: &'static str,
}

impl EmbeddedMetadata {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Strategy for EmbeddedMetadata {
    fn describe(&self) -> String {
        format!("embedded:{}", self.key)
    }

    fn attempt(&self) -> Result<String, StrategyError> {
        EMBEDDED
            .get(self.key)
            .copied()
            .filter(|value| !value.is_empty() && *value != UNKNOWN)
            .map(str::to_string)
            .ok_or_else(|| StrategyError::MissingEmbedded {
                key: self.key.to_string(),
            })
    }
}
