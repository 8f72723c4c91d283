// Metadata baked in by the build script.
//
// Everything here degrades to "unknown" when the build environment could not
// supply a value (no git checkout, missing toolchain binary), so the crate
// builds identically from a tarball and from a working tree.

use crate::constants::UNKNOWN;

/// Package name from the manifest. Set by Cargo, always present.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version from the manifest. Set by Cargo, always present.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC timestamp of the build.
pub const BUILD_TIME: &str = match option_env!("BUILDSTAMP_BUILD_TIME") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Compile profile: "debug" or "release".
pub const BUILD_MODE: &str = match option_env!("BUILDSTAMP_BUILD_MODE") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Target triple the binary was built for.
pub const TARGET_TRIPLE: &str = match option_env!("BUILDSTAMP_TARGET_TRIPLE") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Branch the build was made from.
pub const GIT_BRANCH: &str = match option_env!("BUILDSTAMP_GIT_BRANCH") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Short commit hash the build was made from.
pub const GIT_COMMIT: &str = match option_env!("BUILDSTAMP_GIT_COMMIT") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Working-tree state at build time: "clean" or "dirty".
pub const GIT_STATUS: &str = match option_env!("BUILDSTAMP_GIT_STATUS") {
    Some(v) => v,
    None => UNKNOWN,
};

/// `rustc --version` of the building compiler.
pub const RUSTC_VERSION: &str = match option_env!("BUILDSTAMP_RUSTC_VERSION") {
    Some(v) => v,
    None => UNKNOWN,
};

/// `cargo --version` of the building tool.
pub const CARGO_VERSION: &str = match option_env!("BUILDSTAMP_CARGO_VERSION") {
    Some(v) => v,
    None => UNKNOWN,
};
