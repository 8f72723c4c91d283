// Well-known defaults and lookup keys used across the crate.

use std::time::Duration;

/// Placeholder reported when no source can produce a value.
pub const UNKNOWN: &str = "unknown";

/// Version reported when neither the manifest nor the embedded table has one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Hard deadline for a single external probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Manifest table consulted for package identity fields.
pub const MANIFEST_TABLE: &str = "package";

/// Keys looked up inside [`MANIFEST_TABLE`].
pub mod manifest_keys {
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
}

/// Working-tree states reported by the status probe.
pub mod tree_state {
    pub const CLEAN: &str = "clean";
    pub const DIRTY: &str = "dirty";
}
