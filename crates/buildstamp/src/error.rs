// Failure taxonomy for metadata strategies.
//
// Every way a strategy can come up empty collapses into `StrategyError`. The
// resolver treats all variants identically; they exist so diagnostics can say
// what went wrong while the resolution falls through to the next strategy.

use std::time::Duration;

/// Why a single strategy yielded nothing.
///
/// Callers of [`crate::MetadataResolver::resolve`] never see this type:
/// resolution is total and substitutes a default instead of surfacing errors.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest exists but does not carry the requested entry.
    #[error("no '{key}' entry in table '[{table}]'")]
    MissingField { table: String, key: String },

    /// The compile-time table has no usable value for the key.
    #[error("no embedded value for '{key}'")]
    MissingEmbedded { key: String },

    /// The probe program could not be located or started.
    #[error("failed to launch '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// The probe ran but signalled failure.
    #[error("'{program}' exited with code {code}")]
    NonZeroExit { program: String, code: i32 },

    /// The probe overran its deadline and was killed.
    #[error("'{program}' did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    /// A runtime accessor had nothing to report.
    #[error("runtime accessor '{label}' produced no value")]
    Accessor { label: String },

    /// The source answered, but with an empty value.
    #[error("strategy produced an empty value")]
    Empty,
}
