// buildstamp: layered resolution of package and build metadata.
//
// A field's value is pulled from the first source in its fallback chain that
// can supply one: a project manifest, the table embedded at build time, an
// external tool, or the runtime environment. Sources are unreliable; a
// resolution never fails, it degrades to the caller's default.

pub mod build_constants;
pub mod constants;
pub mod error;
pub mod git;
pub mod process_runner;
pub mod report;
pub mod resolver;
pub mod strategies;

// ---------------------------------------------------------------------------
// Re-exports for convenient access
// ---------------------------------------------------------------------------

pub use error::StrategyError;
pub use process_runner::{ProbeOutput, ProcessRunner};
pub use report::{ReportOptions, VersionReport};
pub use resolver::{
    FieldQuery, MetadataResolver, ResolutionOutcome, ResolutionSource, Strategy,
};
pub use strategies::{CommandProbe, EmbeddedMetadata, ManifestField, RuntimeAccessor};
