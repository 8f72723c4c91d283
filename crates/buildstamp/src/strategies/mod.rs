// Strategy implementations over the external metadata sources.

pub mod command;
pub mod embedded;
pub mod manifest;
pub mod runtime;

pub use command::CommandProbe;
pub use embedded::EmbeddedMetadata;
pub use manifest::ManifestField;
pub use runtime::RuntimeAccessor;
