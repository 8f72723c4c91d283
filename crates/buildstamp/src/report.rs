// Version report assembly and rendering.
//
// Each field of the report is resolved through its own fallback chain; the
// chains are fixed here, the resolver only executes them. Identity fields
// prefer the manifest, source-control fields prefer a live probe over the
// value embedded at build time, and everything else comes from the embedded
// table.

use crate::constants::{
    manifest_keys, DEFAULT_PROBE_TIMEOUT, DEFAULT_VERSION, MANIFEST_TABLE, UNKNOWN,
};
use crate::git::{self, TreeStateProbe};
use crate::resolver::{FieldQuery, MetadataResolver};
use crate::strategies::embedded::keys as embedded_keys;
use crate::strategies::{CommandProbe, EmbeddedMetadata, ManifestField, RuntimeAccessor};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Where to look and how long to wait.
///
/// All discovery is explicit: nothing is inferred from the binary's install
/// location.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Manifest consulted first for the package name and version; `None`
    /// skips the manifest strategies entirely.
    pub manifest_path: Option<PathBuf>,
    /// Directory the source-control probes run in; `None` inherits the
    /// caller's working directory.
    pub workdir: Option<PathBuf>,
    /// Hard deadline for each external probe.
    pub probe_timeout: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            manifest_path: None,
            workdir: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// A fully resolved metadata snapshot.
///
/// Every field holds a value; fields no source could supply hold "unknown"
/// (the version falls back to "0.0.0").
#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub name: String,
    pub version: String,
    pub build_time: String,
    pub build_mode: String,
    pub platform: String,
    pub git_branch: String,
    pub git_commit: String,
    pub git_status: String,
    pub rustc_version: String,
    pub cargo_version: String,
}

impl VersionReport {
    /// Resolve every field through its fallback chain.
    pub fn collect(options: &ReportOptions) -> Self {
        let workdir = options.workdir.as_deref();
        let timeout = options.probe_timeout;

        let name = MetadataResolver::resolve(
            &identity_query(options, manifest_keys::NAME, embedded_keys::NAME),
            UNKNOWN,
        );
        let version = MetadataResolver::resolve(
            &identity_query(options, manifest_keys::VERSION, embedded_keys::VERSION),
            DEFAULT_VERSION,
        );

        let git_branch = MetadataResolver::resolve(
            &FieldQuery::new("git_branch")
                .with_strategy(git::branch_probe(workdir, timeout))
                .with_strategy(EmbeddedMetadata::new(embedded_keys::GIT_BRANCH)),
            UNKNOWN,
        );
        let git_commit = MetadataResolver::resolve(
            &FieldQuery::new("git_commit")
                .with_strategy(git::commit_probe(workdir, timeout))
                .with_strategy(EmbeddedMetadata::new(embedded_keys::GIT_COMMIT)),
            UNKNOWN,
        );
        let git_status = MetadataResolver::resolve(
            &FieldQuery::new("git_status")
                .with_strategy(TreeStateProbe::new(workdir, timeout))
                .with_strategy(EmbeddedMetadata::new(embedded_keys::GIT_STATUS)),
            UNKNOWN,
        );

        let build_time = MetadataResolver::resolve(
            &FieldQuery::new("build_time")
                .with_strategy(EmbeddedMetadata::new(embedded_keys::BUILD_TIME)),
            UNKNOWN,
        );
        let build_mode = MetadataResolver::resolve(
            &FieldQuery::new("build_mode")
                .with_strategy(EmbeddedMetadata::new(embedded_keys::BUILD_MODE)),
            UNKNOWN,
        );

        // Target triple of the build, with the running process as a coarse
        // fallback when the build environment never recorded one.
        let platform = MetadataResolver::resolve(
            &FieldQuery::new("platform")
                .with_strategy(EmbeddedMetadata::new(embedded_keys::TARGET))
                .with_strategy(RuntimeAccessor::new("runtime:os-arch", || {
                    Some(format!(
                        "{}-{}",
                        std::env::consts::ARCH,
                        std::env::consts::OS
                    ))
                })),
            UNKNOWN,
        );

        // Toolchain versions prefer what actually built the binary; a live
        // query only stands in when nothing was embedded.
        let rustc_version = MetadataResolver::resolve(
            &FieldQuery::new("rustc_version")
                .with_strategy(EmbeddedMetadata::new(embedded_keys::RUSTC_VERSION))
                .with_strategy(tool_probe("rustc", workdir, timeout)),
            UNKNOWN,
        );
        let cargo_version = MetadataResolver::resolve(
            &FieldQuery::new("cargo_version")
                .with_strategy(EmbeddedMetadata::new(embedded_keys::CARGO_VERSION))
                .with_strategy(tool_probe("cargo", workdir, timeout)),
            UNKNOWN,
        );

        Self {
            name: name.value,
            version: version.value,
            build_time: build_time.value,
            build_mode: build_mode.value,
            platform: platform.value,
            git_branch: git_branch.value,
            git_commit: git_commit.value,
            git_status: git_status.value,
            rustc_version: rustc_version.value,
            cargo_version: cargo_version.value,
        }
    }

    /// Multi-line, sectioned summary.
    pub fn detailed(&self) -> String {
        format!(
            "{} {}\n\n\
             Build Information:\n\
             \x20 Build Time: {}\n\
             \x20 Build Mode: {}\n\
             \x20 Platform: {}\n\n\
             Version Control:\n\
             \x20 Git Branch: {}\n\
             \x20 Git Commit: {}\n\
             \x20 Git Status: {}\n\n\
             Toolchain:\n\
             \x20 Rustc: {}\n\
             \x20 Cargo: {}",
            self.name,
            self.version,
            self.build_time,
            self.build_mode,
            self.platform,
            self.git_branch,
            self.git_commit,
            self.git_status,
            self.rustc_version,
            self.cargo_version,
        )
    }

    /// One-line summary.
    pub fn short(&self) -> String {
        format!(
            "{} version {}, build {}",
            self.name, self.version, self.git_commit
        )
    }
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detailed())
    }
}

/// Version number only, resolved through the same chain the report uses.
pub fn resolved_version(options: &ReportOptions) -> String {
    MetadataResolver::resolve(
        &identity_query(options, manifest_keys::VERSION, embedded_keys::VERSION),
        DEFAULT_VERSION,
    )
    .value
}

fn identity_query(
    options: &ReportOptions,
    manifest_key: &str,
    embedded_key: &'static str,
) -> FieldQuery {
    let mut query = FieldQuery::new(manifest_key);
    if let Some(path) = &options.manifest_path {
        query = query.with_strategy(ManifestField::new(path, MANIFEST_TABLE, manifest_key));
    }
    query.with_strategy(EmbeddedMetadata::new(embedded_key))
}

fn tool_probe(
    program: &str,
    workdir: Option<&std::path::Path>,
    timeout: Duration,
) -> CommandProbe {
    let probe = CommandProbe::new(program, &["--version"]).with_timeout(timeout);
    match workdir {
        Some(dir) => probe.in_dir(dir),
        None => probe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolutionSource;
    use std::io::Write;

    fn options_with_manifest(content: &str) -> (ReportOptions, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let options = ReportOptions {
            manifest_path: Some(file.path().to_path_buf()),
            ..ReportOptions::default()
        };
        (options, file)
    }

    #[test]
    fn manifest_wins_over_embedded_for_identity() {
        let (options, _file) =
            options_with_manifest("[package]\nname = \"demo-tool\"\nversion = \"1.4.0\"\n");
        let report = VersionReport::collect(&options);
        assert_eq!(report.name, "demo-tool");
        assert_eq!(report.version, "1.4.0");
    }

    #[test]
    fn missing_manifest_falls_back_to_embedded() {
        let options = ReportOptions {
            manifest_path: Some(PathBuf::from("/no/such/manifest.toml")),
            ..ReportOptions::default()
        };
        let report = VersionReport::collect(&options);
        // The embedded table always knows the package identity.
        assert_eq!(report.name, "buildstamp");
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn version_chain_reports_its_source() {
        let (options, file) = options_with_manifest("[package]\nversion = \"2.0.1\"\n");
        let query = identity_query(&options, manifest_keys::VERSION, embedded_keys::VERSION);
        let outcome = MetadataResolver::resolve(&query, DEFAULT_VERSION);
        assert_eq!(outcome.value, "2.0.1");
        assert_eq!(
            outcome.source,
            ResolutionSource::Strategy(format!("manifest:{}", file.path().display()))
        );
    }

    #[test]
    fn every_field_is_populated() {
        let report = VersionReport::collect(&ReportOptions::default());
        for value in [
            &report.name,
            &report.version,
            &report.build_time,
            &report.build_mode,
            &report.platform,
            &report.git_branch,
            &report.git_commit,
            &report.git_status,
            &report.rustc_version,
            &report.cargo_version,
        ] {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn detailed_report_has_section_headings() {
        let report = VersionReport::collect(&ReportOptions::default());
        let rendered = report.detailed();
        assert!(rendered.contains("Build Information:"));
        assert!(rendered.contains("Version Control:"));
        assert!(rendered.contains("Toolchain:"));
        assert!(rendered.contains("Git Branch:"));
        // Display is the detailed form.
        assert_eq!(rendered, report.to_string());
    }

    #[test]
    fn short_report_shape() {
        let report = VersionReport::collect(&ReportOptions::default());
        let line = report.short();
        assert!(line.starts_with(&format!("{} version {}", report.name, report.version)));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = VersionReport::collect(&ReportOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], report.name.as_str());
        assert_eq!(json["git_status"], report.git_status.as_str());
    }

    #[test]
    fn resolved_version_matches_the_report() {
        let (options, _file) = options_with_manifest("[package]\nversion = \"7.7.7\"\n");
        assert_eq!(resolved_version(&options), "7.7.7");
    }
}
