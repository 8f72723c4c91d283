// Entry point for the buildstamp command-line tool.
//
// Parses flags, installs the tracing subscriber, and renders a metadata
// report to stdout. Diagnostics go to stderr so the report stays pipeable.

use anyhow::Result;
use buildstamp::{ReportOptions, VersionReport};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Report package and build metadata.
#[derive(Debug, Parser)]
#[command(name = "buildstamp", version, about)]
struct Cli {
    /// Print the full multi-line report instead of the one-line summary.
    #[arg(long)]
    detailed: bool,

    /// Print the report as JSON.
    #[arg(long, conflicts_with = "detailed")]
    json: bool,

    /// Manifest consulted first for the package name and version.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Directory the source-control probes run in.
    #[arg(long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Hard deadline for each external probe, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    timeout_secs: u64,
}

impl Cli {
    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            manifest_path: self.manifest.clone(),
            workdir: self.workdir.clone(),
            probe_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.report_options();

    tracing::debug!(?options, "collecting metadata report");
    let report = VersionReport::collect(&options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.detailed {
        println!("{}", report.detailed());
    } else {
        println!("{}", report.short());
    }

    Ok(())
}
