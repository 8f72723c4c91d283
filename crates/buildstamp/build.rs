// Embeds build-time metadata for the embedded-metadata strategy.
//
// Every probe is best-effort: a missing git checkout or toolchain binary
// results in "unknown", never a failed build.

use chrono::Utc;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Keep the embedded commit honest when the checkout moves.
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    emit(
        "BUILDSTAMP_BUILD_TIME",
        Some(Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    );
    emit("BUILDSTAMP_BUILD_MODE", Some(build_mode()));
    emit("BUILDSTAMP_TARGET_TRIPLE", std::env::var("TARGET").ok());
    emit(
        "BUILDSTAMP_GIT_BRANCH",
        git_stdout(&["rev-parse", "--abbrev-ref", "HEAD"]),
    );
    emit(
        "BUILDSTAMP_GIT_COMMIT",
        git_stdout(&["rev-parse", "--short", "HEAD"]),
    );
    emit("BUILDSTAMP_GIT_STATUS", git_status());
    emit("BUILDSTAMP_RUSTC_VERSION", tool_version("rustc"));
    emit("BUILDSTAMP_CARGO_VERSION", tool_version("cargo"));
}

fn emit(key: &str, value: Option<String>) {
    println!(
        "cargo:rustc-env={}={}",
        key,
        value.unwrap_or_else(|| "unknown".to_string())
    );
}

fn build_mode() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();
    if profile == "release" { "release" } else { "debug" }.to_string()
}

fn git_stdout(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}

fn git_status() -> Option<String> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(if output.stdout.is_empty() { "clean" } else { "dirty" }.to_string())
}

fn tool_version(program: &str) -> Option<String> {
    Command::new(program)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}
