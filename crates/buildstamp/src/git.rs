// Canned source-control probes.
//
// All probes are read-only introspection: they query the checkout, never
// mutate it. Argument vectors are fixed; only the working directory and the
// deadline vary.

use crate::constants::tree_state;
use crate::error::StrategyError;
use crate::process_runner::ProcessRunner;
use crate::resolver::Strategy;
use crate::strategies::CommandProbe;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const GIT_PROGRAM: &str = "git";

/// Probe for the current branch name.
pub fn branch_probe(workdir: Option<&Path>, timeout: Duration) -> CommandProbe {
    configure(
        CommandProbe::new(GIT_PROGRAM, &["rev-parse", "--abbrev-ref", "HEAD"]),
        workdir,
        timeout,
    )
}

/// Probe for the short commit hash.
pub fn commit_probe(workdir: Option<&Path>, timeout: Duration) -> CommandProbe {
    configure(
        CommandProbe::new(GIT_PROGRAM, &["rev-parse", "--short", "HEAD"]),
        workdir,
        timeout,
    )
}

fn configure(probe: CommandProbe, workdir: Option<&Path>, timeout: Duration) -> CommandProbe {
    let probe = probe.with_timeout(timeout);
    match workdir {
        Some(dir) => probe.in_dir(dir),
        None => probe,
    }
}

/// Working-tree cleanliness probe.
///
/// `git status --porcelain` prints nothing for a clean tree, so emptiness is
/// the signal here rather than a failure; this probe cannot reuse
/// [`CommandProbe`], which treats empty output as unavailable.
pub struct TreeStateProbe {
    workdir: Option<PathBuf>,
    timeout: Duration,
}

impl TreeStateProbe {
    pub fn new(workdir: Option<&Path>, timeout: Duration) -> Self {
        Self {
            workdir: workdir.map(Path::to_path_buf),
            timeout,
        }
    }
}

impl Strategy for TreeStateProbe {
    fn describe(&self) -> String {
        format!("command:{GIT_PROGRAM} status")
    }

    fn attempt(&self) -> Result<String, StrategyError> {
        let output = ProcessRunner::new(self.timeout).run(
            GIT_PROGRAM,
            &["status", "--porcelain"],
            self.workdir.as_deref(),
        )?;

        let state = if output.stdout.is_empty() {
            tree_state::CLEAN
        } else {
            tree_state::DIRTY
        };
        Ok(state.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PROBE_TIMEOUT;

    #[test]
    fn probes_label_their_provenance() {
        let branch = branch_probe(None, DEFAULT_PROBE_TIMEOUT);
        let commit = commit_probe(None, DEFAULT_PROBE_TIMEOUT);
        let status = TreeStateProbe::new(None, DEFAULT_PROBE_TIMEOUT);
        assert_eq!(branch.describe(), "command:git");
        assert_eq!(commit.describe(), "command:git");
        assert_eq!(status.describe(), "command:git status");
    }

    #[test]
    fn status_outside_a_repository_is_unavailable() {
        // A fresh temp dir is never inside a work tree, so the probe must
        // report unavailable rather than clean.
        let dir = tempfile::tempdir().unwrap();
        let probe = TreeStateProbe::new(Some(dir.path()), DEFAULT_PROBE_TIMEOUT);
        assert!(probe.attempt().is_err());
    }
}
