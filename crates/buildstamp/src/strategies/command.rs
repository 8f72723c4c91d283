// External-command strategy: trimmed stdout of a probe tool.

use crate::constants::DEFAULT_PROBE_TIMEOUT;
use crate::error::StrategyError;
use crate::process_runner::ProcessRunner;
use crate::resolver::Strategy;
use std::path::PathBuf;
use std::time::Duration;

/// Runs an external tool and takes its trimmed stdout as the value.
///
/// Spawn failure, nonzero exit, deadline overrun, and empty output all count
/// as unavailable. The probe owns its subprocess: each attempt spawns a fresh
/// child bounded by its own deadline.
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
    workdir: Option<PathBuf>,
    timeout: Duration,
}

impl CommandProbe {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            workdir: None,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Run the probe in `dir` instead of the caller's working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Override the default deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Strategy for CommandProbe {
    fn describe(&self) -> String {
        format!("command:{}", self.program)
    }

    fn attempt(&self) -> Result<String, StrategyError> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        let output =
            ProcessRunner::new(self.timeout).run(&self.program, &args, self.workdir.as_deref())?;

        if output.stdout.is_empty() {
            return Err(StrategyError::Empty);
        }
        Ok(output.stdout)
    }
}
