// Deadline-bounded subprocess execution for read-only probes.
//
// Probes are small introspection commands (`git rev-parse`, `rustc
// --version`) whose output is one short line. The runner still drains stdout
// on a dedicated thread so a chatty process cannot wedge itself on a full
// pipe while we wait on it.

use crate::error::StrategyError;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Poll interval while waiting for a child to finish.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Output of a probe that ran to completion.
#[derive(Debug)]
pub struct ProbeOutput {
    pub exit_code: i32,
    /// Captured stdout with surrounding whitespace trimmed.
    pub stdout: String,
}

/// Runs a probe command to completion under a hard deadline.
///
/// On deadline overrun the child is killed and reaped before the error is
/// returned; the runner never leaves a process behind.
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve `program` on PATH and run it with `args`, optionally in
    /// `workdir`. Nonzero exit, spawn failure, and deadline overrun all map
    /// to [`StrategyError`].
    pub fn run(
        &self,
        program: &str,
        args: &[&str],
        workdir: Option<&Path>,
    ) -> Result<ProbeOutput, StrategyError> {
        let resolved = which::which(program).map_err(|e| StrategyError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

        let mut cmd = Command::new(resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(dir) = workdir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|e| StrategyError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

        let stdout = child.stdout.take();
        let reader = std::thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut out) = stdout {
                let _ = out.read_to_string(&mut buf);
            }
            buf
        });

        let status = match self.wait_with_deadline(&mut child) {
            Ok(Some(status)) => status,
            Ok(None) => {
                tracing::debug!(program, timeout = ?self.timeout, "probe overran its deadline, killing");
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return Err(StrategyError::Timeout {
                    program: program.to_string(),
                    timeout: self.timeout,
                });
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return Err(StrategyError::Spawn {
                    program: program.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let stdout = reader.join().unwrap_or_default();
        let exit_code = status.code().unwrap_or(-1);

        if !status.success() {
            return Err(StrategyError::NonZeroExit {
                program: program.to_string(),
                code: exit_code,
            });
        }

        Ok(ProbeOutput {
            exit_code,
            stdout: stdout.trim().to_string(),
        })
    }

    /// Wait for the child to exit, up to the configured deadline.
    /// `Ok(None)` means the deadline passed with the child still running.
    fn wait_with_deadline(&self, child: &mut Child) -> std::io::Result<Option<ExitStatus>> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            std::thread::sleep(WAIT_POLL_INTERVAL);
        }
    }
}
