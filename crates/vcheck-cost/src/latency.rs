//! Budget command invocation and latency checks
//!
//! Only wall-clock duration is judged. The command's exit status and
//! output are never inspected, and a command that cannot be launched is
//! logged and timed like any other invocation. There is no timeout: a
//! command that never exits blocks the run.

use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use vcheck_core::Check;

/// Result of running the command once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub elapsed: Duration,
    /// False when the process could not be spawned
    pub launched: bool,
}

/// Something that can run the budget command with extra arguments
pub trait Invoker {
    fn invoke(&self, args: &[&str]) -> Invocation;
}

/// Spawns the configured program, discarding all of its output
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
    base_args: Vec<String>,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, args: &[&str]) -> Invocation {
        let start = Instant::now();
        let status = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        let elapsed = start.elapsed();

        match status {
            Ok(status) => {
                tracing::debug!(program = %self.program, ?args, ?status, ?elapsed, "budget command exited");
                Invocation { elapsed, launched: true }
            }
            Err(e) => {
                tracing::warn!(program = %self.program, ?args, error = %e, "budget command failed to launch");
                Invocation { elapsed, launched: false }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>,
    pub help_ceiling_ms: u64,
    pub status_ceiling_ms: u64,
    pub repeat: u32,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "budget".to_string(),
            args: Vec::new(),
            help_ceiling_ms: 1000,
            status_ceiling_ms: 5000,
            repeat: 5,
        }
    }
}

impl LatencyConfig {
    pub fn invoker(&self) -> ProcessInvoker {
        ProcessInvoker::new(self.command.clone(), self.args.clone())
    }
}

/// Elapsed time must stay strictly under `ceiling_ms`
pub fn latency_check(name: &str, invocation: Invocation, ceiling_ms: u64) -> Check {
    let elapsed_ms = invocation.elapsed.as_millis();
    let note = if invocation.launched { "" } else { " (command did not launch)" };

    if elapsed_ms < u128::from(ceiling_ms) {
        Check::ok(name, format!("{}ms (limit: {}ms){}", elapsed_ms, ceiling_ms, note))
    } else {
        Check::fail(name, format!("{}ms elapsed (limit: {}ms){}", elapsed_ms, ceiling_ms, note))
            .with_values(format!("< {}ms", ceiling_ms), format!("{}ms", elapsed_ms))
    }
}

/// Run `status` repeatedly and report the mean duration. Always passes.
pub fn repeated_status_check(invoker: &dyn Invoker, runs: u32) -> Check {
    let name = "repeated status invocations";
    if runs == 0 {
        return Check::info(name, "no runs configured");
    }

    let total: Duration = (0..runs).map(|_| invoker.invoke(&["status"]).elapsed).sum();
    let average = total / runs;
    Check::info(name, format!("average {}ms over {} runs", average.as_millis(), runs))
}
