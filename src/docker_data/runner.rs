use std::{io, process::Command};

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum RunnerError {
    /// Runtime binary not found in PATH
    #[error("{0} not found in PATH")]
    NotFound(String),

    /// Process ran, but exited unsuccessfully
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Run the container runtime cli with a given argument list, returning raw stdout
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, RunnerError>;
}

/// Executes the runtime binary as a child process, blocking until it exits
#[derive(Debug, Clone)]
pub struct CliRunner {
    bin: String,
}

impl CliRunner {
    pub fn new(bin: &str) -> Self {
        Self {
            bin: bin.to_owned(),
        }
    }
}

impl CommandRunner for CliRunner {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, RunnerError> {
        debug!(bin = %self.bin, args = ?args, "running command");
        let output = Command::new(&self.bin).args(args).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RunnerError::NotFound(self.bin.clone())
            } else {
                RunnerError::Io(e)
            }
        })?;
        trace!(
            status = %output.status,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "command completed"
        );

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(RunnerError::Failed {
                command: format!("{} {}", self.bin, args.join(" ")),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            })
        }
    }
}
