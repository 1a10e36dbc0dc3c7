//! External process execution.
//!
//! Both external tools this crate drives (jdeps for discovery, jlink for
//! image linking) go through the [`ToolRunner`] trait: run an argument
//! vector, block until the child exits, hand back the exit code and the
//! captured output. Injecting the runner keeps discovery and the pipeline
//! unit-testable without spawning real processes.

use std::io;

use async_trait::async_trait;
use tokio::process::Command;

/// Captured result of a finished external tool.
#[derive(Clone, Debug)]
pub struct ToolOutput {
    /// Exit code; `None` when the child was killed by a signal
    pub code: Option<i32>,
    /// Captured standard output bytes
    pub stdout: Vec<u8>,
    /// Captured standard error bytes
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    /// Returns true when the tool exited with code zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Returns standard error as text, replacing invalid UTF-8.
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Runs an external tool and captures its output.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs `argv[0]` with the remaining elements as arguments, waiting for
    /// the child process to exit.
    async fn run(&self, argv: &[String]) -> io::Result<ToolOutput>;
}

/// [`ToolRunner`] that spawns real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl ToolRunner for SystemRunner {
    async fn run(&self, argv: &[String]) -> io::Result<ToolOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector")
        })?;
        let output = Command::new(program).args(args).output().await?;
        Ok(ToolOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
