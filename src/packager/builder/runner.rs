//! External tool execution.
//!
//! [`ToolRunner`] is the seam between the packager and the operating system.
//! [`SystemRunner`] spawns the real process; tests substitute recording
//! runners to observe arguments and staged files at spawn time.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of one tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,

    /// Interleaved stdout and stderr, decoded lossily as UTF-8.
    pub output: String,
}

impl ToolOutput {
    /// True when the tool exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion.
pub trait ToolRunner: Send + Sync {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// Returns `Err` only when the program cannot be started or waited on.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ToolOutput>;
}

/// Spawns the program as a child process.
///
/// stdout and stderr are attached to the same pipe, so the captured text
/// preserves the order the tool wrote it in. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ToolOutput> {
        let (mut reader, writer) = io::pipe()?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = command.spawn()?;
        // The command still holds our copies of the write end; the read
        // below only reaches EOF once they are closed.
        drop(command);

        let mut captured = Vec::new();
        let read = reader.read_to_end(&mut captured);
        let status = child.wait()?;
        read?;

        Ok(ToolOutput {
            code: status.code(),
            output: String::from_utf8_lossy(&captured).into_owned(),
        })
    }
}
