//! `git` process invocation.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::ProcessError;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Streams {
    /// Capture stdout and stderr.
    Capture,
    /// Capture stdout, drop stderr.
    DiscardStderr,
    /// Leave stdin/stdout on the terminal (for an editor), capture stderr.
    Terminal,
}

/// Builder for a single `git` invocation inside a working directory.
pub(crate) struct GitCommand<'a> {
    workdir: &'a Path,
    args: Vec<OsString>,
    input: Option<&'a str>,
    streams: Streams,
}

impl<'a> GitCommand<'a> {
    pub(crate) fn new(workdir: &'a Path) -> Self {
        Self {
            workdir,
            args: Vec::new(),
            input: None,
            streams: Streams::Capture,
        }
    }

    pub(crate) fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub(crate) fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Feeds `input` to the process on stdin.
    pub(crate) fn input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    pub(crate) fn discard_stderr(mut self) -> Self {
        self.streams = Streams::DiscardStderr;
        self
    }

    pub(crate) fn on_terminal(mut self) -> Self {
        self.streams = Streams::Terminal;
        self
    }

    fn command_line(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the process and returns its output whatever the exit status.
    pub(crate) fn run(self) -> Result<Output, ProcessError> {
        let command_line = self.command_line();
        debug!(command = %command_line, workdir = ?self.workdir, "running git");

        let mut command = Command::new("git");
        command.args(&self.args).current_dir(self.workdir);

        match self.streams {
            Streams::Capture => {
                command.stdout(Stdio::piped()).stderr(Stdio::piped());
            }
            Streams::DiscardStderr => {
                command.stdout(Stdio::piped()).stderr(Stdio::null());
            }
            Streams::Terminal => {
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::piped());
            }
        }
        if self.input.is_some() {
            command.stdin(Stdio::piped());
        } else if self.streams != Streams::Terminal {
            command.stdin(Stdio::null());
        }

        let spawn_error = |source| ProcessError::Spawn {
            command: command_line.clone(),
            source,
        };

        let mut child = command.spawn().map_err(spawn_error)?;
        if let Some(input) = self.input
            && let Some(mut stdin) = child.stdin.take()
        {
            stdin.write_all(input.as_bytes()).map_err(spawn_error)?;
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        debug!(command = %command_line, status = %output.status, "git finished");
        Ok(output)
    }

    /// Runs the process and fails unless it exits successfully.
    pub(crate) fn checked(self) -> Result<Output, ProcessError> {
        let command_line = self.command_line();
        let output = self.run()?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(ProcessError::Exit {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
