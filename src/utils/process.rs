//! External process execution
//!
//! All package-manager invocations go through the [`CommandRunner`] trait so
//! the resolve and dispatch pipeline can be exercised with scripted runners.

use crate::error::{PacwiseError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Query commands are killed after this long.
pub const QUERY_TIMEOUT_SECONDS: u64 = 300;

static TRANSACTION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether a mutating package-manager process is currently running.
pub fn transaction_active() -> bool {
    TRANSACTION_ACTIVE.load(Ordering::SeqCst)
}

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub sudo: bool,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            sudo: false,
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn sudo(mut self, sudo: bool) -> Self {
        self.sudo = sudo;
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Full argv including the `sudo` prefix when requested.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        if self.sudo {
            argv.push("sudo".to_string());
        }
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Shell-quoted rendering for logs and error messages.
    pub fn display(&self) -> String {
        let argv = self.argv();
        shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
    }

    fn to_command(&self) -> Command {
        let argv = self.argv();
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Captured result of a non-interactive command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run a query command with captured output (stdin closed).
    fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput>;

    /// Run a command attached to the terminal and return its exit code
    /// (`None` when killed by a signal). Never times out.
    fn run_interactive(&self, spec: &CommandSpec) -> Result<Option<i32>>;

    /// Whether `program` resolves on `PATH`.
    fn program_exists(&self, program: &str) -> bool;
}

/// Runner backed by real processes.
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(QUERY_TIMEOUT_SECONDS),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        let command = spec.display();
        tracing::debug!(command = %command, "running query");

        let mut cmd = spec.to_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| PacwiseError::SystemCommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PacwiseError::SystemCommandFailed {
                command: command.clone(),
                reason: "Failed to capture stdout".to_string(),
            })?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| PacwiseError::SystemCommandFailed {
                command: command.clone(),
                reason: "Failed to capture stderr".to_string(),
            })?;

        let stdout_thread = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = std::io::BufReader::new(stdout).read_to_end(&mut buf);
            buf
        });
        let stderr_thread = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = std::io::BufReader::new(stderr).read_to_end(&mut buf);
            buf
        });

        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if start.elapsed() > self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = stdout_thread.join();
                        let _ = stderr_thread.join();
                        tracing::error!(command = %command, "query timed out");
                        return Err(PacwiseError::SystemCommandFailed {
                            command,
                            reason: format!(
                                "Command timed out after {} seconds",
                                self.timeout.as_secs()
                            ),
                        });
                    }
                    thread::sleep(Duration::from_millis(50));
                }
                Err(e) => {
                    return Err(PacwiseError::SystemCommandFailed {
                        command,
                        reason: e.to_string(),
                    });
                }
            }
        };

        let stdout = stdout_thread.join().unwrap_or_default();
        let stderr = stderr_thread.join().unwrap_or_default();
        let output = CapturedOutput {
            code: status.code(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        };
        tracing::debug!(command = %command, code = ?output.code, "query finished");
        Ok(output)
    }

    fn run_interactive(&self, spec: &CommandSpec) -> Result<Option<i32>> {
        let command = spec.display();
        tracing::info!(command = %command, "executing");

        let mut cmd = spec.to_command();
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        TRANSACTION_ACTIVE.store(true, Ordering::SeqCst);
        let status = cmd.status();
        TRANSACTION_ACTIVE.store(false, Ordering::SeqCst);

        let status = status.map_err(|e| PacwiseError::SystemCommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        if status.success() {
            tracing::info!(command = %command, "command succeeded");
        } else {
            tracing::error!(command = %command, code = ?status.code(), "command failed");
        }
        Ok(status.code())
    }

    fn program_exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_prefixes_sudo() {
        let spec = CommandSpec::new("pacman").args(["-Rns", "vlc"]).sudo(true);
        assert_eq!(spec.argv(), vec!["sudo", "pacman", "-Rns", "vlc"]);
    }

    #[test]
    fn display_quotes_arguments() {
        let plain = CommandSpec::new("pacman").args(["-Ss", "vlc"]);
        assert_eq!(plain.display(), "pacman -Ss vlc");

        let spaced = CommandSpec::new("sh").args(["-c", "echo hi"]);
        assert_ne!(spaced.display(), "sh -c echo hi");
    }

    #[test]
    fn captured_output_success_requires_zero() {
        let ok = CapturedOutput {
            code: Some(0),
            ..Default::default()
        };
        let signalled = CapturedOutput::default();
        assert!(ok.success());
        assert!(!signalled.success());
    }

    #[test]
    fn system_runner_captures_stdout() {
        let runner = SystemRunner::new();
        let out = runner
            .capture(&CommandSpec::new("sh").args(["-c", "echo hello; exit 3"]))
            .expect("sh should run");
        assert_eq!(out.stdout.trim(), "hello");
        assert_eq!(out.code, Some(3));
    }

    #[test]
    fn system_runner_reports_spawn_failure() {
        let runner = SystemRunner::new();
        let err = runner
            .capture(&CommandSpec::new("definitely-not-a-real-binary-xyz"))
            .unwrap_err();
        assert!(matches!(err, PacwiseError::SystemCommandFailed { .. }));
    }

    #[test]
    fn spawn_failure_names_the_command_line() {
        let runner = SystemRunner::new();
        let err = runner
            .capture(&CommandSpec::new("definitely-not-a-real-binary-xyz").arg("--flag"))
            .unwrap_err();
        match err {
            PacwiseError::SystemCommandFailed { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-binary-xyz --flag")
            }
            other => panic!("expected SystemCommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn system_runner_returns_interactive_exit_code() {
        let runner = SystemRunner::new();
        let code = runner
            .run_interactive(&CommandSpec::new("sh").args(["-c", "exit 4"]))
            .expect("sh should run");
        assert_eq!(code, Some(4));
        assert!(!transaction_active());
    }
}
