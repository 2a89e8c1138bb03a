//! Scripted [`CommandRunner`] for unit tests.

use super::{CapturedOutput, CommandRunner, CommandSpec};
use crate::error::{PacwiseError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub(crate) struct MockRunner {
    installed: HashSet<String>,
    captures: HashMap<String, CapturedOutput>,
    exit_codes: HashMap<String, i32>,
    unavailable: HashSet<String>,
    pub(crate) captured: RefCell<Vec<String>>,
    pub(crate) executed: RefCell<Vec<String>>,
}

impl MockRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_program(mut self, program: &str) -> Self {
        self.installed.insert(program.to_string());
        self
    }

    /// Script captured output for a rendered command line.
    pub(crate) fn on_capture(mut self, command: &str, code: i32, stdout: &str) -> Self {
        self.captures.insert(
            command.to_string(),
            CapturedOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Make a captured command fail to spawn.
    pub(crate) fn spawn_fails(mut self, command: &str) -> Self {
        self.unavailable.insert(command.to_string());
        self
    }

    /// Script the exit code of an interactive command (default 0).
    pub(crate) fn on_run(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        let line = spec.display();
        self.captured.borrow_mut().push(line.clone());
        if self.unavailable.contains(&line) {
            return Err(PacwiseError::SystemCommandFailed {
                command: line,
                reason: "No such file or directory".to_string(),
            });
        }
        Ok(self.captures.get(&line).cloned().unwrap_or(CapturedOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: String::new(),
        }))
    }

    fn run_interactive(&self, spec: &CommandSpec) -> Result<Option<i32>> {
        let line = spec.display();
        self.executed.borrow_mut().push(line.clone());
        Ok(Some(self.exit_codes.get(&line).copied().unwrap_or(0)))
    }

    fn program_exists(&self, program: &str) -> bool {
        self.installed.contains(program)
    }
}
