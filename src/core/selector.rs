//! Interactive Selection
//!
//! Presents a ranked list and resolves it to at most one confirmed
//! candidate.
//!
//! ```text
//! Idle -> AwaitingChoice -> Confirmed
//!               |  ^     -> Cancelled
//!               +--+ invalid input (bounded)
//! ```

use crate::core::types::{ScoredCandidate, SelectionResult};
use crate::error::Result;
use crate::utils::sanitize::truncate_for_display;
use colored::Colorize;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Invalid inputs tolerated before the session is cancelled.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const NAME_WIDTH: usize = 28;
const REPO_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq)]
enum State {
    Idle,
    AwaitingChoice { invalid: u32 },
    Done(SelectionResult),
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the ranked list
    Index(usize),
    Cancel,
    Invalid(String),
}

/// Parse raw input against a list of `len` entries (displayed 1..=len).
pub fn parse_choice(raw: &str, len: usize) -> Choice {
    let token = raw.trim();
    match token.to_lowercase().as_str() {
        "" | "0" | "q" | "quit" | "cancel" => return Choice::Cancel,
        _ => {}
    }

    match token.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Choice::Index(n - 1),
        _ => Choice::Invalid(token.to_string()),
    }
}

pub struct Selector<R, W> {
    input: R,
    output: W,
    max_retries: u32,
    width: usize,
}

impl Selector<StdinLock<'static>, Stdout> {
    /// Selector bound to the process terminal.
    pub fn stdio() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(80);
        Selector::new(io::stdin().lock(), io::stdout()).with_width(width)
    }
}

impl<R: BufRead, W: Write> Selector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: DEFAULT_MAX_RETRIES,
            width: 80,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(40);
        self
    }

    /// Consume the selector, handing back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one selection session over `ranked`.
    ///
    /// An empty list reports no-match without prompting.
    pub fn select(&mut self, ranked: &[ScoredCandidate]) -> Result<SelectionResult> {
        let mut state = State::Idle;

        loop {
            state = match state {
                State::Idle => {
                    if ranked.is_empty() {
                        State::Done(SelectionResult::no_match())
                    } else {
                        self.render(ranked)?;
                        State::AwaitingChoice { invalid: 0 }
                    }
                }
                State::AwaitingChoice { invalid } => {
                    self.prompt()?;
                    match self.read_line()? {
                        None => State::Done(SelectionResult::cancelled()),
                        Some(line) => match parse_choice(&line, ranked.len()) {
                            Choice::Index(i) => {
                                State::Done(SelectionResult::confirmed(ranked[i].candidate.clone()))
                            }
                            Choice::Cancel => State::Done(SelectionResult::cancelled()),
                            Choice::Invalid(token) => {
                                let invalid = invalid + 1;
                                tracing::debug!(%token, invalid, "invalid selection input");
                                if invalid >= self.max_retries {
                                    writeln!(
                                        self.output,
                                        "{}",
                                        "Too many invalid selections, cancelling.".red()
                                    )?;
                                    State::Done(SelectionResult::cancelled())
                                } else {
                                    writeln!(
                                        self.output,
                                        "{} '{}': enter a number between 1 and {}",
                                        "Invalid selection".red(),
                                        token,
                                        ranked.len()
                                    )?;
                                    State::AwaitingChoice { invalid }
                                }
                            }
                        },
                    }
                }
                State::Done(result) => return Ok(result),
            };
        }
    }

    fn render(&mut self, ranked: &[ScoredCandidate]) -> Result<()> {
        let desc_width = self
            .width
            .saturating_sub(4 + 1 + NAME_WIDTH + 1 + REPO_WIDTH + 1)
            .max(10);

        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            format!(
                "{:<4} {:<nw$} {:<rw$} {}",
                "No.",
                "Name",
                "Repo",
                "Description",
                nw = NAME_WIDTH,
                rw = REPO_WIDTH
            )
            .cyan()
        )?;
        writeln!(self.output, "{}", "-".repeat(self.width.min(80)))?;

        for (i, entry) in ranked.iter().enumerate() {
            let candidate = &entry.candidate;
            let description = truncate_for_display(candidate.meta("description").unwrap_or(""), desc_width);
            let mut name = truncate_for_display(candidate.name(), NAME_WIDTH);
            if candidate.is_installed() {
                name = truncate_for_display(&format!("{} ✓", name), NAME_WIDTH);
            }
            writeln!(
                self.output,
                "{:<4} {:<nw$} {:<rw$} {}",
                i + 1,
                name,
                truncate_for_display(&candidate.repo(), REPO_WIDTH),
                description,
                nw = NAME_WIDTH,
                rw = REPO_WIDTH
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(
            self.output,
            "\n{} ",
            "Enter package number (0 to cancel):".yellow()
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
