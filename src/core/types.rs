use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Where a candidate package comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Official,
    Aur,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Official => write!(f, "official"),
            Source::Aur => write!(f, "aur"),
        }
    }
}

/// A package name returned by a query, eligible for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    source: Source,
    metadata: BTreeMap<String, String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            source,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(name: impl Into<String>, source: Source, metadata: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            source,
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Repository label, falling back to the source name.
    pub fn repo(&self) -> String {
        self.meta("repo")
            .map(str::to_string)
            .unwrap_or_else(|| self.source.to_string())
    }

    pub fn is_installed(&self) -> bool {
        self.meta("installed") == Some("true")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Similarity in `[0, 1]`, 1 meaning exact match
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Confirmed,
    Cancelled,
    NoMatch,
}

/// Result of one interactive selection session.
///
/// Only constructible through [`SelectionResult::confirmed`],
/// [`SelectionResult::cancelled`] and [`SelectionResult::no_match`], so a
/// confirmed result always carries its candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    chosen: Option<Candidate>,
    outcome: SelectionOutcome,
}

impl SelectionResult {
    pub fn confirmed(candidate: Candidate) -> Self {
        Self {
            chosen: Some(candidate),
            outcome: SelectionOutcome::Confirmed,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            chosen: None,
            outcome: SelectionOutcome::Cancelled,
        }
    }

    pub fn no_match() -> Self {
        Self {
            chosen: None,
            outcome: SelectionOutcome::NoMatch,
        }
    }

    pub fn outcome(&self) -> SelectionOutcome {
        self.outcome
    }

    pub fn chosen(&self) -> Option<&Candidate> {
        self.chosen.as_ref()
    }

    pub fn into_chosen(self) -> Option<Candidate> {
        self.chosen
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Install,
    Remove,
    Purge,
}

impl Action {
    /// Remove and purge operate on installed packages only.
    pub fn targets_installed(&self) -> bool {
        matches!(self, Action::Remove | Action::Purge)
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Remove => "remove",
            Action::Purge => "purge",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionFlag {
    /// Remove dependencies no longer needed (`-Rns` instead of `-R`)
    RemoveDependencies,
    CleanupOrphans,
    CleanCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: Action,
    pub target: Candidate,
    pub options: BTreeSet<ActionFlag>,
}

impl ActionRequest {
    /// Build a request; purge always carries orphan and cache cleanup.
    pub fn new(action: Action, target: Candidate, flags: impl IntoIterator<Item = ActionFlag>) -> Self {
        let mut options: BTreeSet<ActionFlag> = flags.into_iter().collect();
        if action == Action::Purge {
            options.insert(ActionFlag::CleanupOrphans);
            options.insert(ActionFlag::CleanCache);
        }
        Self {
            action,
            target,
            options,
        }
    }

    pub fn has(&self, flag: ActionFlag) -> bool {
        self.options.contains(&flag)
    }
}

/// Package manager front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pacman,
    Yay,
    Paru,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pacman, Tool::Yay, Tool::Paru];
    pub const AUR_HELPERS: [Tool; 2] = [Tool::Yay, Tool::Paru];

    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Pacman => "pacman",
            Tool::Yay => "yay",
            Tool::Paru => "paru",
        }
    }

    pub fn is_aur_helper(&self) -> bool {
        !matches!(self, Tool::Pacman)
    }

    /// Helpers escalate privileges themselves; pacman needs sudo.
    pub fn needs_sudo(&self) -> bool {
        matches!(self, Tool::Pacman)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pacman" => Ok(Tool::Pacman),
            "yay" => Ok(Tool::Yay),
            "paru" => Ok(Tool::Paru),
            other => Err(format!("unknown tool '{}' (expected pacman, yay or paru)", other)),
        }
    }
}
