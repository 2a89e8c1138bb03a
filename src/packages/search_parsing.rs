//! Parsers for pacman-style query output.

use crate::core::types::{Candidate, Source};
use std::collections::BTreeMap;

/// Repository name pacman helpers use for AUR results.
pub const AUR_REPO: &str = "aur";

fn source_for_repo(repo: &str) -> Source {
    if repo.eq_ignore_ascii_case(AUR_REPO) {
        Source::Aur
    } else {
        Source::Official
    }
}

/// Parse `-Ss` output as printed by pacman, yay and paru:
///
/// ```text
/// extra/firefox 131.0-1 [installed]
///     Fast, Private & Safe Web Browser
/// aur/google-chrome 130.0-1 (+2104 12.5) (Out-of-date)
///     The popular web browser by Google
/// ```
pub fn parse_search_output(output: &str) -> Vec<Candidate> {
    let lines: Vec<&str> = output.lines().collect();
    let mut candidates = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(repo_name) = parts.next() else {
            continue;
        };
        let Some((repo, name)) = repo_name.split_once('/') else {
            continue;
        };
        if repo.is_empty() || name.is_empty() {
            continue;
        }

        let mut metadata = BTreeMap::new();
        metadata.insert("repo".to_string(), repo.to_string());
        if let Some(version) = parts.next() {
            metadata.insert("version".to_string(), version.to_string());
        }
        if line.contains("[installed") {
            metadata.insert("installed".to_string(), "true".to_string());
        }
        let description = lines
            .get(i + 1)
            .filter(|next| next.starts_with(char::is_whitespace))
            .map(|next| next.trim())
            .filter(|desc| !desc.is_empty());
        if let Some(description) = description {
            metadata.insert("description".to_string(), description.to_string());
        }

        candidates.push(Candidate::with_metadata(name, source_for_repo(repo), metadata));
    }

    candidates
}

/// Parse `pacman -Sl` output: `repo name version [installed]`.
pub fn parse_sync_list(output: &str) -> Vec<Candidate> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let repo = parts.next()?;
            let name = parts.next()?;

            let mut metadata = BTreeMap::new();
            metadata.insert("repo".to_string(), repo.to_string());
            if let Some(version) = parts.next() {
                metadata.insert("version".to_string(), version.to_string());
            }
            if line.contains("[installed") {
                metadata.insert("installed".to_string(), "true".to_string());
            }
            Some(Candidate::with_metadata(name, source_for_repo(repo), metadata))
        })
        .collect()
}

/// Parse `pacman -Q` output: `name version`.
pub fn parse_installed_list(output: &str, source: Source) -> Vec<Candidate> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;

            let mut metadata = BTreeMap::new();
            metadata.insert("repo".to_string(), "local".to_string());
            metadata.insert("installed".to_string(), "true".to_string());
            if let Some(version) = parts.next() {
                metadata.insert("version".to_string(), version.to_string());
            }
            Some(Candidate::with_metadata(name, source, metadata))
        })
        .collect()
}

/// One name per line (`-Qq`, `-Qmq`, `-Qtdq`).
pub fn parse_name_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
