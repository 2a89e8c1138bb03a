//! Non-interactive ranked listing.

use crate::commands::Context;
use crate::core::ranker::Ranker;
use crate::core::resolver::Resolver;
use crate::core::types::{Action, ScoredCandidate};
use crate::error::Result;
use crate::packages::CandidateFetcher;
use crate::ui;
use crate::ui::progress::Spinner;
use crate::utils::sanitize::truncate_for_display;
use colored::Colorize;
use std::rc::Rc;

pub fn run(ctx: &Context, query: &str, limit: Option<usize>) -> Result<()> {
    let resolver = match limit {
        Some(n) => Resolver::new(
            CandidateFetcher::for_action(Action::Install, &ctx.config, Rc::clone(&ctx.runner)),
            Ranker::new(ctx.config.search_cutoff, n),
        ),
        None => ctx.resolver(Action::Install),
    };

    let spinner = Spinner::new(&format!("Searching for '{}'", query));
    let ranked = match resolver.search(query) {
        Ok(ranked) => {
            spinner.finish();
            ranked
        }
        Err(e) => {
            spinner.finish_with_error("Search failed");
            return Err(e);
        }
    };

    if ranked.is_empty() {
        ui::warning(&format!("No packages matching '{}'", query));
        return Ok(());
    }

    ui::header(&format!("Matches for '{}'", query));
    for line in render(&ranked) {
        println!("{}", line);
    }
    Ok(())
}

fn render(ranked: &[ScoredCandidate]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let c = &entry.candidate;
            let installed = if c.is_installed() {
                format!(" {}", "[installed]".green())
            } else {
                String::new()
            };
            format!(
                "{:>2}. {}/{}{}  {}\n    {}",
                i + 1,
                c.repo().magenta(),
                c.name().bold(),
                installed,
                format!("{:.0}%", entry.score * 100.0).dimmed(),
                truncate_for_display(c.meta("description").unwrap_or("-"), 76)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Candidate, Source};
    use std::collections::BTreeMap;

    #[test]
    fn renders_repo_name_and_score() {
        colored::control::set_override(false);
        let mut meta = BTreeMap::new();
        meta.insert("repo".to_string(), "extra".to_string());
        meta.insert("description".to_string(), "A web browser".to_string());
        let ranked = vec![ScoredCandidate {
            candidate: Candidate::with_metadata("firefox", Source::Official, meta),
            score: 0.876,
        }];

        let lines = render(&ranked);
        assert!(lines[0].starts_with(" 1. extra/firefox"));
        assert!(lines[0].contains("88%"));
        assert!(lines[0].contains("A web browser"));
    }
}
