use super::*;
use crate::core::types::Source;

fn candidates(names: &[&str]) -> Vec<Candidate> {
    names
        .iter()
        .map(|name| Candidate::new(*name, Source::Official))
        .collect()
}

fn names(ranked: &[ScoredCandidate]) -> Vec<&str> {
    ranked.iter().map(|s| s.candidate.name()).collect()
}

#[test]
fn exact_match_scores_one() {
    assert_eq!(similarity("firefox", "firefox"), 1.0);
    assert_eq!(similarity("  FireFox ", "firefox"), 1.0);
}

#[test]
fn non_exact_never_reaches_one() {
    assert!(similarity("firefox", "firefox-developer-edition") < 1.0);
    assert!(similarity("firefo", "firefox") <= NON_EXACT_CEILING);
}

#[test]
fn empty_query_scores_zero() {
    assert_eq!(similarity("", "vlc"), 0.0);
    assert_eq!(similarity("   ", "vlc"), 0.0);
}

#[test]
fn prefix_beats_equally_distant_unrelated_name() {
    // Same edit distance from the query, only one shares the prefix.
    let prefixed = similarity("google-ch", "google-chrome");
    let unrelated = similarity("google-ch", "google-cxxxx");
    assert!(prefixed > unrelated);
}

#[test]
fn transposition_counts_as_one_edit() {
    assert!(similarity("pyhton", "python") > similarity("pyhton", "python-pip"));
    assert!(similarity("gti", "git") >= DEFAULT_CUTOFF);
}

#[test]
fn google_chrome_scenario() {
    let ranker = Ranker::default();
    let ranked = ranker.rank(
        "google-ch",
        &candidates(&["firefox", "google-chrome-dev", "google-chrome"]),
    );

    assert_eq!(names(&ranked), vec!["google-chrome", "google-chrome-dev"]);
}

#[test]
fn irrelevant_query_ranks_nothing() {
    let ranker = Ranker::default();
    let ranked = ranker.rank(
        "zzzznotapackage",
        &candidates(&[
            "google-chrome",
            "firefox",
            "notepadqq",
            "pacman",
            "zziplib",
            "linux",
            "python",
        ]),
    );
    assert!(ranked.is_empty());
}

#[test]
fn output_is_bounded_to_ten() {
    let many: Vec<String> = (0..40).map(|i| format!("lib{:02}", i)).collect();
    let refs: Vec<&str> = many.iter().map(String::as_str).collect();

    let ranked = Ranker::new(DEFAULT_CUTOFF, 50).rank("lib", &candidates(&refs));

    assert_eq!(ranked.len(), MAX_RESULTS);
}

#[test]
fn limit_is_respected_and_clamped() {
    let ranker = Ranker::new(DEFAULT_CUTOFF, 0);
    assert_eq!(ranker.limit(), 1);
    let ranked = Ranker::new(DEFAULT_CUTOFF, 2).rank("vim", &candidates(&["vim", "gvim", "vimb", "neovim"]));
    assert_eq!(ranked.len(), 2);
}

#[test]
fn ties_are_broken_by_name() {
    // All four share the prefix and have identical length, so identical score.
    let ranked = Ranker::default().rank("lib", &candidates(&["libd", "liba", "libc", "libb"]));

    assert_eq!(names(&ranked), vec!["liba", "libb", "libc", "libd"]);
    assert!(ranked.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn sorted_descending_and_deterministic() {
    let pool = candidates(&[
        "neovim",
        "vim",
        "gvim",
        "vi",
        "vim-airline",
        "vim-runtime",
        "vifm",
        "nvim-qt",
    ]);
    let ranker = Ranker::default();

    let first = ranker.rank("vim", &pool);
    let mut reversed = pool.clone();
    reversed.reverse();
    let second = ranker.rank("vim", &reversed);

    assert_eq!(first, second);
    assert_eq!(first[0].candidate.name(), "vim");
    for pair in first.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score
                    && pair[0].candidate.name() < pair[1].candidate.name())
        );
    }
}

#[test]
fn cutoff_drops_low_scores() {
    let strict = Ranker::new(0.95, MAX_RESULTS);
    let ranked = strict.rank("firefx", &candidates(&["firefox", "firefx"]));
    assert_eq!(names(&ranked), vec!["firefx"]);
}

#[test]
fn non_finite_cutoff_falls_back_to_default() {
    assert_eq!(Ranker::new(f64::NAN, 5).cutoff(), DEFAULT_CUTOFF);
    assert_eq!(Ranker::new(3.0, 5).cutoff(), 1.0);
}
