// Rust guideline compliant 2026-02-06

//! Local-vs-upstream tracking status and its classification.

/// How the current branch relates to its upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingStatus {
    /// Same history as the upstream.
    UpToDate,
    /// Upstream has commits missing locally.
    Behind(usize),
    /// Local commits are missing upstream.
    Ahead(usize),
    /// Both sides have commits the other lacks.
    Diverged {
        /// Local-only commits.
        ahead: usize,
        /// Upstream-only commits.
        behind: usize,
    },
    /// The summary only reported unstaged changes.
    UnstagedChanges,
    /// No recognizable tracking information.
    Unrecognized(String),
}

impl TrackingStatus {
    /// Builds a status from ahead/behind commit counts.
    pub fn from_counts(ahead: usize, behind: usize) -> Self {
        match (ahead, behind) {
            (0, 0) => TrackingStatus::UpToDate,
            (ahead, 0) => TrackingStatus::Ahead(ahead),
            (0, behind) => TrackingStatus::Behind(behind),
            (ahead, behind) => TrackingStatus::Diverged { ahead, behind },
        }
    }

    /// Classifies the human-readable output of `git status -uno`.
    ///
    /// Only the "Your branch ..." sentence is inspected, with quoted ref
    /// names removed, so branch names never act as keywords. Keywords are
    /// checked in a fixed order: up to date, diverged, behind, ahead. Without
    /// a tracking sentence, unstaged changes are still recognized. Counts come
    /// from "by N commit(s)" or "have N and M different commits" when present
    /// and are 0 otherwise.
    pub fn from_summary(summary: &str) -> Self {
        let tracking = tracking_sentence(summary);
        if tracking.contains("up to date") || tracking.contains("up-to-date") {
            return TrackingStatus::UpToDate;
        }
        if tracking.contains("diverged") {
            let (ahead, behind) = diverged_counts(&tracking).unwrap_or((0, 0));
            return TrackingStatus::Diverged { ahead, behind };
        }
        if tracking.contains("behind") {
            return TrackingStatus::Behind(count_after_by(&tracking).unwrap_or(0));
        }
        if tracking.contains("ahead") {
            return TrackingStatus::Ahead(count_after_by(&tracking).unwrap_or(0));
        }
        if summary.lines().any(|line| line.starts_with("Changes not staged")) {
            return TrackingStatus::UnstagedChanges;
        }
        TrackingStatus::Unrecognized(summary.trim().to_string())
    }
}

/// Extracts the paragraph starting at "Your branch" with quoted names removed.
fn tracking_sentence(summary: &str) -> String {
    let lines: Vec<&str> = summary
        .lines()
        .map(|line| line.trim_start_matches('#').trim())
        .skip_while(|line| !line.starts_with("Your branch"))
        .take_while(|line| !line.is_empty())
        .collect();
    lines
        .join(" ")
        .split('\'')
        .step_by(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `N` out of "... by N commit(s) ...".
fn count_after_by(summary: &str) -> Option<usize> {
    let mut tokens = summary.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "by" {
            if let Some(count) = tokens.next().and_then(|t| t.parse().ok()) {
                return Some(count);
            }
        }
    }
    None
}

/// Parses `(N, M)` out of "... have N and M different commits each ...".
fn diverged_counts(summary: &str) -> Option<(usize, usize)> {
    let tokens: Vec<&str> = summary.split_whitespace().collect();
    tokens.windows(4).find_map(|window| match window {
        ["have", ahead, "and", behind] => Some((ahead.parse().ok()?, behind.parse().ok()?)),
        _ => None,
    })
}
