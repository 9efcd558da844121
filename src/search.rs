//! Fuzzy subsequence matcher backing the command palette and the sidebar
//! search box.
//!
//! The scorer is a cheap heuristic, not an optimal alignment: it matches the
//! query greedily left-to-right and never backtracks, so a later, better
//! global alignment is not considered.

/// Sentinel score for "query is not a subsequence of the candidate".
pub const NO_MATCH: i32 = -1;

/// Score `query` against `text`, case-insensitively.
///
/// Every query character must appear in `text`, in order. Each matched
/// character is worth one point, with a bonus point when the match is
/// adjacent to the previous one (rewards contiguous runs) and a bonus point
/// when it lands at position 0 (rewards prefix hits). An empty query matches
/// everything with score 0.
pub fn score(query: &str, text: &str) -> i32 {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    if query.is_empty() {
        return 0;
    }
    let text: Vec<char> = text.to_lowercase().chars().collect();

    let mut scan = 0usize;
    let mut total = 0i32;
    for ch in query {
        let Some(offset) = text[scan..].iter().position(|&c| c == ch) else {
            return NO_MATCH;
        };
        let index = scan + offset;
        total += 1;
        if index == scan {
            total += 1;
        }
        if index == 0 {
            total += 1;
        }
        scan = index + 1;
    }
    total
}

/// Anything the matcher can rank: a display label plus an optional
/// secondary hint (path, slug, ...).
pub trait Matchable {
    fn label(&self) -> &str;
    fn hint(&self) -> Option<&str> {
        None
    }
}

/// Rank `items` against `query`, best match first.
///
/// The candidate text is the label and hint joined by a space. Items that do
/// not match are dropped. Equal scores keep their original insertion order
/// (`sort_by` is stable), so results are reproducible.
pub fn rank<'a, T: Matchable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    let mut scored: Vec<(i32, &T)> = items
        .iter()
        .filter_map(|item| {
            let text = match item.hint() {
                Some(hint) => format!("{} {}", item.label(), hint),
                None => item.label().to_string(),
            };
            let score = score(query, &text);
            (score >= 0).then_some((score, item))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Candidate {
        label: &'static str,
        hint: Option<&'static str>,
    }

    impl Matchable for Candidate {
        fn label(&self) -> &str {
            self.label
        }
        fn hint(&self) -> Option<&str> {
            self.hint
        }
    }

    fn candidate(label: &'static str) -> Candidate {
        Candidate { label, hint: None }
    }

    #[test]
    fn test_non_subsequence_is_no_match() {
        assert_eq!(score("prj", "About"), NO_MATCH);
        assert_eq!(score("abc", "acb"), NO_MATCH);
        assert_eq!(score("xyz", ""), NO_MATCH);
    }

    #[test]
    fn test_subsequence_scores_positive() {
        // p@0, r@2, j@6 in "projects"
        assert!(score("prj", "Projects") > 0);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(score("", "anything"), 0);
        assert_eq!(score("", ""), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("HOME", "home"), score("home", "HOME"));
        assert!(score("Prj", "pRoJects") > 0);
    }

    #[test]
    fn test_prefix_beats_mid_string() {
        // Same length, same content apart from where the match starts.
        let prefix = score("pro", "project ideas");
        let mid = score("pro", "xproject idea");
        assert!(prefix > mid);
    }

    #[test]
    fn test_contiguous_run_beats_scattered() {
        assert!(score("abc", "xabcx") > score("abc", "xaxbxcx"));
    }

    #[test]
    fn test_first_char_at_zero_gets_both_bonuses() {
        // 1 base + 1 consecutive (index == scan == 0) + 1 prefix.
        assert_eq!(score("a", "a"), 3);
    }

    #[test]
    fn test_greedy_never_backtracks() {
        // Greedy takes the first 'a', then cannot place 'b' before it.
        assert_eq!(score("ab", "ba"), NO_MATCH);
    }

    #[test]
    fn test_rank_filters_and_orders() {
        let items = vec![candidate("About"), candidate("Projects")];
        let ranked = rank("prj", &items);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].label, "Projects");
    }

    #[test]
    fn test_rank_stable_on_ties() {
        let items = vec![candidate("alpha"), candidate("alpine"), candidate("beta")];
        let ranked = rank("al", &items);
        assert_eq!(ranked[0].label, "alpha");
        assert_eq!(ranked[1].label, "alpine");
    }

    #[test]
    fn test_rank_uses_hint_text() {
        let items = vec![Candidate {
            label: "Preview CLI Playground",
            hint: Some("cli-playground"),
        }];
        // "playg" only continues into the hint after the label is exhausted.
        assert_eq!(rank("previewcli", &items).len(), 1);
        assert_eq!(rank("zzz", &items).len(), 0);
    }

    #[test]
    fn test_rank_empty_query_returns_all_in_order() {
        let items = vec![candidate("b"), candidate("a")];
        let ranked = rank("", &items);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "b");
    }
}
