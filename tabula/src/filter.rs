//! Fuzzy row filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Matches row text against a fuzzy query.
///
/// Unlike a picker, a table keeps its own order, so this only answers
/// "does the row match" and never ranks.
pub struct RowFilter {
    matcher: Matcher,
    pattern: Option<Pattern>,
    buf: Vec<char>,
}

impl RowFilter {
    /// Build a filter for `query`. An empty or blank query matches everything.
    pub fn new(query: &str) -> Self {
        let pattern = (!query.trim().is_empty()).then(|| {
            Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )
        });
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern,
            buf: Vec::new(),
        }
    }

    /// Whether a row whose cells render as `haystack` passes the filter.
    pub fn matches(&mut self, haystack: &str) -> bool {
        let Some(pattern) = &self.pattern else {
            return true;
        };
        self.buf.clear();
        let haystack = Utf32Str::new(haystack, &mut self.buf);
        pattern.score(haystack, &mut self.matcher).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let mut filter = RowFilter::new("  ");
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_fuzzy_match_ignores_case() {
        let mut filter = RowFilter::new("ada");
        assert!(filter.matches("1 Ada Lovelace"));
        assert!(filter.matches("A d a"));
        assert!(!filter.matches("Grace Hopper"));
    }
}
