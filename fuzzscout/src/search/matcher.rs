/// Fuzzy pattern matching: a line matches when the pattern's characters
/// appear in the line in order, not necessarily contiguously.
/// Case-sensitive; stateless beyond the stored pattern, so a single
/// matcher is shared read-only across all scan workers.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
}

impl PatternMatcher {
    /// Creates a new PatternMatcher for the given pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Tests whether the pattern fuzzily matches the given line
    pub fn is_match(&self, line: &str) -> bool {
        let mut wanted = self.pattern.chars();
        let mut next = wanted.next();
        for c in line.chars() {
            match next {
                None => return true,
                Some(w) if w == c => next = wanted.next(),
                Some(_) => {}
            }
        }
        next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_matches() {
        let matcher = PatternMatcher::new("hello");
        assert!(matcher.is_match("hello world"));
        assert!(matcher.is_match("say hello"));
    }

    #[test]
    fn test_subsequence_matches() {
        let matcher = PatternMatcher::new("hlo");
        assert!(matcher.is_match("hello"));
        assert!(matcher.is_match("h-e-l-l-o"));
    }

    #[test]
    fn test_order_is_required() {
        let matcher = PatternMatcher::new("olh");
        assert!(!matcher.is_match("hello"));
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = PatternMatcher::new("Hello");
        assert!(!matcher.is_match("hello world"));
        assert!(matcher.is_match("Hello world"));
    }

    #[test]
    fn test_pattern_longer_than_line() {
        let matcher = PatternMatcher::new("hello world");
        assert!(!matcher.is_match("hello"));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let matcher = PatternMatcher::new("");
        assert!(matcher.is_match(""));
        assert!(matcher.is_match("anything"));
    }

    #[test]
    fn test_multibyte_characters() {
        let matcher = PatternMatcher::new("héllo");
        assert!(matcher.is_match("h-é-l-l-o"));
        assert!(!matcher.is_match("hello"));
    }
}
