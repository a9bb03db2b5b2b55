//! Length filtering
//!
//! Base candidates are kept only when their length, in characters, falls within
//! the requested bounds. The filter runs before case and leet expansion.

/// Inclusive character-length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    min: usize,
    max: usize,
}

impl LengthFilter {
    /// Create a filter. `min > max` is allowed and matches nothing.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check if a word falls within the bounds
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        // Fast byte-length check first for ASCII-only optimization
        let len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };
        self.min <= len && len <= self.max
    }

    /// Whether any length can pass
    pub fn is_satisfiable(&self) -> bool {
        self.min <= self.max
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        let filter = LengthFilter::new(4, 8);

        assert!(filter.matches("pass")); // 4 chars
        assert!(filter.matches("password")); // 8 chars
        assert!(!filter.matches("abc")); // 3 chars
        assert!(!filter.matches("password1")); // 9 chars
    }

    #[test]
    fn test_exact_length() {
        let filter = LengthFilter::new(8, 8);

        assert!(filter.matches("password"));
        assert!(!filter.matches("pass"));
    }

    #[test]
    fn test_unicode_length() {
        let filter = LengthFilter::new(5, 5);

        assert!(filter.matches("hëllo")); // 5 unicode chars, 6 bytes
        assert!(filter.matches("hello"));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let filter = LengthFilter::new(10, 4);

        assert!(!filter.is_satisfiable());
        assert!(!filter.matches("pass"));
        assert!(!filter.matches("password12"));
    }
}
