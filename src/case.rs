//! Case variations of a candidate

use hashbrown::HashSet;

/// Return `word` plus, when `enabled`, its upper-cased and capitalized forms.
pub fn case_variations(word: &str, enabled: bool) -> HashSet<String> {
    let mut variations = HashSet::with_capacity(3);
    variations.insert(word.to_string());
    if enabled {
        variations.insert(word.to_uppercase());
        variations.insert(capitalize(word));
    }
    variations
}

/// First character upper-cased, the remainder lower-cased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_word_only() {
        let v = case_variations("john1990", false);
        assert_eq!(v.len(), 1);
        assert!(v.contains("john1990"));
    }

    #[test]
    fn test_enabled_adds_upper_and_capitalized() {
        let v = case_variations("john1990", true);
        assert_eq!(v.len(), 3);
        assert!(v.contains("john1990"));
        assert!(v.contains("JOHN1990"));
        assert!(v.contains("John1990"));
    }

    #[test]
    fn test_collapsing_forms() {
        // all three coincide
        assert_eq!(case_variations("1990", true).len(), 1);
        // capitalize lowers the tail of a mixed-case word
        let v = case_variations("jOHN", true);
        assert!(v.contains("John"));
        assert!(v.contains("JOHN"));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("john doe"), "John doe");
        assert_eq!(capitalize("1john"), "1john");
        assert_eq!(capitalize("éLAN"), "Élan");
    }
}
