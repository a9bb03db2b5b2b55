//! Target profile and field normalization
//!
//! Turns the raw facts collected about a target into the word lists consumed
//! by the generator, and derives numeric tokens from a `DD/MM/YYYY` birth date.

/// Raw facts about the target, as supplied at the CLI boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetProfile {
    /// Lower-cased by the caller
    pub name: String,
    pub surname: Option<String>,
    /// Comma-separated pet names
    pub pets: Option<String>,
    /// Comma-separated free-form keywords
    pub keywords: Option<String>,
    /// Birth date in `DD/MM/YYYY` form, not validated
    pub birth: Option<String>,
}

impl TargetProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Word lists derived from a [`TargetProfile`]
///
/// `pets` and `keywords` are never empty: a missing field becomes `[""]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWords {
    pub name: String,
    pub surname: String,
    pub pets: Vec<String>,
    pub keywords: Vec<String>,
}

/// Normalize the textual fields of a profile
pub fn normalize(profile: &TargetProfile) -> NormalizedWords {
    NormalizedWords {
        name: profile.name.clone(),
        surname: profile.surname.clone().unwrap_or_default(),
        pets: split_words(profile.pets.as_deref()),
        keywords: split_words(profile.keywords.as_deref()),
    }
}

/// Split a comma-separated list, dropping empty segments. Segments are not
/// trimmed.
pub fn split_words(raw: Option<&str>) -> Vec<String> {
    let words: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        vec![String::new()]
    } else {
        words
    }
}

/// Derive numeric tokens from a birth date.
///
/// Slashes are stripped and the remaining digits `d` yield, in order,
/// `d[0:2]`, `d[2:4]`, `d[0:4]`, the last four characters, and `d` itself.
/// Short or malformed input produces whatever substrings exist; duplicates
/// are kept.
pub fn birth_tokens(birth: Option<&str>) -> Vec<String> {
    let digits: Vec<char> = match birth {
        Some(b) if !b.is_empty() => b.chars().filter(|&c| c != '/').collect(),
        _ => return Vec::new(),
    };

    let len = digits.len();
    let slice = |start: usize, end: usize| -> String {
        let start = start.min(len);
        let end = end.clamp(start, len);
        digits[start..end].iter().collect()
    };

    vec![
        slice(0, 2),
        slice(2, 4),
        slice(0, 4),
        slice(len.saturating_sub(4), len),
        digits.iter().collect(),
    ]
}
