//! Generator configuration
//!
//! Loads the JSON document that drives generation: numeric tokens, symbols,
//! fallback numeric ranges, the leetspeak table, and the password patterns.
//! A default document is embedded in the binary; `--config` swaps it out.
//!
//! The resulting [`Config`] is immutable and is handed to the generator by
//! reference.

use crate::template::{Template, TemplateError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Configuration shipped with the tool
pub const DEFAULT_CONFIG: &str = include_str!("../data/config.json");

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration defines no password patterns")]
    EmptyPatterns,

    #[error("leet map key '{0}' must be a single character")]
    InvalidLeetKey(String),

    #[error("leet map entry '{0}' has no replacements")]
    EmptyLeetReplacements(char),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// On-disk layout, keys as written in `config.json`
#[derive(Debug, Deserialize)]
struct RawConfig {
    common_numbers: Vec<String>,
    special_chars: Vec<String>,
    numbers_range: [i64; 2],
    years_range: [i64; 2],
    leet_map: BTreeMap<String, Vec<String>>,
    passwd_patterns: Vec<String>,
}

/// Character to replacement-strings table used for leetspeak expansion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeetMap {
    table: BTreeMap<char, Vec<String>>,
}

impl LeetMap {
    /// Build from `(char, replacements)` pairs. Keys are stored lower-cased.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<S>)>,
        S: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(c, reps)| (lower_char(c), reps.into_iter().map(Into::into).collect()))
            .collect();
        Self { table }
    }

    /// Replacements for an already lower-cased character
    #[inline]
    pub fn get(&self, c: char) -> Option<&[String]> {
        self.table.get(&c).map(Vec::as_slice)
    }

    pub fn contains(&self, c: char) -> bool {
        self.table.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Lower-case a single character, keeping it unchanged when its lowercase
/// form is not a single character.
#[inline]
pub(crate) fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Immutable generation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub common_numbers: Vec<String>,
    pub special_chars: Vec<String>,
    pub numbers_range: RangeInclusive<i64>,
    pub years_range: RangeInclusive<i64>,
    pub leet_map: LeetMap,
    pub patterns: Vec<Template>,
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Read a JSON document from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `path` if given, otherwise the embedded default
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_json(DEFAULT_CONFIG),
        }
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        if raw.passwd_patterns.is_empty() {
            return Err(ConfigError::EmptyPatterns);
        }

        let mut leet = Vec::with_capacity(raw.leet_map.len());
        for (key, replacements) in raw.leet_map {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::InvalidLeetKey(key)),
            };
            if replacements.is_empty() {
                return Err(ConfigError::EmptyLeetReplacements(c));
            }
            leet.push((c, replacements));
        }

        let patterns = raw
            .passwd_patterns
            .iter()
            .map(|p| Template::parse(p))
            .collect::<Result<Vec<_>, _>>()?;

        let [num_lo, num_hi] = raw.numbers_range;
        let [year_lo, year_hi] = raw.years_range;

        Ok(Self {
            common_numbers: raw.common_numbers,
            special_chars: raw.special_chars,
            numbers_range: num_lo..=num_hi,
            years_range: year_lo..=year_hi,
            leet_map: LeetMap::new(leet),
            patterns,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_json(DEFAULT_CONFIG).expect("embedded configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"{
        "common_numbers": ["123"],
        "special_chars": ["!", "@"],
        "numbers_range": [0, 9],
        "years_range": [1990, 1991],
        "leet_map": {"a": ["4", "@"], "E": ["3"]},
        "passwd_patterns": ["{name}{number}"]
    }"#;

    #[test]
    fn test_embedded_default_loads() {
        let config = Config::from_json(DEFAULT_CONFIG).unwrap();
        assert!(!config.patterns.is_empty());
        assert!(!config.leet_map.is_empty());
        assert!(config.numbers_range.start() <= config.numbers_range.end());
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_json(MINIMAL).unwrap();
        assert_eq!(config.common_numbers, vec!["123"]);
        assert_eq!(config.special_chars, vec!["!", "@"]);
        assert_eq!(config.numbers_range, 0..=9);
        assert_eq!(config.years_range, 1990..=1991);
        assert_eq!(config.patterns.len(), 1);
        assert_eq!(config.leet_map.get('a').unwrap(), ["4", "@"]);
        // keys are normalized to lowercase
        assert_eq!(config.leet_map.get('e').unwrap(), ["3"]);
        assert!(config.leet_map.get('E').is_none());
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let json = r#"{"common_numbers": [], "special_chars": []}"#;
        assert!(matches!(Config::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let json = MINIMAL.replace(r#"["{name}{number}"]"#, "[]");
        assert!(matches!(
            Config::from_json(&json),
            Err(ConfigError::EmptyPatterns)
        ));
    }

    #[test]
    fn test_bad_leet_key_rejected() {
        let json = MINIMAL.replace(r#""E": ["3"]"#, r#""ee": ["3"]"#);
        assert!(matches!(
            Config::from_json(&json),
            Err(ConfigError::InvalidLeetKey(k)) if k == "ee"
        ));

        let json = MINIMAL.replace(r#""E": ["3"]"#, r#""e": []"#);
        assert!(matches!(
            Config::from_json(&json),
            Err(ConfigError::EmptyLeetReplacements('e'))
        ));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let json = MINIMAL.replace("{name}{number}", "{name}{age}");
        assert!(matches!(
            Config::from_json(&json),
            Err(ConfigError::Template(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.patterns[0].as_str(), "{name}{number}");

        let missing = Config::load(Path::new("/nonexistent/wind.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
