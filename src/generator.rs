//! Pattern engine
//!
//! Walks the Cartesian product `pets × keywords × patterns × symbols × numbers`,
//! renders each pattern, keeps the results whose length is within bounds, and
//! expands every survivor through case variations and, optionally, leetspeak.
//!
//! ```
//! use wind::config::Config;
//! use wind::generator::{generate, GenerationOptions};
//! use wind::profile::{birth_tokens, normalize, TargetProfile};
//!
//! let config = Config::default();
//! let mut profile = TargetProfile::new("john");
//! profile.birth = Some("15/06/1990".into());
//!
//! let words = normalize(&profile);
//! let birth = birth_tokens(profile.birth.as_deref());
//! let candidates = generate(&words, &birth, &GenerationOptions::new(6, Some(12)), &config);
//! assert!(candidates.contains("john1990"));
//! ```

use crate::case::case_variations;
use crate::config::Config;
use crate::dedup::CandidateSet;
use crate::filter::LengthFilter;
use crate::leet::leet_expand;
use crate::profile::NormalizedWords;
use crate::template::Bindings;

use log::{debug, warn};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Cross products above this size are reported as a resource risk
pub const LARGE_CROSS_PRODUCT: u128 = 10_000_000;

/// Knobs controlling a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub min_length: usize,
    pub max_length: usize,
    pub use_leet: bool,
    pub use_special_chars: bool,
    pub use_case_variation: bool,
}

impl GenerationOptions {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    /// Bounds with `max_length` defaulting to `min_length`; all expansions off
    pub fn new(min_length: usize, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length: max_length.unwrap_or(min_length),
            use_leet: false,
            use_special_chars: false,
            use_case_variation: false,
        }
    }

    pub fn leet(mut self, enabled: bool) -> Self {
        self.use_leet = enabled;
        self
    }

    pub fn special_chars(mut self, enabled: bool) -> Self {
        self.use_special_chars = enabled;
        self
    }

    pub fn case_variation(mut self, enabled: bool) -> Self {
        self.use_case_variation = enabled;
        self
    }

    pub fn length_filter(&self) -> LengthFilter {
        LengthFilter::new(self.min_length, self.max_length)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH, None)
    }
}

/// Numeric tokens available to `{number}`.
///
/// With birth tokens the pool is those tokens plus the common numbers;
/// without, it is both configured ranges plus the common numbers. Always
/// deduplicated and sorted.
pub fn numeric_pool(birth: &[String], config: &Config) -> Vec<String> {
    let mut pool: BTreeSet<String> = BTreeSet::new();

    if birth.is_empty() {
        pool.extend(config.numbers_range.clone().map(|n| n.to_string()));
        pool.extend(config.years_range.clone().map(|y| y.to_string()));
    } else {
        pool.extend(birth.iter().cloned());
    }
    pool.extend(config.common_numbers.iter().cloned());

    pool.into_iter().collect()
}

/// Symbols available to `{symbol}`: the configured set, or a single empty
/// string when special characters are off.
pub fn symbol_pool(options: &GenerationOptions, config: &Config) -> Vec<String> {
    if options.use_special_chars {
        config.special_chars.clone()
    } else {
        vec![String::new()]
    }
}

/// Counters collected during a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Pattern instantiations rendered
    pub instantiated: u64,
    /// Instantiations that passed the length filter
    pub kept: u64,
    /// Insert attempts into the candidate set
    pub inserted: u64,
    /// Inserts that hit an existing candidate
    pub duplicates: u64,
    pub elapsed: Duration,
}

/// Output of [`Generator::run`]
#[derive(Debug)]
pub struct Generation {
    pub candidates: CandidateSet,
    pub stats: GenerationStats,
}

/// Pattern engine bound to a configuration and a set of options
pub struct Generator<'a> {
    config: &'a Config,
    options: GenerationOptions,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, options: GenerationOptions) -> Self {
        Self { config, options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Number of pattern instantiations a run would render
    pub fn estimate(&self, words: &NormalizedWords, birth: &[String]) -> u128 {
        let numbers = numeric_pool(birth, self.config).len() as u128;
        let symbols = symbol_pool(&self.options, self.config).len() as u128;

        words.pets.len() as u128
            * words.keywords.len() as u128
            * self.config.patterns.len() as u128
            * symbols
            * numbers
    }

    /// Generate all candidates for the given words and birth tokens
    pub fn run(&self, words: &NormalizedWords, birth: &[String]) -> Generation {
        let start = Instant::now();
        let numbers = numeric_pool(birth, self.config);
        let symbols = symbol_pool(&self.options, self.config);
        let filter = self.options.length_filter();

        let estimate = self.estimate(words, birth);
        debug!(
            "pools: {} pets, {} keywords, {} patterns, {} symbols, {} numbers ({} instantiations)",
            words.pets.len(),
            words.keywords.len(),
            self.config.patterns.len(),
            symbols.len(),
            numbers.len(),
            estimate
        );
        if estimate > LARGE_CROSS_PRODUCT {
            warn!(
                "{} pattern instantiations requested; consider a birth date or narrower ranges",
                estimate
            );
        }

        let mut stats = GenerationStats::default();
        let mut candidates = CandidateSet::new();

        if !filter.is_satisfiable() {
            debug!(
                "length bounds {}..={} admit nothing; skipping generation",
                filter.min(),
                filter.max()
            );
            stats.elapsed = start.elapsed();
            return Generation { candidates, stats };
        }

        let mut rendered = String::new();
        for pet in &words.pets {
            for keyword in &words.keywords {
                for template in &self.config.patterns {
                    for symbol in &symbols {
                        for number in &numbers {
                            let bindings = Bindings {
                                name: &words.name,
                                surname: &words.surname,
                                pet,
                                number,
                                symbol,
                                keyword,
                            };
                            template.render_into(&bindings, &mut rendered);
                            stats.instantiated += 1;

                            if !filter.matches(&rendered) {
                                continue;
                            }
                            stats.kept += 1;
                            self.expand_into(&rendered, &mut candidates);
                        }
                    }
                }
            }
        }

        let dedup = candidates.stats();
        stats.inserted = dedup.total_processed;
        stats.duplicates = dedup.duplicate_count;
        stats.elapsed = start.elapsed();

        debug!(
            "rendered {}, kept {}, unique {} ({} duplicate inserts) in {:?}",
            stats.instantiated,
            stats.kept,
            candidates.len(),
            stats.duplicates,
            stats.elapsed
        );

        Generation { candidates, stats }
    }

    fn expand_into(&self, base: &str, candidates: &mut CandidateSet) {
        for variation in case_variations(base, self.options.use_case_variation) {
            if self.options.use_leet {
                candidates.extend(leet_expand(&variation, &self.config.leet_map));
            }
            candidates.insert(variation);
        }
    }
}

/// Generate the candidate set for one target
pub fn generate(
    words: &NormalizedWords,
    birth: &[String],
    options: &GenerationOptions,
    config: &Config,
) -> CandidateSet {
    Generator::new(config, *options).run(words, birth).candidates
}
