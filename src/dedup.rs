//! Candidate deduplication
//!
//! Every variant produced by the generator lands in a [`CandidateSet`]. The set
//! only grows; membership is permanent until it is consumed by the wordlist
//! assembler.

use ahash::RandomState;
use hashbrown::HashSet;

/// Counters for insert outcomes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Total insert attempts
    pub total_processed: u64,
    /// Inserts that added a new member
    pub unique_count: u64,
    /// Inserts of an existing member
    pub duplicate_count: u64,
}

impl DedupStats {
    fn record(&mut self, unique: bool) {
        self.total_processed += 1;
        if unique {
            self.unique_count += 1;
        } else {
            self.duplicate_count += 1;
        }
    }
}

/// Set-semantics accumulator for generated candidates
#[derive(Debug, Clone)]
pub struct CandidateSet {
    set: HashSet<String, RandomState>,
    stats: DedupStats,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
            stats: DedupStats::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            stats: DedupStats::default(),
        }
    }

    /// Insert a candidate, returning true if it was not present
    pub fn insert(&mut self, candidate: String) -> bool {
        let unique = self.set.insert(candidate);
        self.stats.record(unique);
        unique
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.set.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }

    /// Consume the set, returning members in ascending byte order
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.set.into_iter().collect();
        words.sort_unstable();
        words
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<String> for CandidateSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
