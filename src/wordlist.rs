//! Wordlist assembly
//!
//! Orders the candidate set for output and reports an empty result as a
//! distinct outcome, since it nearly always means the inputs and length bounds
//! do not fit together.

use crate::config::Config;
use crate::dedup::CandidateSet;
use crate::generator::{GenerationOptions, Generator};
use crate::profile::{birth_tokens, normalize, TargetProfile};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordlistError {
    #[error("no words generated; check the target data and length bounds")]
    Empty,
}

/// Sort candidates in ascending byte order
pub fn assemble(candidates: CandidateSet) -> Result<Vec<String>, WordlistError> {
    if candidates.is_empty() {
        return Err(WordlistError::Empty);
    }
    Ok(candidates.into_sorted())
}

/// Normalize, generate and assemble in one call
pub fn build_wordlist(
    profile: &TargetProfile,
    options: &GenerationOptions,
    config: &Config,
) -> Result<Vec<String>, WordlistError> {
    let words = normalize(profile);
    let birth = birth_tokens(profile.birth.as_deref());
    let generation = Generator::new(config, *options).run(&words, &birth);
    assemble(generation.candidates)
}
