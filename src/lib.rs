//! # Wind
//!
//! Pattern-based password wordlist generator for authorized penetration
//! testing.
//!
//! ## Features
//!
//! - **Pattern templates**: `{name}{symbol}{number}` style patterns filled with
//!   every combination of the target's facts
//! - **Birth date tokens**: day, month, `DDMM`, year and full date as numbers
//! - **Case variations**: original, UPPER and Capitalized forms
//! - **Leetspeak**: every combination of configured substitutions
//! - **Length filtering** on the base candidate, before expansion
//! - **Deduplication** and sorted output
//!
//! ## Usage
//!
//! ```bash
//! # Name and birth date, 8 characters
//! wind john -b 15/06/1990
//!
//! # Pets and keywords with symbols, case and leet variants
//! wind john -p rex -k blue -m 6 -M 12 -s -c -l
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wind::config::Config;
//! use wind::generator::GenerationOptions;
//! use wind::profile::TargetProfile;
//! use wind::wordlist::build_wordlist;
//!
//! let config = Config::default();
//! let profile = TargetProfile {
//!     name: "john".into(),
//!     pets: Some("rex".into()),
//!     birth: Some("15/06/1990".into()),
//!     ..TargetProfile::default()
//! };
//! let options = GenerationOptions::new(4, Some(20)).case_variation(true);
//!
//! let words = build_wordlist(&profile, &options, &config).unwrap();
//! assert!(words.contains(&"johnrex1990".to_string()));
//! assert!(words.contains(&"Johnrex1990".to_string()));
//! ```

pub mod case;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod filter;
pub mod generator;
pub mod leet;
pub mod output;
pub mod profile;
pub mod progress;
pub mod template;
pub mod wordlist;

pub use cli::Args;
pub use config::{Config, ConfigError};
pub use generator::{generate, GenerationOptions, Generator};
pub use profile::{birth_tokens, normalize, TargetProfile};
pub use wordlist::{assemble, build_wordlist, WordlistError};
