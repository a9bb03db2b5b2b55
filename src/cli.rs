//! Command-line interface definition for wind
//!
//! Provides argument parsing and the conversion of arguments into a target
//! profile and generation options.

use crate::generator::GenerationOptions;
use crate::output::default_output_path;
use crate::profile::TargetProfile;
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Pattern-based password wordlist generator
///
/// Combines personal facts about a target into candidate passwords using
/// configurable patterns, with optional case, symbol, and leetspeak variants.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wind",
    author = "0xf0xy",
    version,
    about = "Pattern-based password wordlist generator",
    long_about = r#"
╔══════════════════════════════════════════════════════════════╗
║                         WIND v1.0.0                          ║
║          Pattern-Based Password Wordlist Generator           ║
║                For Authorized Security Testing               ║
╚══════════════════════════════════════════════════════════════╝

Builds candidate passwords from what is known about a target: name,
surname, pets, birth date, and free-form keywords. Every configured
pattern is filled with every combination of these, length-filtered,
and optionally expanded with case and leetspeak variants.

EXAMPLES:
    # Name and birth date, 8 characters
    wind john -b 15/06/1990

    # Pets and keywords, lengths 6 to 12
    wind john -S doe -p rex,luna -k blue,guitar -m 6 -M 12

    # Symbols, case and leet variants, custom output
    wind john -b 15/06/1990 -s -c -l -o john_full.txt

    # Show pool sizes without generating
    wind john --dry-run

PATTERN PLACEHOLDERS:
    {name} {surname} {pet} {number} {symbol} {keyword}

Without a birth date, {number} draws from the configured numeric and
year ranges, which can make the output very large.
"#
)]
pub struct Args {
    /// Target name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Target surname
    #[arg(short = 'S', long, value_name = "SURNAME")]
    pub surname: Option<String>,

    /// Birth date (DD/MM/YYYY)
    #[arg(short, long, value_name = "DD/MM/YYYY")]
    pub birth: Option<String>,

    /// Pet names (comma-separated)
    #[arg(short, long = "pet", value_name = "PETS")]
    pub pets: Option<String>,

    /// Additional keywords (comma-separated)
    #[arg(short, long, value_name = "KEYWORDS")]
    pub keywords: Option<String>,

    /// Minimum word length
    #[arg(short = 'm', long, value_name = "LEN", default_value_t = GenerationOptions::DEFAULT_MIN_LENGTH, value_parser = parse_length)]
    pub min_length: usize,

    /// Maximum word length (default: minimum length)
    #[arg(short = 'M', long, value_name = "LEN", value_parser = parse_length)]
    pub max_length: Option<usize>,

    /// Include special characters
    #[arg(short, long, default_value_t = false)]
    pub special: bool,

    /// Use leet transformations (l1k3 7h1s)
    #[arg(short, long, default_value_t = false)]
    pub leet: bool,

    /// Apply case transformations (UPPER and Capitalized)
    #[arg(short, long, default_value_t = false)]
    pub case: bool,

    /// Output file name (default: <NAME>.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file replacing the built-in one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dry run - show pool sizes without generating
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Target facts with name and surname lower-cased
    pub fn profile(&self) -> TargetProfile {
        TargetProfile {
            name: self.name.to_lowercase(),
            surname: self.surname.as_ref().map(|s| s.to_lowercase()),
            pets: self.pets.clone(),
            keywords: self.keywords.clone(),
            birth: self.birth.clone(),
        }
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions::new(self.min_length, self.max_length)
            .leet(self.leet)
            .special_chars(self.special)
            .case_variation(self.case)
    }

    /// Get output path, defaulting to `<name>.txt`
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.name.to_lowercase()))
    }
}

/// Parse a word length; zero is rejected
fn parse_length(s: &str) -> Result<usize, String> {
    let len: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid length value: '{}'", s))?;
    if len == 0 {
        return Err("length must be at least 1".to_string());
    }
    Ok(len)
}

/// Whether `birth` has the `DD/MM/YYYY` shape
pub fn is_birth_date(birth: &str) -> bool {
    static BIRTH: OnceLock<Regex> = OnceLock::new();
    BIRTH
        .get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("birth date regex is valid"))
        .is_match(birth)
}
