//! Wind - Pattern-based password wordlist generator
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use log::warn;
use std::process;

use wind::cli::{is_birth_date, Args};
use wind::config::Config;
use wind::generator::{numeric_pool, symbol_pool, Generator};
use wind::output::write_wordlist;
use wind::profile::{birth_tokens, normalize};
use wind::progress::{
    create_spinner, format_number, print_banner, print_bullet, print_error, print_header,
    print_info, print_success, print_summary, print_warning,
};
use wind::wordlist::{assemble, WordlistError};

/// Exit code when generation produced no words
const EXIT_EMPTY: i32 = 2;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_EMPTY),
        Err(e) => {
            print_error(&format!("{}", e));

            // Print chain of errors
            let mut source = e.source();
            while let Some(err) = source {
                print_error(&format!("  Caused by: {}", err));
                source = err.source();
            }

            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when nothing was generated
fn run(args: Args) -> anyhow::Result<bool> {
    if !args.quiet {
        print_banner();
    }

    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let profile = args.profile();
    let options = args.options();

    if let Some(birth) = profile.birth.as_deref() {
        if !is_birth_date(birth) {
            warn!("birth date '{}' is not DD/MM/YYYY; using it as given", birth);
        }
    }
    if options.min_length > options.max_length {
        warn!(
            "minimum length {} exceeds maximum length {}; no word can match",
            options.min_length, options.max_length
        );
    }

    let words = normalize(&profile);
    let birth = birth_tokens(profile.birth.as_deref());
    let generator = Generator::new(&config, options);

    if args.dry_run {
        dry_run_report(&args, &config, &generator, &words, &birth);
        return Ok(true);
    }

    let spinner = if args.quiet {
        indicatif::ProgressBar::hidden()
    } else {
        print_header("Generating wordlist...");
        create_spinner("Combining patterns...")
    };
    let generation = generator.run(&words, &birth);
    spinner.finish_and_clear();

    let unique = generation.candidates.len();
    let wordlist = match assemble(generation.candidates) {
        Ok(wordlist) => wordlist,
        Err(WordlistError::Empty) => {
            print_warning("No words generated. Check the input data and length bounds.");
            return Ok(false);
        }
    };

    let output = args.output_path();
    let (_, bytes) = write_wordlist(&output, &wordlist)
        .with_context(|| format!("Failed to write wordlist to {}", output.display()))?;

    if args.quiet {
        return Ok(true);
    }

    print_success(&format!(
        "Total words generated: {}",
        format_number(unique as u64)
    ));
    print_success(&format!("Wordlist saved as: {}", output.display()));
    if args.verbose {
        print_summary(&generation.stats, unique, &output, bytes);
    }

    Ok(true)
}

/// Print the pools and the size of the cross product without generating
fn dry_run_report(
    args: &Args,
    config: &Config,
    generator: &Generator<'_>,
    words: &wind::profile::NormalizedWords,
    birth: &[String],
) {
    let options = generator.options();
    let numbers = numeric_pool(birth, config);
    let symbols = symbol_pool(options, config);

    print_header("DRY RUN - No files will be written");

    print_info(&format!("Pets:        {:?}", words.pets));
    print_info(&format!("Keywords:    {:?}", words.keywords));
    print_info(&format!("Patterns:    {}", config.patterns.len()));
    print_info(&format!("Symbols:     {}", symbols.len()));
    print_info(&format!(
        "Numbers:     {}{}",
        numbers.len(),
        if birth.is_empty() {
            " (from configured ranges)"
        } else {
            " (from birth date)"
        }
    ));
    print_info(&format!(
        "Lengths:     {}-{}",
        options.min_length, options.max_length
    ));

    print_header("Estimate");
    let estimate = generator.estimate(words, birth);
    print_bullet(&format!(
        "Pattern instantiations: {}",
        format_number(u64::try_from(estimate).unwrap_or(u64::MAX))
    ));
    print_bullet(&format!("Case variations: {}", options.use_case_variation));
    print_bullet(&format!("Leetspeak:       {}", options.use_leet));
    print_bullet(&format!("Output file:     {}", args.output_path().display()));
}
