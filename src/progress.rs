//! Progress display module
//!
//! Banner, styled status lines, the generation spinner, and the final summary.

use crate::generator::GenerationStats;
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ██╗    ██╗██╗███╗   ██╗██████╗                             ║
║   ██║    ██║██║████╗  ██║██╔══██╗                            ║
║   ██║ █╗ ██║██║██╔██╗ ██║██║  ██║                            ║
║   ██║███╗██║██║██║╚██╗██║██║  ██║                            ║
║   ╚███╔███╔╝██║██║ ╚████║██████╔╝                            ║
║    ╚══╝╚══╝ ╚═╝╚═╝  ╚═══╝╚═════╝                             ║
║                                                              ║
║          Pattern-Based Password Wordlist Generator           ║
║                For Authorized Security Testing               ║
║                                                   v1.0.0     ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.blue());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".blue(), text.blue().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".blue(), text);
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Print final statistics
pub fn print_summary(stats: &GenerationStats, unique: usize, output: &Path, bytes: u64) {
    println!();
    println!("{}", "═".repeat(60).blue());
    println!("{}", "                   GENERATION COMPLETE".blue().bold());
    println!("{}", "═".repeat(60).blue());
    println!();

    println!(
        "  {} {}",
        "Patterns rendered:".blue(),
        format_number(stats.instantiated)
    );
    println!(
        "  {} {}",
        "Length matches:   ".blue(),
        format_number(stats.kept)
    );
    println!(
        "  {} {}",
        "Duplicates:       ".yellow(),
        format_number(stats.duplicates)
    );
    println!(
        "  {} {}",
        "Total words:      ".green().bold(),
        format_number(unique as u64).green().bold()
    );
    println!();
    println!("  {} {}", "Wordlist:         ".blue(), output.display());
    println!("  {} {}", "Size:             ".blue(), ByteSize(bytes));
    println!(
        "  {} {}",
        "Duration:         ".blue(),
        format_duration(stats.elapsed)
    );
    println!();
    println!("{}", "═".repeat(60).blue());
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }
}
