//! Status lines for the command-line tools.
//!
//! Human-facing output goes through here; diagnostics go through `tracing`
//! on stderr.

use std::time::Duration;

use console::style;

/// Green check.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}

/// Red cross, on stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// `850ms`, `1.25s`, `2.0m`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

/// `1 page`, `5 pages`
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {}", count, noun)
}

/// `512 B`, `3.4 KiB`
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pick_the_right_noun() {
        assert_eq!(format_count(1, "page", "pages"), "1 page");
        assert_eq!(format_count(0, "page", "pages"), "0 pages");
        assert_eq!(format_count(5, "entry", "entries"), "5 entries");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(1250)), "1.25s");
        assert_eq!(format_duration(Duration::from_secs(120)), "2.0m");
    }

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
    }
}
