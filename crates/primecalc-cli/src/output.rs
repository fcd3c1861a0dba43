//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use primecalc_core::constants::PRIMES_PER_LINE;
use primecalc_core::search::SearchReport;

/// Header line reporting how many primes were found.
#[must_use]
pub fn format_header(count: usize) -> String {
    format!("Found {count} primes:")
}

/// Split primes into space-separated rows of `per_line` values.
///
/// The last row holds whatever remains and is not padded.
#[must_use]
pub fn format_rows(primes: &[u64], per_line: usize) -> Vec<String> {
    primes
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Write the header, a blank line, then the primes ten to a line.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_primes(out: &mut dyn Write, primes: &[u64]) -> io::Result<()> {
    writeln!(out, "{}", format_header(primes.len()))?;
    writeln!(out)?;
    for row in format_rows(primes, PRIMES_PER_LINE) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Render a report as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns a serialization error if the report cannot be encoded.
pub fn format_json(report: &SearchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primecalc_core::{run_search, Method, SearchBounds};

    const ELEVEN: [u64; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

    fn render(primes: &[u64]) -> String {
        let mut buf = Vec::new();
        write_primes(&mut buf, primes).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn eleven_primes_wrap_after_ten() {
        assert_eq!(
            render(&ELEVEN),
            "Found 11 primes:\n\n2 3 5 7 11 13 17 19 23 29\n31\n"
        );
    }

    #[test]
    fn exactly_ten_primes() {
        assert_eq!(
            render(&ELEVEN[..10]),
            "Found 10 primes:\n\n2 3 5 7 11 13 17 19 23 29\n"
        );
    }

    #[test]
    fn no_primes() {
        assert_eq!(render(&[]), "Found 0 primes:\n\n");
    }

    #[test]
    fn rows_have_no_padding() {
        let rows = format_rows(&[2, 3, 5], 2);
        assert_eq!(rows, vec!["2 3".to_string(), "5".to_string()]);
    }

    #[test]
    fn rows_with_zero_width_fall_back_to_one() {
        assert_eq!(format_rows(&[2, 3], 0).len(), 2);
    }

    #[test]
    fn header_text() {
        assert_eq!(format_header(4), "Found 4 primes:");
    }

    #[test]
    fn json_output() {
        let report = run_search(Method::Fast, SearchBounds::new(10, 100));
        let json = format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["method"], "fast");
        assert_eq!(value["primes"], serde_json::json!([2, 3, 5, 7]));
        assert_eq!(value["bounds"]["num_primes"], 100);
    }

    #[test]
    fn format_duration_micro() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs(3)), "3.000s");
    }
}
