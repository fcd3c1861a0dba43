//! Golden file integration tests.
//!
//! Runs the binary with both methods for every entry in
//! tests/testdata/primes_golden.json and checks the printed rows.

use assert_cmd::Command;
use serde::Deserialize;

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    max_int: u64,
    num_primes: usize,
    count: usize,
    primes: Option<Vec<u64>>,
    last: Option<u64>,
}

fn load_golden() -> GoldenData {
    // Try workspace root path first, then crate-local path
    let data = std::fs::read_to_string("../../tests/testdata/primes_golden.json")
        .or_else(|_| std::fs::read_to_string("tests/testdata/primes_golden.json"))
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn run(method: &str, entry: &GoldenEntry) -> String {
    let output = Command::cargo_bin("primecalc")
        .expect("binary not found")
        .env_remove("PRIMECALC_LIMIT")
        .env_remove("PRIMECALC_NUMPRIMES")
        .env_remove("RUST_LOG")
        .args([
            "-m",
            method,
            "-l",
            &entry.max_int.to_string(),
            "-n",
            &entry.num_primes.to_string(),
        ])
        .output()
        .expect("failed to run primecalc");
    assert!(output.status.success(), "primecalc -m {method} failed");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

fn expected_output(primes: &[u64]) -> String {
    let mut text = format!("Found {} primes:\n\n", primes.len());
    for row in primes.chunks(10) {
        let row: Vec<String> = row.iter().map(u64::to_string).collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    text
}

#[test]
fn golden_output_both_methods() {
    for entry in load_golden().values {
        for method in ["0", "1"] {
            let stdout = run(method, &entry);
            let label = format!(
                "-m {method} -l {} -n {}",
                entry.max_int, entry.num_primes
            );

            let header = format!("Found {} primes:", entry.count);
            assert_eq!(stdout.lines().next(), Some(header.as_str()), "{label}");

            if let Some(primes) = &entry.primes {
                assert_eq!(stdout, expected_output(primes), "{label}");
            }
            if let Some(last) = entry.last {
                let printed_last = stdout.split_whitespace().last().map(str::to_owned);
                assert_eq!(printed_last, Some(last.to_string()), "{label}");
            }
        }
    }
}

#[test]
fn methods_print_identical_output() {
    for entry in load_golden().values {
        assert_eq!(run("0", &entry), run("1", &entry));
    }
}
