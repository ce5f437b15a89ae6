//! End-to-end integration tests
//!
//! These tests replay operation scripts through the complete pipeline:
//! 1. Read input.csv from a fixture directory
//! 2. Replay every operation against a fresh account with a fixed clock
//! 3. Capture every answer and statement
//! 4. Compare with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path deposits, withdrawals, and an overdraft attempt
//! - Invalid amounts (negative, zero, non-numeric, sub-cent)
//! - An empty script
//! - Unreadable rows mixed with a mid-script statement

#[cfg(test)]
mod tests {
    use bank_ledger::{replay_file, FixedClock, LedgerError, ReplayOptions, ReplaySummary};
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn clock() -> FixedClock {
        FixedClock::on_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    /// Replay tests/fixtures/{fixture_name}/input.csv and compare with expected.txt
    fn run_test_fixture(fixture_name: &str) -> ReplaySummary {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut output = Vec::new();
        let summary = replay_file(
            Path::new(&input_path),
            clock(),
            ReplayOptions::default(),
            &mut output,
        )
        .unwrap_or_else(|e| panic!("Failed to replay operations: {}", e));

        let actual_output = String::from_utf8(output).expect("Output is not UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
        summary
    }

    #[rstest]
    #[case::happy_path("happy_path", 3, 1, 0)]
    #[case::invalid_amounts("invalid_amounts", 2, 5, 0)]
    #[case::empty("empty", 0, 0, 0)]
    #[case::malformed_rows("malformed_rows", 2, 0, 2)]
    fn test_fixtures(
        #[case] fixture_name: &str,
        #[case] applied: usize,
        #[case] rejected: usize,
        #[case] skipped: usize,
    ) {
        let summary = run_test_fixture(fixture_name);

        assert_eq!(summary.applied, applied, "applied count for {}", fixture_name);
        assert_eq!(summary.rejected, rejected, "rejected count for {}", fixture_name);
        assert_eq!(summary.skipped, skipped, "skipped count for {}", fixture_name);
    }

    #[test]
    fn test_no_closing_statement() {
        let mut input = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(input, "operation,amount").unwrap();
        writeln!(input, "deposit,100").unwrap();
        writeln!(input, "withdraw,30").unwrap();
        input.flush().unwrap();

        let mut output = Vec::new();
        let summary = replay_file(
            input.path(),
            clock(),
            ReplayOptions {
                closing_statement: false,
            },
            &mut output,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "100.00 deposited. Current balance: 100.00\n30.00 withdrawn. Current balance: 70.00\n"
        );
        assert_eq!(summary.statements, 0);
    }

    #[test]
    fn test_missing_input_file() {
        let mut output = Vec::new();
        let result = replay_file(
            Path::new("tests/fixtures/does_not_exist/input.csv"),
            clock(),
            ReplayOptions::default(),
            &mut output,
        );

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
