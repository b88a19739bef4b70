use super::*;
use kwscan::{parse_texts, Quote};
use pretty_assertions::assert_eq;

#[test]
fn self_check_input_yields_expected_tokens() {
    assert_eq!(
        parse_texts(SELF_CHECK_INPUT),
        Ok(SELF_CHECK_EXPECTED.to_vec())
    );
    assert_eq!(run_check(), 0);
}

// === Formatting ===

#[test]
fn lines_format() {
    assert_eq!(
        scan_text("'a' | \"b c\"", OutputFormat::Lines),
        Ok("a\nb c".to_string())
    );
}

#[test]
fn debug_format() {
    assert_eq!(
        scan_text(SELF_CHECK_INPUT, OutputFormat::Debug),
        Ok(r#"["hello", "\"world\"", "'gol|a'ng"]"#.to_string())
    );
}

#[test]
fn source_format_normalizes() {
    assert_eq!(
        scan_text("`a`|'b'", OutputFormat::Source),
        Ok("`a` | 'b'".to_string())
    );
}

#[test]
fn empty_token_list_formats_empty() {
    assert_eq!(format_tokens(&[], OutputFormat::Lines), "");
    assert_eq!(format_tokens(&[], OutputFormat::Debug), "[]");
}

// === Failures ===

#[test]
fn empty_text_is_not_scanned() {
    assert_eq!(
        scan_text("", OutputFormat::Lines),
        Err(ScanFailure::Empty(EmptyInput))
    );
}

#[test]
fn malformed_text_reports_scan_error() {
    assert_eq!(
        scan_text("\"abc\"x", OutputFormat::Lines),
        Err(ScanFailure::Invalid(ScanError::unexpected_after_close(
            5,
            Quote::Double,
            b'x'
        )))
    );
}

#[test]
fn run_scan_exit_codes() {
    let ok = CliConfig {
        input: Some(InputSource::Text("'a'".to_string())),
        ..CliConfig::default()
    };
    assert_eq!(run_scan(&ok), 0);

    let bad = CliConfig {
        input: Some(InputSource::Text("x".to_string())),
        ..CliConfig::default()
    };
    assert_eq!(run_scan(&bad), EXIT_SCAN_FAILED);

    let empty = CliConfig {
        input: Some(InputSource::Text(String::new())),
        ..CliConfig::default()
    };
    assert_eq!(run_scan(&empty), EXIT_USAGE);
}

#[test]
fn missing_file_is_usage_error() {
    let config = CliConfig {
        input: Some(InputSource::File("/nonexistent/kwscan/input.txt".into())),
        ..CliConfig::default()
    };
    assert_eq!(run_scan(&config), EXIT_USAGE);
}

#[test]
fn load_input_classifies_missing_file() {
    let err = load_input(&InputSource::File("/nonexistent/kwscan/input.txt".into()));
    assert!(matches!(err, Err(CliError::NotFound { .. })));
}

// === Input Loading ===

#[test]
fn strips_one_trailing_newline() {
    assert_eq!(strip_trailing_newline("'a'\n".to_string()), "'a'");
    assert_eq!(strip_trailing_newline("'a'\r\n".to_string()), "'a'");
    assert_eq!(strip_trailing_newline("'a'\n\n".to_string()), "'a'\n");
    assert_eq!(strip_trailing_newline("'a'".to_string()), "'a'");
}

#[test]
fn file_input_is_scanned() {
    let path = std::env::temp_dir().join(format!("kwscan-input-{}.txt", std::process::id()));
    let written = std::fs::write(&path, "'a' | `b`\n");
    assert!(written.is_ok());

    let text = load_input(&InputSource::File(path.clone()));
    let _ = std::fs::remove_file(&path);
    assert_eq!(text.ok(), Some("'a' | `b`".to_string()));
}
