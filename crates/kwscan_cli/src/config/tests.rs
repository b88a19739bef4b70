use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn scan_config(list: &[&str]) -> CliConfig {
    match parse_args(&args(list)) {
        Ok(Command::Scan(config)) => config,
        other => panic!("expected scan command for {list:?}, got {other:?}"),
    }
}

// === Commands ===

#[test]
fn no_arguments_is_help() {
    assert!(matches!(parse_args(&[]), Ok(Command::Help)));
}

#[test]
fn help_aliases() {
    for flag in ["help", "--help", "-h"] {
        assert!(matches!(parse_args(&args(&[flag])), Ok(Command::Help)));
    }
}

#[test]
fn unknown_command() {
    let err = parse_args(&args(&["lex"]));
    assert!(matches!(err, Err(CliError::UnknownCommand(ref c)) if c == "lex"));
}

#[test]
fn check_with_verbose() {
    assert!(matches!(
        parse_args(&args(&["check", "-v"])),
        Ok(Command::Check { verbose: true })
    ));
    assert!(matches!(
        parse_args(&args(&["check"])),
        Ok(Command::Check { verbose: false })
    ));
}

#[test]
fn check_rejects_other_flags() {
    assert!(matches!(
        parse_args(&args(&["check", "--format=debug"])),
        Err(CliError::UnknownFlag(_))
    ));
}

// === Scan Options ===

#[test]
fn scan_literal_text() {
    let config = scan_config(&["scan", "'a' | 'b'"]);
    assert_eq!(
        config,
        CliConfig {
            input: Some(InputSource::Text("'a' | 'b'".to_string())),
            ..CliConfig::default()
        }
    );
}

#[test]
fn scan_file_and_format() {
    let config = scan_config(&["scan", "--format=source", "--file=keywords.txt", "-v"]);
    assert_eq!(
        config,
        CliConfig {
            input: Some(InputSource::File(PathBuf::from("keywords.txt"))),
            format: OutputFormat::Source,
            verbose: true,
        }
    );
}

#[test]
fn scan_stdin() {
    let config = scan_config(&["scan", "-", "--format=debug"]);
    assert_eq!(config.input, Some(InputSource::Stdin));
    assert_eq!(config.format, OutputFormat::Debug);
}

#[test]
fn scan_requires_input() {
    assert!(matches!(
        parse_args(&args(&["scan", "--verbose"])),
        Err(CliError::MissingInput)
    ));
}

#[test]
fn scan_rejects_two_inputs() {
    assert!(matches!(
        parse_args(&args(&["scan", "'a'", "--file=x"])),
        Err(CliError::ConflictingInput)
    ));
}

#[test]
fn scan_rejects_unknown_format() {
    let err = parse_args(&args(&["scan", "--format=json", "'a'"]));
    assert!(matches!(err, Err(CliError::InvalidFormat(ref f)) if f == "json"));
}

#[test]
fn scan_rejects_unknown_long_flag() {
    assert!(matches!(
        parse_args(&args(&["scan", "--quiet", "'a'"])),
        Err(CliError::UnknownFlag(_))
    ));
}

#[test]
fn default_config() {
    let config = CliConfig::default();
    assert_eq!(config.input, None);
    assert_eq!(config.format, OutputFormat::Lines);
    assert!(!config.verbose);
}
