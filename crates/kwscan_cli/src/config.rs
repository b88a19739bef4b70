//! Command-line configuration.
//!
//! Arguments are parsed by hand: the surface is two subcommands and a
//! handful of flags.

use std::path::PathBuf;

use crate::error::CliError;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scan one input and print its tokens.
    Scan(CliConfig),
    /// Scan the built-in reference input and verify the result.
    Check { verbose: bool },
    /// Print usage.
    Help,
}

/// Options for `kwscan scan`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the text to scan comes from.
    pub input: Option<InputSource>,
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Log each token as it is discovered.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            input: None,
            format: OutputFormat::Lines,
            verbose: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line.
    Text(String),
    /// `--file=<path>`
    File(PathBuf),
    /// `-`
    Stdin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    Lines,
    /// Rust debug list, e.g. `["a", "b"]`.
    Debug,
    /// Tokens re-wrapped in their quotes and joined with ` | `.
    Source,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value {
            "lines" => Ok(OutputFormat::Lines),
            "debug" => Ok(OutputFormat::Debug),
            "source" => Ok(OutputFormat::Source),
            other => Err(CliError::InvalidFormat(other.to_string())),
        }
    }
}

/// Parse arguments (without the program name) into a [`Command`].
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "scan" => parse_scan_args(rest).map(Command::Scan),
        "check" => {
            let mut verbose = false;
            for arg in rest {
                match arg.as_str() {
                    "--verbose" | "-v" => verbose = true,
                    other => return Err(CliError::UnknownFlag(other.to_string())),
                }
            }
            Ok(Command::Check { verbose })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn parse_scan_args(args: &[String]) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();

    for arg in args {
        let source = if let Some(path) = arg.strip_prefix("--file=") {
            InputSource::File(PathBuf::from(path))
        } else if let Some(format) = arg.strip_prefix("--format=") {
            config.format = OutputFormat::parse(format)?;
            continue;
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
            continue;
        } else if arg == "-" {
            InputSource::Stdin
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownFlag(arg.clone()));
        } else {
            InputSource::Text(arg.clone())
        };

        if config.input.is_some() {
            return Err(CliError::ConflictingInput);
        }
        config.input = Some(source);
    }

    if config.input.is_none() {
        return Err(CliError::MissingInput);
    }
    Ok(config)
}

#[cfg(test)]
mod tests;
