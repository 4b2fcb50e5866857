use std::ffi::OsStr;

use clap::{
    ArgAction, Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};

use crate::core::{
    constants::{DEFAULT_ROWS, DEFAULT_TICK_STRIDE},
    error::HistError,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "histogrammer",
    version,
    about = "Prints histogram of characters in text file at FILE",
    after_help = "Arguments must be positive integers"
)]
pub struct Cli {
    /// Text file to read (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Draw ROW_COUNT rows of histogram
    #[arg(
        short = 'r',
        value_name = "ROW_COUNT",
        default_values_t = [DEFAULT_ROWS],
        value_parser = positive,
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    rows: Vec<usize>,

    /// Draw a tick every TICK_STRIDE rows
    #[arg(
        short = 's',
        value_name = "TICK_STRIDE",
        default_values_t = [DEFAULT_TICK_STRIDE],
        value_parser = positive,
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    tick_stride: Vec<usize>,

    /// Colour filled bars (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// First `-r` value wins when the flag is repeated.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.first().copied().unwrap_or(DEFAULT_ROWS)
    }

    /// First `-s` value wins when the flag is repeated.
    #[must_use]
    pub fn tick_stride(&self) -> usize {
        self.tick_stride.first().copied().unwrap_or(DEFAULT_TICK_STRIDE)
    }
}

/// `--help` anywhere after the program name asks for usage, even where it
/// would otherwise be taken as a flag value (`-r --help`).
pub fn wants_help<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    args.into_iter().skip(1).any(|a| a.as_ref() == "--help")
}

/// Flag value parser: ASCII digits only, no sign, at least 1, fits `usize`.
///
/// # Errors
/// A short reason when `s` is not a positive integer.
pub fn positive(s: &str) -> Result<usize, String> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("`{s}` is not a positive integer"));
    }
    match lexical_core::parse::<usize>(s.as_bytes()) {
        Ok(0) => Err("value must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("`{s}` is out of range")),
    }
}

/// Map a clap parse failure onto the crate's error taxonomy.
#[must_use]
pub fn usage_error(e: &clap::Error) -> HistError {
    // clap renders the offending arg as `-r <ROW_COUNT>`
    let flag = match e.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().map(str::to_owned),
        _ => None,
    };
    match (e.kind(), flag) {
        (ErrorKind::InvalidValue, Some(flag)) => HistError::MissingFlagArgument { flag },
        (ErrorKind::ValueValidation, Some(flag)) => HistError::InvalidFlagArgument { flag },
        _ => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            HistError::Usage(first.trim_start_matches("error: ").to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, HistError> {
        Cli::try_parse_from(std::iter::once("histogrammer").chain(args.iter().copied()))
            .map_err(|e| usage_error(&e))
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&["book.txt"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some("book.txt"));
        assert_eq!((cli.rows(), cli.tick_stride()), (10, 3));
        assert!(cli.color.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn flags_override_defaults_in_any_position() {
        let cli = parse(&["-s", "2", "book.txt", "-r", "4"]).unwrap();
        assert_eq!((cli.rows(), cli.tick_stride()), (4, 2));
    }

    #[test]
    fn missing_path_is_allowed() {
        assert!(parse(&[]).unwrap().file.is_none());
    }

    #[test]
    fn positive_accepts_plain_digits_only() {
        assert_eq!(positive("7"), Ok(7));
        assert_eq!(positive("007"), Ok(7));
        for bad in ["", "0", "-3", "+3", "3x", " 3", "1e3", "99999999999999999999999"] {
            assert!(positive(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn flag_without_value_is_missing_argument() {
        let err = parse(&["book.txt", "-r"]).unwrap_err();
        assert!(
            matches!(&err, HistError::MissingFlagArgument { flag } if flag == "-r"),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "Missing argument for flag -r");
    }

    #[test]
    fn bad_values_are_invalid_arguments() {
        for args in [
            ["book.txt", "-s", "abc"],
            ["book.txt", "-s", "0"],
            ["book.txt", "-s", "-5"],
        ] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.to_string(), "Invalid argument for flag -s", "{args:?}");
        }
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        let err = parse(&["book.txt", "--bogus"]).unwrap_err();
        assert!(matches!(err, HistError::Usage(ref m) if m.contains("--bogus")), "{err:?}");
    }

    #[test]
    fn repeated_flags_keep_the_first_value() {
        let cli = parse(&["book.txt", "-r", "3", "-s", "5", "-r", "4", "-s", "1"]).unwrap();
        assert_eq!((cli.rows(), cli.tick_stride()), (3, 5));
    }

    #[test]
    fn help_is_found_anywhere_after_the_program_name() {
        assert!(wants_help(["histogrammer", "book.txt", "-r", "--help"]));
        assert!(wants_help(["histogrammer", "--help"]));
        assert!(!wants_help(["histogrammer", "book.txt", "-r", "4"]));
        // the program name itself is never inspected
        assert!(!wants_help(["--help"]));
    }
}
