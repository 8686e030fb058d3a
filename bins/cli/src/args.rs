//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Savvy - monthly net savings and next-month forecast
///
/// Reads recorded transactions from the configured JSON store and prints the
/// requested view as JSON.
#[derive(Parser, Debug)]
#[command(name = "savvy", version, about)]
pub struct Cli {
    /// Restrict to a single calendar month (validated by the prediction service)
    #[arg(long, global = true, value_name = "YYYY-MM")]
    pub month: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available views.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forecast next month's net savings
    Predict,
    /// Show net savings per month
    Summary,
    /// List recorded transactions
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("savvy").chain(args.iter().copied()))
    }

    #[test]
    fn test_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command_only() {
        let cli = parse(&["predict"]).unwrap();
        assert_eq!(cli.command, Command::Predict);
        assert_eq!(cli.month, None);
    }

    #[test]
    fn test_parse_month_forms() {
        let spaced = parse(&["list", "--month", "2024-01"]).unwrap();
        assert_eq!(spaced.command, Command::List);
        assert_eq!(spaced.month.as_deref(), Some("2024-01"));

        let joined = parse(&["--month=2024-02", "summary"]).unwrap();
        assert_eq!(joined.command, Command::Summary);
        assert_eq!(joined.month.as_deref(), Some("2024-02"));
    }

    #[test]
    fn test_month_is_not_validated_here() {
        let cli = parse(&["predict", "--month", "notadate"]).unwrap();
        assert_eq!(cli.month.as_deref(), Some("notadate"));
    }

    #[test]
    fn test_help_is_generated() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["forecast"]).is_err());
        assert!(parse(&["predict", "--month"]).is_err());
        assert_eq!(
            parse(&["predict", "--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["predict", "list"]).is_err());
    }
}
