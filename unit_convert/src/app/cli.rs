//! Command-line arguments of the `convert` binary.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert a value between units described in a definition file.
///
/// Without a complete VALUE FROM TO triple the known units are listed.
#[derive(Debug, Clone, Parser)]
#[command(name = "convert", version, about)]
pub struct Cli {
    /// Value to convert.
    #[arg(allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Unit of the value.
    pub from: Option<String>,

    /// Unit to convert to.
    pub to: Option<String>,

    /// Definition file to use instead of searching for convert.def.
    #[arg(short, long, env = "CONVERT_DEF", value_name = "PATH")]
    pub definitions: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long, env = "CONVERT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A complete conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl Cli {
    /// The conversion asked for, or `None` when the units should be listed.
    pub fn request(&self) -> Option<ConversionRequest> {
        match (self.value, &self.from, &self.to) {
            (Some(value), Some(from), Some(to)) => Some(ConversionRequest {
                value,
                from: from.clone(),
                to: to.clone(),
            }),
            _ => None,
        }
    }

    /// Default log filter for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_request() {
        let cli = Cli::try_parse_from(["convert", "25", "meV", "K"]).unwrap();
        assert_eq!(
            cli.request(),
            Some(ConversionRequest {
                value: 25.0,
                from: "meV".into(),
                to: "K".into()
            })
        );
    }

    #[test]
    fn test_negative_value() {
        let cli = Cli::try_parse_from(["convert", "-350", "K", "eV"]).unwrap();
        assert_eq!(cli.request().map(|r| r.value), Some(-350.0));
    }

    #[test]
    fn test_incomplete_request_lists_units() {
        let cli = Cli::try_parse_from(["convert"]).unwrap();
        assert!(cli.request().is_none());

        let cli = Cli::try_parse_from(["convert", "25", "meV"]).unwrap();
        assert!(cli.request().is_none());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "convert", "-d", "units.def", "--json", "-vv", "1", "Ha", "eV",
        ])
        .unwrap();
        assert_eq!(cli.definitions, Some(PathBuf::from("units.def")));
        assert!(cli.json);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_invalid_value_rejected() {
        assert!(Cli::try_parse_from(["convert", "abc", "meV", "K"]).is_err());
    }
}
