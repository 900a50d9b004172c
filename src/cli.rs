//! CLI argument parsing for conjtest

use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "conjtest")]
#[command(version)]
#[command(about = "Rank-based monotone conjunction test for 2D integer points", long_about = None)]
pub struct Cli {
    /// Input file: one "x y" pair of non-negative integers per line
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file, overwritten with "<diff> <se> <conjunction>"
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the rendered result to stdout
    #[arg(long)]
    pub print: bool,

    /// Enable debug tracing to stderr (includes the y-values ordered by x)
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["conjtest"]);
        assert_eq!(cli.input, PathBuf::from("./in.txt"));
        assert_eq!(cli.output, PathBuf::from("./out.txt"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.print);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_paths() {
        let cli = Cli::parse_from([
            "conjtest",
            "--input",
            "data/in.txt",
            "--output",
            "res.txt",
        ]);
        assert_eq!(cli.input, PathBuf::from("data/in.txt"));
        assert_eq!(cli.output, PathBuf::from("res.txt"));
    }

    #[test]
    fn test_cli_json_format() {
        let cli = Cli::parse_from(["conjtest", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["conjtest", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_debug_and_print_flags() {
        let cli = Cli::parse_from(["conjtest", "--debug", "--print"]);
        assert!(cli.debug);
        assert!(cli.print);
    }
}
