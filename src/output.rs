//! Result rendering and output file writing
//!
//! Text output is the single line `<diff> <se> <conj>` with no trailing
//! newline. JSON output is an object keyed by field name.

use crate::conjunction::ConjunctionResult;
use crate::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output format for the result file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three space-separated tokens (default)
    #[default]
    Text,
    /// JSON object for machine parsing
    Json,
}

/// Render a result in the requested format
pub fn render(result: &ConjunctionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Create or truncate `path` and write the rendered result
pub fn write_result<P: AsRef<Path>>(
    path: P,
    result: &ConjunctionResult,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(result, format)?;
    fs::write(path.as_ref(), rendered)?;
    tracing::debug!(path = %path.as_ref().display(), ?format, "wrote result");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConjunctionResult {
        ConjunctionResult {
            difference: 12,
            standard_error: 5,
            conjunction: 0.34,
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&sample(), OutputFormat::Text).unwrap(), "12 5 0.34");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["difference"], 12);
        assert_eq!(value["standard_error"], 5);
        assert_eq!(value["conjunction"], 0.34);
    }

    #[test]
    fn test_render_json_round_trips() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: ConjunctionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_write_result_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents that are longer than the result").unwrap();

        write_result(&path, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "12 5 0.34");
    }

    #[test]
    fn test_write_result_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(write_result(&path, &sample(), OutputFormat::Text).is_err());
    }
}
