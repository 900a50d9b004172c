//! Run configuration and the read -> compute -> write pipeline

use crate::cli::Cli;
use crate::conjunction::{self, ConjunctionResult};
use crate::error::Result;
use crate::output::{self, OutputFormat};
use crate::points::PointSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input path
pub const DEFAULT_INPUT: &str = "./in.txt";

/// Default output path
pub const DEFAULT_OUTPUT: &str = "./out.txt";

/// Resolved settings for one invocation
///
/// # Example
/// ```
/// use conjtest::config::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.input.to_str(), Some("./in.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Text,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            format: cli.format,
        }
    }
}

/// Load points, compute the statistic, then write the output file
///
/// Any failure aborts before the output file is touched.
pub fn run(config: &RunConfig) -> Result<ConjunctionResult> {
    tracing::debug!(?config, "starting conjunction test");

    let points = PointSet::from_path(&config.input)?;
    let result = conjunction::compute(&points);
    output::write_result(&config.output, &result, config.format)?;

    Ok(result)
}
