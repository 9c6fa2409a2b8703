//! Output format handling for wordladder
//!
//! Supports two output formats:
//! - human: readable chain for terminal use
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::graph::types::LadderResult;

/// Output format for rendering search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(LadderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a search result in the requested format.
pub fn render(result: &LadderResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

fn render_human(result: &LadderResult) -> String {
    if result.found {
        format!("Solution: {}", result.words.join(" -> "))
    } else {
        "No solution exists".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            "human".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "HUMAN".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
    }

    #[test]
    fn test_unknown_format() {
        let err = "records".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, LadderError::UnknownFormat(_)));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Human.to_string(), "human");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_render_human_found() {
        let result = LadderResult {
            from: "cat".to_string(),
            to: "dot".to_string(),
            found: true,
            words: vec!["cat".to_string(), "cot".to_string(), "dot".to_string()],
            path_length: 2,
        };
        assert_eq!(
            render(&result, OutputFormat::Human).unwrap(),
            "Solution: cat -> cot -> dot"
        );
    }

    #[test]
    fn test_render_human_not_found() {
        let result = LadderResult::not_found("cat", "dog");
        assert_eq!(
            render(&result, OutputFormat::Human).unwrap(),
            "No solution exists"
        );
    }

    #[test]
    fn test_render_json() {
        let result = LadderResult::not_found("cat", "dog");
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["from"], "cat");
        assert_eq!(value["found"], false);
        assert_eq!(value["path_length"], 0);
    }
}
