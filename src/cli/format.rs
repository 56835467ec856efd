//! Output formatting utilities for CLI operations

use crate::error::AnnotateError;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// JSON lines format
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_annotate::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Write a successful string result to the output
///
/// # Examples
///
/// ```
/// use ferro_annotate::cli::{output_result, OutputFormat};
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// output_result(&mut buffer, "Val600Glu", "V600E", OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("Val600Glu -> V600E"));
/// ```
pub fn output_result<W: Write>(
    writer: &mut W,
    input: &str,
    output: &str,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            "{}",
            json!({"input": input, "output": output, "status": "ok"})
        ),
        OutputFormat::Text => {
            if input == output {
                writeln!(writer, "{}", output)
            } else {
                writeln!(writer, "{} -> {}", input, output)
            }
        }
    }
}

/// Write a structured result to the output
///
/// Text output uses `text`; JSON output serializes `value`.
pub fn output_value<W: Write, T: Serialize>(
    writer: &mut W,
    input: &str,
    value: &T,
    text: &str,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            "{}",
            json!({"input": input, "output": value, "status": "ok"})
        ),
        OutputFormat::Text => writeln!(writer, "{}\t{}", input, text),
    }
}

/// Write an error to the output
///
/// # Examples
///
/// ```
/// use ferro_annotate::cli::{output_error, OutputFormat};
/// use ferro_annotate::AnnotateError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = AnnotateError::NoQueryTypeResolvable { headers: vec![] };
/// output_error(&mut buffer, "input", &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("ERROR: input"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    input: &str,
    error: &AnnotateError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            "{}",
            json!({
                "input": input,
                "error": error.to_string(),
                "code": error.code().as_str(),
                "description": error.code().description(),
                "status": "error",
            })
        ),
        OutputFormat::Text => writeln!(writer, "ERROR: {}: {}", input, error.detailed_message()),
    }
}
