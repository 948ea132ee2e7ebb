//! Export backends for process models.
//!
//! Four pure backends over one generated model. XML, JSON, and SVG
//! transform the same `(ProcessModel, LayoutInfo)` pair; the ASCII summary
//! is derived from the XML text:
//!
//! - [`xml`] — BPMN 2.0-flavored XML with a diagram-interchange section
//! - [`json`] — a typed document mirroring the XML structure
//! - [`svg`] — a fixed-size illustrative SVG preview
//! - [`ascii`] — a condensed textual summary derived from the XML output
//!
//! All backends are total functions over a well-formed model: a model that
//! failed validation still serializes, and the output faithfully reflects
//! the structural defect (e.g. XML referencing a nonexistent id). The only
//! loud failure at this boundary is an unrecognized output format.

pub mod ascii;
pub mod json;
pub mod svg;
pub mod xml;

pub use ascii::ascii_preview;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors at the export boundary.
///
/// Structural model defects are never errors here; they surface through
/// validation reports instead.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The caller asked for a format this crate does not provide.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// The JSON document could not be serialized to text.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Xml,
    Json,
    Svg,
    Ascii,
}

impl Format {
    /// Returns the conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Svg => "svg",
            Format::Ascii => "txt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Svg => "svg",
            Format::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            "svg" => Ok(Format::Svg),
            "ascii" | "txt" | "text" => Ok(Format::Ascii),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats_parse_case_insensitively() {
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!(" json ".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Ascii);
    }

    #[test]
    fn unknown_format_fails_loudly() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert!(matches!(err, ExportError::UnknownFormat(ref f) if f == "pdf"));
    }
}
