//! Miette-based error diagnostics for CLI error presentation.
//!
//! Wraps TOML parse failures with the offending source so miette can render
//! the configuration file content with a labeled span and a help suggestion.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(gaffer::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a new configuration diagnostic with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse failure and the text it came from.
    #[must_use]
    pub fn from_toml_error(error: &toml::de::Error, src: &str) -> Self {
        let span = error.span().unwrap_or(0..0);
        Self::new(error.message(), src, span.start, span.len())
            .with_help("check the syntax against config.toml.example")
    }

    /// Add a help suggestion to the error.
    ///
    /// Returns the modified error for method chaining.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
