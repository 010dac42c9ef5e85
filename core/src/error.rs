//! Error types for template resolution and lookup

use std::fmt;
use thiserror::Error;

/// Kind of named element a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// A template sheet
    Sheet,
    /// An instrument template
    Template,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheet => f.write_str("sheet"),
            Self::Template => f.write_str("template"),
        }
    }
}

/// Main error type for template configuration, resolution and lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template configuration as a whole is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller supplied a blank or otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No instrument template is registered under the requested name
    #[error("Unknown instrument type: {0}")]
    UnknownInstrumentType(String),

    /// A reference names an element that was never declared
    #[error("Unknown {kind} reference: {name}")]
    UnknownReference {
        /// Kind of element referenced
        kind: ReferenceKind,
        /// Name that could not be found
        name: String,
    },

    /// An inheritance chain revisits an element that is still being resolved
    #[error("Circular {kind} reference: {name} (chain: {})", chain.join(" -> "))]
    CircularReference {
        /// Kind of element involved in the cycle
        kind: ReferenceKind,
        /// Name that closed the cycle
        name: String,
        /// In-progress chain, ending with the repeated name
        chain: Vec<String>,
    },

    /// An element was declared with an empty or whitespace-only name
    #[error("{kind} name must not be blank")]
    BlankName {
        /// Kind of element with the blank name
        kind: ReferenceKind,
    },
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

impl TemplateError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a new invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unknown reference error
    #[must_use]
    pub fn unknown_reference(kind: ReferenceKind, name: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind,
            name: name.into(),
        }
    }

    /// Create a circular reference error from the in-progress chain
    #[must_use]
    pub fn circular_reference<I, S>(kind: ReferenceKind, name: impl Into<String>, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut chain: Vec<String> = chain.into_iter().map(Into::into).collect();
        chain.push(name.clone());
        Self::CircularReference { kind, name, chain }
    }

    /// Whether the error was caused by the caller rather than by configuration
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::UnknownInstrumentType(_)
        )
    }
}
