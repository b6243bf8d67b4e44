use thiserror::Error;

/// Result type alias using DataExError
pub type Result<T> = std::result::Result<T, DataExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting. Missing source values and
/// type mismatches are not errors: the extractor omits those keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Specification
    MalformedSpecification,

    // Extraction
    /// Extraction aborted before any output was produced (e.g. depth limit)
    ExtractionFailed,

    // Integration/IO
    Io,
    Serialization,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedSpecification => "ERR_MALFORMED_SPECIFICATION",
            ExErrorKind::ExtractionFailed => "ERR_EXTRACTION_FAILED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Built from a [`DataExError`] via `From`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    position: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            position: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the character position within the (whitespace-stripped) specification
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the specification position, if any
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {})", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for dataex operations
///
/// Positions are character offsets into the specification after whitespace
/// has been stripped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataExError {
    // ===== Specification Errors (strict mode) =====
    /// A `[` was never closed by a matching `]`
    #[error("Unclosed group opened at position {position}")]
    UnclosedGroup { position: usize },

    /// A `]` appeared outside of any group
    #[error("Unexpected ']' at position {position}")]
    UnexpectedClosingBracket { position: usize },

    /// A separator or bracket was preceded by an empty key
    #[error("Empty key before '{found}' at position {position}")]
    EmptyKey { position: usize, found: char },

    /// Something other than `,` or `]` followed a closed group
    #[error("Unexpected '{found}' after group at position {position}")]
    UnexpectedCharacter { position: usize, found: char },

    // ===== Extraction Errors =====
    /// Path nesting exceeded the configured limit
    #[error("Path depth {depth} exceeds limit {limit} at position {position}")]
    DepthExceeded {
        depth: usize,
        limit: usize,
        position: usize,
    },

    // ===== Integration Errors =====
    /// JSON (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DataExError {
    /// Specification position this error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            DataExError::UnclosedGroup { position }
            | DataExError::UnexpectedClosingBracket { position }
            | DataExError::EmptyKey { position, .. }
            | DataExError::UnexpectedCharacter { position, .. }
            | DataExError::DepthExceeded { position, .. } => Some(*position),
            DataExError::Serialization { .. }
            | DataExError::Io { .. }
            | DataExError::Config { .. } => None,
        }
    }
}

/// Convert a DataExError into the canonical ExError facility
impl From<DataExError> for ExError {
    fn from(err: DataExError) -> Self {
        let message = err.to_string();
        let position = err.position();
        let ex = match err {
            DataExError::UnclosedGroup { .. }
            | DataExError::UnexpectedClosingBracket { .. }
            | DataExError::EmptyKey { .. }
            | DataExError::UnexpectedCharacter { .. } => {
                ExError::new(ExErrorKind::MalformedSpecification)
            }
            DataExError::DepthExceeded { .. } => ExError::new(ExErrorKind::ExtractionFailed),
            DataExError::Serialization { .. } => ExError::new(ExErrorKind::Serialization),
            DataExError::Io { .. } => ExError::new(ExErrorKind::Io),
            DataExError::Config { .. } => ExError::new(ExErrorKind::Config),
        }
        .with_message(message);

        match position {
            Some(position) => ex.with_position(position),
            None => ex,
        }
    }
}

/// Conversion from serde_json::Error to DataExError
impl From<serde_json::Error> for DataExError {
    fn from(err: serde_json::Error) -> Self {
        DataExError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from std::io::Error to DataExError
impl From<std::io::Error> for DataExError {
    fn from(err: std::io::Error) -> Self {
        DataExError::Io {
            message: err.to_string(),
        }
    }
}
