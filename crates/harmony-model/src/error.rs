use thiserror::Error;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for any unclassified runtime failure.
pub const EXIT_RUNTIME: i32 = 1;
/// Process exit code when a required input file is absent.
pub const EXIT_FILE_REQUIRED: i32 = 2;
/// Process exit code for schema, format, and configuration failures.
pub const EXIT_VALIDATION: i32 = 3;

/// Classified pipeline failures with a dedicated process exit code.
///
/// Everything else (I/O, parse failures inside the readers, internal join
/// errors) travels as a plain `anyhow` chain and exits with [`EXIT_RUNTIME`].
/// All kinds are fatal; the pipeline writes no output after any of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// A required input file is absent.
    #[error("input file not found: {path} (expected a file like {example})")]
    MissingInput { path: String, example: String },
    /// A required column is absent, or the run configuration is invalid.
    #[error("validation: {message}")]
    Schema { message: String },
    /// A row value does not match the expected format.
    #[error("format: {message}")]
    Format { message: String },
}

impl FeedError {
    pub fn schema(message: impl Into<String>) -> Self {
        FeedError::Schema {
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        FeedError::Format {
            message: message.into(),
        }
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            FeedError::MissingInput { .. } => EXIT_FILE_REQUIRED,
            FeedError::Schema { .. } | FeedError::Format { .. } => EXIT_VALIDATION,
        }
    }
}
