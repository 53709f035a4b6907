use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bitty operations
#[derive(Error, Diagnostic, Debug)]
pub enum BittyError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bitty::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bitty::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Allocation failed: {message}")]
    #[diagnostic(code(bitty::alloc))]
    Alloc {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bitty::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(bitty::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(bitty::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BittyError>;
