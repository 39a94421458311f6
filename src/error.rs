//! Error types for fuxx-rs.
//!
//! [`ErrorKind`] says *what* went wrong; [`Error`] adds the operation that
//! failed, key-value context and an optional source error.
//!
//! Every error in this crate is fatal to a benchmark run. There is nothing to
//! retry: a bad argument stays bad and a buffer that did not fit in memory will
//! not fit on the second attempt either.
//!
//! ```
//! use fuxx_rs::error::{Error, ErrorKind};
//!
//! let err = Error::new(ErrorKind::OutOfMemory, "cannot allocate benchmark buffer")
//!     .with_operation("LatencyBuffer::allocate")
//!     .with_context("bytes", "1073741824");
//! assert_eq!(err.kind(), ErrorKind::OutOfMemory);
//! ```

use std::fmt;

/// A specialized `Result` type for fuxx-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Categorizes the type of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A command-line argument or configuration value is unusable.
    ConfigInvalid,
    /// The benchmark buffer could not be allocated.
    OutOfMemory,
    /// Writing results to the output stream failed.
    Io,
}

impl ErrorKind {
    /// Returns a static string label for this error kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::OutOfMemory => "OutOfMemory",
            ErrorKind::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for fuxx-rs.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the operation that caused this error.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error context as key-value pairs.
    pub fn context_iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.context.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Set the operation that caused this error.
    ///
    /// An operation set earlier is kept in context as `("called", previous)`.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add a key-value context pair.
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the underlying source error.
    pub fn set_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let mut d = f.debug_struct("Error");
            d.field("kind", &self.kind);
            d.field("message", &self.message);
            d.field("operation", &self.operation);
            d.field("context", &self.context);
            d.field("source", &self.source.as_ref().map(|s| s.to_string()));
            d.finish()
        } else {
            writeln!(f, "{} at {} => {}", self.kind, self.operation, self.message)?;
            if !self.context.is_empty() {
                writeln!(f)?;
                writeln!(f, "Context:")?;
                for (k, v) in &self.context {
                    writeln!(f, "   {k}: {v}")?;
                }
            }
            if let Some(source) = &self.source {
                writeln!(f)?;
                writeln!(f, "Source:")?;
                writeln!(f, "   {source}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.operation)?;
        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }
        write!(f, " => {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io, "failed to write benchmark output").set_source(err)
    }
}
