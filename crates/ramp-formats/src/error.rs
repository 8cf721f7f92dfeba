use std::fmt;
use std::io;
use std::path::PathBuf;

/// Coarse error category surfaced to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unparsable content, wrong schema, missing fields.
    MalformedInput,
    /// A `.gradient` file matched none of the supported dialects.
    NoStopsFound,
    /// A refused edit, such as deleting below two stops.
    InvariantViolation,
    /// File not readable or writable.
    IoFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::NoStopsFound => "no stops found",
            ErrorKind::InvariantViolation => "invariant violation",
            ErrorKind::IoFailure => "I/O failure",
        })
    }
}

/// A failed load, save, or export. Nothing is applied or written on error.
#[derive(Debug)]
pub enum CodecError {
    MalformedInput {
        /// 1-based source line, when the problem is tied to one.
        line: Option<usize>,
        detail: String,
    },
    NoStopsFound,
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// PNG export with a zero dimension.
    InvalidSize { width: u32, height: u32 },
    /// The image encoder failed.
    Image(String),
}

impl CodecError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        CodecError::MalformedInput { line: None, detail: detail.into() }
    }

    pub(crate) fn malformed_at(line: usize, detail: impl Into<String>) -> Self {
        CodecError::MalformedInput { line: Some(line), detail: detail.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CodecError::Io { path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedInput { .. } | CodecError::Image(_) => ErrorKind::MalformedInput,
            CodecError::NoStopsFound => ErrorKind::NoStopsFound,
            CodecError::Io { .. } | CodecError::InvalidSize { .. } => ErrorKind::IoFailure,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MalformedInput { line: Some(line), detail } => {
                write!(f, "malformed input at line {line}: {detail}")
            }
            CodecError::MalformedInput { line: None, detail } => {
                write!(f, "malformed input: {detail}")
            }
            CodecError::NoStopsFound => f.write_str("no stops found in .gradient file"),
            CodecError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            CodecError::InvalidSize { width, height } => {
                write!(f, "invalid image size {width}x{height}")
            }
            CodecError::Image(detail) => write!(f, "image encoding failed: {detail}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
