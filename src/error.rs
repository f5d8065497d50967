use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A result type, either containing a value or a `DotError`.
pub type DotResult<T> = Result<T, DotError>;

/// The error type returned when a dot image can't be configured or written.
#[derive(Debug)]
pub enum DotError {
    /// A color or palette entry was rejected before any drawing happened.
    Configuration(String),
    /// Encoding or writing an output file failed.
    Io { path: PathBuf, source: io::Error },
}

impl DotError {
    pub fn configuration<T: AsRef<str>>(details: T) -> DotError {
        DotError::Configuration(details.as_ref().to_string())
    }

    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> DotError {
        DotError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DotError::Configuration(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, DotError::Io { .. })
    }
}

impl fmt::Display for DotError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DotError::Configuration(details) => write!(fmt, "Invalid configuration: {}", details),
            DotError::Io { path, source } => {
                write!(fmt, "Can't write {}: {}", path.display(), source)
            }
        }
    }
}

impl From<io::Error> for DotError {
    fn from(err: io::Error) -> DotError {
        DotError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl Error for DotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DotError::Configuration(_) => None,
            DotError::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = DotError::io(
            "out/red_dot.png",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(err.is_io());
        assert_eq!(
            err.to_string(),
            "Can't write out/red_dot.png: permission denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn configuration_error_has_no_source() {
        let err = DotError::configuration("channel out of range");
        assert!(err.is_configuration());
        assert!(err.source().is_none());
    }
}
