// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the application.
///
/// `IndexOutOfRange` and `Detached` form the indicator-synchronization
/// taxonomy; the remaining variants cover configuration I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A page index outside `[0, count)` was handed to the synchronizer.
    /// The previous indicator state is retained.
    IndexOutOfRange { index: usize, count: usize },

    /// A page-change event reached a detached synchronizer. Callers treat
    /// this as a no-op: the indicator it would have updated no longer exists.
    Detached,

    /// Configuration file could not be parsed or serialized.
    Config(String),

    /// Filesystem error while reading or writing the configuration.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, count } => {
                write!(f, "Page index {} out of range (page count {})", index, count)
            }
            Error::Detached => write!(f, "Synchronizer is detached"),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_out_of_range() {
        let err = Error::IndexOutOfRange { index: 5, count: 5 };
        assert_eq!(
            format!("{}", err),
            "Page index 5 out of range (page count 5)"
        );
    }

    #[test]
    fn display_formats_detached() {
        assert_eq!(format!("{}", Error::Detached), "Synchronizer is detached");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
