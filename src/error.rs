use std::io;

/// Error type for the `read_*` and `write_*` methods.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `read_*` method could not obtain all of the bytes of the value, either because the
    /// stream ended or because it reported an I/O error. The value was not decoded.
    ///
    /// Some bytes may have been taken from the stream before the failure was detected, so the
    /// stream position is unspecified afterward.
    #[error("incomplete read: could not read {width} bytes ({source})")]
    IncompleteRead {
        /// The width of the value that was being read.
        width: usize,
        /// The error reported by the stream.
        #[source]
        source: io::Error,
    },

    /// A `write_*` method could not write all of the bytes of the value. Callers cannot assume
    /// any bytes were durably written.
    #[error("write failure: could not write {width} bytes ({source})")]
    WriteFailure {
        /// The width of the value that was being written.
        width: usize,
        /// The error reported by the stream.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The width in bytes of the operation that failed.
    pub fn width(&self) -> usize {
        match self {
            Self::IncompleteRead { width, .. } | Self::WriteFailure { width, .. } => *width,
        }
    }

    /// The `io::ErrorKind` reported by the underlying stream.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::IncompleteRead { source, .. } | Self::WriteFailure { source, .. } => {
                source.kind()
            }
        }
    }
}

/// Result type for the `read_*` and `write_*` methods.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::IncompleteRead { source, .. } | Error::WriteFailure { source, .. } => source,
        }
    }
}

/// Error returned when parsing a `ByteOrder` from a string fails.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unrecognized byte order {name:?}: expected \"big\", \"little\", or \"native\"")]
pub struct ParseByteOrderError {
    /// The text that was rejected.
    pub name: String,
}
