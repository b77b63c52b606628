use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building, loading or writing a chained string table.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened for reading.
    #[error("cannot open input `{}`: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created.
    #[error("cannot create output `{}`: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table needs at least one bucket.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn destination_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DestinationUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
