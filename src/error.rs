//! Typed errors for the library side of bad-password.
//!
//! The binary wraps these in `anyhow` with context; library callers can
//! match on the variants.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read password file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{}' contains no usable entries", path.display())]
    Empty { path: PathBuf },
}

