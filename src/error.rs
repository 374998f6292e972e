//! Error type shared by the tree and the containers built on it.

use std::error;
use std::fmt;

/// The error type for fallible tree and map operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A node could not be allocated. Operations that hit this mid-insert
    /// leave the tree untouched; a reconciling copy that hits it leaves a
    /// partially copied tree whose length still matches its node count.
    AllocationFailed,
    /// A lookup that promises a value ([`Map::at`][crate::map::Map::at])
    /// was given a key that is not present. The tree itself never produces
    /// this; it reports absence through the none cursor.
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocationFailed => f.write_str("unable to allocate a node"),
            Error::KeyNotFound => f.write_str("key not found"),
        }
    }
}

impl error::Error for Error {}
