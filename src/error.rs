use thiserror::Error;

use crate::Key;

/// Why a mutation was refused. The tree is left untouched in both cases.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// `insert` was given a key that is already present.
    #[error("key {0} is already present")]
    DuplicateKey(Key),
    /// `delete` was given a key that is not present.
    #[error("key {0} is not present")]
    KeyNotFound(Key),
}
