//! Error types used across the library.

use std::error::Error;
use std::fmt;

/// A specialized Result type for this library.
///
/// The error type defaults to [`HebMorphError`].
pub type Result<T, E = HebMorphError> = std::result::Result<T, E>;

/// The error type for dictionary loading and lemmatization.
#[derive(Debug, thiserror::Error)]
pub enum HebMorphError {
    /// The error variant for [`InvalidArgumentError`].
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`CorruptDictionaryError`].
    ///
    /// Raised on malformed stream framing, truncated records, and
    /// out-of-range back-references or stem indices. A load that produces
    /// this error exposes no partial dictionary.
    #[error(transparent)]
    CorruptDictionary(CorruptDictionaryError),

    /// A custom-relation request named a base word absent from the
    /// dictionary.
    #[error("MissingRelation: {word:?} not found in the dictionary")]
    MissingRelation {
        /// The word that was expected to exist.
        word: String,
    },

    /// The error variant for [`std::io::Error`].
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// The error variant for [`ParseIntError`](std::num::ParseIntError).
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// The error variant for [`DecodeError`](bincode::error::DecodeError).
    #[error(transparent)]
    BincodeDecode(#[from] bincode::error::DecodeError),

    /// The error variant for [`EncodeError`](bincode::error::EncodeError).
    #[error(transparent)]
    BincodeEncode(#[from] bincode::error::EncodeError),
}

impl HebMorphError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn corrupt_dictionary<S>(stream: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::CorruptDictionary(CorruptDictionaryError {
            stream,
            msg: msg.into(),
        })
    }
}

/// Error used when an argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a dictionary stream is malformed.
#[derive(Debug)]
pub struct CorruptDictionaryError {
    /// Name of the stream in which the corruption was detected.
    pub(crate) stream: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for CorruptDictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CorruptDictionaryError: {}: {}", self.stream, self.msg)
    }
}

impl Error for CorruptDictionaryError {}
