// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that an index could not be built or queried.
///
/// Construction either succeeds completely or fails with one of these errors before any output is
/// produced.
///
/// # Examples
///
/// ```
/// use sufsort::{BuildError, ErrorKind, SuffixArray};
///
/// let empty: &[u8] = &[];
/// let err = SuffixArray::new(empty).unwrap_err();
///
/// assert!(matches!(err, BuildError::InvalidInput(_)));
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A text or pattern is empty
    InvalidInput(&'static str),
    /// The requested number of common texts is outside `2..=texts`
    InvalidArgument {
        /// The requested number of texts
        k: usize,
        /// The number of texts in the index
        texts: usize,
    },
    /// Fewer than two texts were given to a generalized construction
    TooFewTexts(usize),
    /// The text has more positions than a `u32` can address
    TextTooLong(usize),
    /// Construction was cancelled through the builder's cancellation flag
    Cancelled,
}

/// The broad class of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a missing, empty, or oversized text or pattern
    InvalidInput,
    /// The caller supplied an out-of-range parameter
    InvalidArgument,
    /// The caller cancelled construction
    Cancelled,
}

impl BuildError {
    /// Returns the class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::InvalidInput(_) | BuildError::TextTooLong(_) => ErrorKind::InvalidInput,
            BuildError::InvalidArgument { .. } | BuildError::TooFewTexts(_) => {
                ErrorKind::InvalidArgument
            }
            BuildError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BuildError::InvalidInput(what) => write!(f, "invalid input: {what}"),
            BuildError::InvalidArgument { k, texts } => {
                write!(f, "invalid argument: k must be in [2, {texts}], found {k}")
            }
            BuildError::TooFewTexts(count) => {
                write!(f, "invalid argument: at least 2 texts are required, found {count}")
            }
            BuildError::TextTooLong(len) => write!(
                f,
                "invalid input: text has {len} positions, at most {} are supported",
                u32::MAX,
            ),
            BuildError::Cancelled => write!(f, "construction cancelled"),
        }
    }
}

impl Error for BuildError {}
