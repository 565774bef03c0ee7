// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array and LCP array construction for texts over arbitrary ordered alphabets.
//!
//! Suffix arrays are built by prefix doubling with counting sorts and LCP arrays by Kasai's
//! algorithm. On top of these, this crate provides pattern search, longest repeated substrings,
//! distinct substring counting, and a generalized suffix array over several texts that finds
//! their longest common substrings.
//!
//! All structures are built in one pass from an immutable text and are read-only afterwards.
//!
//! # Examples
//!
//! Querying a single text:
//!
//! ```
//! use sufsort::SuffixArray;
//!
//! let sa = SuffixArray::from_str("banana")?;
//!
//! assert_eq!(sa.suffix_array(), [5, 3, 1, 0, 4, 2]);
//! assert_eq!(sa.lcp(), [0, 1, 3, 0, 0, 2]);
//! assert_eq!(sa.find(b"nan")?, Some(2));
//! # Ok::<(), sufsort::BuildError>(())
//! ```
//!
//! Finding the longest substrings shared by several texts:
//!
//! ```
//! let texts: [&[u8]; 3] = [b"abcde", b"habcab", b"ghabcdf"];
//!
//! assert_eq!(sufsort::longest_common_substrings(&texts, 3)?, [b"abc"]);
//! # Ok::<(), sufsort::BuildError>(())
//! ```

// Suffix array entries are u32s that are cast to usizes for indexing. Any target where the size
// of a usize is less than the size of a u32 would silently truncate them, so refuse to build on
// such targets.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Target pointer width must be at least 32 bits");

mod doubling;
mod error;
mod generalized;
mod kasai;
mod suffix_array;
mod symbol;
mod window;

pub use doubling::{SuffixArrayBuilder, suffix_array};
pub use error::{BuildError, ErrorKind};
pub use generalized::{GeneralizedSuffixArray, longest_common_substrings};
pub use kasai::lcp_array;
pub use suffix_array::SuffixArray;
pub use symbol::Symbol;
