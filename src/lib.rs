//! binsig — magic-number signature matchers for binary file prefixes.
//!
//! This crate provides:
//! - **Matchers** (`matchers`): one pure predicate per format, all with the signature
//!   `fn(&[u8], u32) -> bool` (prefix bytes, total size hint).
//! - **Format types** (`format`): magic constants and the `Format` handle (label, matcher,
//!   minimum prefix length).
//!
//! Matchers never read files, never allocate and never panic; a truncated prefix is simply
//! not a match. Choosing which matchers to run, and in what order, is left to the caller.

pub mod format;
pub mod matchers;

pub use format::{Format, ParseFormatError, PREFIX_LEN};
pub use matchers::Matcher;
