//! # Core arbitrary-precision base conversion
//!
//! This crate holds the numeric kernel of the workspace: [`rebase()`], which
//! converts a digit sequence between arbitrary bases by repeated long
//! division. It has no I/O and no shared state; everything is a pure
//! function over its inputs, safe to call from any number of threads.
//!
//! Alphabet-facing conveniences (encoding bytes as strings over a custom
//! character set) live in the `radix-codec` crate, which builds on this one.

pub mod errors;
pub mod rebase;

pub use errors::RadixError;
pub use rebase::rebase;
