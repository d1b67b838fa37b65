//! # Binary-to-alphabet codec
//!
//! This crate renders raw byte strings as text over an arbitrary,
//! caller-supplied alphabet and back, using the arbitrary-precision
//! [`rebase`](radix_core::rebase) primitive from `radix-core`. The alphabet
//! length is the base of the encoded representation, so any symbol set with
//! at least two distinct characters works: hex, base58, base62, or custom
//! encodings.
//!
//! Encoded output has a fixed width for a given input length, with leading
//! zero bytes preserved across a round trip, which is the shape a
//! password-hash or identifier renderer expects.
//!
//! ```
//! use radix_codec::{Alphabet, decode, encode};
//!
//! let hex = Alphabet::new("0123456789abcdef");
//! let encoded = encode(&[0x00, 0xFF], &hex).unwrap();
//! assert_eq!(encoded, "00ff");
//! assert_eq!(decode(&encoded, &hex).unwrap(), vec![0x00, 0xFF]);
//! ```

pub mod alphabet;
pub mod encoder;
pub mod error;

pub use alphabet::Alphabet;
pub use encoder::{decode, encode};
pub use error::CodecError;
