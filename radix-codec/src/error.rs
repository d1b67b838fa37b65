use thiserror::Error;

use radix_core::RadixError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),
    #[error(transparent)]
    Radix(#[from] RadixError),
}
