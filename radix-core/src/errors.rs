use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RadixError {
    #[error("Invalid destination base: {0}")]
    InvalidDestinationBase(u64),
}
