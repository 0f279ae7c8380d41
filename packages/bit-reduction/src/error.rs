use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("empty bit string")]
    Empty,

    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("no set bit in bit string")]
    NoSetBit,
}
