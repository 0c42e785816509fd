use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("bit outside BitVector range: {index} >= {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("can't combine BitVectors with different sizes: {left} != {right}")]
    SizeMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
