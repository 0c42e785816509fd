//! A fixed-size vector of bits packed into `u64` blocks.

pub mod bit_vector;
pub mod error;

pub use crate::bit_vector::{BitVector, BITS_PER_BLOCK};
pub use crate::error::{Error, Result};
