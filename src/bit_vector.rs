use log::trace;

use crate::error::{Error, Result};

/// Storage word for a run of bits.
type Block = u64;

/// Number of bits held by each block.
pub const BITS_PER_BLOCK: usize = 64;

/// A fixed number of bits packed into `u64` blocks.
///
/// The size is chosen at construction and never changes. Bits past `size`
/// in the last block are always zero, so two vectors compare equal exactly
/// when their sizes and their addressable bits match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    size: usize,
    data: Vec<Block>,
}

/// Position of the block holding bit `index`.
#[inline]
fn block_index(index: usize) -> usize {
    index / BITS_PER_BLOCK
}

/// Offset of bit `index` inside its block, always in `0..BITS_PER_BLOCK`.
#[inline]
fn bit_index(index: usize) -> u32 {
    (index % BITS_PER_BLOCK) as u32
}

impl BitVector {
    /// Creates a vector of `size` bits, all cleared.
    ///
    /// Always allocates `size / BITS_PER_BLOCK + 1` blocks, so vectors of
    /// equal size share a block count even when `size` is a multiple of
    /// `BITS_PER_BLOCK`.
    pub fn new(size: usize) -> BitVector {
        let blocks = block_index(size) + 1;
        trace!("BitVector of {} bits in {} blocks", size, blocks);
        BitVector {
            size,
            data: vec![0; blocks],
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let block = self.data[block_index(index)];
        let mask: Block = 1 << bit_index(index);
        Ok((block & mask) != 0)
    }

    /// Sets the bit at `index` to `value`. On error the vector is untouched.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        let w = block_index(index);
        let mask: Block = 1 << bit_index(index);
        self.data[w] = if value {
            self.data[w] | mask
        } else {
            self.data[w] & !mask
        };
        Ok(())
    }

    /// Bitwise AND of two vectors of the same size, as a new vector.
    pub fn and(&self, other: &BitVector) -> Result<BitVector> {
        let res = self.combine(other, |a, b| a & b)?;
        trace!("AND of {} bits", res.size);
        Ok(res)
    }

    /// Bitwise OR of two vectors of the same size, as a new vector.
    pub fn or(&self, other: &BitVector) -> Result<BitVector> {
        let res = self.combine(other, |a, b| a | b)?;
        trace!("OR of {} bits", res.size);
        Ok(res)
    }

    fn combine<F>(&self, other: &BitVector, op: F) -> Result<BitVector>
    where
        F: Fn(Block, Block) -> Block,
    {
        if self.size != other.size {
            return Err(Error::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(BitVector {
            size: self.size,
            data,
        })
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }
}
