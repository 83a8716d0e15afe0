//! Square bitboards packed into a single unsigned integer.
//!
//! Cell `(row, col)` of an `N×N` grid lives at bit `row * N + col`, so
//! row-major order is plain bit order. Bits above `N * N` are always zero.

use core::fmt;
use core::ops::{BitOr, Not};
use num_traits::{PrimInt, Unsigned};

/// The only way a bitboard access can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// Set of cells on an `N×N` grid. `T` must hold at least `N * N` bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T: PrimInt + Unsigned, const N: usize> {
    bits: T,
}

impl<T: PrimInt + Unsigned, const N: usize> BitBoard<T, N> {
    const CELLS: usize = N * N;

    fn grid_mask() -> T {
        let width = T::zero().count_zeros() as usize;
        if Self::CELLS >= width {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Single-bit mask for (row, col).
    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row < N && col < N {
            Ok(T::one() << (row * N + col))
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    /// Board from a raw bit pattern; bits past the grid are dropped.
    pub fn from_raw(raw: T) -> Self {
        Self {
            bits: raw & Self::grid_mask(),
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True if every cell of `subset` is also in `self`.
    pub fn contains(&self, subset: Self) -> bool {
        self.bits & subset.bits == subset.bits
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(self.bits & Self::bit(row, col)? != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(row, col)?;
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits & !Self::bit(row, col)?;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Cells in the set, row-major. The iterator holds its own copy of the
    /// bits, so `(!occupied).iter_set_bits()` may outlive the temporary.
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits { rest: self.bits }
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T: PrimInt + Unsigned, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

/// Row-major `(row, col)` of each set cell.
#[derive(Clone, Copy)]
pub struct SetBits<T: PrimInt + Unsigned, const N: usize> {
    // Cells not yet yielded.
    rest: T,
}

impl<T: PrimInt + Unsigned, const N: usize> Iterator for SetBits<T, N> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.rest.is_zero() {
            return None;
        }
        let idx = self.rest.trailing_zeros() as usize;
        self.rest = self.rest & (self.rest - T::one());
        Some((idx / N, idx % N))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rest.count_ones() as usize;
        (left, Some(left))
    }
}

impl<T: PrimInt + Unsigned, const N: usize> ExactSizeIterator for SetBits<T, N> {}
