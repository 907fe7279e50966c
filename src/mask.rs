//! A fixed-size cell mask using const generics.
//!
//! A `W×H` grid is packed row-major into the unsigned integer `T`, bit
//! `y * W + x` standing for cell `(x, y)`. Masks describe ship footprints and
//! the blocked zone around placed ships; the placement validator only ever
//! asks whether two of them intersect.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// Mask sized for the standard board.
pub type Mask = CellMask<u128, BOARD_WIDTH, BOARD_HEIGHT>;

/// A `W×H` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const W: usize, const H: usize> CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = W * H;

    #[inline]
    fn board() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Bits of column `x` in every row.
    fn column(x: usize) -> T {
        (0..H).fold(T::zero(), |acc, y| acc | (T::one() << (y * W + x)))
    }

    #[inline]
    pub(crate) fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// `true` when the two masks share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    pub(crate) fn set(&mut self, coord: Coord) -> Result<(), BoardError> {
        if coord.x >= W || coord.y >= H {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        self.bits = self.bits | (T::one() << (coord.y * W + coord.x));
        Ok(())
    }

    /// Grow the mask by one cell in all eight directions.
    pub fn dilate(&self) -> Self {
        let east = (self.bits << 1) & !Self::column(0);
        let west = (self.bits >> 1) & !Self::column(W - 1);
        let row = self.bits | east | west;
        CellMask {
            bits: (row | (row << W) | (row >> W)) & Self::board(),
        }
    }

    pub fn from_coords<I>(iter: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        for coord in iter {
            mask.set(coord)?;
        }
        Ok(mask)
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}>:", W, H)?;
        for y in 0..H {
            for x in 0..W {
                let set = ((self.bits >> (y * W + x)) & T::one()) != T::zero();
                write!(f, "{}", if set { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
