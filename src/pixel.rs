use core::fmt;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::Not;

use crate::quadtree::QuadTreeError;

/// The value of a single pixel of a binary bitmap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// `0`
    #[default]
    Black,

    /// `1`
    White,
}

impl Not for Pixel {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Pixel::Black => Pixel::White,
            Pixel::White => Pixel::Black,
        }
    }
}

impl BitOr for Pixel {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        if self == Pixel::White || rhs == Pixel::White {
            Pixel::White
        } else {
            Pixel::Black
        }
    }
}

impl BitAnd for Pixel {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        if self == Pixel::White && rhs == Pixel::White {
            Pixel::White
        } else {
            Pixel::Black
        }
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on { Pixel::White } else { Pixel::Black }
    }
}

impl From<Pixel> for u8 {
    fn from(pixel: Pixel) -> Self {
        match pixel {
            Pixel::Black => 0,
            Pixel::White => 1,
        }
    }
}

impl TryFrom<u8> for Pixel {
    type Error = QuadTreeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Pixel::Black),
            1 => Ok(Pixel::White),
            value => Err(QuadTreeError::InvalidPixel { value }),
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
