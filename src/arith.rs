//! By-value wrapping arithmetic over the primitive integers.
//!
//! Every operation here is total: results that leave the representable range
//! are reduced modulo 2^width (two's-complement for signed types) instead of
//! panicking in debug builds or widening.

use serde::{Deserialize, Serialize};
use std::ops::{Add, BitAnd, Mul, Not, Sub};

/// Wrapping addition by value.
///
/// ```rust
/// # use wrapdemo::arith::WrappingAddVal;
/// assert_eq!(255u8.wrapping_add_val(1), 0);
/// assert_eq!(127i8.wrapping_add_val(1), -128);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// Wrapping subtraction by value.
///
/// ```rust
/// # use wrapdemo::arith::WrappingSubVal;
/// assert_eq!(0u64.wrapping_sub_val(1), u64::MAX);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    fn wrapping_sub_val(self, v: Self) -> Self;
}

/// Wrapping multiplication by value.
///
/// ```rust
/// # use wrapdemo::arith::WrappingMulVal;
/// assert_eq!(255u8.wrapping_mul_val(255), 1);
/// assert_eq!(127i8.wrapping_mul_val(127), 1);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    fn wrapping_mul_val(self, v: Self) -> Self;
}

/// Bit clear: every bit set in `mask` is cleared in `self`.
///
/// ```rust
/// # use wrapdemo::arith::AndNotVal;
/// assert_eq!(0b1110u8.and_not_val(0b0110), 0b1000);
/// assert_eq!(10u8.and_not_val(10), 0);
/// ```
pub trait AndNotVal: Sized + BitAnd<Self, Output = Self> + Not<Output = Self> {
    fn and_not_val(self, mask: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! and_not_impl_val {
    ($($t:ty),*) => {
        $(
            impl AndNotVal for $t {
                #[inline(always)]
                fn and_not_val(self, mask: $t) -> $t {
                    self & !mask
                }
            }
        )*
    };
}

macro_rules! wrapping_impl_all {
    ($($t:ty),*) => {
        $(
            wrapping_impl_val!(WrappingAddVal, wrapping_add_val, $t, wrapping_add);
            wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, $t, wrapping_sub);
            wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, $t, wrapping_mul);
        )*
    };
}

wrapping_impl_all!(u8, u16, u32, u64, usize, u128);
wrapping_impl_all!(i8, i16, i32, i64, isize, i128);
and_not_impl_val!(u8, u16, u32, u64, usize, u128);
and_not_impl_val!(i8, i16, i32, i64, isize, i128);

/// Bit width used for the "native" unsigned integer.
///
/// Fixed independently of the host `usize` so output does not depend on the
/// build target. Serialized as the bare bit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NativeWidth {
    W32,
    #[default]
    W64,
}

impl NativeWidth {
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Largest representable value, `2^bits - 1`.
    pub fn max_value(self) -> u64 {
        match self {
            Self::W32 => u64::from(u32::MAX),
            Self::W64 => u64::MAX,
        }
    }

    /// Reduce `v` modulo `2^bits`.
    pub fn wrap(self, v: u64) -> u64 {
        v & self.max_value()
    }

    /// `a - b` computed at this width. Operands are first reduced to the width.
    pub fn wrapping_sub(self, a: u64, b: u64) -> u64 {
        match self {
            Self::W32 => {
                let a = self.wrap(a) as u32;
                let b = self.wrap(b) as u32;
                u64::from(a.wrapping_sub_val(b))
            }
            Self::W64 => a.wrapping_sub_val(b),
        }
    }
}

impl std::fmt::Display for NativeWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for NativeWidth {
    type Error = String;

    fn try_from(bits: u32) -> std::result::Result<Self, Self::Error> {
        Self::from_bits(bits)
            .ok_or_else(|| format!("unsupported native width {bits}, expected 32 or 64"))
    }
}

impl From<NativeWidth> for u32 {
    fn from(w: NativeWidth) -> Self {
        w.bits()
    }
}
