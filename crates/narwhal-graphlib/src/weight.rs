//! Edge weight abstraction.
//!
//! Weights double as distances (shortest paths, spanning trees) and capacities (max flow).
//! Only integer types are supported: every algorithm here relies on a total order and on
//! exact arithmetic for termination. Sums are formed with [`Weight::checked_add`] so that a
//! total outside the type's range is reported instead of wrapping.

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Sub};

pub trait Weight:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + Add<Output = Self> + Sub<Output = Self>
{
    const ZERO: Self;
    /// Weight assigned by [`Graph::add_unweighted_edge`](crate::Graph::add_unweighted_edge).
    const ONE: Self;

    /// `None` when `self + rhs` does not fit in the type.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
