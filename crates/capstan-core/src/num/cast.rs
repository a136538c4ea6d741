// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Checked Numeric Conversions
//!
//! A single by-value trait, `CheckedCastVal`, for converting between any two
//! primitive numeric types with an explicit failure channel. Unlike `as`
//! casts, which wrap, truncate, or saturate silently depending on the types
//! involved, `checked_cast_val` returns `None` whenever the source value is
//! not representable in the target type.
//!
//! ## Semantics
//!
//! - Integer-to-integer conversions succeed exactly when the value fits in
//!   the target range. Negative values never convert to unsigned types.
//! - Float-to-integer conversions truncate toward zero first, then apply the
//!   range check; `NaN` and infinities yield `None`.
//! - Integer-to-float and float-to-float conversions follow the behavior of
//!   `num_traits::NumCast`.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::num::cast::CheckedCastVal;
//!
//! let big: i64 = 40_000;
//! assert_eq!(big.checked_cast_val::<u16>(), None);
//! assert_eq!(big.checked_cast_val::<u32>(), Some(40_000));
//!
//! let fractional: f64 = 3.9;
//! assert_eq!(fractional.checked_cast_val::<i32>(), Some(3));
//! assert_eq!(f64::NAN.checked_cast_val::<i32>(), None);
//! ```

use num_traits::{NumCast, ToPrimitive};

/// Checked conversion between primitive numeric types, by value.
///
/// `checked_cast_val` converts `self` into the target type `U`, returning
/// `None` when the value is not representable. This is the conversion
/// counterpart of the checked arithmetic traits in [`crate::num::arith`]:
/// failure is a value, not a silent wrap or a panic.
///
/// The trait is blanket-implemented for every type implementing
/// `num_traits::ToPrimitive`, which covers all primitive integers and
/// floats.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::cast::CheckedCastVal;
///
/// let count: usize = 512;
/// let narrow: Option<u8> = count.checked_cast_val();
/// assert_eq!(narrow, None);
///
/// let wide: Option<u64> = count.checked_cast_val();
/// assert_eq!(wide, Some(512));
/// ```
pub trait CheckedCastVal: Sized {
    /// Converts `self` to the target type, or `None` if the value does not
    /// fit.
    fn checked_cast_val<U: NumCast>(self) -> Option<U>;
}

impl<T: ToPrimitive> CheckedCastVal for T {
    #[inline]
    fn checked_cast_val<U: NumCast>(self) -> Option<U> {
        U::from(self)
    }
}
