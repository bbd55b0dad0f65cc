//! Comparators for floating point numbers.
//!
//! The natural `<` on floats is not a strict weak ordering as soon as NaN
//! shows up: NaN is equivalent to every number, so equivalence stops being
//! transitive. [`partial_less`] is that natural comparator, kept around so it
//! can be checked; [`total_less`] is the one to sort with.
//!
//! The ordering used by [`total_less`] is
//! | -inf | < 0 | -0 | +0 | > 0 | +inf | NaN |
//!
//! # Example
//!
//! ```
//! use weakord::{check_by, CheckSettings};
//! use weakord::float::{partial_less, total_less};
//!
//! let settings = CheckSettings::default().prior_sort(true);
//!
//! let mut v = [2.0, f64::NAN, -0.0, 1.0, 0.0];
//! assert!(!check_by(&mut v, &settings, partial_less).ok);
//! assert!(check_by(&mut v, &settings, total_less).ok);
//! assert!(v[4].is_nan());
//! ```

/// A value that can be ordered as a floating-point number.
pub trait Float: PartialOrd {
    fn is_nan(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_sign_negative(&self) -> bool;
}

impl Float for f32 {
    fn is_nan(&self) -> bool { f32::is_nan(*self) }
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn is_sign_negative(&self) -> bool { f32::is_sign_negative(*self) }
}

impl Float for f64 {
    fn is_nan(&self) -> bool { f64::is_nan(*self) }
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn is_sign_negative(&self) -> bool { f64::is_sign_negative(*self) }
}

/// IEEE `a < b`.
pub fn partial_less<T: Float>(a: &T, b: &T) -> bool {
    a < b
}

/// Strict weak ordering on floats: NaNs last and equivalent to each other,
/// `-0` before `+0`.
pub fn total_less<T: Float>(a: &T, b: &T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, _) => false,
        (false, true) => true,
        (false, false) => {
            if a.is_zero() && b.is_zero() {
                a.is_sign_negative() && !b.is_sign_negative()
            } else {
                a < b
            }
        }
    }
}

/// Implement [`Float`] for a struct by delegating to one of its float members.
///
/// # Example
///
/// ```
/// #[macro_use] extern crate weakord;
/// #[derive(PartialEq, PartialOrd)]
/// struct Item {
///     key: f64,
/// }
/// weakord_float_member!(Item, key);
/// # fn main() {
/// let mut v = [Item { key: f64::NAN }, Item { key: 1.0 }];
/// let settings = weakord::CheckSettings::default().prior_sort(true);
/// assert!(weakord::check_by(&mut v, &settings, weakord::float::total_less).ok);
/// assert!(1.0 == v[0].key);
/// # }
/// ```
#[macro_export]
macro_rules! weakord_float_member {
    ($ty:ident, $member:ident) => {
        impl $crate::float::Float for $ty {
            fn is_nan(&self) -> bool {
                $crate::float::Float::is_nan(&self.$member)
            }
            fn is_zero(&self) -> bool {
                $crate::float::Float::is_zero(&self.$member)
            }
            fn is_sign_negative(&self) -> bool {
                $crate::float::Float::is_sign_negative(&self.$member)
            }
        }
    }
}
