//! Adapters from fixed-arity functions to placeholder-aware targets.
//!
//! Targets receive their arguments as a `Vec<V>`, since the number of
//! arguments is only known once every placeholder has been filled. The
//! `from_fn1` through `from_fn6` adapters wrap an ordinary function of
//! that many arguments and check the count at call time, returning an
//! [`ArityError`] on mismatch.
//!
//! # Examples
//!
//! ```
//! use partiell::{ArityError, call, from_fn3, make_placeholder_aware};
//!
//! fn f(x: i64, y: i64, z: i64) -> i64 {
//!     x * 100 + y * 10 + z
//! }
//!
//! let g = make_placeholder_aware(from_fn3(f));
//! assert_eq!(call!(g, 1, 2, 3).resolved(), Some(Ok(123)));
//! assert_eq!(call!(g, 1, 2).resolved(), Some(Err(ArityError::new(3, 2))));
//! ```

mod error;

pub use error::ArityError;

macro_rules! substitute {
    ($_parameter:ident, $replacement:ty) => {
        $replacement
    };
}

macro_rules! define_from_fn {
    ($($arity:literal => ($($parameter:ident),+)),+ $(,)?) => {
        $(
            paste::paste! {
                #[doc = concat!(
                    "Adapts a function of ", stringify!($arity),
                    " arguments into a target taking a `Vec<V>`.\n\n",
                    "The returned target yields `Err(ArityError)` unless called with exactly ",
                    stringify!($arity), " arguments."
                )]
                pub fn [<from_fn $arity>]<V, R, F>(function: F) -> impl Fn(Vec<V>) -> Result<R, ArityError>
                where
                    F: Fn($(substitute!($parameter, V)),+) -> R,
                {
                    move |arguments: Vec<V>| -> Result<R, ArityError> {
                        let [$($parameter),+] = <[V; $arity]>::try_from(arguments)
                            .map_err(|arguments: Vec<V>| ArityError::new($arity, arguments.len()))?;
                        Ok(function($($parameter),+))
                    }
                }
            }
        )+
    };
}

define_from_fn! {
    1 => (first),
    2 => (first, second),
    3 => (first, second, third),
    4 => (first, second, third, fourth),
    5 => (first, second, third, fourth, fifth),
    6 => (first, second, third, fourth, fifth, sixth),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn2_with_exact_arguments() {
        let subtract = from_fn2(|minuend: i32, subtrahend: i32| minuend - subtrahend);
        assert_eq!(subtract(vec![10, 3]), Ok(7));
    }

    #[test]
    fn test_from_fn2_with_too_few_arguments() {
        let subtract = from_fn2(|minuend: i32, subtrahend: i32| minuend - subtrahend);
        assert_eq!(subtract(vec![10]), Err(ArityError::new(2, 1)));
    }

    #[test]
    fn test_from_fn1_with_too_many_arguments() {
        let negate = from_fn1(|value: i32| -value);
        assert_eq!(negate(vec![1, 2]), Err(ArityError::new(1, 2)));
    }

    #[test]
    fn test_from_fn6_passes_arguments_in_order() {
        let digits = from_fn6(|a: u32, b: u32, c: u32, d: u32, e: u32, f: u32| {
            [a, b, c, d, e, f]
                .iter()
                .fold(0, |accumulator, digit| accumulator * 10 + digit)
        });
        assert_eq!(digits(vec![1, 2, 3, 4, 5, 6]), Ok(123_456));
    }
}
