//! The `slots!`, `partial!` and `call!` macros.
//!
//! All three match `__` (double underscore) as a literal token and turn it
//! into [`Slot::Placeholder`](crate::Slot::Placeholder). Every other
//! argument is an expression wrapped in [`Slot::Value`](crate::Slot::Value).

/// Builds a `Vec<Slot<V>>` from a list of arguments.
///
/// # Examples
///
/// ```
/// use partiell::{Slot, slots};
///
/// let arguments = slots![1, __, 1 + 2];
/// assert_eq!(arguments, vec![Slot::Value(1), Slot::Placeholder, Slot::Value(3)]);
///
/// let empty: Vec<Slot<i32>> = slots![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! slots {
    () => {
        ::std::vec::Vec::new()
    };
    ($($arguments:tt)+) => {
        $crate::__slots_accumulate!([] $($arguments)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slots_accumulate {
    ([$($slot:expr),*]) => {
        ::std::vec![$($slot),*]
    };
    ([$($slot:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::__slots_accumulate!([$($slot,)* $crate::Slot::Placeholder] $($($rest)*)?)
    };
    ([$($slot:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::__slots_accumulate!([$($slot,)* $crate::Slot::Value($value)] $($($rest)*)?)
    };
}

/// Applies arguments to a target, with `__` marking positions to fill later.
///
/// `partial!(target, a, __, c)` is shorthand for
/// [`apply`](crate::apply)`(target, slots![a, __, c])`.
///
/// # Examples
///
/// ```
/// use partiell::{call, partial};
///
/// fn f(arguments: Vec<i64>) -> i64 {
///     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
/// }
///
/// let both_ends = partial!(f, 1, __, 3).pending().unwrap();
/// assert_eq!(call!(both_ends, 2).resolved(), Some(123));
/// ```
#[macro_export]
macro_rules! partial {
    ($target:expr $(, $($arguments:tt)*)?) => {
        $crate::apply($target, $crate::slots![$($($arguments)*)?])
    };
}

/// Calls a placeholder-aware callable, with `__` marking positions to fill later.
///
/// `call!(callable, a, __)` is shorthand for
/// [`Invocable::call`](crate::Invocable::call)`(&callable, slots![a, __])`.
///
/// # Examples
///
/// ```
/// use partiell::{call, make_placeholder_aware};
///
/// let f = make_placeholder_aware(|arguments: Vec<i64>| {
///     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
/// });
///
/// let g = call!(f, 1, __).pending().unwrap();
/// let h = call!(g, 2, __).pending().unwrap();
/// assert_eq!(call!(h, 3).resolved(), Some(123));
/// ```
#[macro_export]
macro_rules! call {
    ($callable:expr $(, $($arguments:tt)*)?) => {
        $crate::Invocable::call(&$callable, $crate::slots![$($($arguments)*)?])
    };
}
