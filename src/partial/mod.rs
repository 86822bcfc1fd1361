//! Partial application with placeholders.
//!
//! Conventional partial application can only fix a prefix of a function's
//! arguments. This module lets any subset of positions be fixed: a prefix,
//! a suffix, or both ends around an interior gap.
//!
//! # Overview
//!
//! - [`Slot`]: one argument position, either a value or [`Placeholder`]
//! - [`Template`]: an immutable target plus its slots
//! - [`Partial`]: a callable wrapping a template
//! - [`Applied`]: the outcome of a call, resolved or still pending
//! - [`Aware`]: a decorated target that accepts placeholders
//! - [`Invocable`] / [`IntoInvocable`]: the calling convention they share
//!
//! # Examples
//!
//! ## Filling from the left, the right, or both ends
//!
//! ```
//! use partiell::{call, partial};
//!
//! fn f(arguments: Vec<i64>) -> i64 {
//!     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
//! }
//!
//! let left = partial!(f, 1, __).pending().unwrap();
//! assert_eq!(call!(left, 2, 3).resolved(), Some(123));
//!
//! let right = partial!(f, __, 3).pending().unwrap();
//! assert_eq!(call!(right, 1, 2).resolved(), Some(123));
//!
//! let both = partial!(f, 1, __, 3).pending().unwrap();
//! assert_eq!(call!(both, 2).resolved(), Some(123));
//! ```
//!
//! ## Deferring a position again
//!
//! Passing `__` as a fill value keeps that position open:
//!
//! ```
//! use partiell::{call, partial};
//!
//! fn f(arguments: Vec<i64>) -> i64 {
//!     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
//! }
//!
//! let first = partial!(f, 1, __, 3).pending().unwrap();
//! let second = call!(first, __).pending().unwrap();
//! assert_eq!(call!(second, 2).resolved(), Some(123));
//! ```
//!
//! # Resolution Rule
//!
//! ```text
//! slots:  [a, __, c, __]      fills: [x, y, z]
//! merged: [a, x,  c, y, z]    -> no placeholders left, target(a, x, c, y, z)
//! ```
//!
//! Placeholders are filled left to right. Unused placeholders stay open and
//! surplus fills are appended to the end.

mod aware;
mod callable;
mod invocable;
mod macros;
mod slot;
mod template;

pub use aware::{Aware, apply, make_placeholder_aware};
pub use callable::{Applied, Partial};
pub use invocable::{IntoInvocable, Invocable};
pub use slot::{__, Placeholder, Slot};
pub use template::Template;
