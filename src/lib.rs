//! # partiell
//!
//! Partial function application with placeholders at any argument position.
//!
//! ## Overview
//!
//! Conventional partial application binds a prefix of a function's
//! arguments. `partiell` binds any subset: write `__` for every position
//! that is not known yet, and supply those positions later, in order.
//!
//! - **Placeholders**: [`__`] marks an unfilled argument position
//! - **Partials**: [`partial!`] / [`apply`] fix arguments and return a [`Partial`]
//! - **Decorator**: [`make_placeholder_aware`] makes a plain function accept `__`
//! - **Adapters**: [`from_fn1`] .. [`from_fn6`] turn fixed-arity functions into targets
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Slot`] and [`Placeholder`]
//! - `tracing`: emit `trace` events as applications resolve or stay pending
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use partiell::prelude::*;
//!
//! fn f(x: i64, y: i64, z: i64) -> i64 {
//!     x * 100 + y * 10 + z
//! }
//!
//! let f = make_placeholder_aware(from_fn3(f));
//!
//! let g = call!(f, 1, __).pending().unwrap();
//! assert_eq!(call!(g, 2, 3).resolved(), Some(Ok(123)));
//!
//! let h = call!(g, 2, __).pending().unwrap();
//! assert_eq!(call!(h, 3).resolved(), Some(Ok(123)));
//!
//! let i = call!(f, __, 3).pending().unwrap();
//! assert_eq!(call!(i, 1, 2).resolved(), Some(Ok(123)));
//!
//! let j = call!(f, 1, __, 3).pending().unwrap();
//! assert_eq!(call!(j, 2).resolved(), Some(Ok(123)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the types, functions and macros needed for everyday use.
///
/// # Usage
///
/// ```rust
/// use partiell::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arity::*;
    pub use crate::partial::*;
    pub use crate::{call, partial, slots};
}

macro_rules! trace_event {
    ($($arguments:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arguments)*);
    };
}

pub mod arity;
pub mod partial;

pub use arity::{ArityError, from_fn1, from_fn2, from_fn3, from_fn4, from_fn5, from_fn6};
pub use partial::{
    __, Applied, Aware, IntoInvocable, Invocable, Partial, Placeholder, Slot, Template, apply,
    make_placeholder_aware,
};
