//! Decorating plain functions so they accept placeholders.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use super::callable::Applied;
use super::invocable::{IntoInvocable, Invocable};
use super::slot::Slot;
use super::template::{Target, Template};

/// A target function that understands placeholders.
///
/// Called without placeholders, an `Aware` behaves exactly like the
/// function it wraps: same result, same errors. Called with placeholders,
/// it returns a [`Partial`](super::Partial) that supports the same calls,
/// so the decoration carries through every later step.
///
/// # Examples
///
/// ```
/// use partiell::{Aware, slots};
///
/// let f = Aware::new(|arguments: Vec<i64>| {
///     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
/// });
///
/// assert_eq!(f.call(slots![1, 2, 3]).resolved(), Some(123));
///
/// let g = f.call(slots![1, __]).pending().unwrap();
/// let h = g.call(slots![2, __]).pending().unwrap();
/// assert_eq!(h.call(slots![3]).resolved(), Some(123));
/// ```
pub struct Aware<V, R> {
    target: Target<V, R>,
    target_name: &'static str,
}

impl<V, R> Aware<V, R> {
    /// Wraps `target`.
    pub fn new<F>(target: F) -> Self
    where
        F: Fn(Vec<V>) -> R + 'static,
    {
        Self {
            target: Rc::new(target),
            target_name: type_name::<F>(),
        }
    }

    /// Applies `arguments` to the target.
    ///
    /// Without placeholders the target runs immediately. Otherwise the
    /// arguments are kept in a new [`Partial`](super::Partial).
    pub fn call<I>(&self, arguments: I) -> Applied<V, R>
    where
        I: IntoIterator<Item = Slot<V>>,
    {
        Template::construct(&self.target, self.target_name, arguments)
    }

    /// Calls the target directly with concrete arguments.
    #[inline]
    pub fn invoke(&self, arguments: Vec<V>) -> R {
        (*self.target)(arguments)
    }

    /// Returns the type name of the target function.
    #[inline]
    pub const fn target_name(&self) -> &'static str {
        self.target_name
    }

    /// Composes `function` after the target.
    pub fn map<S, F>(self, function: F) -> Aware<V, S>
    where
        F: Fn(R) -> S + 'static,
        V: 'static,
        R: 'static,
    {
        let target = self.target;
        Aware {
            target: Rc::new(move |arguments: Vec<V>| function((*target)(arguments))),
            target_name: self.target_name,
        }
    }
}

impl<V, R> Clone for Aware<V, R> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            target_name: self.target_name,
        }
    }
}

impl<V, R> fmt::Debug for Aware<V, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Aware({})", self.target_name)
    }
}

static_assertions::assert_not_impl_any!(Aware<i32, i32>: Send, Sync);

/// Makes `target` accept placeholders in every later call.
///
/// Plain functions taking a `Vec<V>` are wrapped in an [`Aware`].
/// Callables produced by this crate are returned as they are, since they
/// already follow the placeholder protocol.
///
/// # Examples
///
/// ```
/// use partiell::{make_placeholder_aware, slots};
///
/// let divide = make_placeholder_aware(|arguments: Vec<f64>| arguments[0] / arguments[1]);
///
/// let halve = divide.call(slots![__, 2.0]).pending().unwrap();
/// assert_eq!(halve.call(slots![3.0]).resolved(), Some(1.5));
/// ```
#[inline]
pub fn make_placeholder_aware<V, T>(target: T) -> T::Invocable
where
    T: IntoInvocable<V>,
{
    target.into_invocable()
}

/// Applies `arguments` to `target`, with [`Placeholder`](super::Placeholder)
/// slots marking positions to fill later.
///
/// Returns the target's result when no placeholders are given, otherwise a
/// [`Partial`](super::Partial) waiting for the missing arguments. When
/// `target` is itself a partial, its placeholders are filled first.
///
/// # Examples
///
/// ```
/// use partiell::{apply, slots};
///
/// fn f(arguments: Vec<i64>) -> i64 {
///     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
/// }
///
/// let prefix = apply(f, slots![1, __]).pending().unwrap();
/// assert_eq!(prefix.call(slots![2, 3]).resolved(), Some(123));
///
/// let suffix = apply(f, slots![__, 3]).pending().unwrap();
/// assert_eq!(suffix.call(slots![1, 2]).resolved(), Some(123));
///
/// assert_eq!(apply(f, slots![1, 2, 3]).resolved(), Some(123));
/// ```
#[inline]
pub fn apply<V, T>(target: T, arguments: Vec<Slot<V>>) -> Applied<V, T::Output>
where
    T: IntoInvocable<V>,
{
    target.into_invocable().call_once(arguments)
}
