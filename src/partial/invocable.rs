//! The common calling convention shared by every placeholder-aware callable.

use super::aware::Aware;
use super::callable::{Applied, Partial};
use super::slot::Slot;

/// A callable that accepts argument slots, some of which may be placeholders.
///
/// Both decorated targets ([`Aware`]) and partial applications
/// ([`Partial`]) implement this trait, so code can drive a chain of
/// applications without knowing how far along the chain it is.
///
/// # Examples
///
/// ```
/// use partiell::{Invocable, make_placeholder_aware, slots};
///
/// fn drive<I: Invocable<i32, Output = i32>>(callable: &I) -> Option<i32> {
///     callable.call(slots![__, 2]).pending()?.call(slots![1]).resolved()
/// }
///
/// let subtract = make_placeholder_aware(|arguments: Vec<i32>| arguments[0] - arguments[1]);
/// assert_eq!(drive(&subtract), Some(-1));
/// ```
pub trait Invocable<V> {
    /// The target function's return type.
    type Output;

    /// Applies `arguments` without consuming the callable.
    fn call(&self, arguments: Vec<Slot<V>>) -> Applied<V, Self::Output>;

    /// Applies `arguments`, consuming the callable.
    fn call_once(self, arguments: Vec<Slot<V>>) -> Applied<V, Self::Output>
    where
        Self: Sized,
    {
        self.call(arguments)
    }
}

impl<V, R> Invocable<V> for Aware<V, R> {
    type Output = R;

    #[inline]
    fn call(&self, arguments: Vec<Slot<V>>) -> Applied<V, R> {
        Self::call(self, arguments)
    }
}

impl<V: Clone, R> Invocable<V> for Partial<V, R> {
    type Output = R;

    #[inline]
    fn call(&self, arguments: Vec<Slot<V>>) -> Applied<V, R> {
        Self::call(self, arguments)
    }

    #[inline]
    fn call_once(self, arguments: Vec<Slot<V>>) -> Applied<V, R> {
        Self::call_once(self, arguments)
    }
}

/// Conversion into a placeholder-aware callable.
///
/// Plain functions taking their arguments as a `Vec<V>` are decorated with
/// [`Aware`]. Callables that already understand placeholders convert to
/// themselves, so decorating them again continues the same chain instead
/// of nesting one application inside another.
pub trait IntoInvocable<V> {
    /// The target function's return type.
    type Output;

    /// The resulting callable.
    type Invocable: Invocable<V, Output = Self::Output>;

    /// Performs the conversion.
    fn into_invocable(self) -> Self::Invocable;
}

impl<V, R, F> IntoInvocable<V> for F
where
    F: Fn(Vec<V>) -> R + 'static,
{
    type Output = R;
    type Invocable = Aware<V, R>;

    #[inline]
    fn into_invocable(self) -> Aware<V, R> {
        Aware::new(self)
    }
}

impl<V, R> IntoInvocable<V> for Aware<V, R> {
    type Output = R;
    type Invocable = Self;

    #[inline]
    fn into_invocable(self) -> Self {
        self
    }
}

impl<V: Clone, R> IntoInvocable<V> for Partial<V, R> {
    type Output = R;
    type Invocable = Self;

    #[inline]
    fn into_invocable(self) -> Self {
        self
    }
}
