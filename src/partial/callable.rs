//! Partially applied callables and the outcome of applying arguments.

use std::fmt;

use super::slot::Slot;
use super::template::Template;

/// Outcome of calling a placeholder-aware callable.
///
/// Either every slot was concrete and the target ran, or placeholders are
/// left and a new [`Partial`] is waiting for them.
///
/// # Examples
///
/// ```
/// use partiell::{Applied, partial};
///
/// let add = |arguments: Vec<i32>| arguments.iter().sum::<i32>();
///
/// assert!(matches!(partial!(add, 1, 2), Applied::Resolved(3)));
/// assert!(partial!(add, 1, __).is_pending());
/// ```
#[must_use = "a pending application does nothing until it is called"]
#[derive(Debug)]
pub enum Applied<V, R> {
    /// The target was invoked and returned this value.
    Resolved(R),
    /// Some positions are still unfilled.
    Pending(Partial<V, R>),
}

impl<V, R> Applied<V, R> {
    /// Returns `true` if the target was invoked.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns `true` if placeholders are still unfilled.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the target's result, discarding a pending partial.
    #[inline]
    pub fn resolved(self) -> Option<R> {
        match self {
            Self::Resolved(result) => Some(result),
            Self::Pending(_) => None,
        }
    }

    /// Returns the pending partial, discarding a resolved result.
    #[inline]
    pub fn pending(self) -> Option<Partial<V, R>> {
        match self {
            Self::Resolved(_) => None,
            Self::Pending(partial) => Some(partial),
        }
    }

    /// Converts into `Ok(result)`, or `Err(partial)` while still pending.
    ///
    /// # Errors
    ///
    /// Returns the pending [`Partial`] if placeholders remain.
    #[inline]
    pub fn into_resolved(self) -> Result<R, Partial<V, R>> {
        match self {
            Self::Resolved(result) => Ok(result),
            Self::Pending(partial) => Err(partial),
        }
    }

    /// Converts into `Ok(partial)`, or `Err(result)` if the target already ran.
    ///
    /// # Errors
    ///
    /// Returns the target's result if the application resolved.
    #[inline]
    pub fn into_pending(self) -> Result<Partial<V, R>, R> {
        match self {
            Self::Resolved(result) => Err(result),
            Self::Pending(partial) => Ok(partial),
        }
    }

    /// Transforms the result, now or once the application resolves.
    ///
    /// # Examples
    ///
    /// ```
    /// use partiell::{call, partial};
    ///
    /// let add = |arguments: Vec<i32>| arguments.iter().sum::<i32>();
    ///
    /// let described = partial!(add, 40, __).map(|sum| format!("sum = {sum}"));
    /// let partial = described.pending().unwrap();
    /// assert_eq!(call!(partial, 2).resolved(), Some("sum = 42".to_string()));
    /// ```
    pub fn map<S, F>(self, function: F) -> Applied<V, S>
    where
        F: Fn(R) -> S + 'static,
        V: 'static,
        R: 'static,
    {
        match self {
            Self::Resolved(result) => Applied::Resolved(function(result)),
            Self::Pending(partial) => Applied::Pending(partial.map(function)),
        }
    }
}

/// A target function with some arguments already fixed.
///
/// Calling a `Partial` fills its placeholders from left to right with the
/// supplied slots. The result is either the target's return value or yet
/// another `Partial`, which supports the same calls. The original partial
/// is never modified, so it can start any number of independent chains.
///
/// # Examples
///
/// ```
/// use partiell::{call, partial};
///
/// fn digits(arguments: Vec<i64>) -> i64 {
///     arguments.iter().fold(0, |accumulator, digit| accumulator * 10 + digit)
/// }
///
/// let outer = partial!(digits, 1, __, 3).pending().unwrap();
/// assert_eq!(call!(outer, 2).resolved(), Some(123));
/// assert_eq!(call!(outer, 7).resolved(), Some(173));
/// ```
pub struct Partial<V, R> {
    template: Template<V, R>,
}

impl<V, R> Partial<V, R> {
    pub(crate) const fn from_template(template: Template<V, R>) -> Self {
        Self { template }
    }

    /// Fills placeholders with `arguments`, leaving `self` reusable.
    ///
    /// Concrete values already stored are cloned into the result, so shared
    /// handles such as `Rc` reach the target as the same object.
    pub fn call<I>(&self, arguments: I) -> Applied<V, R>
    where
        I: IntoIterator<Item = Slot<V>>,
        V: Clone,
    {
        self.template.clone().fill(arguments)
    }

    /// Fills placeholders with `arguments`, moving stored values out.
    pub fn call_once<I>(self, arguments: I) -> Applied<V, R>
    where
        I: IntoIterator<Item = Slot<V>>,
    {
        self.template.fill(arguments)
    }

    /// Returns the template this partial wraps.
    #[inline]
    pub const fn template(&self) -> &Template<V, R> {
        &self.template
    }

    /// Returns the current slots, in call order.
    #[inline]
    pub fn slots(&self) -> &[Slot<V>] {
        self.template.slots()
    }

    /// Returns the number of positions still waiting for a value.
    #[inline]
    pub fn placeholder_count(&self) -> usize {
        self.template.placeholder_count()
    }

    /// Returns the type name of the target function.
    #[inline]
    pub const fn target_name(&self) -> &'static str {
        self.template.target_name()
    }

    /// Composes `function` after the target.
    pub fn map<S, F>(self, function: F) -> Partial<V, S>
    where
        F: Fn(R) -> S + 'static,
        V: 'static,
        R: 'static,
    {
        Partial::from_template(self.template.map_output(function))
    }
}

impl<V: Clone, R> Clone for Partial<V, R> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
        }
    }
}

/// Renders as `Partial(target, value, __, value)`.
impl<V: fmt::Debug, R> fmt::Debug for Partial<V, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Partial({}", self.target_name())?;
        for slot in self.slots() {
            match slot {
                Slot::Value(value) => write!(formatter, ", {value:?}")?,
                Slot::Placeholder => formatter.write_str(", __")?,
            }
        }
        formatter.write_str(")")
    }
}

static_assertions::assert_not_impl_any!(Partial<i32, i32>: Send, Sync);
