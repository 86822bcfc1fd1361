//! Argument slots and the placeholder marker.
//!
//! A [`Slot`] is one position in an argument list: either a concrete
//! value or the [`Placeholder`] marker. The marker lives in its own enum
//! variant, so no argument value can ever be mistaken for it.

use std::fmt;

use smallvec::SmallVec;

/// Number of slots stored inline before a template spills to the heap.
pub(crate) const INLINE_SLOTS: usize = 8;

/// Inline storage for the slots of a template.
pub(crate) type SlotVec<V> = SmallVec<[Slot<V>; INLINE_SLOTS]>;

/// Marker type for an argument position that has not been supplied yet.
///
/// Use the constant [`__`] to refer to the single marker value, or write
/// `__` directly inside [`slots!`](crate::slots), [`partial!`](crate::partial)
/// and [`call!`](crate::call), where it is matched as a literal token.
///
/// # Examples
///
/// ```
/// use partiell::{Slot, __};
///
/// let slot: Slot<i32> = __.into();
/// assert!(slot.is_placeholder());
/// assert_eq!(__.to_string(), "__");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholder;

/// The placeholder value.
///
/// Named `__` (double underscore) because `macro_rules!` cannot match a
/// single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

impl fmt::Display for Placeholder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("__")
    }
}

/// One position of an argument list.
///
/// # Examples
///
/// ```
/// use partiell::{Slot, slots};
///
/// let arguments: Vec<Slot<i32>> = slots![1, __, 3];
/// assert_eq!(arguments[0], Slot::Value(1));
/// assert!(arguments[1].is_placeholder());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot<V> {
    /// A concrete argument value.
    Value(V),
    /// An argument that will be supplied by a later call.
    Placeholder,
}

impl<V> Slot<V> {
    /// Returns `true` if the slot holds a concrete value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the slot is still waiting for a value.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns a reference to the concrete value, if any.
    #[inline]
    pub const fn as_value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Consumes the slot and returns the concrete value, if any.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Transforms the concrete value, leaving placeholders untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use partiell::Slot;
    ///
    /// assert_eq!(Slot::Value(2).map(|x| x * 10), Slot::Value(20));
    /// assert_eq!(Slot::<i32>::Placeholder.map(|x| x * 10), Slot::Placeholder);
    /// ```
    #[inline]
    pub fn map<W, F>(self, function: F) -> Slot<W>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Self::Value(value) => Slot::Value(function(value)),
            Self::Placeholder => Slot::Placeholder,
        }
    }
}

impl<V> From<Placeholder> for Slot<V> {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl<V: fmt::Display> fmt::Display for Slot<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, formatter),
            Self::Placeholder => fmt::Display::fmt(&Placeholder, formatter),
        }
    }
}

/// Counts the placeholders in a slot sequence.
pub(crate) fn count_placeholders<'a, V: 'a>(slots: impl IntoIterator<Item = &'a Slot<V>>) -> usize {
    slots
        .into_iter()
        .filter(|slot| slot.is_placeholder())
        .count()
}

static_assertions::assert_eq_size!(Placeholder, ());
