//! Argument templates and placeholder resolution.
//!
//! A [`Template`] pairs a target function with a fixed sequence of slots.
//! Templates are never mutated: filling placeholders always yields either
//! the target's result or a brand new template.

use std::fmt;
use std::rc::Rc;

use super::callable::{Applied, Partial};
use super::slot::{Slot, SlotVec, count_placeholders};

/// Shared, type-erased target function.
pub(crate) type Target<V, R> = Rc<dyn Fn(Vec<V>) -> R>;

/// An immutable target function plus its argument slots.
///
/// A template always holds at least one placeholder. Once every slot is
/// concrete, the target is invoked instead of building a template, so a
/// fully resolved template is never observable.
///
/// Templates are reached through [`Partial::template`].
///
/// # Examples
///
/// ```
/// use partiell::{Slot, partial};
///
/// let concat = |parts: Vec<&str>| parts.concat();
/// let greeting = partial!(concat, "Hello, ", __, "!").pending().unwrap();
///
/// let template = greeting.template();
/// assert_eq!(template.placeholder_count(), 1);
/// assert_eq!(template.slots()[0], Slot::Value("Hello, "));
/// ```
pub struct Template<V, R> {
    target: Target<V, R>,
    target_name: &'static str,
    slots: SlotVec<V>,
}

impl<V, R> Template<V, R> {
    /// Applies `arguments` to a bare target.
    ///
    /// This is the construction rule: with no placeholders the target is
    /// called right away, otherwise the arguments become a new template.
    pub(crate) fn construct<I>(
        target: &Target<V, R>,
        target_name: &'static str,
        arguments: I,
    ) -> Applied<V, R>
    where
        I: IntoIterator<Item = Slot<V>>,
    {
        Self::resolve(Rc::clone(target), target_name, arguments.into_iter().collect())
    }

    /// Merges `fills` into the placeholders of this template.
    ///
    /// Placeholders are filled left to right. Placeholders left over once
    /// `fills` runs out stay unresolved, and fills left over once every
    /// placeholder is taken are appended as trailing slots. A fill may
    /// itself be a placeholder, which keeps its position open.
    pub(crate) fn fill<I>(self, fills: I) -> Applied<V, R>
    where
        I: IntoIterator<Item = Slot<V>>,
    {
        let Self {
            target,
            target_name,
            slots,
        } = self;

        let mut fills = fills.into_iter().fuse();
        let mut merged = SlotVec::with_capacity(slots.len());
        for slot in slots {
            merged.push(match slot {
                Slot::Value(value) => Slot::Value(value),
                Slot::Placeholder => fills.next().unwrap_or(Slot::Placeholder),
            });
        }
        merged.extend(fills);

        Self::resolve(target, target_name, merged)
    }

    fn resolve(target: Target<V, R>, target_name: &'static str, slots: SlotVec<V>) -> Applied<V, R> {
        let placeholders = count_placeholders(&slots);
        if placeholders == 0 {
            trace_event!(
                function = target_name,
                arguments = slots.len(),
                "resolved partial application"
            );
            let arguments: Vec<V> = slots.into_iter().filter_map(Slot::into_value).collect();
            Applied::Resolved((*target)(arguments))
        } else {
            trace_event!(
                function = target_name,
                arguments = slots.len(),
                placeholders,
                "partial application pending"
            );
            Applied::Pending(Partial::from_template(Self {
                target,
                target_name,
                slots,
            }))
        }
    }

    /// Returns the slots of this template, in call order.
    #[inline]
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    /// Returns the number of positions still waiting for a value.
    ///
    /// Always at least one.
    #[inline]
    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.slots)
    }

    /// Returns the type name of the target function.
    #[inline]
    pub const fn target_name(&self) -> &'static str {
        self.target_name
    }

    /// Composes `function` after the target, keeping the slots.
    pub(crate) fn map_output<S, F>(self, function: F) -> Template<V, S>
    where
        F: Fn(R) -> S + 'static,
        V: 'static,
        R: 'static,
    {
        let target = self.target;
        Template {
            target: Rc::new(move |arguments: Vec<V>| function((*target)(arguments))),
            target_name: self.target_name,
            slots: self.slots,
        }
    }
}

impl<V: Clone, R> Clone for Template<V, R> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            target_name: self.target_name,
            slots: self.slots.clone(),
        }
    }
}

impl<V: fmt::Debug, R> fmt::Debug for Template<V, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Template")
            .field("target", &self.target_name)
            .field("slots", &self.slots)
            .finish()
    }
}
