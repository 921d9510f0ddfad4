//! Slots - named child-content blocks.
//!
//! Two flavours exist:
//! - [`Slots`]: child content handed to a User. Each slot takes no
//!   arguments. The Context exposes them as [`SlotAccessors`].
//! - [`ScopedSlots`]: auxiliary blocks declared next to a template on the
//!   Definer. Each one receives a [`TemplateScope`] when rendered.
//!
//! Rendering a slot creates its components under the current parent and
//! returns them as [`Nodes`].

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::primitives::Nodes;
use super::context::TemplateScope;
use super::DEFAULT_TEMPLATE_NAME;

/// Zero-argument child content.
pub type SlotFn = Rc<dyn Fn() -> Nodes>;

/// Child content rendered with a template scope.
pub type ScopedSlotFn<P> = Rc<dyn Fn(&TemplateScope<P>) -> Nodes>;

// =============================================================================
// Slots
// =============================================================================

/// Named child content passed to a User.
#[derive(Clone, Default)]
pub struct Slots {
    entries: HashMap<String, SlotFn>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a slot, builder style.
    pub fn with<F, R>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: Into<Nodes>,
    {
        self.insert(name, render);
        self
    }

    /// Add (or replace) a slot.
    pub fn insert<F, R>(&mut self, name: impl Into<String>, render: F)
    where
        F: Fn() -> R + 'static,
        R: Into<Nodes>,
    {
        self.entries
            .insert(name.into(), Rc::new(move || -> Nodes { render().into() }));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

// =============================================================================
// Slot Accessors
// =============================================================================

/// Per-render accessors over a User's child content.
///
/// Every accessor is a zero-argument function yielding that slot's current
/// nodes. Asking for a slot that was not passed yields an empty sequence.
#[derive(Clone, Default)]
pub struct SlotAccessors {
    accessors: HashMap<String, SlotFn>,
}

impl SlotAccessors {
    pub(crate) fn from_slots(slots: &Slots) -> Self {
        Self {
            accessors: slots.entries.clone(),
        }
    }

    /// The accessor for `name`, if that slot was passed.
    pub fn get(&self, name: &str) -> Option<SlotFn> {
        self.accessors.get(name).cloned()
    }

    /// Render the slot `name`, or nothing if it was not passed.
    pub fn render(&self, name: &str) -> Nodes {
        self.accessors
            .get(name)
            .map(|slot| slot())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Slot names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for SlotAccessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// =============================================================================
// Scoped Slots
// =============================================================================

/// Auxiliary blocks keyed by slot name.
pub struct ScopedSlots<P> {
    entries: HashMap<String, ScopedSlotFn<P>>,
}

impl<P> ScopedSlots<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add (or replace) a block, builder style.
    pub fn with<F, R>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&TemplateScope<P>) -> R + 'static,
        R: Into<Nodes>,
        P: 'static,
    {
        self.insert(name, render);
        self
    }

    /// Add (or replace) a block.
    pub fn insert<F, R>(&mut self, name: impl Into<String>, render: F)
    where
        F: Fn(&TemplateScope<P>) -> R + 'static,
        R: Into<Nodes>,
        P: 'static,
    {
        self.entries
            .insert(
                name.into(),
                Rc::new(move |scope: &TemplateScope<P>| -> Nodes { render(scope).into() }),
            );
    }

    pub fn get(&self, name: &str) -> Option<ScopedSlotFn<P>> {
        self.entries.get(name).cloned()
    }

    /// Render the block `name` with `scope`, or nothing if it is missing.
    pub fn render(&self, name: &str, scope: &TemplateScope<P>) -> Nodes {
        self.entries
            .get(name)
            .map(|slot| slot(scope))
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Block names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every block except the one named `"default"`.
    pub fn without_default(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| name.as_str() != DEFAULT_TEMPLATE_NAME)
                .map(|(name, slot)| (name.clone(), slot.clone()))
                .collect(),
        }
    }
}

impl<P> Clone for ScopedSlots<P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<P> Default for ScopedSlots<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for ScopedSlots<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{get_allocated_count, reset_registry};
    use crate::primitives::{text, TextProps};

    #[test]
    fn test_slot_accessors_default_empty() {
        reset_registry();

        let slots = Slots::new().with("header", || {
            text(TextProps {
                content: "Header".into(),
                ..Default::default()
            })
        });
        let accessors = SlotAccessors::from_slots(&slots);

        assert!(accessors.contains("header"));
        assert_eq!(accessors.render("header").len(), 1);
        assert_eq!(get_allocated_count(), 1);

        assert!(accessors.get("footer").is_none());
        assert!(accessors.render("footer").is_empty());
        assert_eq!(get_allocated_count(), 1);
    }

    #[test]
    fn test_scoped_slots_without_default() {
        let slots: ScopedSlots<()> = ScopedSlots::new()
            .with("default", |_| ())
            .with("item", |_| ())
            .with("empty", |_| ());

        let aux = slots.without_default();

        assert_eq!(aux.names(), vec!["empty", "item"]);
        assert!(!aux.contains("default"));
        assert_eq!(slots.len(), 3, "source map is untouched");
    }
}
