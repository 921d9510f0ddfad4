//! Template Registry - the state one Definer/User pair shares.
//!
//! Two lookup tables keyed by template name:
//! - name → render function
//! - name → auxiliary (scoped) slots
//!
//! Writes overwrite (last writer wins) and nothing is ever removed. The
//! registry lives as long as the last `Rc` to it, normally the pair
//! returned by [`create_reusable_template`](super::create_reusable_template).
//! It is single-threaded: interior mutability through `RefCell`, no locks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::primitives::Cleanup;
use super::context::Context;
use super::error::TemplateError;
use super::slots::ScopedSlots;

/// A registered template: renders into the current parent and returns the
/// resulting node, or `None` for no output.
pub type RenderFn<P> = Rc<dyn Fn(&Context<P>) -> Option<Cleanup>>;

/// Lookup tables shared by one Definer/User pair.
pub struct TemplateRegistry<P> {
    templates: RefCell<HashMap<String, RenderFn<P>>>,
    scoped_slots: RefCell<HashMap<String, ScopedSlots<P>>>,
}

impl<P> TemplateRegistry<P> {
    pub fn new() -> Self {
        Self {
            templates: RefCell::new(HashMap::new()),
            scoped_slots: RefCell::new(HashMap::new()),
        }
    }

    /// Store `render` under `name`, replacing any previous template.
    pub fn set_template(&self, name: impl Into<String>, render: RenderFn<P>) {
        self.templates.borrow_mut().insert(name.into(), render);
    }

    /// Store the auxiliary slots for `name`, replacing any previous map.
    pub fn set_scoped_slots(&self, name: impl Into<String>, slots: ScopedSlots<P>) {
        self.scoped_slots.borrow_mut().insert(name.into(), slots);
    }

    /// The template currently registered under `name`.
    pub fn template(&self, name: &str) -> Option<RenderFn<P>> {
        self.templates.borrow().get(name).cloned()
    }

    /// Like [`TemplateRegistry::template`], as a `Result`.
    pub fn resolve(&self, name: &str) -> Result<RenderFn<P>, TemplateError> {
        self.template(name).ok_or_else(|| TemplateError::NotDefined {
            name: name.to_string(),
        })
    }

    /// The auxiliary slots registered under `name`, or an empty map.
    pub fn scoped_slots(&self, name: &str) -> ScopedSlots<P> {
        self.scoped_slots
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.borrow().contains_key(name)
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<P> Default for TemplateRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for TemplateRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(calls: &Rc<Cell<u32>>, tag: u32) -> RenderFn<()> {
        let calls = calls.clone();
        Rc::new(move |_ctx: &Context<()>| -> Option<Cleanup> {
            calls.set(tag);
            None
        })
    }

    #[test]
    fn test_resolve_missing() {
        let registry: TemplateRegistry<()> = TemplateRegistry::new();

        let err = registry.resolve("missing").err();
        assert_eq!(
            err,
            Some(TemplateError::NotDefined {
                name: "missing".to_string()
            })
        );
        assert!(err.is_some_and(|e| e.to_string().contains("missing")));
    }

    #[test]
    fn test_last_writer_wins() {
        let registry: TemplateRegistry<()> = TemplateRegistry::new();
        let calls = Rc::new(Cell::new(0));

        registry.set_template("card", counting(&calls, 1));
        registry.set_template("card", counting(&calls, 2));

        let ctx = Context {
            props: (),
            emit: Default::default(),
            slots: Default::default(),
            scoped_slots: ScopedSlots::new(),
            listeners: Default::default(),
            attrs: Default::default(),
        };
        let render = registry.template("card");
        assert!(render.is_some_and(|render| render(&ctx).is_none()));
        assert_eq!(calls.get(), 2);
        assert_eq!(registry.names(), vec!["card".to_string()]);
    }

    #[test]
    fn test_scoped_slots_default_empty() {
        let registry: TemplateRegistry<()> = TemplateRegistry::new();
        assert!(registry.scoped_slots("card").is_empty());

        registry.set_scoped_slots("card", ScopedSlots::new().with("item", |_| ()));
        assert!(registry.scoped_slots("card").contains("item"));
        assert!(!registry.contains("card"), "slots alone do not define a template");
    }
}
