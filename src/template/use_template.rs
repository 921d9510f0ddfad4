//! User - renders a registered template with its own context.
//!
//! # Lifecycle
//!
//! - On creation: renders once, immediately
//! - When a signal read during render changes (typically `props`): the
//!   previous output is cleaned up and the template renders again with a
//!   fresh [`Context`]
//! - On cleanup: current output cleaned up, scope stopped
//! - When the parent it rendered into is released: same as cleanup, so a
//!   later props change cannot touch reused indices
//!
//! The registry itself is not reactive. A Definer registering after a User
//! has rendered does not re-render that User; the next render picks it up.
//!
//! # Pattern: Parent Context Restoration
//!
//! The parent index is captured when the User is created and restored
//! before every render, so re-renders attach to the same place in the tree.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose};
use tracing::warn;

use crate::engine::{get_current_parent_index, on_destroy, with_parent_context};
use crate::primitives::{Cleanup, PropValue};
use super::attrs::{partition_attrs, AttrValue};
use super::context::{Context, Emitter};
use super::registry::TemplateRegistry;
use super::slots::{SlotAccessors, Slots};
use super::resolve_name;

/// Properties for a User.
#[derive(Default)]
pub struct UseProps<P: Clone + PartialEq + 'static> {
    /// Template name (default: `"default"`).
    pub name: Option<String>,

    /// Declared props, forwarded into the context.
    pub props: PropValue<P>,

    /// Any other attributes. `on*` handlers become listeners, the rest
    /// stay plain attributes.
    pub attrs: Vec<(String, AttrValue)>,

    /// Child content, exposed to the template through slot accessors.
    pub slots: Slots,
}

/// Component that renders templates registered by its Definer.
pub struct UseTemplate<P> {
    registry: Rc<TemplateRegistry<P>>,
}

impl<P: Clone + PartialEq + 'static> UseTemplate<P> {
    /// A User reading from `registry`.
    pub fn new(registry: Rc<TemplateRegistry<P>>) -> Self {
        Self { registry }
    }

    /// The registry this User reads from.
    pub fn registry(&self) -> &Rc<TemplateRegistry<P>> {
        &self.registry
    }

    /// Render the template named in `props`.
    ///
    /// An unknown name logs a warning and renders nothing; every render
    /// attempt warns again until a Definer registers that name.
    ///
    /// Returns a cleanup function that destroys the output and stops
    /// tracking.
    pub fn render(&self, props: UseProps<P>) -> Cleanup {
        // Capture parent index at creation time
        let parent_index = get_current_parent_index();

        let UseProps {
            name,
            props: values,
            attrs,
            slots,
        } = props;
        let name = resolve_name(name.as_deref()).to_string();
        let registry = self.registry.clone();

        // Storage for the current output
        let output: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
        let output_for_effect = output.clone();
        let output_for_dispose = output;

        // Attached: stops along with any enclosing scope
        let scope = effect_scope(false);

        scope.run(move || {
            let _effect_cleanup = effect(move || {
                // Reading props establishes the dependency
                let current = values.get();

                let previous = output_for_effect.borrow_mut().take();
                if let Some(previous) = previous {
                    previous();
                }

                let rendered = with_parent_context(parent_index, || {
                    render_template(&registry, &name, current, &attrs, &slots)
                });

                *output_for_effect.borrow_mut() = rendered;
            });

            on_scope_dispose(move || {
                let current = output_for_dispose.borrow_mut().take();
                if let Some(cleanup) = current {
                    cleanup();
                }
            });
        });

        // Stop at most once, whichever comes first: cleanup or parent release
        let scope = RefCell::new(Some(scope));
        let stop: Rc<dyn Fn()> = Rc::new(move || {
            let scope = scope.borrow_mut().take();
            if let Some(scope) = scope {
                scope.stop();
            }
        });
        if let Some(parent) = parent_index {
            let stop = stop.clone();
            on_destroy(parent, move || stop());
        }

        Box::new(move || stop())
    }
}

impl<P> Clone for UseTemplate<P> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// One render attempt: resolve, build a fresh context, invoke.
fn render_template<P>(
    registry: &TemplateRegistry<P>,
    name: &str,
    props: P,
    attrs: &[(String, AttrValue)],
    slots: &Slots,
) -> Option<Cleanup> {
    let template = match registry.resolve(name) {
        Ok(template) => template,
        Err(err) => {
            warn!(template = %name, "{err}");
            return None;
        }
    };

    let ctx = build_context(registry, name, props, attrs, slots);
    template(&ctx)
}

/// Assemble the context for one render.
pub(crate) fn build_context<P>(
    registry: &TemplateRegistry<P>,
    name: &str,
    props: P,
    attrs: &[(String, AttrValue)],
    slots: &Slots,
) -> Context<P> {
    let (listeners, attrs) = partition_attrs(attrs.iter().cloned());
    let emit = Emitter::new(Rc::new(listeners.clone()));

    Context {
        props,
        emit,
        slots: SlotAccessors::from_slots(slots),
        scoped_slots: registry.scoped_slots(name),
        listeners,
        attrs,
    }
}
