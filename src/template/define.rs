//! Definer - captures a template body into the registry.
//!
//! Rendering a Definer never shows anything: it registers its default
//! content (and any auxiliary blocks) under a name, then renders a hidden
//! placeholder box. The registration outlives the placeholder.

use std::rc::Rc;

use tracing::debug;

use crate::primitives::{box_primitive, BoxProps, Cleanup, Nodes};
use super::context::{Context, TemplateScope};
use super::registry::{RenderFn, TemplateRegistry};
use super::slots::ScopedSlots;
use super::resolve_name;

/// The default content of a Definer.
pub type TemplateBody<P> = Rc<dyn Fn(&TemplateScope<P>) -> Nodes>;

/// Wrap a closure as a [`TemplateBody`].
///
/// The closure may return a single node, a list (only the first node is
/// kept when the template is used), or nothing.
pub fn template_body<P, F, R>(body: F) -> TemplateBody<P>
where
    P: 'static,
    F: Fn(&TemplateScope<P>) -> R + 'static,
    R: Into<Nodes>,
{
    Rc::new(move |scope: &TemplateScope<P>| -> Nodes { body(scope).into() })
}

/// Properties for a Definer.
pub struct DefineProps<P> {
    /// Template name (default: `"default"`).
    pub name: Option<String>,

    /// The template body. Without one, nothing is registered.
    pub children: Option<TemplateBody<P>>,

    /// Auxiliary blocks. A block named `"default"` is ignored.
    pub slots: ScopedSlots<P>,
}

impl<P> Default for DefineProps<P> {
    fn default() -> Self {
        Self {
            name: None,
            children: None,
            slots: ScopedSlots::new(),
        }
    }
}

/// Renderless component that registers templates.
pub struct DefineTemplate<P> {
    registry: Rc<TemplateRegistry<P>>,
}

impl<P: Clone + 'static> DefineTemplate<P> {
    /// A Definer writing into `registry`.
    pub fn new(registry: Rc<TemplateRegistry<P>>) -> Self {
        Self { registry }
    }

    /// The registry this Definer writes into.
    pub fn registry(&self) -> &Rc<TemplateRegistry<P>> {
        &self.registry
    }

    /// Register the template described by `props` and render a hidden
    /// placeholder.
    ///
    /// Returns the placeholder's cleanup. Cleaning up does not unregister
    /// the template.
    pub fn render(&self, props: DefineProps<P>) -> Cleanup {
        let name = resolve_name(props.name.as_deref()).to_string();

        if let Some(body) = props.children {
            let render: RenderFn<P> = Rc::new(move |ctx: &Context<P>| -> Option<Cleanup> {
                let scope = ctx.scope();
                body(&scope).into_first()
            });
            self.registry.set_template(name.clone(), render);

            let scoped_slots = props.slots.without_default();
            debug!(
                template = %name,
                scoped_slots = scoped_slots.len(),
                "template registered"
            );
            self.registry.set_scoped_slots(name, scoped_slots);
        }

        box_primitive(BoxProps {
            visible: Some(false.into()),
            ..Default::default()
        })
    }
}

impl<P> Clone for DefineTemplate<P> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}
