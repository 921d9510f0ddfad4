//! Reusable templates - define once, render anywhere.
//!
//! [`create_reusable_template`] returns a Definer/User pair sharing one
//! [`TemplateRegistry`]:
//!
//! - [`DefineTemplate`] captures a template body under a name and renders a
//!   hidden placeholder
//! - [`UseTemplate`] looks the body up by name and renders it with its own
//!   props, attributes, listeners and slots
//!
//! Each call to the factory creates a separate registry, so template names
//! are local to one pair.
//!
//! # Mount order
//!
//! A Definer must render before any User of the same name. A User that
//! renders first warns and shows nothing for that render; it picks the
//! template up on its next render. Place Definers ahead of Users in the
//! same children closure.
//!
//! # Example
//!
//! ```ignore
//! use spark_tui_templates::{create_reusable_template, template_body, text};
//! use spark_tui_templates::{DefineProps, UseProps, TextProps, TemplateScope};
//!
//! #[derive(Clone, PartialEq, Default)]
//! struct Greeting { username: String }
//!
//! let (define, use_template) = create_reusable_template::<Greeting>();
//!
//! let _definer = define.render(DefineProps {
//!     children: Some(template_body(|scope: &TemplateScope<Greeting>| {
//!         text(TextProps {
//!             content: format!("Hello {}", scope.props.username).into(),
//!             ..Default::default()
//!         })
//!     })),
//!     ..Default::default()
//! });
//!
//! let _user = use_template.render(UseProps {
//!     props: Greeting { username: "Ada".into() }.into(),
//!     ..Default::default()
//! });
//! // Renders "Hello Ada"
//! ```

mod attrs;
mod context;
mod define;
mod error;
mod registry;
mod slots;
mod use_template;

use std::rc::Rc;

pub use attrs::{
    event_key, event_name, partition_attrs, AttrValue, Attrs, Handler, Listeners, Value, EVENT_PREFIX,
};
pub use context::{Context, Emitter, TemplateScope};
pub use define::{template_body, DefineProps, DefineTemplate, TemplateBody};
pub use error::TemplateError;
pub use registry::{RenderFn, TemplateRegistry};
pub use slots::{ScopedSlotFn, ScopedSlots, SlotAccessors, SlotFn, Slots};
pub use use_template::{UseProps, UseTemplate};

/// Name used when a Definer or User is given no name (or an empty one).
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Resolve an optional template name, falling back to
/// [`DEFAULT_TEMPLATE_NAME`].
pub fn resolve_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_TEMPLATE_NAME,
    }
}

/// Create a Definer/User pair backed by a fresh registry.
///
/// Destructure in order: Definer first, User second.
pub fn create_reusable_template<P>() -> (DefineTemplate<P>, UseTemplate<P>)
where
    P: Clone + PartialEq + 'static,
{
    let registry = Rc::new(TemplateRegistry::new());
    (
        DefineTemplate::new(registry.clone()),
        UseTemplate::new(registry),
    )
}
