//! # spark-tui-templates
//!
//! Reusable templates for spark-tui components.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into columnar arrays rather than objects. A template
//! is a render function stored by name: a Definer captures it once, and any
//! number of Users render it later with their own props, attributes, event
//! listeners and child content.
//!
//! ```text
//! DefineTemplate ──register──► TemplateRegistry ◄──lookup── UseTemplate
//!        │                                                    │
//!   hidden Box                                     render fn(Context) → nodes
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (ComponentType, Attr)
//! - [`engine`] - Component registry, parent context, parallel arrays
//! - [`primitives`] - Box and Text components
//! - [`pipeline`] - Plain-text snapshot of the component tree
//! - [`template`] - Definer, User and the registry they share

pub mod engine;
pub mod pipeline;
pub mod primitives;
pub mod template;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    allocate_index, get_allocated_count, get_allocated_indices, get_current_parent_index,
    is_allocated, on_destroy, pop_parent_context, push_parent_context,
    release_index, reset_registry, with_parent_context,
};

pub use pipeline::{render_snapshot, snapshot_lines, snapshot_subtree};

pub use primitives::{box_primitive, text, BoxProps, Cleanup, Nodes, PropValue, TextProps};

pub use template::{
    create_reusable_template, resolve_name, template_body, AttrValue, Context, DefineProps,
    DefineTemplate, Emitter, ScopedSlots, SlotAccessors, Slots, TemplateBody, TemplateError,
    TemplateRegistry, TemplateScope, UseProps, UseTemplate, Value, DEFAULT_TEMPLATE_NAME,
};
