//! Box Primitive - Container component.
//!
//! The fundamental container component. Groups children under one index
//! and can be hidden. Hidden boxes (and everything under them) are skipped
//! by the snapshot pipeline.
//!
//! # Example
//!
//! ```ignore
//! use spark_tui_templates::primitives::{box_primitive, text, BoxProps, TextProps};
//! use spark_signals::signal;
//!
//! let open = signal(true);
//!
//! let cleanup = box_primitive(BoxProps {
//!     visible: Some(open.clone().into()),
//!     children: Some(Box::new(|| {
//!         text(TextProps {
//!             content: "Hello!".into(),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//!
//! // Hide the box - its children go with it
//! open.set(false);
//! ```

use crate::engine::arrays::core;
use crate::engine::{
    allocate_index, get_current_parent_index, pop_parent_context, push_parent_context,
    release_index,
};
use crate::types::ComponentType;
use super::types::{BoxProps, Cleanup, PropValue};

/// Create a box container component.
///
/// Returns a cleanup function that releases the box and its children.
pub fn box_primitive(props: BoxProps) -> Cleanup {
    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CORE SETUP - Type, parent
    core::set_component_type(index, ComponentType::Box);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }

    // 3. BIND VISIBILITY
    if let Some(visible) = props.visible {
        match visible {
            PropValue::Static(v) => core::set_visible(index, v),
            PropValue::Signal(s) => core::set_visible_signal(index, s),
            PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
        }
    }

    // 4. RENDER CHILDREN
    if let Some(children) = props.children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }

    // 5. RETURN CLEANUP
    Box::new(move || release_index(index))
}
