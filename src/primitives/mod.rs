//! Primitives - Component building blocks.
//!
//! This module provides the core UI primitives:
//! - [`box_primitive`] - Container that groups children and can be hidden
//! - [`text`] - Text display with styling
//!
//! # Architecture
//!
//! Components are indices into parallel arrays (ECS pattern). Each component:
//! 1. Allocates an index from the registry
//! 2. Binds props directly to the arrays (preserving reactivity!)
//! 3. Returns a cleanup function
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `visible: Some(false.into())`
//! - Signals: `content: my_signal.into()` (stays connected!)
//! - Getters: `content: PropValue::getter(|| compute())`
//!
//! The key is to pass props directly - don't extract values before binding!

mod types;
mod box_primitive;
mod text;

pub use types::*;
pub use box_primitive::box_primitive;
pub use text::text;
