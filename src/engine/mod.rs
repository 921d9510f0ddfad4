//! Engine - Component registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context
//! - Arrays: Parallel arrays for component state
//!
//! # Architecture
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Box  (parent=None, visible=false)
//! Index 1: Text (parent=None, visible=true, content="Hello Ada")
//! Index 2: Text (parent=1,    visible=true, content="...")
//! ```
//!
//! Templates render into this same structure: a template body creates
//! components under whatever parent is current when the template is used.

mod registry;
pub mod arrays;

pub use registry::*;
