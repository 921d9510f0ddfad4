//! Pipeline - Turning the component arrays into output.
//!
//! - [`snapshot`] - Plain-text view of the visible component tree

pub mod snapshot;

pub use snapshot::{render_snapshot, snapshot_lines, snapshot_subtree};
