//! Snapshot - Plain-text view of the component tree.
//!
//! Walks every visible component from the roots down, in creation order,
//! and emits one line per text component. Each enclosing box indents its
//! descendants by two spaces. Hidden components are skipped together with
//! their whole subtree.
//!
//! ```text
//! Index 0: Text "Title"             -> "Title"
//! Index 1: Box                      -> (no line)
//! Index 2: Text "Body" (parent=1)   -> "  Body"
//! Index 3: Box  (visible=false)     -> (skipped with children)
//! ```

use std::collections::HashMap;

use crate::engine::arrays::{core, text};
use crate::engine::{get_allocated_indices, is_allocated};
use crate::types::ComponentType;

/// Render the whole tree to lines of text.
pub fn snapshot_lines() -> Vec<String> {
    let (roots, child_map) = build_tree();
    let mut lines = Vec::new();
    for root in roots {
        render_component(root, 0, &child_map, &mut lines);
    }
    lines
}

/// Render the subtree rooted at `index` to lines of text.
///
/// Returns nothing when `index` is not allocated or is hidden.
pub fn snapshot_subtree(index: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if is_allocated(index) {
        let (_, child_map) = build_tree();
        render_component(index, 0, &child_map, &mut lines);
    }
    lines
}

/// Render the whole tree as a single newline-joined string.
pub fn render_snapshot() -> String {
    snapshot_lines().join("\n")
}

/// Split allocated indices into roots and a parent → children map.
///
/// A component whose parent is no longer allocated is treated as a root.
fn build_tree() -> (Vec<usize>, HashMap<usize, Vec<usize>>) {
    let mut roots = Vec::new();
    let mut child_map: HashMap<usize, Vec<usize>> = HashMap::new();

    for idx in get_allocated_indices() {
        match core::get_parent_index(idx) {
            Some(parent) if is_allocated(parent) => {
                child_map.entry(parent).or_default().push(idx);
            }
            _ => roots.push(idx),
        }
    }

    (roots, child_map)
}

fn render_component(
    index: usize,
    depth: usize,
    child_map: &HashMap<usize, Vec<usize>>,
    lines: &mut Vec<String>,
) {
    if !core::get_visible(index) {
        return;
    }

    match core::get_component_type(index) {
        ComponentType::Text => {
            lines.push(format!("{}{}", "  ".repeat(depth), text::get_text_content(index)));
        }
        ComponentType::Box => {
            if let Some(children) = child_map.get(&index) {
                for &child in children {
                    render_component(child, depth + 1, child_map, lines);
                }
            }
        }
        ComponentType::None => {}
    }
}
