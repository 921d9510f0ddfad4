//! Core Arrays
//!
//! The columns every component has:
//! - componentType: Box or Text
//! - parentIndex: Parent in hierarchy (None for a root)
//! - visible: Whether the component and its subtree show up
//!
//! Uses `TrackedSlotArray`, so a visibility bound to a signal or getter is
//! read on access and reading from an effect tracks that one cell.

use spark_signals::{Signal, TrackedSlotArray};

use crate::types::ComponentType;

thread_local! {
    static COMPONENT_TYPE: TrackedSlotArray<ComponentType> =
        TrackedSlotArray::new(Some(ComponentType::None));

    static PARENT_INDEX: TrackedSlotArray<Option<usize>> = TrackedSlotArray::new(Some(None));

    static VISIBLE: TrackedSlotArray<bool> = TrackedSlotArray::new(Some(true));
}

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| { let _ = arr.peek(index); });
    PARENT_INDEX.with(|arr| { let _ = arr.peek(index); });
    VISIBLE.with(|arr| { let _ = arr.peek(index); });
}

/// Reset the cells at `index` to their defaults.
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    VISIBLE.with(|arr| arr.clear(index));
}

pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    VISIBLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Component Type
// =============================================================================

pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index))
}

pub fn set_component_type(index: usize, value: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, value));
}

// =============================================================================
// Parent Index
// =============================================================================

/// Parent of `index` (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index))
}

/// Parent of `index`, without tracking.
///
/// Used while releasing, which can happen inside an effect that must not
/// subscribe to the cells it is about to clear.
pub fn peek_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.peek(index))
}

pub fn set_parent_index(index: usize, parent: Option<usize>) {
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
}

// =============================================================================
// Visibility
// =============================================================================

/// Visibility at `index` (reactive). Unset cells are visible.
pub fn get_visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index))
}

pub fn set_visible(index: usize, visible: bool) {
    VISIBLE.with(|arr| arr.set_value(index, visible));
}

pub fn set_visible_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    VISIBLE.with(|arr| arr.set_getter(index, getter));
}

pub fn set_visible_signal(index: usize, sig: Signal<bool>) {
    VISIBLE.with(|arr| arr.set_signal(index, &sig));
}
