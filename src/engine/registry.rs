//! Component Registry - who owns which array index.
//!
//! - Allocated indices live in a `ReactiveSet`, so anything iterating them
//!   from an effect re-runs when components come and go
//! - Released indices go to a free pool and are handed out again first
//! - An explicit id makes allocation idempotent: the same id, the same index
//! - A parent stack tells new components where they attach
//! - Destroy hooks let code outlive a render but not its parent

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::ReactiveSet;

use super::arrays;

#[derive(Default)]
struct Bookkeeping {
    ids: HashMap<String, usize>,
    id_of: HashMap<usize, String>,
    free: Vec<usize>,
    next: usize,
    generated: usize,
    parents: Vec<usize>,
    on_destroy: HashMap<usize, Vec<Box<dyn FnOnce()>>>,
}

thread_local! {
    static BOOKKEEPING: RefCell<Bookkeeping> = RefCell::new(Bookkeeping::default());

    static ALLOCATED_INDICES: ReactiveSet<usize> = ReactiveSet::new();
}

fn with_books<R>(f: impl FnOnce(&mut Bookkeeping) -> R) -> R {
    BOOKKEEPING.with(|books| f(&mut books.borrow_mut()))
}

// =============================================================================
// Parent Context
// =============================================================================

/// The parent new components attach to, if any.
pub fn get_current_parent_index() -> Option<usize> {
    with_books(|books| books.parents.last().copied())
}

pub fn push_parent_context(index: usize) {
    with_books(|books| books.parents.push(index));
}

pub fn pop_parent_context() {
    with_books(|books| {
        books.parents.pop();
    });
}

/// Run `f` with `parent` as the current parent, if there is one.
///
/// Deferred renders capture the parent when they are created and restore
/// it here, so what they create later lands in the same place.
pub fn with_parent_context<R>(parent: Option<usize>, f: impl FnOnce() -> R) -> R {
    if let Some(parent) = parent {
        push_parent_context(parent);
    }
    let result = f();
    if parent.is_some() {
        pop_parent_context();
    }
    result
}

// =============================================================================
// Allocation
// =============================================================================

/// Claim an index for a new component.
///
/// Without an `id` a fresh one is generated. An `id` that is already live
/// returns its current index.
pub fn allocate_index(id: Option<&str>) -> usize {
    let (index, fresh) = with_books(|books| {
        let id = match id {
            Some(id) => id.to_string(),
            None => {
                books.generated += 1;
                format!("c{}", books.generated - 1)
            }
        };
        if let Some(&index) = books.ids.get(&id) {
            return (index, false);
        }
        let index = books.free.pop().unwrap_or_else(|| {
            books.next += 1;
            books.next - 1
        });
        books.ids.insert(id.clone(), index);
        books.id_of.insert(index, id);
        (index, true)
    });

    if fresh {
        ALLOCATED_INDICES.with(|set| set.insert(index));
        arrays::ensure_all_capacity(index);
    }
    index
}

/// Release `index` and, first, every component below it.
///
/// Destroy hooks run after the children are gone. Releasing an index that
/// is not allocated does nothing.
pub fn release_index(index: usize) {
    if !with_books(|books| books.id_of.contains_key(&index)) {
        return;
    }

    let children: Vec<usize> = ALLOCATED_INDICES.with(|set| set.iter())
        .into_iter()
        .filter(|&child| arrays::core::peek_parent_index(child) == Some(index))
        .collect();
    for child in children {
        release_index(child);
    }

    let hooks = with_books(|books| books.on_destroy.remove(&index));
    for hook in hooks.into_iter().flatten() {
        hook();
    }

    with_books(|books| {
        if let Some(id) = books.id_of.remove(&index) {
            books.ids.remove(&id);
        }
        books.free.push(index);
    });
    ALLOCATED_INDICES.with(|set| set.remove(&index));
    arrays::clear_all_at_index(index);

    // Nothing left: start numbering from zero again
    if ALLOCATED_INDICES.with(|set| set.is_empty()) {
        arrays::reset_all_arrays();
        with_books(|books| {
            books.free.clear();
            books.next = 0;
        });
    }
}

/// Run `hook` when the component at `index` is released.
pub fn on_destroy(index: usize, hook: impl FnOnce() + 'static) {
    with_books(|books| {
        books
            .on_destroy
            .entry(index)
            .or_default()
            .push(Box::new(hook));
    });
}

// =============================================================================
// Queries
// =============================================================================

/// Allocated indices, ascending (reactive).
pub fn get_allocated_indices() -> Vec<usize> {
    let mut indices = ALLOCATED_INDICES.with(|set| set.iter());
    indices.sort_unstable();
    indices
}

pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.contains(&index))
}

pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.len())
}

/// Forget every component, hook and parent (for tests).
pub fn reset_registry() {
    with_books(|books| *books = Bookkeeping::default());
    ALLOCATED_INDICES.with(|set| set.clear());
    arrays::reset_all_arrays();
}
