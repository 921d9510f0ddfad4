//! Primitive types - Props, cleanup, and rendered nodes.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::fmt;
use std::rc::Rc;

use spark_signals::Signal;

use crate::types::Attr;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Nodes - Ordered render output
// =============================================================================

/// An ordered sequence of rendered nodes.
///
/// Every node is the [`Cleanup`] of a component that has already been
/// created under the current parent. Render functions return anything that
/// converts into `Nodes`: a single `Cleanup`, a `Vec<Cleanup>`, an
/// `Option<Cleanup>`, or `()` for nothing.
#[derive(Default)]
pub struct Nodes(Vec<Cleanup>);

impl Nodes {
    /// An empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a node.
    pub fn push(&mut self, node: Cleanup) {
        self.0.push(node);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the first node.
    ///
    /// Every other node is released immediately, so exactly one component
    /// subtree (or none) survives.
    pub fn into_first(self) -> Option<Cleanup> {
        let mut nodes = self.0.into_iter();
        let first = nodes.next();
        for rest in nodes {
            rest();
        }
        first
    }

    /// Merge all nodes into one cleanup that releases them in order.
    pub fn into_cleanup(self) -> Cleanup {
        let nodes = self.0;
        Box::new(move || {
            for node in nodes {
                node();
            }
        })
    }
}

impl fmt::Debug for Nodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nodes").field(&self.0.len()).finish()
    }
}

impl From<Cleanup> for Nodes {
    fn from(node: Cleanup) -> Self {
        Self(vec![node])
    }
}

impl From<Vec<Cleanup>> for Nodes {
    fn from(nodes: Vec<Cleanup>) -> Self {
        Self(nodes)
    }
}

impl From<Option<Cleanup>> for Nodes {
    fn from(node: Option<Cleanup>) -> Self {
        Self(node.into_iter().collect())
    }
}

impl From<()> for Nodes {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety.
/// When binding to arrays, the reactive connection is preserved.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    ///
    /// Reading a `Signal` or a signal-backed `Getter` inside an effect
    /// subscribes that effect.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Wrap a getter closure.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Box Props
// =============================================================================

/// Properties for the Box component.
///
/// Box is the fundamental container. It groups children and can be hidden.
///
/// # Example
///
/// ```ignore
/// use spark_tui_templates::primitives::{box_primitive, BoxProps};
///
/// let cleanup = box_primitive(BoxProps {
///     id: Some("panel".to_string()),
///     children: Some(Box::new(|| {
///         // Child components here
///     })),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct BoxProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Child render function.
    pub children: Option<Box<dyn FnOnce()>>,
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the Text component.
///
/// Text is a pure display component for text content. Cannot have children.
///
/// # Example
///
/// ```ignore
/// use spark_tui_templates::primitives::{text, TextProps};
/// use spark_signals::signal;
///
/// let message = signal("Hello!".to_string());
///
/// let cleanup = text(TextProps {
///     content: message.clone().into(),
///     attrs: Some(Attr::BOLD.into()),
///     ..Default::default()
/// });
///
/// // Later: update text reactively
/// message.set("Updated!".to_string());
/// ```
#[derive(Default)]
pub struct TextProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// The text content to display.
    pub content: PropValue<String>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Text attributes (bold, italic, etc.).
    pub attrs: Option<PropValue<Attr>>,
}
