//! Render context handed to templates.
//!
//! A [`Context`] is assembled by the User on every render and never reused.
//! The Definer's wrapper narrows it to a [`TemplateScope`] before calling
//! the template body, dropping the framework fields (`emit`, `slots`,
//! `scoped_slots`).

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::attrs::{event_key, AttrValue, Attrs, Handler, Listeners, Value};
use super::slots::{ScopedSlots, SlotAccessors};

// =============================================================================
// Emitter
// =============================================================================

/// Event emission bound to one User instance.
///
/// Emitting `event` calls the handler the User received for it (forwarded
/// as `on<Event>`).
#[derive(Clone, Default)]
pub struct Emitter {
    listeners: Rc<Listeners>,
}

impl Emitter {
    pub(crate) fn new(listeners: Rc<Listeners>) -> Self {
        Self { listeners }
    }

    /// Emit `event` with `args`. Returns whether a handler ran.
    ///
    /// Names are compared after [`event_key`]: case is ignored and hyphens
    /// are dropped, so `emit("custom-event", ..)` and
    /// `emit("customEvent", ..)` both reach `onCustomEvent`. Names that
    /// differ in anything else (`custom_event`) do not match.
    pub fn emit(&self, event: &str, args: &[Value]) -> bool {
        dispatch(&self.listeners, event, args)
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &sorted_keys(&self.listeners))
            .finish()
    }
}

fn dispatch(listeners: &Listeners, event: &str, args: &[Value]) -> bool {
    match listeners.get(&event_key(event)) {
        Some(handler) => {
            handler(args);
            true
        }
        None => {
            trace!(event, "no listener for emitted event");
            false
        }
    }
}

fn sorted_keys<V>(map: &std::collections::HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

// =============================================================================
// Context
// =============================================================================

/// Everything a render function sees for one render of a User.
pub struct Context<P> {
    /// The User's declared props.
    pub props: P,
    /// Emits events to the User's listeners.
    pub emit: Emitter,
    /// Accessors over the User's own child content.
    pub slots: SlotAccessors,
    /// Auxiliary blocks registered next to the template.
    pub scoped_slots: ScopedSlots<P>,
    /// Event handlers forwarded to the User, keyed by lower-cased event name.
    pub listeners: Listeners,
    /// Every other forwarded attribute.
    pub attrs: Attrs,
}

impl<P> Context<P> {
    /// A forwarded plain attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Drop the framework fields, keeping props, listeners and attributes.
    pub fn into_scope(self) -> TemplateScope<P> {
        TemplateScope {
            props: self.props,
            listeners: self.listeners,
            attrs: self.attrs,
        }
    }
}

impl<P: Clone> Context<P> {
    /// Like [`Context::into_scope`], without consuming the context.
    pub fn scope(&self) -> TemplateScope<P> {
        TemplateScope {
            props: self.props.clone(),
            listeners: self.listeners.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Context<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("props", &self.props)
            .field("emit", &self.emit)
            .field("slots", &self.slots)
            .field("scoped_slots", &self.scoped_slots)
            .field("listeners", &sorted_keys(&self.listeners))
            .field("attrs", &self.attrs)
            .finish()
    }
}

// =============================================================================
// Template Scope
// =============================================================================

/// The data a template body renders with.
pub struct TemplateScope<P> {
    pub props: P,
    pub listeners: Listeners,
    pub attrs: Attrs,
}

impl<P> TemplateScope<P> {
    /// The handler for `event`, if the User received one.
    pub fn listener(&self, event: &str) -> Option<&Handler> {
        self.listeners.get(&event_key(event))
    }

    /// Call the handler for `event`. Returns whether a handler ran.
    ///
    /// Matches names like [`Emitter::emit`].
    pub fn emit(&self, event: &str, args: &[Value]) -> bool {
        dispatch(&self.listeners, event, args)
    }

    /// A forwarded plain attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// A forwarded plain attribute's value, skipping handlers.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key).and_then(AttrValue::as_value)
    }
}

impl<P: fmt::Debug> fmt::Debug for TemplateScope<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateScope")
            .field("props", &self.props)
            .field("listeners", &sorted_keys(&self.listeners))
            .field("attrs", &self.attrs)
            .finish()
    }
}
