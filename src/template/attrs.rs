//! Forwarded attributes and the listener partition.
//!
//! A User accepts arbitrary attributes besides its declared props. Each
//! attribute is either a callable [`Handler`] or a plain [`Value`]. Before
//! rendering, the attributes are split in two by a structural rule:
//!
//! - key starts with `on` **and** value is a handler: an event listener,
//!   re-keyed by the normalized event name (`onCustomEvent` → `customevent`)
//! - anything else: a plain attribute, kept under its original key
//!
//! Later entries win over earlier ones with the same key.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Prefix that marks an attribute key as an event binding.
pub const EVENT_PREFIX: &str = "on";

/// Event handler callback (Rc for shared ownership in closures).
pub type Handler = Rc<dyn Fn(&[Value])>;

/// Listeners keyed by normalized event name (see [`event_key`]).
pub type Listeners = HashMap<String, Handler>;

/// Plain forwarded attributes keyed by their original name.
pub type Attrs = HashMap<String, AttrValue>;

// =============================================================================
// Value
// =============================================================================

/// A plain attribute value or event argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// The text payload, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

// =============================================================================
// AttrValue
// =============================================================================

/// A forwarded attribute: either callable or plain data.
#[derive(Clone)]
pub enum AttrValue {
    Handler(Handler),
    Value(Value),
}

impl AttrValue {
    /// Wrap a closure as a handler attribute.
    pub fn handler(f: impl Fn(&[Value]) + 'static) -> Self {
        AttrValue::Handler(Rc::new(f))
    }

    pub fn is_handler(&self) -> bool {
        matches!(self, AttrValue::Handler(_))
    }

    /// The plain value, if this attribute is not a handler.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            AttrValue::Value(v) => Some(v),
            AttrValue::Handler(_) => None,
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Handler(_) => f.write_str("Handler(..)"),
            AttrValue::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        AttrValue::Value(value)
    }
}

macro_rules! attr_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Value(value.into())
                }
            }
        )*
    };
}

attr_from_value!(bool, i64, i32, f64, &str, String);

// =============================================================================
// Partition
// =============================================================================

/// Normalize an event name for listener lookup.
///
/// Lower-cases and drops hyphens, so `custom-event`, `customEvent` and
/// `CustomEvent` all name the same event.
pub fn event_key(event: &str) -> String {
    event
        .chars()
        .filter(|&c| c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// If `key`/`value` form an event binding, the event name it binds.
///
/// The name is the key with the `on` prefix removed, normalized by
/// [`event_key`].
pub fn event_name(key: &str, value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Handler(_) => key.strip_prefix(EVENT_PREFIX).map(event_key),
        AttrValue::Value(_) => None,
    }
}

/// Split forwarded attributes into event listeners and plain attributes.
///
/// The two results are disjoint: every input entry lands in exactly one.
pub fn partition_attrs<I>(attrs: I) -> (Listeners, Attrs)
where
    I: IntoIterator<Item = (String, AttrValue)>,
{
    let mut listeners = Listeners::new();
    let mut plain = Attrs::new();

    for (key, value) in attrs {
        match (event_name(&key, &value), value) {
            (Some(event), AttrValue::Handler(handler)) => {
                listeners.insert(event, handler);
            }
            (_, value) => {
                plain.insert(key, value);
            }
        }
    }

    (listeners, plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn noop() -> AttrValue {
        AttrValue::handler(|_| {})
    }

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("onCustomEvent", &noop()), Some("customevent".to_string()));
        assert_eq!(event_name("onClick", &"x".into()), None);
        assert_eq!(event_name("label", &noop()), None);
        assert_eq!(event_name("on", &noop()), Some(String::new()));
        assert_eq!(event_name("onCustom-Event", &noop()), Some("customevent".to_string()));
    }

    #[test]
    fn test_event_key() {
        assert_eq!(event_key("custom-event"), "customevent");
        assert_eq!(event_key("customEvent"), "customevent");
        assert_eq!(event_key("CUSTOM-EVENT"), "customevent");
    }

    #[test]
    fn test_partition_handlers_and_plain() {
        let (listeners, plain) = partition_attrs(vec![
            ("onCustomEvent".to_string(), noop()),
            ("title".to_string(), "Greeting".into()),
            ("online".to_string(), true.into()),
            ("callback".to_string(), noop()),
        ]);

        assert_eq!(listeners.len(), 1);
        assert!(listeners.contains_key("customevent"));

        assert_eq!(plain.len(), 3);
        assert_eq!(plain["title"].as_value(), Some(&Value::from("Greeting")));
        // `on` prefix with a plain value stays an attribute
        assert_eq!(plain["online"].as_value(), Some(&Value::Bool(true)));
        // callable without the prefix stays an attribute
        assert!(plain["callback"].is_handler());
    }

    #[test]
    fn test_partition_later_wins() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = seen.clone();
        let second = seen.clone();

        let (listeners, plain) = partition_attrs(vec![
            ("onSave".to_string(), AttrValue::handler(move |_| first.borrow_mut().push("first"))),
            ("onsave".to_string(), AttrValue::handler(move |_| second.borrow_mut().push("second"))),
            ("size".to_string(), 1.into()),
            ("size".to_string(), 2.into()),
        ]);

        listeners["save"](&[]);
        assert_eq!(*seen.borrow(), vec!["second"]);
        assert_eq!(plain["size"].as_value(), Some(&Value::Int(2)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("Ada").to_string(), "Ada");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::Null.to_string(), "");
    }
}
