//! Text Arrays
//!
//! - textContent: The string a text component shows
//! - textAttrs: Bold, italic and friends
//!
//! Uses `TrackedSlotArray`: content bound to a signal stays connected.

use spark_signals::{Signal, TrackedSlotArray};

use crate::types::Attr;

thread_local! {
    static TEXT_CONTENT: TrackedSlotArray<String> = TrackedSlotArray::new(Some(String::new()));

    static TEXT_ATTRS: TrackedSlotArray<Attr> = TrackedSlotArray::new(Some(Attr::NONE));
}

pub fn ensure_capacity(index: usize) {
    TEXT_CONTENT.with(|arr| { let _ = arr.peek(index); });
    TEXT_ATTRS.with(|arr| { let _ = arr.peek(index); });
}

pub fn clear_at_index(index: usize) {
    TEXT_CONTENT.with(|arr| arr.clear(index));
    TEXT_ATTRS.with(|arr| arr.clear(index));
}

pub fn reset() {
    TEXT_CONTENT.with(|arr| arr.clear_all());
    TEXT_ATTRS.with(|arr| arr.clear_all());
}

// =============================================================================
// Text Content
// =============================================================================

/// Text content at `index` (reactive).
pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| arr.get(index))
}

pub fn set_text_content(index: usize, content: String) {
    TEXT_CONTENT.with(|arr| arr.set_value(index, content));
}

pub fn set_text_content_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    TEXT_CONTENT.with(|arr| arr.set_getter(index, getter));
}

pub fn set_text_content_signal(index: usize, sig: Signal<String>) {
    TEXT_CONTENT.with(|arr| arr.set_signal(index, &sig));
}

// =============================================================================
// Text Attributes
// =============================================================================

pub fn get_text_attrs(index: usize) -> Attr {
    TEXT_ATTRS.with(|arr| arr.get(index))
}

pub fn set_text_attrs(index: usize, attrs: Attr) {
    TEXT_ATTRS.with(|arr| arr.set_value(index, attrs));
}

pub fn set_text_attrs_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Attr + 'static,
{
    TEXT_ATTRS.with(|arr| arr.set_getter(index, getter));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    fn setup() {
        reset();
    }

    #[test]
    fn test_text_content() {
        setup();

        assert_eq!(get_text_content(0), "");
        set_text_content(0, "Hello Ada".to_string());
        assert_eq!(get_text_content(0), "Hello Ada");

        clear_at_index(0);
        assert_eq!(get_text_content(0), "");
    }

    #[test]
    fn test_text_content_signal() {
        setup();

        let name = signal("Ada".to_string());
        set_text_content_signal(1, name.clone());
        assert_eq!(get_text_content(1), "Ada");

        name.set("Grace".to_string());
        assert_eq!(get_text_content(1), "Grace");
    }

    #[test]
    fn test_text_attrs() {
        setup();

        assert_eq!(get_text_attrs(0), Attr::NONE);
        set_text_attrs(0, Attr::BOLD | Attr::ITALIC);
        assert_eq!(get_text_attrs(0), Attr::BOLD | Attr::ITALIC);

        set_text_attrs_getter(1, || Attr::DIM);
        assert_eq!(get_text_attrs(1), Attr::DIM);
    }
}
