//! End-to-end behavior of Definer/User pairs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use spark_signals::signal;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, SubscriberExt};
use tracing_subscriber::Layer;

use spark_tui_templates::{
    box_primitive, create_reusable_template, get_allocated_count, render_snapshot,
    reset_registry, template_body, text, AttrValue, BoxProps, Cleanup, Context, DefineProps,
    ScopedSlots, Slots, TemplateScope, TextProps, UseProps, Value,
};

#[derive(Clone, PartialEq, Default, Debug)]
struct Greeting {
    username: String,
}

fn greeting(name: &str) -> Greeting {
    Greeting {
        username: name.to_string(),
    }
}

fn label(content: impl Into<String>) -> Cleanup {
    text(TextProps {
        content: content.into().into(),
        ..Default::default()
    })
}

// =============================================================================
// Warning capture
// =============================================================================

#[derive(Clone, Default)]
struct WarnCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarnCapture {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(visitor.0);
        }
    }
}

/// Run `f` with WARN events captured.
fn with_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let capture = WarnCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.messages())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_define_then_use_renders_with_user_props() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();

    let _definer = define.render(DefineProps {
        children: Some(template_body(|scope: &TemplateScope<Greeting>| {
            label(format!("Hello {}", scope.props.username))
        })),
        ..Default::default()
    });
    assert_eq!(render_snapshot(), "", "the Definer shows nothing");

    let _ada = use_template.render(UseProps {
        props: greeting("Ada").into(),
        ..Default::default()
    });
    let _grace = use_template.render(UseProps {
        props: greeting("Grace").into(),
        ..Default::default()
    });

    assert_eq!(render_snapshot(), "Hello Ada\nHello Grace");
}

#[test]
fn test_missing_template_warns_on_every_render() {
    reset_registry();
    let (_define, use_template) = create_reusable_template::<Greeting>();
    let user = signal(greeting("Ada"));

    let (_cleanup, warnings) = with_warnings(|| {
        let cleanup = use_template.render(UseProps {
            name: Some("missing".to_string()),
            props: user.clone().into(),
            ..Default::default()
        });
        user.set(greeting("Grace"));
        cleanup
    });

    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.contains("\"missing\"")));
    assert_eq!(get_allocated_count(), 0);
}

#[test]
fn test_later_definer_replaces_without_rerender() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();

    let _first = define.render(DefineProps {
        name: Some("card".to_string()),
        children: Some(template_body(|scope: &TemplateScope<Greeting>| {
            label(format!("A {}", scope.props.username))
        })),
        ..Default::default()
    });

    let user = signal(greeting("Ada"));
    let _cleanup = use_template.render(UseProps {
        name: Some("card".to_string()),
        props: user.clone().into(),
        ..Default::default()
    });
    assert_eq!(render_snapshot(), "A Ada");

    let _second = define.render(DefineProps {
        name: Some("card".to_string()),
        children: Some(template_body(|scope: &TemplateScope<Greeting>| {
            label(format!("B {}", scope.props.username))
        })),
        ..Default::default()
    });
    assert_eq!(render_snapshot(), "A Ada", "registry changes do not re-render");

    user.set(greeting("Grace"));
    assert_eq!(render_snapshot(), "B Grace");
}

#[test]
fn test_user_before_definer_recovers_on_next_render() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();
    let user = signal(greeting("Ada"));

    let (_cleanup, warnings) = with_warnings(|| {
        use_template.render(UseProps {
            props: user.clone().into(),
            ..Default::default()
        })
    });
    assert_eq!(warnings.len(), 1);
    assert_eq!(render_snapshot(), "");

    let _definer = define.render(DefineProps {
        children: Some(template_body(|scope: &TemplateScope<Greeting>| {
            label(format!("Hello {}", scope.props.username))
        })),
        ..Default::default()
    });
    assert_eq!(render_snapshot(), "");

    user.set(greeting("Grace"));
    assert_eq!(render_snapshot(), "Hello Grace");
}

#[test]
fn test_listeners_and_attrs_reach_the_body() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();

    let _definer = define.render(DefineProps {
        children: Some(template_body(|scope: &TemplateScope<Greeting>| {
            let title = scope
                .value("title")
                .and_then(Value::as_str)
                .unwrap_or("untitled")
                .to_string();
            scope.emit("customEvent", &[Value::from(scope.props.username.as_str())]);
            label(title)
        })),
        ..Default::default()
    });

    let received = Rc::new(RefCell::new(Vec::new()));
    let received_clone = received.clone();
    let _cleanup = use_template.render(UseProps {
        props: greeting("Ada").into(),
        attrs: vec![
            (
                "onCustomEvent".to_string(),
                AttrValue::handler(move |args: &[Value]| {
                    received_clone.borrow_mut().extend(args.iter().cloned());
                }),
            ),
            ("title".to_string(), "Welcome".into()),
        ],
        ..Default::default()
    });

    assert_eq!(render_snapshot(), "Welcome");
    assert_eq!(*received.borrow(), vec![Value::from("Ada")]);
}

#[test]
fn test_raw_template_sees_slots_and_scoped_slots() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();

    let _definer = define.render(DefineProps {
        name: Some("table".to_string()),
        children: Some(template_body(|_: &TemplateScope<Greeting>| ())),
        slots: ScopedSlots::new().with("row", |scope: &TemplateScope<Greeting>| {
            label(format!("row {}", scope.props.username))
        }),
    });

    // Replace the wrapped body with a render function using the full context
    define.registry().set_template(
        "table",
        Rc::new(|ctx: &Context<Greeting>| -> Option<Cleanup> {
            assert!(ctx.slots.render("footer").is_empty());
            let header = ctx.slots.render("header").into_cleanup();
            let row = ctx.scoped_slots.render("row", &ctx.scope()).into_cleanup();
            Some(Box::new(move || {
                header();
                row();
            }))
        }),
    );

    let _cleanup = use_template.render(UseProps {
        name: Some("table".to_string()),
        props: greeting("Ada").into(),
        slots: Slots::new().with("header", || label("Header")),
        ..Default::default()
    });

    assert_eq!(render_snapshot(), "Header\nrow Ada");
}

#[test]
fn test_user_renders_inside_parent() {
    reset_registry();
    let (define, use_template) = create_reusable_template::<Greeting>();
    let renders = Rc::new(Cell::new(0));

    let renders_clone = renders.clone();
    let _definer = define.render(DefineProps {
        children: Some(template_body(move |scope: &TemplateScope<Greeting>| {
            renders_clone.set(renders_clone.get() + 1);
            label(format!("Hello {}", scope.props.username))
        })),
        ..Default::default()
    });

    let user = signal(greeting("Ada"));
    let user_for_child = user.clone();
    let use_for_child = use_template.clone();
    let user_cleanup: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
    let user_cleanup_for_child = user_cleanup.clone();
    let cleanup = box_primitive(BoxProps {
        children: Some(Box::new(move || {
            let rendered = use_for_child.render(UseProps {
                props: user_for_child.into(),
                ..Default::default()
            });
            *user_cleanup_for_child.borrow_mut() = Some(rendered);
        })),
        ..Default::default()
    });
    assert_eq!(render_snapshot(), "  Hello Ada");

    user.set(greeting("Grace"));
    assert_eq!(renders.get(), 2);
    assert_eq!(render_snapshot(), "  Hello Grace");

    cleanup();
    assert_eq!(get_allocated_count(), 1, "only the Definer placeholder remains");

    // The released indices go to unrelated components
    let _other = label("Other");
    let _other2 = label("Other2");

    user.set(greeting("Linus"));
    assert_eq!(renders.get(), 2, "the User stopped with its parent");
    assert_eq!(render_snapshot(), "Other\nOther2");
    drop(user_cleanup);
}
