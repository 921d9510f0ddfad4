//! Reuse Template Demo
//!
//! Defines a greeting card once and renders it for several users, then
//! updates one user's props and prints the tree again.
//!
//! Run with: `RUST_LOG=debug cargo run --example reuse_template`

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::signal;
use tracing_subscriber::EnvFilter;

use spark_tui_templates::{
    box_primitive, create_reusable_template, render_snapshot, template_body, text, AttrValue,
    BoxProps, Cleanup, DefineProps, ScopedSlots, TemplateScope, TextProps, UseProps, Value,
};

#[derive(Clone, PartialEq, Default, Debug)]
struct Card {
    username: String,
    role: String,
}

fn card(username: &str, role: &str) -> Card {
    Card {
        username: username.to_string(),
        role: role.to_string(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (define, use_template) = create_reusable_template::<Card>();

    // Definer first: registers the body and renders nothing visible
    let _definer = define.render(DefineProps {
        name: Some("card".to_string()),
        children: Some(template_body(|scope: &TemplateScope<Card>| {
            let greeting = scope
                .value("greeting")
                .and_then(Value::as_str)
                .unwrap_or("Hello")
                .to_string();
            scope.emit("rendered", &[Value::from(scope.props.username.as_str())]);
            text(TextProps {
                content: format!("{greeting} {} ({})", scope.props.username, scope.props.role)
                    .into(),
                ..Default::default()
            })
        })),
        slots: ScopedSlots::new(),
    });

    let ada = signal(card("Ada", "admin"));
    let ada_for_list = ada.clone();
    let use_for_list = use_template.clone();
    let users: Rc<RefCell<Vec<Cleanup>>> = Rc::new(RefCell::new(Vec::new()));
    let users_for_list = users.clone();

    let _app = box_primitive(BoxProps {
        children: Some(Box::new(move || {
            let ada = use_for_list.render(UseProps {
                name: Some("card".to_string()),
                props: ada_for_list.into(),
                attrs: vec![(
                    "onRendered".to_string(),
                    AttrValue::handler(|args: &[Value]| {
                        if let Some(name) = args.first() {
                            println!("rendered card for {name}");
                        }
                    }),
                )],
                ..Default::default()
            });
            let grace = use_for_list.render(UseProps {
                name: Some("card".to_string()),
                props: card("Grace", "editor").into(),
                attrs: vec![("greeting".to_string(), "Welcome".into())],
                ..Default::default()
            });
            users_for_list.borrow_mut().extend([ada, grace]);
        })),
        ..Default::default()
    });

    // A name nobody defined: logs a warning, renders nothing
    let _missing = use_template.render(UseProps {
        name: Some("profile".to_string()),
        ..Default::default()
    });

    println!("{}", render_snapshot());
    println!("---");

    ada.set(card("Ada", "owner"));
    println!("{}", render_snapshot());
}
