// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load trigger options from JSON and compare overflow policies.
//!
//! Run:
//! - `cargo run -p understory_demos --example context_menu_options_json`

use kurbo::{Point, Rect};
use understory_context_menu::{
    ContextMenu, DismissReason, LayoutSnapshot, MenuItem, MenuOptions, Overflow, TriggerEvent,
};
use understory_demos::{frame, init_logging, print_panels};

const CONFIG: &str = r#"{
    "style": { "z_index": 500, "border_radius": "md", "class_name": "file-menu" },
    "submenu_style": { "z_index": 600, "shadow": { "px": 12.0 } },
    "close_on_item_click": false,
    "dismiss_on": "OUTSIDE_POINTER | ESCAPE",
    "margin": 8.0,
    "overflow": "Flip",
    "submenu_close_delay": { "secs": 0, "nanos": 250000000 }
}"#;

fn items() -> Vec<MenuItem> {
    vec![
        MenuItem::action("open", || {}),
        MenuItem::action("rename", || {}),
        MenuItem::submenu(
            "sendTo",
            vec![MenuItem::action("desktop", || {}), MenuItem::action("mail", || {})],
        ),
    ]
}

fn main() {
    init_logging();

    let options: MenuOptions = match serde_json::from_str(CONFIG) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(%err, "invalid menu config");
            return;
        }
    };
    println!("{options:#?}");
    println!("{}", serde_json::to_string_pretty(&options).unwrap_or_default());

    let mut menu = ContextMenu::new();
    let flip = menu.register(items(), options.clone()).expect("config is valid");
    let shift = menu
        .register(items(), options.overflow(Overflow::Shift))
        .expect("config is valid");

    for (name, id) in [("flip", flip), ("shift", shift)] {
        let mut layout = LayoutSnapshot::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        menu.show(id, &TriggerEvent::context_menu(Point::new(780.0, 590.0)));
        frame(&mut menu, &mut layout);
        let sub = menu.panels()[0].index_of("sendTo").expect("item exists");
        menu.click_item(0, sub, &layout);
        frame(&mut menu, &mut layout);
        println!("== {name} ==");
        print_panels(&menu);
    }

    // Blur is not in the configured dismiss set; Escape is.
    assert!(!menu.dismiss(DismissReason::Blur));
    assert!(menu.dismiss(DismissReason::Escape));
}
