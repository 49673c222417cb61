// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open a context menu near the viewport edge, walk into a submenu, and run an action.
//!
//! Run:
//! - `cargo run -p understory_demos --example context_menu_basics`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Rect};
use understory_context_menu::{
    ContextMenu, LayoutSnapshot, MenuEvent, MenuItem, MenuOptions, TriggerEvent,
};
use understory_demos::{frame, init_logging, print_panels};

fn main() {
    init_logging();

    let downloads = Rc::new(Cell::new(0));
    let counter = downloads.clone();

    let mut menu = ContextMenu::new();
    let image = menu
        .register(
            vec![
                MenuItem::action("copy", || println!("  -> copy")),
                MenuItem::action("copyImage", || println!("  -> copy image")).icon("image"),
                MenuItem::divider(),
                MenuItem::submenu(
                    "more",
                    vec![
                        MenuItem::action("download", move || counter.set(counter.get() + 1)),
                        MenuItem::action("share", || {}).disabled(true),
                    ],
                ),
            ],
            MenuOptions::new(),
        )
        .expect("default options are valid");

    let mut layout = LayoutSnapshot::new(Rect::new(0.0, 0.0, 1000.0, 800.0));

    // Right-click 10px from the right edge.
    menu.show(image, &TriggerEvent::context_menu(Point::new(990.0, 10.0)));
    println!("== Pending (mounted invisibly at the raw anchor) ==");
    print_panels(&menu);

    frame(&mut menu, &mut layout);
    println!("== Resolved ==");
    print_panels(&menu);
    assert_eq!(menu.panels()[0].origin(), Point::new(795.0, 10.0));

    // The pointer travels down the root panel and onto "more".
    let mut now = Duration::ZERO;
    for y in [20.0, 50.0, 80.0, 100.0] {
        now += Duration::from_millis(16);
        menu.pointer_move(Point::new(850.0, y), &layout, now);
    }
    frame(&mut menu, &mut layout);
    println!("== Submenu open ==");
    print_panels(&menu);
    assert_eq!(menu.open_path(), &[3]);

    // Click "download" in the submenu.
    let download = menu.panels()[1].index_of("download").expect("item exists");
    menu.click_item(1, download, &layout);
    assert_eq!(downloads.get(), 1);
    assert!(!menu.is_open());

    println!("== Events ==");
    for ev in menu.take_events() {
        match ev {
            MenuEvent::Activated { key, path, .. } => println!("  activated {key} at {path:?}"),
            other => println!("  {other:?}"),
        }
    }
}
