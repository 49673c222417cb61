// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a nested menu entirely from the keyboard.
//!
//! Run:
//! - `cargo run -p understory_demos --example context_menu_keyboard`

use kurbo::{Point, Rect};
use understory_context_menu::{
    ContextMenu, LayoutSnapshot, MenuItem, MenuKey, MenuOptions, TriggerEvent,
};
use understory_demos::{frame, init_logging, print_panels};

fn main() {
    init_logging();

    let mut menu = ContextMenu::new();
    let editor = menu
        .register(
            vec![
                MenuItem::action("undo", || println!("  -> undo")),
                MenuItem::action("redo", || {}).disabled(true),
                MenuItem::divider(),
                MenuItem::submenu(
                    "transform",
                    vec![
                        MenuItem::action("upper_case", || println!("  -> UPPER")),
                        MenuItem::action("lower_case", || println!("  -> lower")),
                    ],
                ),
            ],
            MenuOptions::new(),
        )
        .expect("default options are valid");

    let mut layout = LayoutSnapshot::new(Rect::new(0.0, 0.0, 640.0, 480.0));
    // A menu key press: no pointer, so the host anchors at the caret.
    let ev =
        TriggerEvent::programmatic(Point::ZERO).with_position_override(Point::new(120.0, 460.0));
    menu.show(editor, &ev);
    frame(&mut menu, &mut layout);

    let keys = [
        MenuKey::ArrowDown,
        MenuKey::ArrowDown,
        MenuKey::ArrowDown,
        MenuKey::ArrowRight,
        MenuKey::ArrowDown,
    ];
    for key in keys {
        let handled = menu.key(key, &layout);
        frame(&mut menu, &mut layout);
        println!("== {key:?} (handled: {handled}) ==");
        print_panels(&menu);
    }

    // Back out of the submenu, go back in, and pick the first entry.
    menu.key(MenuKey::ArrowLeft, &layout);
    menu.key(MenuKey::Enter, &layout);
    menu.key(MenuKey::Enter, &layout);
    assert!(!menu.is_open());

    for ev in menu.take_events() {
        println!("  {ev:?}");
    }
}
