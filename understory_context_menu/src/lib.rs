// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_context_menu --heading-base-level=0

//! Understory Context Menu: headless, `no_std` context-menu state.
//!
//! ## Overview
//!
//! This crate owns everything about a context menu except drawing it:
//! which menu is open, where each panel goes, which submenus are open, and
//! how pointer, keyboard, and outside interactions change that.
//! The host toolkit renders [`MenuPanel`]s, reports measurements through
//! [`Measure`], and forwards input to [`ContextMenu`].
//!
//! ## Model
//!
//! - A trigger is a call site that can open a menu. [`ContextMenu::register`]
//!   stores its [`ItemSource`] and [`MenuOptions`] and returns a [`TriggerId`].
//! - Opening a menu creates a root panel anchored at the pointer. Only one
//!   root is open across the whole application.
//! - Each panel shows at most one submenu at a time. The open submenus form a
//!   root→leaf [`OpenChain`](chain::OpenChain); closing a level closes
//!   everything below it.
//! - Panels are placed in two phases with [`understory_placement`]: they
//!   mount at the raw anchor, get measured, then resolve to a clamped
//!   position once before they become visible.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size};
//! use understory_context_menu::{
//!     ContextMenu, LayoutSnapshot, MenuItem, MenuKey, MenuOptions, TriggerEvent,
//! };
//!
//! let mut menu = ContextMenu::new();
//! let trigger = menu
//!     .register(
//!         vec![
//!             MenuItem::action("copy", || {}),
//!             MenuItem::divider(),
//!             MenuItem::submenu("more", vec![MenuItem::action("download", || {})]),
//!         ],
//!         MenuOptions::new(),
//!     )
//!     .unwrap();
//!
//! // A right-click near the right edge of a 1000x800 viewport.
//! assert!(menu.show(trigger, &TriggerEvent::context_menu(Point::new(990.0, 10.0))));
//!
//! // The host renders the pending root panel, measures it, and reports back.
//! let mut layout = LayoutSnapshot::new(Rect::new(0.0, 0.0, 1000.0, 800.0));
//! layout.set_panel_size(0, Size::new(200.0, 300.0));
//! menu.layout(&layout);
//! assert_eq!(menu.panels()[0].origin(), Point::new(795.0, 10.0));
//!
//! // Hovering "more" opens a nested panel at the item's right edge.
//! layout.set_item_bounds(0, 2, Rect::new(795.0, 50.0, 995.0, 80.0));
//! menu.hover_item(0, 2, &layout, Duration::ZERO);
//! assert_eq!(menu.panels().len(), 2);
//! assert_eq!(menu.panels()[1].origin(), Point::new(995.0, 50.0));
//!
//! // Escape closes every panel.
//! assert!(menu.key(MenuKey::Escape, &layout));
//! assert!(!menu.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `kurbo` and `tracing`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`MenuOptions`], [`MenuStyle`], and their parts.
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chain;
pub mod error;
pub mod event;
pub mod item;
pub mod measure;
pub mod menu;
pub mod options;
pub mod panel;
pub mod trigger;

pub use error::OptionsError;
pub use event::{CloseReason, DismissReason, MenuEvent, MenuKey, TriggerEvent, TriggerKind};
pub use item::{ActionItem, ItemSource, MenuItem, SubmenuItem};
pub use measure::{LayoutSnapshot, Measure};
pub use menu::ContextMenu;
pub use options::{DismissTriggers, Dimension, MenuOptions, MenuStyle, StylePart};
pub use panel::MenuPanel;
pub use trigger::TriggerId;
pub use understory_placement::{Anchor, Overflow};
