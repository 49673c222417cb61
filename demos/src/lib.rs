// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the demos.

use tracing_subscriber::EnvFilter;
use understory_context_menu::{ContextMenu, LayoutSnapshot, MenuItem};

/// Width of every demo panel.
pub const PANEL_WIDTH: f64 = 200.0;
/// Height of an item row.
pub const ROW_HEIGHT: f64 = 28.0;
/// Height of a divider row.
pub const DIVIDER_HEIGHT: f64 = 9.0;

/// Install a stdout subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to debug output for the menu crate.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_context_menu=debug,understory_demos=info"));
    // Keep any subscriber that is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Stand-in for a renderer: lay every open panel out as a column of rows,
/// record the measurements, and resolve pending placements.
pub fn frame(menu: &mut ContextMenu, layout: &mut LayoutSnapshot) {
    draw(menu, layout);
    if menu.layout(&*layout) {
        tracing::info!(panels = menu.panels().len(), "placed pending panels");
    }
    draw(menu, layout);
}

/// Measure every open panel at the position it is drawn at.
fn draw(menu: &ContextMenu, layout: &mut LayoutSnapshot) {
    layout.truncate(menu.panels().len());
    for panel in menu.panels() {
        let rows: Vec<f64> = panel.items().iter().map(row_height).collect();
        layout.set_rows(panel.depth(), panel.origin(), PANEL_WIDTH, &rows);
    }
}

/// Print the open panels the way a renderer would see them.
pub fn print_panels(menu: &ContextMenu) {
    for panel in menu.panels() {
        let indent = "  ".repeat(panel.depth());
        println!(
            "{indent}panel {} at ({:.0}, {:.0}) z={}",
            panel.depth(),
            panel.origin().x,
            panel.origin().y,
            panel.z_index()
        );
        for (index, item) in panel.items().iter().enumerate() {
            let mark = if panel.highlighted() == Some(index) {
                '>'
            } else {
                ' '
            };
            match item {
                MenuItem::Divider => println!("{indent} {mark} ────"),
                _ => {
                    let label = item.display_label().unwrap_or_default();
                    let suffix = match item {
                        MenuItem::Submenu(_) => " ▸",
                        _ if item.is_disabled() => " (disabled)",
                        _ => "",
                    };
                    println!("{indent} {mark} {label}{suffix}");
                }
            }
        }
    }
}

fn row_height(item: &MenuItem) -> f64 {
    if item.is_divider() {
        DIVIDER_HEIGHT
    } else {
        ROW_HEIGHT
    }
}
