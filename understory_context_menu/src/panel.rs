// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One mounted menu panel, root or nested.

use alloc::rc::Rc;

use kurbo::{Point, Rect};
use understory_placement::{Anchor, Constraints, Placement};

use crate::item::{MenuItem, position_of_key};
use crate::measure::Measure;
use crate::options::MenuStyle;

/// A mounted panel and everything a renderer needs to draw it.
///
/// Panels are created by [`ContextMenu`](crate::menu::ContextMenu) and read
/// back through [`ContextMenu::panels`](crate::menu::ContextMenu::panels).
/// A panel whose placement is not [resolved](MenuPanel::is_resolved) yet
/// should be mounted invisibly so it can be measured.
#[derive(Clone, Debug)]
pub struct MenuPanel {
    depth: usize,
    items: Rc<[MenuItem]>,
    placement: Placement,
    style: MenuStyle,
    highlighted: Option<usize>,
}

impl MenuPanel {
    pub(crate) fn new(
        depth: usize,
        items: Rc<[MenuItem]>,
        anchor: Anchor,
        style: MenuStyle,
    ) -> Self {
        Self {
            depth,
            items,
            placement: Placement::pending(anchor),
            style,
            highlighted: None,
        }
    }

    /// Depth of this panel; the root panel is `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The anchor the panel was opened at.
    pub fn anchor(&self) -> Anchor {
        self.placement.anchor()
    }

    /// Top-left corner to render at. Before resolution this is the raw anchor.
    pub fn origin(&self) -> Point {
        self.placement.origin()
    }

    /// On-screen bounds, once measured.
    pub fn bounds(&self) -> Option<Rect> {
        self.placement.bounds()
    }

    /// Whether the final position is known and the panel may be shown.
    pub fn is_resolved(&self) -> bool {
        self.placement.is_resolved()
    }

    /// Resolved appearance of this panel.
    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Stacking order of this panel.
    pub fn z_index(&self) -> i32 {
        self.style.z_index
    }

    /// Highlighted item, from hover or keyboard.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Index of the first item carrying `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        position_of_key(&self.items, key)
    }

    /// Whether `point` lies on this panel. Unmeasured panels contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().is_some_and(|b| b.contains(point))
    }

    pub(crate) fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index.filter(|&i| self.items.get(i).is_some_and(MenuItem::is_navigable));
    }

    /// Attach the panel to a new anchor; it must be resolved again.
    pub(crate) fn set_anchor(&mut self, anchor: Anchor) {
        self.placement.re_anchor(anchor);
    }

    pub(crate) fn resolve(&mut self, measure: &impl Measure, constraints: &Constraints) -> Point {
        self.placement.resolve(measure.panel_size(self.depth), constraints)
    }

    /// First navigable item.
    pub(crate) fn first_navigable(&self) -> Option<usize> {
        self.items.iter().position(MenuItem::is_navigable)
    }

    /// Last navigable item.
    pub(crate) fn last_navigable(&self) -> Option<usize> {
        self.items.iter().rposition(MenuItem::is_navigable)
    }

    /// The next navigable item after the highlight, wrapping around.
    ///
    /// With no highlight, `forward` starts at the top and backward at the bottom.
    pub(crate) fn step(&self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let start = match (self.highlighted, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        (0..len)
            .map(|offset| {
                if forward {
                    (start + offset) % len
                } else {
                    (start + len - offset) % len
                }
            })
            .find(|&i| self.items[i].is_navigable())
    }
}
