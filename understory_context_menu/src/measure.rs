// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement capability supplied by the host's layout layer.
//!
//! The menu never lays anything out itself. After the host renders the open
//! panels it answers three questions through [`Measure`]: how big is the
//! viewport, how big is each panel, and where is each item on screen.
//!
//! [`LayoutSnapshot`] is a ready-made implementation for hosts that collect
//! their measurements into a table once per frame.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

/// Layout queries answered by the host.
///
/// Panels are addressed by depth (the root panel is depth `0`), items by
/// their index within the panel. Returning `None` means the element is not
/// mounted or could not be measured; callers fall back to raw anchors.
pub trait Measure {
    /// The visible area, in the same coordinate space as pointer events.
    fn viewport(&self) -> Rect;

    /// Rendered size of the panel at `depth`.
    fn panel_size(&self, depth: usize) -> Option<Size>;

    /// On-screen bounding box of item `index` in the panel at `depth`.
    fn item_bounds(&self, depth: usize, index: usize) -> Option<Rect>;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn viewport(&self) -> Rect {
        (**self).viewport()
    }

    fn panel_size(&self, depth: usize) -> Option<Size> {
        (**self).panel_size(depth)
    }

    fn item_bounds(&self, depth: usize, index: usize) -> Option<Rect> {
        (**self).item_bounds(depth, index)
    }
}

#[derive(Clone, Debug, Default)]
struct PanelLayout {
    size: Option<Size>,
    items: Vec<Option<Rect>>,
}

/// A table of measurements collected by the host.
#[derive(Clone, Debug, Default)]
pub struct LayoutSnapshot {
    viewport: Rect,
    panels: Vec<PanelLayout>,
}

impl LayoutSnapshot {
    /// An empty snapshot for `viewport`.
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            panels: Vec::new(),
        }
    }

    /// Replace the viewport.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Record the rendered size of the panel at `depth`.
    pub fn set_panel_size(&mut self, depth: usize, size: Size) {
        self.panel_mut(depth).size = Some(size);
    }

    /// Record the bounds of item `index` in the panel at `depth`.
    pub fn set_item_bounds(&mut self, depth: usize, index: usize, bounds: Rect) {
        let panel = self.panel_mut(depth);
        if panel.items.len() <= index {
            panel.items.resize(index + 1, None);
        }
        panel.items[index] = Some(bounds);
    }

    /// Record a panel of stacked rows at `origin`.
    ///
    /// Each entry of `row_heights` is one item; rows span the full `width`.
    /// The panel size is the width by the sum of the heights.
    pub fn set_rows(
        &mut self,
        depth: usize,
        origin: kurbo::Point,
        width: f64,
        row_heights: &[f64],
    ) {
        let mut y = origin.y;
        for (index, h) in row_heights.iter().enumerate() {
            self.set_item_bounds(depth, index, Rect::new(origin.x, y, origin.x + width, y + h));
            y += h;
        }
        self.set_panel_size(depth, Size::new(width, y - origin.y));
    }

    /// Forget the panel at `depth` and everything deeper.
    pub fn truncate(&mut self, depth: usize) {
        self.panels.truncate(depth);
    }

    fn panel_mut(&mut self, depth: usize) -> &mut PanelLayout {
        if self.panels.len() <= depth {
            self.panels.resize_with(depth + 1, PanelLayout::default);
        }
        &mut self.panels[depth]
    }
}

impl Measure for LayoutSnapshot {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn panel_size(&self, depth: usize) -> Option<Size> {
        self.panels.get(depth).and_then(|p| p.size)
    }

    fn item_bounds(&self, depth: usize, index: usize) -> Option<Rect> {
        self.panels
            .get(depth)
            .and_then(|p| p.items.get(index).copied().flatten())
    }
}
