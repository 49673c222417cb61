// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: anchors, constraints, overflow policy, and the
//! two-phase [`Placement`] lifecycle.

use kurbo::{Point, Rect, Size};

use crate::place::place;

/// Where a panel asks to be placed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// A single point, typically the pointer position of a context-menu event.
    ///
    /// The panel's preferred top-left corner is the point itself.
    Point(Point),
    /// The bounding box of a trigger element, typically a submenu item.
    ///
    /// The panel's preferred top-left corner is the box's top-right corner,
    /// so the panel opens to the right of the trigger, aligned to its top.
    Beside(Rect),
}

impl Anchor {
    /// The preferred top-left corner before any clamping.
    pub fn origin(&self) -> Point {
        match *self {
            Self::Point(p) => p,
            Self::Beside(r) => Point::new(r.x1, r.y0),
        }
    }
}

/// How a panel that would overflow the viewport is repositioned.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Slide the panel back inside the viewport on each overflowing axis.
    #[default]
    Shift,
    /// Move the panel to the opposite side of the anchor on each overflowing
    /// axis, then shift whatever still overflows.
    Flip,
    /// Leave the panel at its preferred position.
    None,
}

/// Placement constraints: the visible area and how to honor it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraints {
    /// Visible area in the same coordinate space as anchors.
    pub viewport: Rect,
    /// Minimum gap kept between the panel and the viewport edges.
    pub margin: f64,
    /// Overflow policy.
    pub overflow: Overflow,
}

impl Constraints {
    /// Constraints for `viewport` with no margin and [`Overflow::Shift`].
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            margin: 0.0,
            overflow: Overflow::Shift,
        }
    }

    /// Builder: set the edge margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Builder: set the overflow policy.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Two-phase placement state for one panel.
///
/// A panel starts [pending](Placement::pending) at its raw anchor. Hosts
/// should mount it invisibly, measure it, and call [`Placement::resolve`]
/// before the next paint. Resolving again (e.g. after a viewport resize) is
/// allowed and recomputes from the original anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    anchor: Anchor,
    origin: Point,
    size: Option<Size>,
    resolved: bool,
}

impl Placement {
    /// A placement that has not been measured yet.
    pub fn pending(anchor: Anchor) -> Self {
        Self {
            anchor,
            origin: anchor.origin(),
            size: None,
            resolved: false,
        }
    }

    /// The anchor this placement was created for.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Current top-left corner. Before resolution this is the raw anchor.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Measured size, if the last measurement was usable.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Whether the panel has been measured and may be shown.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Move the anchor and return to the pending phase.
    ///
    /// Used when the thing the panel is attached to moved, e.g. a submenu
    /// whose parent item was re-measured.
    pub fn re_anchor(&mut self, anchor: Anchor) {
        *self = Self::pending(anchor);
    }

    /// On-screen bounds, once a usable size is known.
    pub fn bounds(&self) -> Option<Rect> {
        self.size.map(|s| Rect::from_origin_size(self.origin, s))
    }

    /// Resolve the final position from a measurement.
    ///
    /// `measured` is `None` when the host could not measure the panel; the
    /// raw anchor is kept in that case. Returns the resolved origin.
    pub fn resolve(&mut self, measured: Option<Size>, constraints: &Constraints) -> Point {
        let size = measured.filter(|s| is_usable(*s));
        self.origin = match size {
            Some(s) => place(self.anchor, s, constraints),
            None => self.anchor.origin(),
        };
        self.size = size;
        self.resolved = true;
        self.origin
    }
}

pub(crate) fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
