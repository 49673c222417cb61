// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware placement for floating panels.
//!
//! ## Overview
//!
//! Context menus, submenus, and popovers all share one problem: a panel is
//! requested at some anchor, but it must end up fully on screen.
//! This crate computes the final top-left corner of such a panel from
//! - an [`Anchor`] (a pointer position, or the bounding box of a trigger item),
//! - the panel's measured [`Size`](kurbo::Size),
//! - and a set of [`Constraints`] (viewport rectangle, margin, and [`Overflow`] policy).
//!
//! With the default [`Overflow::Shift`] policy each axis is clamped independently:
//!
//! - `x' = min(x, right - w - margin)`, floored at `left + margin`.
//! - `y' = min(y, bottom - h - margin)`, floored at `top + margin`.
//!
//! When the panel is larger than the viewport the floor wins, so the panel's
//! top-left corner is always visible.
//!
//! ## Two-phase placement
//!
//! A panel's size is only known once it has been laid out, so placement is
//! a two-step affair: mount the panel at the raw anchor without showing it,
//! measure it, then resolve the final position exactly once before the next
//! paint. [`Placement`] tracks that lifecycle.
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{Anchor, Constraints, Placement};
//!
//! let constraints = Constraints::new(Rect::new(0.0, 0.0, 1000.0, 800.0)).with_margin(5.0);
//!
//! let mut placement = Placement::pending(Anchor::Point(Point::new(990.0, 10.0)));
//! assert!(!placement.is_resolved());
//!
//! // After layout, the host reports the rendered size.
//! let origin = placement.resolve(Some(Size::new(200.0, 300.0)), &constraints);
//! assert_eq!(origin, Point::new(795.0, 10.0));
//! assert!(placement.is_resolved());
//! ```
//!
//! ## Degenerate measurements
//!
//! Zero-sized, negative, or non-finite panel sizes (for example a panel that
//! is hidden) are treated as "measurement failed": the raw anchor is used as
//! is, without clamping. The same applies to a degenerate viewport.
//!
//! This crate is `no_std`.

#![no_std]

mod place;
mod types;

pub use place::{clamp_axis, place};
pub use types::{Anchor, Constraints, Overflow, Placement};
