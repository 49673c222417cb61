// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement math.

use kurbo::{Point, Size};

use crate::types::{Anchor, Constraints, Overflow, is_usable};

/// Clamp one axis of a panel into `[lo + margin, hi - extent - margin]`.
///
/// The upper bound is applied first and the lower bound last, so a panel
/// larger than the available span ends up at `lo + margin`.
pub fn clamp_axis(start: f64, extent: f64, lo: f64, hi: f64, margin: f64) -> f64 {
    start.min(hi - extent - margin).max(lo + margin)
}

/// Compute the top-left corner for a panel of `size` requested at `anchor`.
///
/// Falls back to the raw anchor when `size` or the viewport is degenerate.
pub fn place(anchor: Anchor, size: Size, constraints: &Constraints) -> Point {
    let preferred = anchor.origin();
    let vp = constraints.viewport;
    if !is_usable(size) || !is_usable(vp.size()) || !constraints.margin.is_finite() {
        return preferred;
    }
    let margin = constraints.margin;

    let (x, y) = match constraints.overflow {
        Overflow::None => return preferred,
        Overflow::Shift => (preferred.x, preferred.y),
        Overflow::Flip => {
            let (flip_x, flip_y) = match anchor {
                Anchor::Point(p) => (p.x - size.width, p.y - size.height),
                // Align the panel's bottom edge with the trigger's when flipping up.
                Anchor::Beside(r) => (r.x0 - size.width, r.y1 - size.height),
            };
            (
                flip_axis(preferred.x, size.width, vp.x0, vp.x1, margin, flip_x),
                flip_axis(preferred.y, size.height, vp.y0, vp.y1, margin, flip_y),
            )
        }
    };

    Point::new(
        clamp_axis(x, size.width, vp.x0, vp.x1, margin),
        clamp_axis(y, size.height, vp.y0, vp.y1, margin),
    )
}

/// Use `flipped` only when `preferred` overflows and `flipped` starts on screen.
fn flip_axis(preferred: f64, extent: f64, lo: f64, hi: f64, margin: f64, flipped: f64) -> f64 {
    if preferred + extent + margin > hi && flipped >= lo + margin {
        flipped
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn screen() -> Constraints {
        Constraints::new(Rect::new(0.0, 0.0, 1000.0, 800.0)).with_margin(5.0)
    }

    #[test]
    fn shift_clamps_right_edge() {
        let p = place(
            Anchor::Point(Point::new(990.0, 10.0)),
            Size::new(200.0, 300.0),
            &screen(),
        );
        assert_eq!(p, Point::new(795.0, 10.0));
    }

    #[test]
    fn shift_clamps_bottom_edge() {
        let p = place(
            Anchor::Point(Point::new(20.0, 700.0)),
            Size::new(200.0, 300.0),
            &screen(),
        );
        assert_eq!(p, Point::new(20.0, 495.0));
    }

    #[test]
    fn shift_floors_at_margin() {
        let p = place(
            Anchor::Point(Point::new(-40.0, 2.0)),
            Size::new(200.0, 300.0),
            &screen(),
        );
        assert_eq!(p, Point::new(5.0, 5.0));
    }

    #[test]
    fn oversized_panel_pins_to_margin() {
        let p = place(
            Anchor::Point(Point::new(500.0, 500.0)),
            Size::new(2000.0, 2000.0),
            &screen(),
        );
        assert_eq!(p, Point::new(5.0, 5.0));
    }

    #[test]
    fn viewport_origin_is_respected() {
        let c = Constraints::new(Rect::new(100.0, 50.0, 600.0, 450.0)).with_margin(10.0);
        let p = place(
            Anchor::Point(Point::new(0.0, 440.0)),
            Size::new(100.0, 100.0),
            &c,
        );
        assert_eq!(p, Point::new(110.0, 340.0));
    }

    #[test]
    fn beside_opens_to_the_right_of_trigger() {
        let item = Rect::new(100.0, 200.0, 300.0, 230.0);
        let p = place(Anchor::Beside(item), Size::new(150.0, 100.0), &screen());
        assert_eq!(p, Point::new(300.0, 200.0));
    }

    #[test]
    fn beside_shifts_when_trigger_is_near_edge() {
        let item = Rect::new(700.0, 200.0, 900.0, 230.0);
        let p = place(Anchor::Beside(item), Size::new(150.0, 100.0), &screen());
        assert_eq!(p, Point::new(845.0, 200.0));
    }

    #[test]
    fn flip_moves_submenu_to_left_side() {
        let item = Rect::new(700.0, 200.0, 900.0, 230.0);
        let c = screen().with_overflow(Overflow::Flip);
        let p = place(Anchor::Beside(item), Size::new(150.0, 100.0), &c);
        assert_eq!(p, Point::new(550.0, 200.0));
    }

    #[test]
    fn flip_moves_menu_above_pointer() {
        let c = screen().with_overflow(Overflow::Flip);
        let p = place(
            Anchor::Point(Point::new(100.0, 700.0)),
            Size::new(200.0, 300.0),
            &c,
        );
        assert_eq!(p, Point::new(100.0, 400.0));
    }

    #[test]
    fn flip_falls_back_to_shift_when_other_side_is_off_screen() {
        let c = screen().with_overflow(Overflow::Flip);
        let p = place(
            Anchor::Point(Point::new(150.0, 10.0)),
            Size::new(900.0, 100.0),
            &c,
        );
        assert_eq!(p, Point::new(95.0, 10.0));
    }

    #[test]
    fn overflow_none_keeps_anchor() {
        let c = screen().with_overflow(Overflow::None);
        let p = place(
            Anchor::Point(Point::new(990.0, 790.0)),
            Size::new(200.0, 300.0),
            &c,
        );
        assert_eq!(p, Point::new(990.0, 790.0));
    }

    #[test]
    fn degenerate_inputs_keep_anchor() {
        let a = Anchor::Point(Point::new(990.0, 790.0));
        assert_eq!(place(a, Size::ZERO, &screen()), a.origin());
        assert_eq!(
            place(a, Size::new(f64::NAN, 10.0), &screen()),
            a.origin()
        );
        let empty = Constraints::new(Rect::ZERO);
        assert_eq!(place(a, Size::new(10.0, 10.0), &empty), a.origin());
    }
}
