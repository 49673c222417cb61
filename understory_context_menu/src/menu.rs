// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu host: triggers, the single open chain, and its input handling.
//!
//! ## Overview
//!
//! One [`ContextMenu`] serves a whole application. Call sites
//! [register](ContextMenu::register) a trigger with items and options and get
//! back a [`TriggerId`]. When the host sees a right-click or long-press on the
//! trigger's element it calls [`ContextMenu::show`], which opens the root panel
//! and closes any menu that was open before, from this or any other trigger.
//!
//! ## Frame protocol
//!
//! 1) Feed input: [`show`](ContextMenu::show), [`pointer_move`](ContextMenu::pointer_move)
//!    or [`hover_item`](ContextMenu::hover_item), [`click_item`](ContextMenu::click_item),
//!    [`key`](ContextMenu::key), [`pointer_down`](ContextMenu::pointer_down), [`dismiss`](ContextMenu::dismiss),
//!    and [`tick`](ContextMenu::tick) for hover-intent timers.
//! 2) Render [`panels`](ContextMenu::panels). Panels that are not
//!    [resolved](crate::panel::MenuPanel::is_resolved) yet are mounted invisibly.
//! 3) Measure and call [`layout`](ContextMenu::layout) before painting, so
//!    new panels appear at their clamped position without a visible jump.
//! 4) Drain [`take_events`](ContextMenu::take_events), attaching or detaching
//!    outside-interaction listeners on [`MenuEvent::ListenersAttached`] and
//!    [`MenuEvent::ListenersDetached`].
//!
//! ## Submenus
//!
//! At most one submenu is open per panel. Hovering a submenu item opens it at
//! the item's measured right edge, closing any open sibling first. Moving
//! off a submenu item schedules its close after
//! [`MenuOptions::submenu_close_delay`]; entering the submenu's own panels
//! before the deadline cancels it. Closing a panel closes everything below it
//! and nothing above it.
//!
//! ## Time
//!
//! Time is a monotonic [`Duration`] from an epoch chosen by the host. The
//! menu never reads a clock itself.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use tracing::{debug, trace, warn};
use understory_placement::{Anchor, Constraints};

use crate::chain::{ChainEvent, OpenChain};
use crate::error::OptionsError;
use crate::event::{CloseReason, DismissReason, MenuEvent, MenuKey, TriggerEvent};
use crate::item::{ItemSource, MenuItem, first_duplicate_key, validate_item_styles};
use crate::measure::Measure;
use crate::options::MenuOptions;
use crate::panel::MenuPanel;
use crate::trigger::{Registry, TriggerId};

/// Application-wide context-menu host.
#[derive(Debug, Default)]
pub struct ContextMenu {
    triggers: Registry,
    open: Option<OpenMenu>,
    events: Vec<MenuEvent>,
    listening: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct PendingClose {
    /// Close the submenu opened from the panel at this depth.
    depth: usize,
    deadline: Duration,
}

#[derive(Debug)]
struct OpenMenu {
    trigger: TriggerId,
    anchor: Point,
    options: MenuOptions,
    /// `panels.len() == chain.len() + 1` at all times.
    panels: Vec<MenuPanel>,
    chain: OpenChain<usize>,
    pending_close: Option<PendingClose>,
}

impl ContextMenu {
    /// A host with no triggers and nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger and return its handle.
    ///
    /// Fails when `options` does not [validate](MenuOptions::validate), or when
    /// a static item tree carries an invalid submenu style. Dynamic items are
    /// checked as their submenus open; an invalid override falls back to the
    /// inherited style.
    pub fn register(
        &mut self,
        items: impl Into<ItemSource>,
        options: MenuOptions,
    ) -> Result<TriggerId, OptionsError> {
        options.validate()?;
        let source = items.into();
        if let ItemSource::Static(items) = &source {
            validate_item_styles(items)?;
        }
        let id = self.triggers.insert(source, options);
        trace!(trigger = ?id, "registered context menu trigger");
        Ok(id)
    }

    /// Unregister a trigger, closing its menu if it is the open one.
    ///
    /// Returns `false` for a stale handle.
    pub fn unregister(&mut self, id: TriggerId) -> bool {
        if self.triggers.remove(id).is_none() {
            return false;
        }
        if self.open.as_ref().is_some_and(|o| o.trigger == id) {
            self.close_with(CloseReason::TriggerRemoved);
        }
        trace!(trigger = ?id, "unregistered context menu trigger");
        true
    }

    /// Whether `id` refers to a registered trigger.
    pub fn is_registered(&self, id: TriggerId) -> bool {
        self.triggers.is_alive(id)
    }

    /// Options of a registered trigger.
    pub fn trigger_options(&self, id: TriggerId) -> Option<&MenuOptions> {
        self.triggers.get(id).map(|e| &e.options)
    }

    /// Open the menu of `id` for `event`.
    ///
    /// Returns `true` when a menu for `id` is showing afterwards; the host
    /// should then suppress the platform's own context menu.
    ///
    /// Does nothing and returns `false` for a stale handle, a disabled trigger,
    /// or an empty item list. Showing the open trigger again at the same
    /// anchor leaves the menu untouched; anywhere else replaces it.
    pub fn show(&mut self, id: TriggerId, event: &TriggerEvent) -> bool {
        let Some(entry) = self.triggers.get(id) else {
            trace!(trigger = ?id, "ignoring show for unregistered trigger");
            return false;
        };
        if entry.options.disabled {
            trace!(trigger = ?id, "ignoring show for disabled trigger");
            return false;
        }
        let anchor = event.anchor();
        if self
            .open
            .as_ref()
            .is_some_and(|o| o.trigger == id && o.anchor == anchor)
        {
            return true;
        }

        let items = entry.source.resolve(event);
        if items.is_empty() {
            debug!(trigger = ?id, "no items to show");
            return false;
        }
        if let Some(key) = first_duplicate_key(&items) {
            warn!(trigger = ?id, key, "duplicate menu item key; lookups use the first match");
        }
        let options = entry.options.clone();

        self.close_with(CloseReason::Replaced);

        let root = MenuPanel::new(0, items, Anchor::Point(anchor), options.style.clone());
        let on_open = options.on_open.clone();
        self.open = Some(OpenMenu {
            trigger: id,
            anchor,
            options,
            panels: alloc::vec![root],
            chain: OpenChain::new(),
            pending_close: None,
        });
        self.events.push(MenuEvent::Opened { trigger: id });
        self.attach_listeners();
        debug!(trigger = ?id, x = anchor.x, y = anchor.y, "context menu opened");
        if let Some(f) = on_open {
            f();
        }
        true
    }

    /// Close the open menu, if any.
    pub fn hide(&mut self) -> bool {
        self.close_with(CloseReason::Hidden)
    }

    /// Whether a menu is open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The trigger whose menu is open.
    pub fn open_trigger(&self) -> Option<TriggerId> {
        self.open.as_ref().map(|o| o.trigger)
    }

    /// Open panels from the root down. Empty when nothing is open.
    pub fn panels(&self) -> &[MenuPanel] {
        self.open.as_ref().map_or(&[], |o| &o.panels)
    }

    /// The open panel at `depth`.
    pub fn panel(&self, depth: usize) -> Option<&MenuPanel> {
        self.panels().get(depth)
    }

    /// Indices of the open submenu items, one per panel except the innermost.
    pub fn open_path(&self) -> &[usize] {
        self.open.as_ref().map_or(&[], |o| o.chain.path())
    }

    /// Whether outside-interaction listeners should currently be attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<MenuEvent> {
        core::mem::take(&mut self.events)
    }

    /// Resolve the position of every panel that has not been measured yet.
    ///
    /// A submenu is re-attached to its parent item's measured box first, so
    /// one opened before the parent was measured ends up beside its item.
    /// Returns whether any panel moved from pending to resolved.
    pub fn layout(&mut self, measure: &impl Measure) -> bool {
        match self.open.as_mut() {
            Some(open) => open.resolve_panels(measure, false),
            None => false,
        }
    }

    /// Re-resolve every open panel, e.g. after the viewport was resized.
    ///
    /// Submenus follow their parent item when the parent moves.
    pub fn relayout(&mut self, measure: &impl Measure) {
        if let Some(open) = self.open.as_mut() {
            open.resolve_panels(measure, true);
        }
    }

    /// The pointer is over item `index` of the panel at `depth`.
    ///
    /// Highlights the item. An enabled submenu item opens its submenu right
    /// away, closing any open sibling; any other item schedules the close of
    /// the panel's open submenu.
    pub fn hover_item(
        &mut self,
        depth: usize,
        index: usize,
        measure: &impl Measure,
        now: Duration,
    ) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        let Some(panel) = open.panels.get_mut(depth) else {
            return;
        };
        panel.set_highlighted(Some(index));
        let opens = matches!(panel.items().get(index), Some(MenuItem::Submenu(s)) if !s.disabled);
        open.cancel_pending_above(depth);
        if opens {
            open.open_submenu(depth, index, measure, &mut self.events);
        } else if open.chain.open_item(depth).is_some() {
            open.schedule_close(depth, now, &mut self.events);
        }
    }

    /// The pointer is over the panel at `depth` but not over any item.
    pub fn hover_panel(&mut self, depth: usize) {
        if let Some(open) = self.open.as_mut() {
            open.cancel_pending_above(depth);
        }
    }

    /// The pointer left every open panel.
    ///
    /// Schedules closing all submenus; the root panel stays open.
    pub fn pointer_leave(&mut self, now: Duration) {
        if let Some(open) = self.open.as_mut() {
            if !open.chain.is_empty() {
                open.schedule_close(0, now, &mut self.events);
            }
        }
    }

    /// Route a pointer move by hit testing the open panels.
    ///
    /// Deeper panels are tested first since they stack above their parents.
    /// Returns the `(depth, index)` of the item under the pointer, if any.
    pub fn pointer_move(
        &mut self,
        point: Point,
        measure: &impl Measure,
        now: Duration,
    ) -> Option<(usize, usize)> {
        let hit = self
            .panels()
            .iter()
            .rev()
            .find(|p| p.contains(point))
            .map(|p| {
                let depth = p.depth();
                let item = (0..p.items().len()).find(|&i| {
                    measure
                        .item_bounds(depth, i)
                        .is_some_and(|b| b.contains(point))
                });
                (depth, item)
            });
        match hit {
            Some((depth, Some(index))) => {
                self.hover_item(depth, index, measure, now);
                Some((depth, index))
            }
            Some((depth, None)) => {
                self.hover_panel(depth);
                None
            }
            None => {
                self.pointer_leave(now);
                None
            }
        }
    }

    /// A pointer press at `point`. Closes the chain when it lands outside
    /// every open panel and outside clicks dismiss. Returns whether it closed.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.panels().iter().any(|p| p.contains(point)) {
            return false;
        }
        self.dismiss(DismissReason::PointerDownOutside)
    }

    /// An outside interaction. Closes the chain if the open trigger's options
    /// enable `reason`. Returns whether it closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let enabled = self
            .open
            .as_ref()
            .is_some_and(|o| o.options.dismiss_on.contains(reason.trigger_flag()));
        if !enabled {
            return false;
        }
        self.close_with(CloseReason::Dismissed(reason))
    }

    /// Click (or tap) on item `index` of the panel at `depth`.
    ///
    /// An enabled action runs its handler exactly once, then closes the whole
    /// chain unless `close_on_item_click` is off. A submenu item opens its
    /// submenu. Disabled items and dividers do nothing. Returns whether
    /// anything happened.
    pub fn click_item(&mut self, depth: usize, index: usize, measure: &impl Measure) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        let Some(item) = open.panels.get(depth).and_then(|p| p.items().get(index)) else {
            return false;
        };
        match item {
            MenuItem::Action(action) => {
                if action.disabled {
                    trace!(key = action.key.as_str(), "ignoring disabled item");
                    return false;
                }
                let handler = action.on_click.clone();
                let key = action.key.clone();
                let mut path = open.chain.path()[..depth].to_vec();
                path.push(index);
                let trigger = open.trigger;
                let close = open.options.close_on_item_click;
                open.panels[depth].set_highlighted(Some(index));

                debug!(key = key.as_str(), depth, "menu item activated");
                if let Some(f) = handler {
                    f();
                }
                self.events.push(MenuEvent::Activated { trigger, path, key });
                if close {
                    self.close_with(CloseReason::ItemActivated);
                }
                true
            }
            MenuItem::Submenu(_) => {
                open.panels[depth].set_highlighted(Some(index));
                open.open_submenu(depth, index, measure, &mut self.events)
            }
            MenuItem::Divider => false,
        }
    }

    /// Keyboard input, applied to the innermost open panel.
    ///
    /// Returns whether the key was handled.
    pub fn key(&mut self, key: MenuKey, measure: &impl Measure) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        let depth = open.panels.len() - 1;
        let panel = &mut open.panels[depth];
        match key {
            MenuKey::ArrowDown | MenuKey::ArrowUp => {
                let next = panel.step(key == MenuKey::ArrowDown);
                panel.set_highlighted(next);
                next.is_some()
            }
            MenuKey::Home | MenuKey::End => {
                let next = if key == MenuKey::Home {
                    panel.first_navigable()
                } else {
                    panel.last_navigable()
                };
                panel.set_highlighted(next);
                next.is_some()
            }
            MenuKey::ArrowRight => {
                let Some(index) = panel.highlighted() else {
                    return false;
                };
                open.open_submenu_focused(depth, index, measure, &mut self.events)
            }
            MenuKey::Enter | MenuKey::Space => {
                let Some(index) = panel.highlighted() else {
                    return false;
                };
                if matches!(panel.items()[index], MenuItem::Submenu(_)) {
                    open.open_submenu_focused(depth, index, measure, &mut self.events)
                } else {
                    self.click_item(depth, index, measure)
                }
            }
            MenuKey::ArrowLeft => {
                if depth == 0 {
                    return false;
                }
                open.close_from(depth - 1, &mut self.events)
            }
            MenuKey::Escape => self.dismiss(DismissReason::Escape),
        }
    }

    /// Commit a scheduled submenu close whose deadline has passed.
    ///
    /// Returns whether anything closed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        match open.pending_close {
            Some(p) if p.deadline <= now => {
                open.pending_close = None;
                trace!(depth = p.depth, "hover intent expired");
                open.close_from(p.depth, &mut self.events)
            }
            _ => false,
        }
    }

    /// When the next [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.open
            .as_ref()
            .and_then(|o| o.pending_close)
            .map(|p| p.deadline)
    }

    fn close_with(&mut self, reason: CloseReason) -> bool {
        let Some(mut open) = self.open.take() else {
            return false;
        };
        push_chain(&mut self.events, open.chain.clear());
        self.events.push(MenuEvent::Closed {
            trigger: open.trigger,
            reason,
        });
        self.detach_listeners();
        debug!(trigger = ?open.trigger, ?reason, "context menu closed");
        if let Some(f) = open.options.on_close.take() {
            f();
        }
        true
    }

    fn attach_listeners(&mut self) {
        if !self.listening {
            self.listening = true;
            self.events.push(MenuEvent::ListenersAttached);
        }
    }

    fn detach_listeners(&mut self) {
        if self.listening {
            self.listening = false;
            self.events.push(MenuEvent::ListenersDetached);
        }
    }
}

impl OpenMenu {
    fn constraints(&self, measure: &impl Measure) -> Constraints {
        Constraints::new(measure.viewport())
            .with_margin(self.options.margin)
            .with_overflow(self.options.overflow)
    }

    /// Resolve panels root-down, re-attaching each submenu to its parent item.
    ///
    /// The host measured item boxes where the panels were drawn before this
    /// pass, so a parent's item box is moved along with the parent.
    fn resolve_panels(&mut self, measure: &impl Measure, all: bool) -> bool {
        let constraints = self.constraints(measure);
        let path = self.chain.path();
        let mut parent_shift = Vec2::ZERO;
        let mut changed = false;
        for depth in 0..self.panels.len() {
            let panel = &self.panels[depth];
            if !all && panel.is_resolved() && parent_shift == Vec2::ZERO {
                continue;
            }
            let rendered = panel.origin();
            let was_resolved = panel.is_resolved();
            if depth > 0 {
                let parent = &self.panels[depth - 1];
                let anchor = match path.get(depth - 1) {
                    Some(&index) => measured_anchor(parent, index, measure)
                        .map(|r| Anchor::Beside(r + parent_shift))
                        .unwrap_or_else(|| shifted(panel.anchor(), parent_shift, parent)),
                    None => panel.anchor(),
                };
                self.panels[depth].set_anchor(anchor);
            }
            let origin = self.panels[depth].resolve(measure, &constraints);
            trace!(depth, x = origin.x, y = origin.y, "panel placed");
            changed |= !was_resolved;
            parent_shift = origin - rendered;
        }
        changed
    }

    /// Open the submenu of item `index` in the panel at `depth`.
    fn open_submenu(
        &mut self,
        depth: usize,
        index: usize,
        measure: &impl Measure,
        events: &mut Vec<MenuEvent>,
    ) -> bool {
        let Some(panel) = self.panels.get(depth) else {
            return false;
        };
        let Some(MenuItem::Submenu(sub)) = panel.items().get(index) else {
            return false;
        };
        if sub.disabled || sub.items.is_empty() {
            return false;
        }
        if self.chain.open_item(depth) == Some(index) {
            // Back on the open submenu's own item.
            self.pending_close = None;
            return true;
        }

        let anchor = submenu_anchor(panel, index, measure);
        let own = match &sub.style {
            Some(style) if style.validate().is_err() => {
                warn!(depth, index, "invalid submenu style; using the inherited one");
                None
            }
            other => other.clone(),
        };
        let style = own
            .or_else(|| self.options.submenu_style.clone())
            .unwrap_or_else(|| panel.style().nested());
        let items = sub.items.clone();

        let transitions = self.chain.open_at(depth, index);
        self.panels.truncate(depth + 1);
        self.panels.push(MenuPanel::new(depth + 1, items, anchor, style));
        self.pending_close = None;
        trace!(depth, index, "submenu opened");
        push_chain(events, transitions);
        true
    }

    /// Open a submenu from the keyboard and highlight its first item.
    fn open_submenu_focused(
        &mut self,
        depth: usize,
        index: usize,
        measure: &impl Measure,
        events: &mut Vec<MenuEvent>,
    ) -> bool {
        if !self.open_submenu(depth, index, measure, events) {
            return false;
        }
        if let Some(child) = self.panels.get_mut(depth + 1) {
            let first = child.first_navigable();
            child.set_highlighted(first);
        }
        true
    }

    /// Close the submenu opened from the panel at `depth`, and its descendants.
    fn close_from(&mut self, depth: usize, events: &mut Vec<MenuEvent>) -> bool {
        let transitions = self.chain.close_from(depth);
        if transitions.is_empty() {
            return false;
        }
        let len = self.chain.len();
        self.panels.truncate(len + 1);
        if self.pending_close.is_some_and(|p| p.depth >= len) {
            self.pending_close = None;
        }
        trace!(depth, "submenus closed");
        push_chain(events, transitions);
        true
    }

    /// Close the panel's open submenu after the hover-intent delay.
    fn schedule_close(&mut self, depth: usize, now: Duration, events: &mut Vec<MenuEvent>) {
        let delay = self.options.submenu_close_delay;
        if delay.is_zero() {
            self.close_from(depth, events);
            return;
        }
        let deadline = now.saturating_add(delay);
        // Continued movement never postpones a close that is already due.
        self.pending_close = Some(match self.pending_close {
            Some(p) => PendingClose {
                depth: p.depth.min(depth),
                deadline: p.deadline.min(deadline),
            },
            None => PendingClose { depth, deadline },
        });
    }

    /// The pointer is inside the panel at `depth`, so submenus of shallower
    /// panels that lead here must stay open.
    fn cancel_pending_above(&mut self, depth: usize) {
        if self.pending_close.is_some_and(|p| p.depth < depth) {
            self.pending_close = None;
        }
    }
}

/// Anchor for the submenu of item `index`: the item's measured box, falling
/// back to the parent panel's right edge, then to the parent's origin.
fn submenu_anchor(panel: &MenuPanel, index: usize, measure: &impl Measure) -> Anchor {
    measured_anchor(panel, index, measure)
        .map(Anchor::Beside)
        .unwrap_or_else(|| fallback_anchor(panel))
}

/// The measured box of item `index`, if the host reported a usable one.
fn measured_anchor(panel: &MenuPanel, index: usize, measure: &impl Measure) -> Option<Rect> {
    let usable = |r: &Rect| r.is_finite() && r.width() > 0.0 && r.height() > 0.0;
    measure.item_bounds(panel.depth(), index).filter(usable)
}

fn fallback_anchor(panel: &MenuPanel) -> Anchor {
    match panel.bounds() {
        Some(b) => Anchor::Point(Point::new(b.x1, b.y0)),
        None => Anchor::Point(panel.origin()),
    }
}

/// Carry an item-box anchor along with its moved parent; a point anchor is
/// re-derived from the parent's new position.
fn shifted(anchor: Anchor, shift: Vec2, parent: &MenuPanel) -> Anchor {
    match anchor {
        Anchor::Beside(r) => Anchor::Beside(r + shift),
        Anchor::Point(_) => fallback_anchor(parent),
    }
}

fn push_chain(events: &mut Vec<MenuEvent>, transitions: Vec<ChainEvent<usize>>) {
    events.extend(transitions.into_iter().map(|t| match t {
        ChainEvent::Opened { depth, item } => MenuEvent::SubmenuOpened { depth, index: item },
        ChainEvent::Closed { depth, item } => MenuEvent::SubmenuClosed { depth, index: item },
    }));
}
