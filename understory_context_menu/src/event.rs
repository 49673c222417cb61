// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output events of the menu host.
//!
//! Inputs are plain values built by the host toolkit from its native events:
//! [`TriggerEvent`] for right-click or long-press, [`MenuKey`] for keyboard
//! input, and [`DismissReason`] for interactions outside the menu.
//!
//! Outputs are [`MenuEvent`]s queued by [`ContextMenu`](crate::menu::ContextMenu)
//! and drained with [`ContextMenu::take_events`](crate::menu::ContextMenu::take_events).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::options::DismissTriggers;
use crate::trigger::TriggerId;

/// How a menu was requested.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TriggerKind {
    /// A `contextmenu` event (right click, or the platform menu key).
    ContextMenu,
    /// A touch long-press.
    LongPress,
    /// Opened from code rather than user input.
    Programmatic,
}

/// The event that asks a trigger to open its menu.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriggerEvent {
    /// Pointer position in viewport coordinates (`clientX`, `clientY`).
    pub position: Point,
    /// Explicit anchor that replaces `position` when set.
    pub position_override: Option<Point>,
    /// Source of the request.
    pub kind: TriggerKind,
}

impl TriggerEvent {
    /// A right-click at `position`.
    pub fn context_menu(position: Point) -> Self {
        Self {
            position,
            position_override: None,
            kind: TriggerKind::ContextMenu,
        }
    }

    /// A long-press at `position`.
    pub fn long_press(position: Point) -> Self {
        Self {
            position,
            position_override: None,
            kind: TriggerKind::LongPress,
        }
    }

    /// A request from code, anchored at `position`.
    pub fn programmatic(position: Point) -> Self {
        Self {
            position,
            position_override: None,
            kind: TriggerKind::Programmatic,
        }
    }

    /// Builder: anchor the menu at `anchor` instead of the pointer.
    pub fn with_position_override(mut self, anchor: Point) -> Self {
        self.position_override = Some(anchor);
        self
    }

    /// Where the root panel should be anchored.
    pub fn anchor(&self) -> Point {
        self.position_override.unwrap_or(self.position)
    }
}

/// Keys the menu reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuKey {
    /// Move the highlight up.
    ArrowUp,
    /// Move the highlight down.
    ArrowDown,
    /// Open the highlighted submenu.
    ArrowRight,
    /// Close the innermost submenu.
    ArrowLeft,
    /// Highlight the first item.
    Home,
    /// Highlight the last item.
    End,
    /// Activate the highlighted item.
    Enter,
    /// Activate the highlighted item.
    Space,
    /// Close the whole chain.
    Escape,
}

/// Interactions outside the menu that may close it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DismissReason {
    /// A pointer press outside every open panel.
    PointerDownOutside,
    /// The window lost focus.
    Blur,
    /// Something scrolled.
    Scroll,
    /// The Escape key.
    Escape,
}

impl DismissReason {
    /// The option flag that enables this reason.
    pub fn trigger_flag(self) -> DismissTriggers {
        match self {
            Self::PointerDownOutside => DismissTriggers::OUTSIDE_POINTER,
            Self::Blur => DismissTriggers::BLUR,
            Self::Scroll => DismissTriggers::SCROLL,
            Self::Escape => DismissTriggers::ESCAPE,
        }
    }
}

/// Why a root menu closed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CloseReason {
    /// An outside interaction.
    Dismissed(DismissReason),
    /// An action item ran.
    ItemActivated,
    /// [`ContextMenu::hide`](crate::menu::ContextMenu::hide) was called.
    Hidden,
    /// Another trigger, or the same trigger at a new point, opened a menu.
    Replaced,
    /// The owning trigger was unregistered.
    TriggerRemoved,
}

/// Notifications queued by the menu host.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    /// A root panel opened for `trigger`.
    Opened {
        /// Owning trigger.
        trigger: TriggerId,
    },
    /// The root panel of `trigger` closed, along with every submenu.
    Closed {
        /// Owning trigger.
        trigger: TriggerId,
        /// Why it closed.
        reason: CloseReason,
    },
    /// The submenu of item `index` in the panel at `depth` opened.
    SubmenuOpened {
        /// Depth of the panel holding the submenu item (root is 0).
        depth: usize,
        /// Index of the submenu item in that panel.
        index: usize,
    },
    /// The submenu of item `index` in the panel at `depth` closed.
    SubmenuClosed {
        /// Depth of the panel holding the submenu item (root is 0).
        depth: usize,
        /// Index of the submenu item in that panel.
        index: usize,
    },
    /// An action item ran.
    Activated {
        /// Owning trigger.
        trigger: TriggerId,
        /// Item indices from the root panel down to the action.
        path: Vec<usize>,
        /// Key of the action.
        key: String,
    },
    /// The host should start listening for outside interactions.
    ListenersAttached,
    /// The host should stop listening for outside interactions.
    ListenersDetached,
}
