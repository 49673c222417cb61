// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display and behavior options for a trigger.
//!
//! ## Overview
//!
//! [`MenuOptions`] is passed once per trigger when it is registered. It splits
//! into two halves:
//! - [`MenuStyle`]: per-panel appearance (z-index, radius, shadow, minimum
//!   width, class names, inline styles). Styles are opaque to this crate and
//!   passed through to the renderer. Each submenu level may override them.
//! - Behavior: dismissal triggers, close-on-click, viewport margin, overflow
//!   policy, submenu close delay, and open/close callbacks. Behavior applies
//!   to the whole chain and is read from the root trigger's options.
//!
//! With the `serde` feature both halves can be deserialized, for example from
//! a JSON config file. Callbacks are skipped.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use core::time::Duration;

use understory_placement::Overflow;

use crate::error::OptionsError;

/// Callback invoked when a root menu opens or closes.
pub type MenuCallback = Rc<dyn Fn()>;

/// Default z-index of a root panel.
pub const DEFAULT_Z_INDEX: i32 = 9999;

/// Default gap between a panel and the viewport edges, in pixels.
pub const DEFAULT_MARGIN: f64 = 5.0;

/// Default delay before a submenu the pointer left is closed.
pub const DEFAULT_SUBMENU_CLOSE_DELAY: Duration = Duration::from_millis(100);

/// A size expressed either as a theme token or in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Extra small theme token.
    Xs,
    /// Small theme token.
    Sm,
    /// Medium theme token.
    Md,
    /// Large theme token.
    Lg,
    /// Extra large theme token.
    Xl,
    /// Explicit pixel value.
    Px(f64),
}

/// The styleable parts of a panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StylePart {
    /// The panel container.
    Root,
    /// Action items.
    Item,
    /// Dividers.
    Divider,
    /// Submenu items.
    Submenu,
}

/// Appearance of one panel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuStyle {
    /// Stacking order of the panel.
    pub z_index: i32,
    /// Corner radius.
    pub border_radius: Dimension,
    /// Drop shadow size.
    pub shadow: Dimension,
    /// Minimum panel width in pixels.
    pub min_width: Option<f64>,
    /// Extra class name for the panel container.
    pub class_name: Option<String>,
    /// Extra class names per part.
    pub class_names: BTreeMap<StylePart, String>,
    /// Inline style declarations per part.
    pub styles: BTreeMap<StylePart, String>,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            border_radius: Dimension::Xs,
            shadow: Dimension::Sm,
            min_width: None,
            class_name: None,
            class_names: BTreeMap::new(),
            styles: BTreeMap::new(),
        }
    }
}

impl MenuStyle {
    /// Builder: set the z-index.
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Builder: set the corner radius.
    pub fn border_radius(mut self, radius: Dimension) -> Self {
        self.border_radius = radius;
        self
    }

    /// Builder: set the shadow.
    pub fn shadow(mut self, shadow: Dimension) -> Self {
        self.shadow = shadow;
        self
    }

    /// Builder: set the minimum width.
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Builder: set the container class name.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Builder: add a class name for `part`.
    pub fn class_for(mut self, part: StylePart, class: impl Into<String>) -> Self {
        self.class_names.insert(part, class.into());
        self
    }

    /// Builder: add inline style declarations for `part`.
    pub fn style_for(mut self, part: StylePart, style: impl Into<String>) -> Self {
        self.styles.insert(part, style.into());
        self
    }

    /// The style a nested panel inherits when it has no override: the same
    /// appearance, stacked one level above.
    pub fn nested(&self) -> Self {
        Self {
            z_index: self.z_index.saturating_add(1),
            ..self.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), OptionsError> {
        if let Some(w) = self.min_width {
            if !w.is_finite() || w < 0.0 {
                return Err(OptionsError::MinWidth(w));
            }
        }
        check_dimension("border radius", self.border_radius)?;
        check_dimension("shadow", self.shadow)
    }
}

fn check_dimension(what: &'static str, d: Dimension) -> Result<(), OptionsError> {
    match d {
        Dimension::Px(value) if !value.is_finite() || value < 0.0 => {
            Err(OptionsError::Dimension { what, value })
        }
        _ => Ok(()),
    }
}

bitflags::bitflags! {
    /// Interactions outside the menu that close the whole chain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DismissTriggers: u8 {
        /// A pointer press outside every open panel.
        const OUTSIDE_POINTER = 0b0000_0001;
        /// The window loses focus.
        const BLUR            = 0b0000_0010;
        /// The page or a scroll container scrolls.
        const SCROLL          = 0b0000_0100;
        /// The Escape key.
        const ESCAPE          = 0b0000_1000;
    }
}

impl Default for DismissTriggers {
    fn default() -> Self {
        Self::all()
    }
}

/// Options for one trigger.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuOptions {
    /// Appearance of the root panel.
    pub style: MenuStyle,
    /// Appearance of nested panels without their own override.
    ///
    /// When absent, nested panels inherit their parent's style one z-level up.
    pub submenu_style: Option<MenuStyle>,
    /// A disabled trigger never opens.
    pub disabled: bool,
    /// Close the chain after an action runs.
    pub close_on_item_click: bool,
    /// Outside interactions that close the chain.
    pub dismiss_on: DismissTriggers,
    /// Gap kept between panels and the viewport edges.
    pub margin: f64,
    /// What to do with panels that would overflow the viewport.
    pub overflow: Overflow,
    /// How long a submenu stays open after the pointer leaves it.
    pub submenu_close_delay: Duration,
    /// Called after the root panel opens.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_open: Option<MenuCallback>,
    /// Called after the root panel closes.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_close: Option<MenuCallback>,
}

impl core::fmt::Debug for MenuOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuOptions")
            .field("style", &self.style)
            .field("submenu_style", &self.submenu_style)
            .field("disabled", &self.disabled)
            .field("close_on_item_click", &self.close_on_item_click)
            .field("dismiss_on", &self.dismiss_on)
            .field("margin", &self.margin)
            .field("overflow", &self.overflow)
            .field("submenu_close_delay", &self.submenu_close_delay)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            style: MenuStyle::default(),
            submenu_style: None,
            disabled: false,
            close_on_item_click: true,
            dismiss_on: DismissTriggers::default(),
            margin: DEFAULT_MARGIN,
            overflow: Overflow::Shift,
            submenu_close_delay: DEFAULT_SUBMENU_CLOSE_DELAY,
            on_open: None,
            on_close: None,
        }
    }
}

impl MenuOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the root panel style.
    pub fn style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder: set the default style of nested panels.
    pub fn submenu_style(mut self, style: MenuStyle) -> Self {
        self.submenu_style = Some(style);
        self
    }

    /// Builder: set the root z-index.
    pub fn z_index(mut self, z: i32) -> Self {
        self.style.z_index = z;
        self
    }

    /// Builder: set the root corner radius.
    pub fn border_radius(mut self, radius: Dimension) -> Self {
        self.style.border_radius = radius;
        self
    }

    /// Builder: set the root shadow.
    pub fn shadow(mut self, shadow: Dimension) -> Self {
        self.style.shadow = shadow;
        self
    }

    /// Builder: set the root minimum width.
    pub fn min_width(mut self, width: f64) -> Self {
        self.style.min_width = Some(width);
        self
    }

    /// Builder: disable the trigger.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builder: close the chain after an action runs.
    pub fn close_on_item_click(mut self, close: bool) -> Self {
        self.close_on_item_click = close;
        self
    }

    /// Builder: close the chain on a pointer press outside the panels.
    pub fn close_on_outside_click(mut self, close: bool) -> Self {
        self.dismiss_on.set(DismissTriggers::OUTSIDE_POINTER, close);
        self
    }

    /// Builder: replace the whole set of dismissal triggers.
    pub fn dismiss_on(mut self, triggers: DismissTriggers) -> Self {
        self.dismiss_on = triggers;
        self
    }

    /// Builder: set the viewport margin.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Builder: set the overflow policy.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Builder: set the submenu close delay. Zero closes immediately.
    pub fn submenu_close_delay(mut self, delay: Duration) -> Self {
        self.submenu_close_delay = delay;
        self
    }

    /// Builder: callback run after the root panel opens.
    pub fn on_open(mut self, f: impl Fn() + 'static) -> Self {
        self.on_open = Some(Rc::new(f));
        self
    }

    /// Builder: callback run after the root panel closes.
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }

    /// Whether a pointer press outside the panels closes the chain.
    pub fn closes_on_outside_click(&self) -> bool {
        self.dismiss_on.contains(DismissTriggers::OUTSIDE_POINTER)
    }

    /// Check that every numeric option is usable.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(OptionsError::Margin(self.margin));
        }
        self.style.validate()?;
        if let Some(s) = &self.submenu_style {
            s.validate()?;
        }
        Ok(())
    }
}
