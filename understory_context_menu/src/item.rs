// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu items: actions, dividers, and submenus.
//!
//! Items are plain data plus an optional click handler. Keys identify items
//! among their siblings; duplicates are tolerated and every key lookup
//! resolves to the first match.

use alloc::borrow::Cow;
use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::OptionsError;
use crate::event::TriggerEvent;
use crate::options::MenuStyle;

/// Click handler for an action item.
pub type ItemHandler = Rc<dyn Fn()>;

/// A leaf item that runs a handler when activated.
#[derive(Clone)]
pub struct ActionItem {
    /// Identifier, unique among siblings.
    pub key: String,
    /// Display label. When absent, a label is derived from the key.
    pub label: Option<String>,
    /// Opaque icon identifier passed through to the renderer.
    pub icon: Option<String>,
    /// Opaque theme color name passed through to the renderer.
    pub color: Option<String>,
    /// Disabled items are rendered but ignore activation.
    pub disabled: bool,
    /// Handler invoked on activation.
    pub on_click: Option<ItemHandler>,
}

impl core::fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionItem")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("color", &self.color)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// An item that opens a nested panel of its own items.
#[derive(Clone, Debug)]
pub struct SubmenuItem {
    /// Identifier, unique among siblings.
    pub key: String,
    /// Display label. When absent, a label is derived from the key.
    pub label: Option<String>,
    /// Opaque icon identifier passed through to the renderer.
    pub icon: Option<String>,
    /// Opaque theme color name passed through to the renderer.
    pub color: Option<String>,
    /// Disabled submenus never open.
    pub disabled: bool,
    /// Child items of the nested panel.
    pub items: Rc<[MenuItem]>,
    /// Style override for the nested panel.
    pub style: Option<MenuStyle>,
}

/// One entry of a menu panel.
#[derive(Clone, Debug)]
pub enum MenuItem {
    /// A clickable action.
    Action(ActionItem),
    /// A visual separator with no behavior.
    Divider,
    /// A nested submenu.
    Submenu(SubmenuItem),
}

impl MenuItem {
    /// An enabled action with a click handler.
    pub fn action(key: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self::Action(ActionItem {
            key: key.into(),
            label: None,
            icon: None,
            color: None,
            disabled: false,
            on_click: Some(Rc::new(on_click)),
        })
    }

    /// A divider.
    pub const fn divider() -> Self {
        Self::Divider
    }

    /// A submenu over `items`.
    pub fn submenu(key: impl Into<String>, items: impl Into<Rc<[Self]>>) -> Self {
        Self::Submenu(SubmenuItem {
            key: key.into(),
            label: None,
            icon: None,
            color: None,
            disabled: false,
            items: items.into(),
            style: None,
        })
    }

    /// Builder: set the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        match &mut self {
            Self::Action(a) => a.label = Some(label.into()),
            Self::Submenu(s) => s.label = Some(label.into()),
            Self::Divider => {}
        }
        self
    }

    /// Builder: set the icon identifier.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        match &mut self {
            Self::Action(a) => a.icon = Some(icon.into()),
            Self::Submenu(s) => s.icon = Some(icon.into()),
            Self::Divider => {}
        }
        self
    }

    /// Builder: set the theme color name.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        match &mut self {
            Self::Action(a) => a.color = Some(color.into()),
            Self::Submenu(s) => s.color = Some(color.into()),
            Self::Divider => {}
        }
        self
    }

    /// Builder: set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        match &mut self {
            Self::Action(a) => a.disabled = disabled,
            Self::Submenu(s) => s.disabled = disabled,
            Self::Divider => {}
        }
        self
    }

    /// Builder: style override for a submenu's nested panel. No effect on other items.
    pub fn submenu_style(mut self, style: MenuStyle) -> Self {
        if let Self::Submenu(s) = &mut self {
            s.style = Some(style);
        }
        self
    }

    /// Key of this item, `None` for dividers.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Action(a) => Some(&a.key),
            Self::Submenu(s) => Some(&s.key),
            Self::Divider => None,
        }
    }

    /// Display label: the explicit label, or one derived from the key.
    pub fn display_label(&self) -> Option<Cow<'_, str>> {
        let (key, label) = match self {
            Self::Action(a) => (&a.key, &a.label),
            Self::Submenu(s) => (&s.key, &s.label),
            Self::Divider => return None,
        };
        Some(match label {
            Some(l) => Cow::Borrowed(l.as_str()),
            None => Cow::Owned(humanize(key)),
        })
    }

    /// Whether this is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    /// Whether this item is disabled. Dividers are never disabled.
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Action(a) => a.disabled,
            Self::Submenu(s) => s.disabled,
            Self::Divider => false,
        }
    }

    /// Whether keyboard navigation may land on this item.
    ///
    /// Disabled items stay reachable so they can be announced; only dividers are skipped.
    pub fn is_navigable(&self) -> bool {
        !self.is_divider()
    }

    /// Child items, if this is a submenu.
    pub fn submenu_items(&self) -> Option<&Rc<[Self]>> {
        match self {
            Self::Submenu(s) => Some(&s.items),
            _ => None,
        }
    }
}

/// Index of the first item carrying `key`.
pub fn position_of_key(items: &[MenuItem], key: &str) -> Option<usize> {
    items.iter().position(|i| i.key() == Some(key))
}

/// The first key that appears more than once among `items`, if any.
pub fn first_duplicate_key(items: &[MenuItem]) -> Option<&str> {
    let mut seen = BTreeSet::new();
    items
        .iter()
        .filter_map(MenuItem::key)
        .find(|k| !seen.insert(*k))
}

/// Check the style override of every submenu in `items`, at any depth.
pub(crate) fn validate_item_styles(items: &[MenuItem]) -> Result<(), OptionsError> {
    for item in items {
        if let MenuItem::Submenu(s) = item {
            if let Some(style) = &s.style {
                style.validate()?;
            }
            validate_item_styles(&s.items)?;
        }
    }
    Ok(())
}

/// Turn a key like `copyImage`, `copy-image` or `copy_image` into `Copy image`.
pub fn humanize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        if out.is_empty() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Where a trigger gets its items from.
#[derive(Clone)]
pub enum ItemSource {
    /// The same items every time.
    Static(Rc<[MenuItem]>),
    /// Items computed from the triggering event.
    Dynamic(Rc<dyn Fn(&TriggerEvent) -> Vec<MenuItem>>),
}

impl core::fmt::Debug for ItemSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Static(items) => f.debug_tuple("Static").field(&items.len()).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic"),
        }
    }
}

impl ItemSource {
    /// Items computed per trigger event.
    pub fn from_fn(f: impl Fn(&TriggerEvent) -> Vec<MenuItem> + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Resolve the items for `event`.
    pub fn resolve(&self, event: &TriggerEvent) -> Rc<[MenuItem]> {
        match self {
            Self::Static(items) => items.clone(),
            Self::Dynamic(f) => f(event).into(),
        }
    }
}

impl From<Vec<MenuItem>> for ItemSource {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::Static(items.into())
    }
}

impl From<Rc<[MenuItem]>> for ItemSource {
    fn from(items: Rc<[MenuItem]>) -> Self {
        Self::Static(items)
    }
}
