// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when validating menu options.

use thiserror::Error;

/// An option value that cannot produce a sensible menu.
///
/// Returned by [`MenuOptions::validate`](crate::options::MenuOptions::validate)
/// and by [`ContextMenu::register`](crate::menu::ContextMenu::register).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum OptionsError {
    /// The viewport margin is negative or not finite.
    #[error("viewport margin must be finite and non-negative, got {0}")]
    Margin(f64),
    /// A minimum panel width is negative or not finite.
    #[error("minimum width must be finite and non-negative, got {0}")]
    MinWidth(f64),
    /// A pixel radius or shadow size is negative or not finite.
    #[error("{what} must be finite and non-negative, got {value}")]
    Dimension {
        /// Which dimension was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}
