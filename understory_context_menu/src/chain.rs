// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open-submenu chain: compute open/close transitions from path changes.
//!
//! The chain is the root→leaf list of submenu items that are currently open,
//! one entry per panel. Entry `d` is the item of the panel at depth `d` whose
//! submenu is shown as the panel at depth `d + 1`.
//!
//! Every change is expressed as a new path. [`OpenChain`] diffs it against the
//! current path and returns the minimal set of transitions: closes for the old
//! tail from inner-most to outer-most, then opens for the new tail from
//! outer-most to inner-most.
//!
//! ## Minimal example
//!
//! ```
//! use understory_context_menu::chain::{ChainEvent, OpenChain};
//! let mut c: OpenChain<u32> = OpenChain::new();
//! assert_eq!(c.open_at(0, 2), vec![ChainEvent::Opened { depth: 0, item: 2 }]);
//! assert_eq!(c.open_at(1, 5), vec![ChainEvent::Opened { depth: 1, item: 5 }]);
//! // Opening a sibling at depth 0 closes the whole old branch first.
//! assert_eq!(
//!     c.open_at(0, 3),
//!     vec![
//!         ChainEvent::Closed { depth: 1, item: 5 },
//!         ChainEvent::Closed { depth: 0, item: 2 },
//!         ChainEvent::Opened { depth: 0, item: 3 },
//!     ]
//! );
//! ```

use alloc::vec::Vec;

/// The chain of open submenus.
///
/// Closing propagates downward only: closing the entry at depth `d` closes
/// every entry below it and leaves every entry above it open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenChain<K: Copy + Eq> {
    current: Vec<K>,
}

/// An open/close transition of one chain entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChainEvent<K> {
    /// The submenu of `item` in the panel at `depth` opened (outer→inner order).
    Opened {
        /// Depth of the panel holding the item.
        depth: usize,
        /// The submenu item.
        item: K,
    },
    /// The submenu of `item` in the panel at `depth` closed (inner→outer order).
    Closed {
        /// Depth of the panel holding the item.
        depth: usize,
        /// The submenu item.
        item: K,
    },
}

impl<K: Copy + Eq> OpenChain<K> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Return the current root→leaf path.
    pub fn path(&self) -> &[K] {
        &self.current
    }

    /// Number of open submenus.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether no submenu is open.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The item whose submenu is open in the panel at `depth`, if any.
    pub fn open_item(&self, depth: usize) -> Option<K> {
        self.current.get(depth).copied()
    }

    /// Open the submenu of `item` in the panel at `depth`.
    ///
    /// Any sibling submenu open at the same depth, and everything below it, is
    /// closed first. Entries above `depth` are untouched. Returns no events
    /// when `depth` is deeper than any open panel, or when `item` is already
    /// open there (its descendants stay open).
    pub fn open_at(&mut self, depth: usize, item: K) -> Vec<ChainEvent<K>> {
        if depth > self.current.len() || self.current.get(depth) == Some(&item) {
            return Vec::new();
        }
        let mut next = Vec::with_capacity(depth + 1);
        next.extend_from_slice(&self.current[..depth]);
        next.push(item);
        self.update_path(&next)
    }

    /// Close the submenu open in the panel at `depth` and all of its descendants.
    pub fn close_from(&mut self, depth: usize) -> Vec<ChainEvent<K>> {
        if depth >= self.current.len() {
            return Vec::new();
        }
        let next: Vec<K> = self.current[..depth].to_vec();
        self.update_path(&next)
    }

    /// Close everything, returning closes from inner-most to outer-most.
    pub fn clear(&mut self) -> Vec<ChainEvent<K>> {
        self.close_from(0)
    }

    /// Replace the chain with `new_path` and return the transitions.
    ///
    /// Closes are emitted inner-most first, then opens outer-most first.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<ChainEvent<K>> {
        // Length of the shared prefix; entries past it differ.
        let mut lca = 0;
        while lca < self.current.len() && lca < new_path.len() && self.current[lca] == new_path[lca]
        {
            lca += 1;
        }

        let mut out = Vec::new();
        for (depth, &item) in self.current.iter().enumerate().skip(lca).rev() {
            out.push(ChainEvent::Closed { depth, item });
        }
        for (depth, &item) in new_path.iter().enumerate().skip(lca) {
            out.push(ChainEvent::Opened { depth, item });
        }

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}
