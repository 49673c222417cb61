// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger handles and the registry that owns trigger configuration.

use alloc::vec::Vec;

use crate::item::ItemSource;
use crate::options::MenuOptions;

/// Handle for a registered trigger (one call site that can open a menu).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On register, a fresh slot is allocated with generation `1`.
/// - On unregister, the slot is freed; any existing `TriggerId` for that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `TriggerId`.
///
/// Stale handles never alias a newer trigger, so a handler that fires after
/// its element was disposed simply does nothing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TriggerId(pub(crate) u32, pub(crate) u32);

impl TriggerId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub(crate) struct TriggerEntry {
    generation: u32,
    pub(crate) source: ItemSource,
    pub(crate) options: MenuOptions,
}

/// Slot storage for triggers.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    slots: Vec<Option<TriggerEntry>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl Registry {
    pub(crate) fn insert(&mut self, source: ItemSource, options: MenuOptions) -> TriggerId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(TriggerEntry {
                generation,
                source,
                options,
            });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(TriggerEntry {
                generation,
                source,
                options,
            }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "TriggerId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        TriggerId::new(idx, generation)
    }

    pub(crate) fn remove(&mut self, id: TriggerId) -> Option<TriggerEntry> {
        if !self.is_alive(id) {
            return None;
        }
        let entry = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        entry
    }

    pub(crate) fn get(&self, id: TriggerId) -> Option<&TriggerEntry> {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .filter(|e| e.generation == id.1)
    }

    pub(crate) fn is_alive(&self, id: TriggerId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
