// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node pool and its index map.

use alloc::vec::Vec;

use bitflags::bitflags;
use hashbrown::HashMap;
use kurbo::Rect;

bitflags! {
    /// Display state of a pool slot.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub(crate) struct SlotFlags: u8 {
        /// The node is shown.
        const VISIBLE = 1 << 0;
        /// The node carries the focused rendering.
        const FOCUSED = 1 << 1;
        /// The node's content is out of date for its assigned index.
        const STALE = 1 << 2;
    }
}

/// One reusable display node and the item it currently shows.
#[derive(Debug)]
pub(crate) struct Slot<N> {
    pub(crate) node: N,
    pub(crate) index: Option<usize>,
    pub(crate) flags: SlotFlags,
    pub(crate) rect: Rect,
    /// Last render pass that claimed this slot.
    pub(crate) pass: u64,
}

/// Read-only view of a pool slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotView {
    /// Position of the slot in the pool.
    pub slot: usize,
    /// Item index the slot is assigned to, if any.
    pub index: Option<usize>,
    /// Whether the node is shown.
    pub visible: bool,
    /// Whether the node carries the focused rendering.
    pub focused: bool,
    /// Last rectangle the node was placed at, in virtual coordinates.
    pub rect: Rect,
}

impl<N> Slot<N> {
    pub(crate) fn view(&self, slot: usize) -> SlotView {
        SlotView {
            slot,
            index: self.index,
            visible: self.flags.contains(SlotFlags::VISIBLE),
            focused: self.flags.contains(SlotFlags::FOCUSED),
            rect: self.rect,
        }
    }
}

/// A fixed-capacity set of display nodes plus an `index -> slot` map.
///
/// The map is kept in sync with every assignment, so at most one slot holds
/// a given index at any time.
#[derive(Debug)]
pub(crate) struct NodePool<N> {
    slots: Vec<Slot<N>>,
    by_index: HashMap<usize, usize>,
}

impl<N> NodePool<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_index: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends freshly created nodes until the pool holds `target` slots.
    pub(crate) fn grow_to(&mut self, target: usize, mut create: impl FnMut() -> N) {
        self.slots.reserve(target.saturating_sub(self.slots.len()));
        while self.slots.len() < target {
            self.slots.push(Slot {
                node: create(),
                index: None,
                flags: SlotFlags::empty(),
                rect: Rect::ZERO,
                pass: 0,
            });
        }
    }

    /// Drops slots from the tail until the pool holds `target` slots,
    /// handing each detached node to `release`.
    pub(crate) fn shrink_to(&mut self, target: usize, mut release: impl FnMut(N)) {
        while self.slots.len() > target {
            let Some(slot) = self.slots.pop() else {
                break;
            };
            if let Some(index) = slot.index {
                self.by_index.remove(&index);
            }
            release(slot.node);
        }
    }

    /// Empties the pool, handing every node to `release`.
    pub(crate) fn clear(&mut self, release: impl FnMut(N)) {
        self.shrink_to(0, release);
        self.by_index.clear();
    }

    pub(crate) fn slot_of(&self, index: usize) -> Option<usize> {
        self.by_index.get(&index).copied()
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&Slot<N>> {
        self.slots.get(slot)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Slot<N>> {
        self.slots.get_mut(slot)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Slot<N>> {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Slot<N>> {
        self.slots.iter_mut()
    }

    /// Assigns `index` to `slot`, dropping whatever the slot held before.
    pub(crate) fn assign(&mut self, slot: usize, index: usize) {
        debug_assert!(
            self.by_index.get(&index).is_none_or(|&held| held == slot),
            "index {index} is already held by another slot"
        );
        let Some(entry) = self.slots.get_mut(slot) else {
            return;
        };
        if let Some(previous) = entry.index.replace(index) {
            self.by_index.remove(&previous);
        }
        self.by_index.insert(index, slot);
    }

    /// Clears the assignment of `slot`.
    pub(crate) fn unassign(&mut self, slot: usize) {
        let Some(entry) = self.slots.get_mut(slot) else {
            return;
        };
        if let Some(previous) = entry.index.take() {
            self.by_index.remove(&previous);
        }
    }

    pub(crate) fn assigned_count(&self) -> usize {
        self.by_index.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::NodePool;

    fn pool_of(len: usize) -> NodePool<u32> {
        let mut pool = NodePool::new();
        let mut next = 0;
        pool.grow_to(len, || {
            next += 1;
            next
        });
        pool
    }

    #[test]
    fn grow_and_shrink_from_the_tail() {
        let mut pool = pool_of(4);
        assert_eq!(pool.len(), 4);
        pool.assign(3, 42);

        let mut released = Vec::new();
        pool.shrink_to(2, |node| released.push(node));
        assert_eq!(released, [4, 3]);
        assert_eq!(pool.len(), 2);
        // The map forgets indices held by dropped slots.
        assert_eq!(pool.slot_of(42), None);
    }

    #[test]
    fn reassignment_keeps_the_map_in_sync() {
        let mut pool = pool_of(2);
        pool.assign(0, 10);
        assert_eq!(pool.slot_of(10), Some(0));

        pool.assign(0, 11);
        assert_eq!(pool.slot_of(10), None);
        assert_eq!(pool.slot_of(11), Some(0));
        assert_eq!(pool.assigned_count(), 1);

        pool.unassign(0);
        assert_eq!(pool.slot_of(11), None);
        assert_eq!(pool.get(0).unwrap().index, None);
    }

    #[test]
    fn clear_releases_everything() {
        let mut pool = pool_of(3);
        pool.assign(1, 5);
        let mut released = 0;
        pool.clear(|_| released += 1);
        assert_eq!(released, 3);
        assert!(pool.is_empty());
        assert_eq!(pool.assigned_count(), 0);
    }
}
