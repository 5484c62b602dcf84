// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional moves over a row-major grid of indices.

/// Direction of a remote-control key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the row above.
    Up,
    /// Move to the row below.
    Down,
    /// Move to the previous index.
    Left,
    /// Move to the next index.
    Right,
}

/// Index arithmetic for directional moves in a grid of `item_count` items
/// laid out `columns` per row.
///
/// - Left and right step by one and stop at the ends of the item range.
/// - Up and down step by `columns`. A move that would leave the range lands
///   on the nearest boundary index instead: the first item going up, the
///   last item going down, even if that item sits in a shorter last row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridPolicy {
    /// Items per row, at least one.
    pub columns: usize,
    /// Number of items.
    pub item_count: usize,
}

impl GridPolicy {
    /// Creates a policy; `columns` is raised to at least one.
    #[must_use]
    pub fn new(columns: usize, item_count: usize) -> Self {
        Self {
            columns: columns.max(1),
            item_count,
        }
    }

    /// Returns the index reached from `origin` by moving in `direction`.
    ///
    /// An `origin` past the end (for example after the list was filtered)
    /// is treated as the last item. Returns `None` for an empty grid.
    #[must_use]
    pub fn next(&self, origin: usize, direction: Navigation) -> Option<usize> {
        let last = self.item_count.checked_sub(1)?;
        let origin = origin.min(last);
        let columns = self.columns.max(1);
        let target = match direction {
            Navigation::Left => origin.saturating_sub(1),
            Navigation::Right => (origin + 1).min(last),
            Navigation::Up => origin.saturating_sub(columns),
            Navigation::Down => origin.saturating_add(columns).min(last),
        };
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridPolicy, Navigation};

    #[test]
    fn horizontal_moves_stop_at_the_ends() {
        let policy = GridPolicy::new(5, 12);
        assert_eq!(policy.next(0, Navigation::Left), Some(0));
        assert_eq!(policy.next(11, Navigation::Right), Some(11));
        // Rows wrap: the end of one row is next to the start of the following one.
        assert_eq!(policy.next(4, Navigation::Right), Some(5));
        assert_eq!(policy.next(5, Navigation::Left), Some(4));
    }

    #[test]
    fn vertical_moves_snap_to_the_boundary() {
        let policy = GridPolicy::new(5, 12);
        assert_eq!(policy.next(3, Navigation::Down), Some(8));
        // Row 1 column 3 has nothing below it; the last item is taken instead.
        assert_eq!(policy.next(8, Navigation::Down), Some(11));
        assert_eq!(policy.next(11, Navigation::Down), Some(11));
        assert_eq!(policy.next(7, Navigation::Up), Some(2));
        assert_eq!(policy.next(2, Navigation::Up), Some(0));
    }

    #[test]
    fn stale_origin_and_empty_grid() {
        let policy = GridPolicy::new(3, 4);
        assert_eq!(policy.next(40, Navigation::Left), Some(2));
        assert_eq!(GridPolicy::new(3, 0).next(0, Navigation::Down), None);
        assert_eq!(GridPolicy::new(0, 2).columns, 1);
    }
}
