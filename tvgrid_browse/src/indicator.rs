// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use tvgrid_engine::{GridEngine, Surface};

/// Where the focused item sits, in the grid and in the node pool.
///
/// Displays as `row/total_rows  pool_row/pool_rows`. Totals are whole rows
/// (`floor(count / columns)`), so a partially filled last row shows its own
/// number as the total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionIndicator {
    /// Row of the item.
    pub row: usize,
    /// Number of full rows of items.
    pub total_rows: usize,
    /// Row of the pool slot showing the item, counting slots `columns` per row.
    pub pool_row: usize,
    /// Number of full rows of pool slots.
    pub pool_rows: usize,
}

impl PositionIndicator {
    /// Locates `index` in `grid`. Returns `None` if no node currently shows it.
    #[must_use]
    pub fn locate<S: Surface, R>(grid: &GridEngine<S, R>, index: usize) -> Option<Self> {
        let slot = grid.slot_for_index(index)?;
        let columns = grid.columns().max(1);
        Some(Self {
            row: index / columns,
            total_rows: grid.item_count() / columns,
            pool_row: slot.slot / columns,
            pool_rows: grid.pool_len() / columns,
        })
    }
}

impl fmt::Display for PositionIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}  {}/{}",
            self.row, self.total_rows, self.pool_row, self.pool_rows
        )
    }
}
