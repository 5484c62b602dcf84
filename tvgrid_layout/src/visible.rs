// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible row bands.

use core::ops::{Range, RangeInclusive};

use crate::{GridLayout, floor_to_usize};

/// An inclusive band of rows that should have live display nodes.
///
/// Always satisfies `first <= last < row_count` for the layout it was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRows {
    /// First live row (inclusive).
    pub first: usize,
    /// Last live row (inclusive).
    pub last: usize,
}

impl VisibleRows {
    /// Returns `true` if `row` is inside the band.
    #[must_use]
    pub const fn contains_row(&self, row: usize) -> bool {
        row >= self.first && row <= self.last
    }

    /// Number of rows in the band; never zero.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.last - self.first + 1
    }

    /// Returns the band as an inclusive row range.
    #[must_use]
    pub const fn rows(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    /// Returns the contiguous range of item indices covered by the band.
    ///
    /// The range is clipped to the layout's item count, so a partially
    /// filled last row contributes only its existing items.
    #[must_use]
    pub fn index_range(&self, layout: &GridLayout) -> Range<usize> {
        let columns = layout.columns();
        let start = self.first.saturating_mul(columns).min(layout.item_count());
        let end = self
            .last
            .saturating_add(1)
            .saturating_mul(columns)
            .min(layout.item_count());
        start..end
    }
}

/// Compute the live row band for a fixed-row grid.
///
/// - `scroll_offset`: top of the viewport in virtual coordinates (`>= 0`).
/// - `viewport_height`: height of the viewport (`>= 0`).
/// - `row_height`: fixed row height (`> 0`).
/// - `buffer_rows`: extra rows kept live above and below the viewport.
/// - `row_count`: number of rows in the grid.
///
/// The band is
/// `[max(0, floor(S / Rh) - B), min(row_count - 1, floor((S + H) / Rh) + B)]`.
/// If the scroll offset sits past the content (for example right after the
/// item count shrank), `first` is clamped down to `last` so the band is
/// never inverted.
///
/// Returns `None` when there are no rows or `row_height` is not positive.
#[must_use]
pub fn compute_visible_rows(
    scroll_offset: f64,
    viewport_height: f64,
    row_height: f64,
    buffer_rows: usize,
    row_count: usize,
) -> Option<VisibleRows> {
    if row_count == 0 || row_height.is_nan() || row_height <= 0.0 {
        return None;
    }
    let scroll_offset = scroll_offset.max(0.0);
    let viewport_height = viewport_height.max(0.0);

    let last_row = row_count - 1;
    let last = floor_to_usize((scroll_offset + viewport_height) / row_height)
        .saturating_add(buffer_rows)
        .min(last_row);
    let first = floor_to_usize(scroll_offset / row_height)
        .saturating_sub(buffer_rows)
        .min(last);
    Some(VisibleRows { first, last })
}
