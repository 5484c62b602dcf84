// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A resolved grid layout for one viewport size and item count.

use core::num::NonZeroUsize;

use kurbo::{Point, Rect, Size};

use crate::{Columns, ScrollAlign, VisibleRows, ceil_to_usize, compute_visible_rows};

/// Geometry of a fixed-row grid for a particular viewport.
///
/// Items are laid out row-major: item `i` lives in row `i / columns` and
/// column `i % columns`. Every row has the same height; the cell width is the
/// viewport width divided equally across the resolved columns.
///
/// A `GridLayout` is a plain value. Recompute it with [`GridLayout::resolve`]
/// when the viewport changes, or adjust the item count in place with
/// [`GridLayout::set_item_count`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    viewport: Size,
    columns: NonZeroUsize,
    cell: Size,
    item_count: usize,
    row_count: usize,
}

impl GridLayout {
    /// Resolves a layout for `viewport` and `item_count`.
    ///
    /// - `columns` is resolved against the viewport width (see [`Columns::resolve`]).
    /// - `nominal_cell` supplies the row height and, for [`Columns::Auto`],
    ///   the target cell width.
    ///
    /// Returns `None` when the viewport has zero (or non-finite) width or
    /// height, which usually means the container is hidden or not mounted yet.
    /// It also returns `None` for a non-positive row height.
    #[must_use]
    pub fn resolve(
        viewport: Size,
        item_count: usize,
        columns: Columns,
        nominal_cell: Size,
    ) -> Option<Self> {
        if !is_positive(viewport.width) || !is_positive(viewport.height) {
            return None;
        }
        if !is_positive(nominal_cell.height) {
            return None;
        }
        let columns = columns.resolve(viewport.width, nominal_cell.width);
        let cell = Size::new(viewport.width / columns.get() as f64, nominal_cell.height);
        Some(Self {
            viewport,
            columns,
            cell,
            item_count,
            row_count: item_count.div_ceil(columns.get()),
        })
    }

    /// Returns the viewport this layout was resolved for.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the resolved column count.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Returns the resolved cell size.
    #[must_use]
    pub const fn cell_size(&self) -> Size {
        self.cell
    }

    /// Returns the fixed row height.
    #[must_use]
    pub const fn row_height(&self) -> f64 {
        self.cell.height
    }

    /// Returns the number of items laid out.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `ceil(item_count / columns)`.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Updates the item count, keeping viewport and columns.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.row_count = item_count.div_ceil(self.columns.get());
    }

    /// Total height of the virtual coordinate space: `row_count * row_height`.
    ///
    /// Hosts size their spacer element to this so native scrollbars reflect
    /// the full logical extent.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.row_count as f64 * self.cell.height
    }

    /// The largest scroll offset that still keeps the viewport inside the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_height() - self.viewport.height).max(0.0)
    }

    /// Number of rows needed to cover the viewport: `ceil(viewport_height / row_height)`.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        ceil_to_usize(self.viewport.height / self.cell.height)
    }

    /// Number of display nodes a pool should hold for this layout.
    ///
    /// This is `max(min_pool, ceil((visible_rows + 2 * buffer_rows) * columns * multiplier))`
    /// where `min_pool = max(1, visible_rows * columns)`, so one screen is
    /// always covered even with a tiny multiplier.
    #[must_use]
    pub fn pool_target(&self, buffer_rows: usize, multiplier: f64) -> usize {
        let columns = self.columns.get();
        let visible = self.visible_rows();
        let min_pool = visible.saturating_mul(columns).max(1);
        let band = visible
            .saturating_add(buffer_rows.saturating_mul(2))
            .saturating_mul(columns);
        let inflated = ceil_to_usize(band as f64 * multiplier.max(1.0));
        min_pool.max(inflated)
    }

    /// Returns the row containing `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.columns.get()
    }

    /// Returns the column containing `index`.
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.columns.get()
    }

    /// Returns the top edge of `row` in virtual coordinates.
    #[must_use]
    pub fn row_top(&self, row: usize) -> f64 {
        row as f64 * self.cell.height
    }

    /// Returns the top-left corner of the cell for `index` in virtual coordinates.
    ///
    /// Positions are derived purely from the index and the resolved geometry.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Point {
        Point::new(
            self.column_of(index) as f64 * self.cell.width,
            self.row_top(self.row_of(index)),
        )
    }

    /// Returns the rectangle covered by the cell for `index` in virtual coordinates.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::from_origin_size(self.cell_origin(index), self.cell)
    }

    /// Returns the row band that should be live at `scroll_offset`, including
    /// `buffer_rows` above and below the viewport.
    ///
    /// Returns `None` when there are no rows.
    #[must_use]
    pub fn visible_band(&self, scroll_offset: f64, buffer_rows: usize) -> Option<VisibleRows> {
        compute_visible_rows(
            scroll_offset,
            self.viewport.height,
            self.cell.height,
            buffer_rows,
            self.row_count,
        )
    }

    /// Returns `true` if `row` lies entirely inside the viewport at `scroll_offset`.
    #[must_use]
    pub fn is_row_fully_visible(&self, row: usize, scroll_offset: f64) -> bool {
        let top = self.row_top(row);
        let bottom = top + self.cell.height;
        top >= scroll_offset && bottom <= scroll_offset + self.viewport.height
    }

    /// Computes the scroll offset that brings `row` into view with `align`,
    /// starting from `current`.
    ///
    /// - [`ScrollAlign::Start`] puts the top of the row at the top of the viewport.
    /// - [`ScrollAlign::End`] puts the bottom of the row at the bottom of the viewport.
    /// - [`ScrollAlign::Nearest`] keeps `current` when the row is already fully
    ///   visible, otherwise moves the least distance that shows the whole row.
    ///
    /// The result is never negative. It is not clamped to
    /// [`GridLayout::max_scroll_offset`]; scroll containers clamp on their own.
    #[must_use]
    pub fn scroll_offset_for_row(&self, row: usize, align: ScrollAlign, current: f64) -> f64 {
        let top = self.row_top(row);
        let bottom = top + self.cell.height;
        let viewport = self.viewport.height;
        match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => (bottom - viewport).max(0.0),
            ScrollAlign::Nearest => {
                if top < current {
                    top
                } else if bottom > current + viewport {
                    (bottom - viewport).max(0.0)
                } else {
                    current
                }
            }
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use kurbo::{Point, Rect, Size};

    use super::GridLayout;
    use crate::{Columns, ScrollAlign};

    fn fixed(columns: usize) -> Columns {
        Columns::Fixed(NonZeroUsize::new(columns).unwrap())
    }

    fn poster_grid(width: f64) -> GridLayout {
        GridLayout::resolve(Size::new(width, 800.0), 1000, fixed(5), Size::new(150.0, 200.0))
            .unwrap()
    }

    #[test]
    fn zero_sized_viewport_does_not_resolve() {
        let cell = Size::new(150.0, 200.0);
        assert!(GridLayout::resolve(Size::new(0.0, 800.0), 10, Columns::Auto, cell).is_none());
        assert!(GridLayout::resolve(Size::new(800.0, 0.0), 10, Columns::Auto, cell).is_none());
        assert!(
            GridLayout::resolve(Size::new(800.0, 600.0), 10, Columns::Auto, Size::ZERO).is_none()
        );
    }

    #[test]
    fn cell_width_divides_viewport_equally() {
        let layout = poster_grid(1000.0);
        assert_eq!(layout.columns(), 5);
        assert_eq!(layout.cell_size(), Size::new(200.0, 200.0));

        let layout =
            GridLayout::resolve(Size::new(1000.0, 800.0), 10, Columns::Auto, Size::new(300.0, 90.0))
                .unwrap();
        assert_eq!(layout.columns(), 3);
        assert!((layout.cell_size().width * 3.0 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn rows_and_content_height() {
        let mut layout = poster_grid(1000.0);
        assert_eq!(layout.row_count(), 200);
        assert_eq!(layout.content_height(), 40_000.0);
        assert_eq!(layout.max_scroll_offset(), 39_200.0);

        layout.set_item_count(1001);
        assert_eq!(layout.row_count(), 201);
        layout.set_item_count(0);
        assert_eq!(layout.row_count(), 0);
        assert_eq!(layout.content_height(), 0.0);
        assert_eq!(layout.max_scroll_offset(), 0.0);
    }

    #[test]
    fn pool_target_covers_band_and_multiplier() {
        let layout = poster_grid(1000.0);
        assert_eq!(layout.visible_rows(), 4);
        // (4 + 2) rows * 5 columns.
        assert_eq!(layout.pool_target(1, 1.0), 30);
        assert_eq!(layout.pool_target(1, 1.5), 45);
        // Zero buffer still covers one full screen.
        assert_eq!(layout.pool_target(0, 1.0), 20);
        // Multipliers below one are treated as one.
        assert_eq!(layout.pool_target(0, 0.25), 20);
    }

    #[test]
    fn partial_rows_round_visible_rows_up() {
        let layout =
            GridLayout::resolve(Size::new(600.0, 450.0), 50, fixed(3), Size::new(200.0, 200.0))
                .unwrap();
        assert_eq!(layout.visible_rows(), 3);
        assert_eq!(layout.pool_target(0, 1.0), 9);
    }

    #[test]
    fn cell_geometry_follows_index() {
        let layout = poster_grid(1000.0);
        assert_eq!(layout.row_of(7), 1);
        assert_eq!(layout.column_of(7), 2);
        assert_eq!(layout.cell_origin(7), Point::new(400.0, 200.0));
        assert_eq!(layout.cell_rect(0), Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(layout.cell_rect(999), Rect::new(800.0, 39_800.0, 1000.0, 40_000.0));
    }

    #[test]
    fn reflow_changes_positions_not_indices() {
        let wide = poster_grid(1000.0);
        let narrow =
            GridLayout::resolve(Size::new(600.0, 800.0), 1000, Columns::Auto, Size::new(200.0, 200.0))
                .unwrap();
        assert_eq!(narrow.columns(), 3);
        assert_eq!(narrow.row_count(), 334);
        assert_eq!(wide.cell_origin(7), Point::new(400.0, 200.0));
        assert_eq!(narrow.cell_origin(7), Point::new(200.0, 400.0));
    }

    #[test]
    fn scroll_alignment() {
        let layout = poster_grid(1000.0);
        assert_eq!(layout.scroll_offset_for_row(10, ScrollAlign::Start, 0.0), 2000.0);
        assert_eq!(layout.scroll_offset_for_row(10, ScrollAlign::End, 0.0), 1400.0);
        assert_eq!(layout.scroll_offset_for_row(0, ScrollAlign::End, 0.0), 0.0);

        // Already visible: no movement.
        assert_eq!(layout.scroll_offset_for_row(2, ScrollAlign::Nearest, 0.0), 0.0);
        // Below: align bottom.
        assert_eq!(layout.scroll_offset_for_row(4, ScrollAlign::Nearest, 0.0), 200.0);
        // Above: align top.
        assert_eq!(layout.scroll_offset_for_row(1, ScrollAlign::Nearest, 500.0), 200.0);
    }

    #[test]
    fn full_visibility_query() {
        let layout = poster_grid(1000.0);
        assert!(layout.is_row_fully_visible(0, 0.0));
        assert!(layout.is_row_fully_visible(3, 0.0));
        assert!(!layout.is_row_fully_visible(4, 0.0));
        assert!(!layout.is_row_fully_visible(0, 10.0));
    }
}
