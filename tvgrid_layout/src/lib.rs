// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tvgrid Layout: fixed-row grid geometry for windowed lists.
//!
//! This crate holds the pure arithmetic behind a windowed (virtualized) grid:
//! a strip of `0..len` items laid out row-major into a fixed number of
//! columns, each row the same height. It does not own display nodes and does
//! not know about scrolling containers; it only answers questions such as
//! "which rows should be live at this scroll offset?" or "where does item
//! `i` sit in virtual coordinates?".
//!
//! The core concepts are:
//!
//! - [`Columns`]: either an explicit column count or `Auto`, which fits as
//!   many nominal cell widths into the viewport as possible (minimum one).
//! - [`GridLayout`]: a resolved layout for a given viewport and item count.
//!   Cell width is always the viewport width divided equally across the
//!   resolved columns, so columns tile exactly.
//! - [`VisibleRows`]: an inclusive row band, including buffer rows, with
//!   helpers to turn it into a contiguous index range.
//! - [`ScrollAlign`]: how to choose a scroll offset that brings a row into
//!   view.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use kurbo::Size;
//! use tvgrid_layout::{Columns, GridLayout};
//!
//! // 1000 posters in five columns, 200 logical pixels per row.
//! let columns = Columns::Fixed(NonZeroUsize::new(5).unwrap());
//! let layout = GridLayout::resolve(
//!     Size::new(1000.0, 800.0),
//!     1000,
//!     columns,
//!     Size::new(150.0, 200.0),
//! )
//! .unwrap();
//!
//! assert_eq!(layout.visible_rows(), 4);
//! assert_eq!(layout.row_count(), 200);
//!
//! // One buffer row above and below the viewport.
//! let band = layout.visible_band(0.0, 1).unwrap();
//! assert_eq!((band.first, band.last), (0, 5));
//! assert_eq!(band.index_range(&layout), 0..30);
//! ```
//!
//! All extents and offsets live in the scroll container's coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative.
//!
//! This crate is `no_std`.

#![no_std]

mod columns;
mod layout;
mod math;
mod scroll;
mod visible;

pub use columns::Columns;
pub use layout::GridLayout;
pub use math::{ceil_to_usize, floor_to_usize};
pub use scroll::ScrollAlign;
pub use visible::{VisibleRows, compute_visible_rows};
