// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tvgrid Engine: a windowed grid over a fixed pool of recycled display nodes.
//!
//! This crate renders an arbitrarily large, index-addressed collection (tens of
//! thousands of catalog entries, say) inside a scrolling container while keeping
//! only as many live display nodes as the viewport needs, plus a few buffer
//! rows. As the viewport moves, nodes that scroll out of the band are
//! reassigned to the indices scrolling in.
//!
//! The core concepts are:
//!
//! - [`Surface`]: the host boundary. A surface measures the container, owns its
//!   scroll offset and spacer, creates and releases nodes, and schedules
//!   display frames and retry timers.
//! - [`RenderItem`]: a caller-supplied renderer that paints item `index` into a
//!   node. Any `FnMut(usize, &mut Node) -> Result<(), RenderError>` qualifies.
//! - [`GridConfig`]: cell size, columns, buffer rows and pool headroom.
//! - [`GridEngine`]: owns the pool and runs the render/recycle pass. It exposes
//!   the operations a remote-control focus router needs:
//!   [`columns`](GridEngine::columns),
//!   [`ensure_visible_then`](GridEngine::ensure_visible_then),
//!   [`highlight`](GridEngine::highlight), [`refresh`](GridEngine::refresh),
//!   [`scroll_to_index`](GridEngine::scroll_to_index) and
//!   [`destroy`](GridEngine::destroy).
//! - [`HeadlessSurface`]: an in-memory surface for tests and demos.
//!
//! Geometry lives in the `tvgrid_layout` crate and is re-exported here.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::fmt::Write as _;
//! use core::num::NonZeroUsize;
//! use kurbo::Size;
//! use tvgrid_engine::{Columns, GridConfig, GridEngine, HeadlessNode, HeadlessSurface, RenderError};
//!
//! let surface = HeadlessSurface::new(Size::new(1000.0, 800.0));
//! let config = GridConfig::grid(
//!     Columns::Fixed(NonZeroUsize::new(5).unwrap()),
//!     Size::new(150.0, 200.0),
//! )
//! .with_item_count(1000)
//! .with_buffer_rows(1)
//! .with_pool_multiplier(1.0);
//!
//! let renderer = |index: usize, node: &mut HeadlessNode| -> Result<(), RenderError> {
//!     node.text.clear();
//!     write!(node.text, "poster {index}").map_err(|_| RenderError::Failed("format"))
//! };
//! let mut grid = GridEngine::new(surface, config, renderer).unwrap();
//!
//! // Nothing is rendered until the host delivers the requested frame.
//! assert_eq!(grid.live_nodes(), 0);
//! grid.pump(8);
//! assert_eq!(grid.live_nodes(), 30);
//!
//! // A remote "down" far below the band: scroll, render, then highlight.
//! grid.ensure_visible_then(999, |grid| grid.highlight(999));
//! grid.pump(8);
//! assert!(grid.slot_for_index(999).unwrap().focused);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `tracing`: debug spans around layouts and render passes, warnings for
//!   undersized pools and failing renderers.
//! - `serde`: `Serialize`/`Deserialize` for [`GridConfig`], [`Columns`] and [`Positioning`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod headless;
mod pool;
mod report;
mod surface;

pub use config::{GridConfig, Positioning};
pub use engine::{GridEngine, GridEngineBuilder};
pub use error::{ConfigError, RenderError};
pub use headless::{HeadlessNode, HeadlessSurface};
pub use pool::SlotView;
pub use report::{EngineStats, PassReport};
pub use surface::{RETRY_DELAY, RenderItem, Surface};
pub use tvgrid_layout::{Columns, GridLayout, ScrollAlign, VisibleRows};
