// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tvgrid Browse: the collaborators around a [`tvgrid_engine::GridEngine`].
//!
//! - **Item providers** ([`ItemProvider`], [`Catalog`]): index-addressed data
//!   for renderers, with a filtered view and an id lookup.
//! - **Focus routing** ([`Navigation`], [`GridPolicy`], [`FocusRouter`]): turns
//!   remote-control key presses into index moves and asks the engine to bring
//!   the new index into view before highlighting it.
//! - **Position indicator** ([`PositionIndicator`]): where the focused item sits
//!   in the grid and in the node pool.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use tvgrid_browse::{Catalog, CatalogEntry, FocusRouter, ItemProvider, Navigation};
//! use tvgrid_engine::{GridConfig, GridEngine, HeadlessNode, HeadlessSurface, RenderError};
//!
//! struct Channel(u32, &'static str);
//!
//! impl CatalogEntry for Channel {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.0
//!     }
//!     fn title(&self) -> &str {
//!         self.1
//!     }
//! }
//!
//! let mut channels = Catalog::new(vec![
//!     Channel(1, "News 24"),
//!     Channel(2, "Sports One"),
//!     Channel(3, "Sports Two"),
//! ]);
//!
//! let config = GridConfig::list(80.0).with_item_count(channels.len());
//! let surface = HeadlessSurface::new(Size::new(600.0, 400.0));
//! let renderer = |_: usize, _: &mut HeadlessNode| -> Result<(), RenderError> { Ok(()) };
//! let mut grid = GridEngine::new(surface, config, renderer).unwrap();
//! grid.pump(8);
//!
//! let mut router = FocusRouter::new();
//! router.navigate(&mut grid, Navigation::Down);
//! assert_eq!(router.focus(), 1);
//!
//! // Filtering shrinks the strip; focus follows into range.
//! grid.set_item_count(channels.apply_filter("sports"));
//! router.sync(&mut grid);
//! grid.pump(8);
//! assert_eq!(grid.highlighted(), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod indicator;
mod navigation;
mod router;

pub use catalog::{Catalog, CatalogEntry, ItemProvider};
pub use indicator::PositionIndicator;
pub use navigation::{GridPolicy, Navigation};
pub use router::FocusRouter;
