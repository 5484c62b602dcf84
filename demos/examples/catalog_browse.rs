// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browse a 20 000 title catalog with a remote control, headlessly.
//!
//! This example shows how to combine:
//! - `tvgrid_engine` for the recycled node pool, driven over a `HeadlessSurface`,
//! - `tvgrid_browse` for the catalog, filtering and focus routing,
//! - `tracing-subscriber` to print the engine's layout and render-pass spans.
//!
//! Run:
//! - `cargo run -p tvgrid_demos --example catalog_browse`
//! - `cargo run -p tvgrid_demos --example catalog_browse -- --verbose` adds per-pass spans.

use std::fmt::Write as _;

use kurbo::Size;
use tracing::{Level, info};
use tvgrid_browse::{
    Catalog, CatalogEntry, FocusRouter, ItemProvider, Navigation, PositionIndicator,
};
use tvgrid_engine::{
    Columns, GridConfig, GridEngine, HeadlessNode, HeadlessSurface, RenderError, RenderItem,
};

#[derive(Clone, Debug)]
struct Title {
    id: u64,
    name: String,
}

impl CatalogEntry for Title {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }
}

/// Paints a poster label into a node, reading the catalog each time.
struct PosterRenderer {
    catalog: Catalog<Title>,
}

impl RenderItem<HeadlessNode> for PosterRenderer {
    fn render_item(&mut self, index: usize, node: &mut HeadlessNode) -> Result<(), RenderError> {
        let title = self.catalog.get(index).ok_or(RenderError::MissingItem)?;
        node.text.clear();
        write!(node.text, "#{} {}", title.id, title.name)
            .map_err(|_| RenderError::Failed("format"))
    }
}

fn catalog() -> Catalog<Title> {
    const GENRES: [&str; 5] = ["Drama", "Comedy", "Thriller", "Documentary", "Western"];
    let titles = (0..20_000_u64)
        .zip(GENRES.iter().cycle())
        .map(|(id, genre)| Title {
            id: 100_000 + id,
            name: format!("{genre} {id}"),
        })
        .collect();
    Catalog::new(titles)
}

fn report(grid: &GridEngine<HeadlessSurface, PosterRenderer>, router: &FocusRouter) {
    let focus = router.focus();
    let position = PositionIndicator::locate(grid, focus)
        .map_or_else(|| String::from("-"), |indicator| indicator.to_string());
    let label = grid
        .node_for_index(focus)
        .map_or("", |node| node.text.as_str());
    let pass = grid.last_pass();
    info!(
        focus,
        label,
        position = %position,
        rendered = pass.map_or(0, |pass| pass.rendered),
        reused = pass.map_or(0, |pass| pass.reused),
        live = grid.live_nodes(),
        pool = grid.pool_len(),
        "frame"
    );
}

fn press(
    grid: &mut GridEngine<HeadlessSurface, PosterRenderer>,
    router: &mut FocusRouter,
    key: Navigation,
    times: usize,
) {
    for _ in 0..times {
        router.navigate(grid, key);
        grid.pump(4);
    }
    report(grid, router);
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    let _ = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .try_init();

    let catalog = catalog();
    let config = GridConfig::grid(Columns::Auto, Size::new(320.0, 480.0))
        .with_item_count(catalog.len())
        .with_buffer_rows(2);
    match serde_json::to_string(&config) {
        Ok(json) => info!(config = %json, "grid configuration"),
        Err(error) => info!(%error, "configuration not serializable"),
    }

    let surface = HeadlessSurface::new(Size::new(1920.0, 1080.0));
    let renderer = PosterRenderer { catalog };
    let mut grid = match GridEngine::new(surface, config, renderer) {
        Ok(grid) => grid,
        Err(error) => {
            tracing::error!(%error, "cannot create grid");
            return;
        }
    };
    let mut router = FocusRouter::new();

    grid.pump(4);
    grid.highlight(router.focus());
    report(&grid, &router);

    press(&mut grid, &mut router, Navigation::Right, 3);
    press(&mut grid, &mut router, Navigation::Down, 25);
    press(&mut grid, &mut router, Navigation::Up, 4);

    // Jump to the last title: scroll, render, then highlight.
    router.focus_index(&mut grid, usize::MAX);
    grid.pump(4);
    report(&grid, &router);

    // A smaller window reflows the same nodes into fewer columns.
    grid.surface_mut().set_viewport(Size::new(1280.0, 720.0));
    grid.on_resize();
    grid.pump(4);
    let rows = grid.layout().map_or(0, |layout| layout.row_count());
    info!(columns = grid.columns(), rows, "resized");
    report(&grid, &router);

    // Filter through the renderer's catalog, then resize the strip to match.
    let count = grid.renderer_mut().catalog.apply_filter("western");
    grid.set_item_count(count);
    router.sync(&mut grid);
    grid.pump(4);
    report(&grid, &router);

    let flushed = grid.flush_hidden();
    let stats = grid.stats();
    info!(
        flushed,
        passes = stats.passes,
        layouts = stats.layouts,
        renders = stats.renders,
        capacity_warnings = stats.capacity_warnings,
        created = grid.surface().nodes_created(),
        "done"
    );
    grid.destroy();
}
