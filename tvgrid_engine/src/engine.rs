// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowed grid engine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size};
use tvgrid_layout::{Columns, GridLayout, ScrollAlign, VisibleRows};

use crate::pool::{NodePool, Slot, SlotFlags, SlotView};
use crate::{
    ConfigError, EngineStats, GridConfig, PassReport, RETRY_DELAY, RenderItem, Surface,
};

/// Callback queued by [`GridEngine::ensure_visible_then`] for the next completed pass.
type AfterRender<S, R> = Box<dyn FnOnce(&mut GridEngine<S, R>)>;

/// A windowed grid over `0..item_count` items backed by a fixed pool of nodes.
///
/// The engine keeps only as many display nodes as the viewport (plus buffer
/// rows) needs and recycles them as the container scrolls. Content is painted
/// by a caller-supplied [`RenderItem`]; placement, sizing, visibility and
/// focus marking of nodes are owned by the engine alone.
///
/// Work is coalesced to one render pass per display frame: scroll, resize,
/// [`refresh`](Self::refresh) and navigation only *schedule* a pass through
/// [`Surface::request_frame`]. The host runs it by calling
/// [`on_frame`](Self::on_frame). A pass always reads the scroll offset and
/// item count current at the time it runs.
///
/// After [`destroy`](Self::destroy) (or drop) every operation is a harmless no-op.
pub struct GridEngine<S: Surface, R> {
    surface: S,
    renderer: R,
    state: Option<GridState<S::Node>>,
    after_render: Option<AfterRender<S, R>>,
}

impl<S, R> fmt::Debug for GridEngine<S, R>
where
    S: Surface + fmt::Debug,
    S::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("surface", &self.surface)
            .field("state", &self.state)
            .field("after_render", &self.after_render.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`GridEngine`].
#[derive(Debug)]
pub struct GridEngineBuilder<S, R> {
    surface: S,
    config: GridConfig,
    renderer: Option<R>,
}

impl<S: Surface, R: RenderItem<S::Node>> GridEngineBuilder<S, R> {
    /// Starts a builder for `surface` with [`GridConfig::default`].
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            config: GridConfig::default(),
            renderer: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the item count.
    #[must_use]
    pub fn item_count(mut self, item_count: usize) -> Self {
        self.config.item_count = item_count;
        self
    }

    /// Sets the renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Creates the engine.
    pub fn build(self) -> Result<GridEngine<S, R>, ConfigError> {
        let renderer = self.renderer.ok_or(ConfigError::MissingRenderer)?;
        GridEngine::new(self.surface, self.config, renderer)
    }
}

impl<S: Surface, R: RenderItem<S::Node>> GridEngine<S, R> {
    /// Creates an engine on `surface`.
    ///
    /// This prepares the container, inserts the spacer, starts listening for
    /// scroll and resize events, computes the initial layout (if the
    /// container already has a size) and schedules the first render pass.
    pub fn new(mut surface: S, config: GridConfig, renderer: R) -> Result<Self, ConfigError> {
        if !surface.is_mountable() {
            return Err(ConfigError::NotMountable);
        }
        config.validate()?;

        surface.prepare();
        surface.insert_spacer();
        surface.listen();

        let mut state = GridState::new(config);
        state.relayout(&mut surface);
        state.schedule(&mut surface);

        Ok(Self {
            surface,
            renderer,
            state: Some(state),
            after_render: None,
        })
    }

    /// Starts a [`GridEngineBuilder`].
    #[must_use]
    pub fn builder(surface: S) -> GridEngineBuilder<S, R> {
        GridEngineBuilder::new(surface)
    }

    /// Runs the render pass requested through [`Surface::request_frame`].
    pub fn on_frame(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.frame_pending = false;
        if state.render_pass(&mut self.surface, &mut self.renderer) {
            self.run_after_render();
        }
    }

    /// Handles the retry requested through [`Surface::request_retry`].
    pub fn on_retry(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.retry_pending = false;
        state.schedule(&mut self.surface);
    }

    /// Handles a container scroll.
    pub fn on_scroll(&mut self) {
        self.schedule_render();
    }

    /// Handles a viewport resize: recomputes layout and schedules a pass.
    pub fn on_resize(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.relayout(&mut self.surface);
        state.schedule(&mut self.surface);
    }

    /// Forces a render pass on the next frame.
    ///
    /// Every live node is treated as stale, so the pass re-renders each
    /// visible index onto the node already showing it. Use this when item
    /// data changed without a change in count.
    pub fn refresh(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.invalidate();
        state.schedule(&mut self.surface);
    }

    /// Changes the number of items.
    ///
    /// Row count and spacer height are updated immediately; nodes are
    /// re-rendered on the next pass.
    pub fn set_item_count(&mut self, item_count: usize) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.config.item_count = item_count;
        if let Some(layout) = state.layout.as_mut() {
            layout.set_item_count(item_count);
        }
        if let Some(layout) = state.layout {
            state.sync_spacer(&mut self.surface, &layout);
        }
        state.invalidate();
        state.schedule(&mut self.surface);
    }

    /// Brings `index` into view.
    ///
    /// Same as [`ensure_visible_then`](Self::ensure_visible_then) without a
    /// callback. Any callback still pending from an earlier call is dropped
    /// when this needs to scroll outside the rendered band.
    pub fn ensure_visible(&mut self, index: usize) {
        self.ensure_visible_with(index, None);
    }

    /// Brings `index` into view, then runs `callback`.
    ///
    /// - Out of bounds: `callback` runs immediately and nothing scrolls.
    /// - Row inside the rendered band: the scroll offset moves the minimum
    ///   needed to show the whole row (not at all if it is already fully
    ///   visible) and `callback` runs synchronously.
    /// - Row outside the rendered band: the container scrolls so the row sits
    ///   at the nearest viewport edge, and `callback` runs once right after
    ///   the next completed render pass, when `index` has a live node.
    ///
    /// Only one callback can be pending; a later call replaces an unfired one.
    pub fn ensure_visible_then<F>(&mut self, index: usize, callback: F)
    where
        F: FnOnce(&mut Self) + 'static,
    {
        self.ensure_visible_with(index, Some(Box::new(callback)));
    }

    fn ensure_visible_with(&mut self, index: usize, callback: Option<AfterRender<S, R>>) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if index >= state.config.item_count {
            if let Some(callback) = callback {
                callback(self);
            }
            return;
        }

        let Some(layout) = state.layout else {
            // Not measured yet: scroll once the first layout exists.
            state.pending_scroll = Some(PendingScroll::Reveal(index));
            state.schedule(&mut self.surface);
            self.after_render = callback;
            return;
        };
        state.pending_scroll = None;

        let row = layout.row_of(index);
        let rendered = state.visible.is_some_and(|band| band.contains_row(row))
            && state.pool.slot_of(index).is_some();
        if rendered {
            let scroll = self.surface.scroll_offset();
            let target = layout.scroll_offset_for_row(row, ScrollAlign::Nearest, scroll);
            if target != scroll {
                self.surface.set_scroll_offset(target);
                state.schedule(&mut self.surface);
            }
            if let Some(callback) = callback {
                callback(self);
            }
        } else {
            reveal_row(&mut self.surface, &layout, row);
            state.schedule(&mut self.surface);
            self.after_render = callback;
        }
    }

    /// Scrolls so the row containing `index` starts at the top of the viewport.
    ///
    /// `index` is clamped to the item range. Focus is not touched. Before the
    /// container has been measured, the scroll waits for the first layout and
    /// replaces any reveal queued earlier.
    pub fn scroll_to_index(&mut self, index: usize) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(layout) = state.layout else {
            state.pending_scroll = Some(PendingScroll::Top(index));
            state.schedule(&mut self.surface);
            return;
        };
        state.pending_scroll = None;
        self.surface.set_scroll_offset(row_top_of(&layout, index));
        state.schedule(&mut self.surface);
    }

    fn schedule_render(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.schedule(&mut self.surface);
        }
    }

    fn run_after_render(&mut self) {
        if let Some(callback) = self.after_render.take() {
            callback(self);
        }
    }
}

impl<S: Surface, R> GridEngine<S, R> {
    /// Marks the node showing `index` as focused and unmarks every other node.
    ///
    /// If no visible node currently holds `index` (for example because the
    /// pass scheduled by [`ensure_visible_then`](GridEngine::ensure_visible_then)
    /// has not run yet), nothing is marked now. The engine still remembers
    /// `index`, and whichever node is later assigned to it is marked focused.
    pub fn highlight(&mut self, index: usize) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.highlighted = Some(index);
        for slot in state.pool.iter_mut() {
            if slot.flags.contains(SlotFlags::FOCUSED) {
                slot.flags.remove(SlotFlags::FOCUSED);
                self.surface.set_node_focused(&mut slot.node, false);
            }
        }
        if let Some(slot) = state.pool.slot_of(index).and_then(|n| state.pool.get_mut(n)) {
            if slot.flags.contains(SlotFlags::VISIBLE) {
                slot.flags.insert(SlotFlags::FOCUSED);
                self.surface.set_node_focused(&mut slot.node, true);
            }
        }
    }

    /// Releases heavy resources held by hidden nodes. Returns how many nodes were flushed.
    pub fn flush_hidden(&mut self) -> usize {
        let Some(state) = self.state.as_mut() else {
            return 0;
        };
        let mut flushed = 0;
        for slot in state.pool.iter_mut() {
            if !slot.flags.contains(SlotFlags::VISIBLE) {
                self.surface.flush_node(&mut slot.node);
                flushed += 1;
            }
        }
        flushed
    }

    /// Tears the engine down.
    ///
    /// Cancels any pending frame or retry, stops listening, releases every
    /// pool node and the spacer. Idempotent; afterwards every other
    /// operation is a no-op.
    pub fn destroy(&mut self) {
        let Some(mut state) = self.state.take() else {
            return;
        };
        if state.frame_pending {
            self.surface.cancel_frame();
        }
        if state.retry_pending {
            self.surface.cancel_retry();
        }
        self.surface.unlisten();
        let surface = &mut self.surface;
        state.pool.clear(|node| surface.release_node(node));
        self.surface.remove_spacer();
        self.after_render = None;

        #[cfg(feature = "tracing")]
        tracing::debug!(passes = state.stats.passes, "grid engine destroyed");
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state.is_none()
    }

    /// Currently resolved column count, or `0` after destroy.
    ///
    /// Before the container has been measured this is the configured count
    /// (one for [`Columns::Auto`]).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.state.as_ref().map_or(0, GridState::columns)
    }

    /// Current item count, or `0` after destroy.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.config.item_count)
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> Option<&GridConfig> {
        self.state.as_ref().map(|state| &state.config)
    }

    /// The last successfully resolved layout.
    #[must_use]
    pub fn layout(&self) -> Option<GridLayout> {
        self.state.as_ref().and_then(|state| state.layout)
    }

    /// Row band covered by the last render pass.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRows> {
        self.state.as_ref().and_then(|state| state.visible)
    }

    /// Number of nodes in the pool.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.pool.len())
    }

    /// Pool size computed by the last layout.
    #[must_use]
    pub fn pool_target(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.pool_target)
    }

    /// Number of pool nodes currently assigned to an item.
    #[must_use]
    pub fn live_nodes(&self) -> usize {
        self.state
            .as_ref()
            .map_or(0, |state| state.pool.assigned_count())
    }

    /// Read-only views of every pool slot, in pool order.
    pub fn slots(&self) -> impl Iterator<Item = SlotView> + '_ {
        self.state
            .iter()
            .flat_map(|state| state.pool.iter().enumerate().map(|(n, slot)| slot.view(n)))
    }

    /// The slot currently assigned to `index`, if any.
    #[must_use]
    pub fn slot_for_index(&self, index: usize) -> Option<SlotView> {
        let state = self.state.as_ref()?;
        let n = state.pool.slot_of(index)?;
        state.pool.get(n).map(|slot| slot.view(n))
    }

    /// The node currently assigned to `index`, if any.
    #[must_use]
    pub fn node_for_index(&self, index: usize) -> Option<&S::Node> {
        let state = self.state.as_ref()?;
        let n = state.pool.slot_of(index)?;
        state.pool.get(n).map(|slot| &slot.node)
    }

    /// Index passed to the most recent [`highlight`](Self::highlight).
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.state.as_ref().and_then(|state| state.highlighted)
    }

    /// Returns `true` if a render pass has been requested and not yet run.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.frame_pending)
    }

    /// Returns `true` if an [`ensure_visible_then`](GridEngine::ensure_visible_then)
    /// callback is waiting for a render pass.
    #[must_use]
    pub fn has_pending_callback(&self) -> bool {
        self.after_render.is_some()
    }

    /// Report of the most recent completed render pass.
    #[must_use]
    pub fn last_pass(&self) -> Option<&PassReport> {
        self.state.as_ref().and_then(|state| state.last_pass.as_ref())
    }

    /// Running counters. All zero after destroy.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.state
            .as_ref()
            .map_or_else(EngineStats::default, |state| state.stats)
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, for example to scroll it from host code.
    ///
    /// Nodes are not reachable through the surface; they stay owned by the pool.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<S: Surface, R> Drop for GridEngine<S, R> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Scroll queued before the container was first measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PendingScroll {
    /// Bring the row of the index to the nearest viewport edge.
    Reveal(usize),
    /// Put the row of the index at the top of the viewport.
    Top(usize),
}

/// Everything that exists only between create and destroy.
#[derive(Debug)]
struct GridState<N> {
    config: GridConfig,
    /// Viewport size seen by the last layout attempt.
    measured: Size,
    layout: Option<GridLayout>,
    pool: NodePool<N>,
    pool_target: usize,
    /// Band size that outgrew the computed target at the current geometry.
    band_floor: usize,
    visible: Option<VisibleRows>,
    spacer_height: Option<f64>,
    highlighted: Option<usize>,
    pending_scroll: Option<PendingScroll>,
    frame_pending: bool,
    retry_pending: bool,
    /// Scratch list of recyclable slots, reused across passes.
    free: Vec<usize>,
    last_pass: Option<PassReport>,
    stats: EngineStats,
}

impl<N> GridState<N> {
    fn new(config: GridConfig) -> Self {
        Self {
            config,
            measured: Size::ZERO,
            layout: None,
            pool: NodePool::new(),
            pool_target: 0,
            band_floor: 0,
            visible: None,
            spacer_height: None,
            highlighted: None,
            pending_scroll: None,
            frame_pending: false,
            retry_pending: false,
            free: Vec::new(),
            last_pass: None,
            stats: EngineStats::default(),
        }
    }

    fn columns(&self) -> usize {
        match (self.layout, self.config.columns) {
            (Some(layout), _) => layout.columns(),
            (None, Columns::Fixed(columns)) => columns.get(),
            (None, Columns::Auto) => 1,
        }
    }

    fn schedule<S: Surface<Node = N>>(&mut self, surface: &mut S) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;
        surface.request_frame();
    }

    fn schedule_retry<S: Surface<Node = N>>(&mut self, surface: &mut S) {
        if self.retry_pending {
            return;
        }
        self.retry_pending = true;
        self.stats.retries += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(delay = ?RETRY_DELAY, "container not measured; retrying");

        surface.request_retry(RETRY_DELAY);
    }

    fn invalidate(&mut self) {
        for slot in self.pool.iter_mut() {
            if slot.index.is_some() {
                slot.flags.insert(SlotFlags::STALE);
            }
        }
    }

    fn sync_spacer<S: Surface<Node = N>>(&mut self, surface: &mut S, layout: &GridLayout) {
        let height = layout.content_height();
        if self.spacer_height != Some(height) {
            self.spacer_height = Some(height);
            surface.set_content_height(height);
        }
    }

    /// Measures the container and, if it has an area, resolves the layout,
    /// resizes the pool to the new target and re-places every node.
    ///
    /// Returns `false` (leaving the previous layout in place) when the
    /// container measures zero.
    fn relayout<S: Surface<Node = N>>(&mut self, surface: &mut S) -> bool {
        let viewport = surface.viewport();
        self.measured = viewport;
        let Some(layout) = GridLayout::resolve(
            viewport,
            self.config.item_count,
            self.config.columns,
            self.config.cell_size,
        ) else {
            return false;
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_layout",
            width = viewport.width,
            height = viewport.height,
            columns = layout.columns(),
            rows = layout.row_count()
        )
        .entered();

        if let Some(old) = self.layout {
            // Row numbers of the old band name other indices now.
            if old.columns() != layout.columns() {
                self.visible = None;
            }
            if old.columns() != layout.columns() || old.visible_rows() != layout.visible_rows() {
                self.band_floor = 0;
            }
        }
        self.layout = Some(layout);
        self.stats.layouts += 1;

        let target = layout
            .pool_target(self.config.buffer_rows, self.config.pool_multiplier)
            .max(self.band_floor);
        self.pool_target = target;
        if self.pool.len() < target {
            self.pool.grow_to(target, || surface.create_node());
        } else {
            self.pool.shrink_to(target, |node| surface.release_node(node));
        }

        // Reflow: assigned nodes follow their index, the rest just pick up the new cell size.
        let cell = layout.cell_size();
        let positioning = self.config.positioning;
        for slot in self.pool.iter_mut() {
            slot.rect = match slot.index {
                Some(index) => layout.cell_rect(index),
                None => Rect::from_origin_size(slot.rect.origin(), cell),
            };
            surface.place_node(&mut slot.node, slot.rect, positioning);
        }

        self.sync_spacer(surface, &layout);
        true
    }

    /// Runs one render pass. Returns `true` if the pass completed with every
    /// cell of the band shown.
    ///
    /// A pass that ran out of nodes grows the pool to fit the band through a
    /// fresh layout and schedules another pass.
    fn render_pass<S, R>(&mut self, surface: &mut S, renderer: &mut R) -> bool
    where
        S: Surface<Node = N>,
        R: RenderItem<N>,
    {
        let viewport = surface.viewport();
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            self.schedule_retry(surface);
            return false;
        }
        if viewport != self.measured || self.layout.is_none() {
            self.relayout(surface);
        }
        if self.pool.is_empty() {
            self.relayout(surface);
            self.schedule(surface);
            return false;
        }
        let Some(layout) = self.layout else {
            self.schedule(surface);
            return false;
        };

        match self.pending_scroll.take() {
            Some(PendingScroll::Reveal(index)) if index < layout.item_count() => {
                reveal_row(surface, &layout, layout.row_of(index));
            }
            Some(PendingScroll::Top(index)) => {
                surface.set_scroll_offset(row_top_of(&layout, index));
            }
            _ => {}
        }

        self.stats.passes += 1;
        let pass = self.stats.passes;
        let scroll = surface.scroll_offset();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("grid_render_pass", pass, scroll).entered();

        let band = layout.visible_band(scroll, self.config.buffer_rows);
        self.visible = band;
        let mut report = PassReport {
            pass,
            band,
            ..PassReport::default()
        };

        if let Some(band) = band {
            // Rows × columns of a band are one contiguous index range.
            let live = band.index_range(&layout);

            // Nodes already showing an index inside the band stay put; the rest are recyclable.
            self.free.clear();
            self.free.extend(
                self.pool
                    .iter()
                    .enumerate()
                    .rev()
                    .filter(|(_, slot)| !slot.index.is_some_and(|index| live.contains(&index)))
                    .map(|(n, _)| n),
            );

            for index in live {
                if let Some(n) = self.pool.slot_of(index) {
                    let Some(slot) = self.pool.get_mut(n) else {
                        continue;
                    };
                    slot.pass = pass;
                    if slot.flags.contains(SlotFlags::STALE) {
                        render_slot(surface, renderer, slot, index, &mut report, &mut self.stats);
                    } else {
                        report.reused += 1;
                    }
                    continue;
                }

                let Some(n) = self.free.pop() else {
                    report.skipped.push(index);
                    self.stats.capacity_warnings += 1;
                    continue;
                };
                self.pool.assign(n, index);
                let focused = self.highlighted == Some(index);
                let Some(slot) = self.pool.get_mut(n) else {
                    continue;
                };
                slot.pass = pass;
                slot.rect = layout.cell_rect(index);
                surface.place_node(&mut slot.node, slot.rect, self.config.positioning);
                if !slot.flags.contains(SlotFlags::VISIBLE) {
                    slot.flags.insert(SlotFlags::VISIBLE);
                    surface.set_node_visible(&mut slot.node, true);
                }
                if slot.flags.contains(SlotFlags::FOCUSED) != focused {
                    slot.flags.set(SlotFlags::FOCUSED, focused);
                    surface.set_node_focused(&mut slot.node, focused);
                }
                render_slot(surface, renderer, slot, index, &mut report, &mut self.stats);
            }
        }

        #[cfg(feature = "tracing")]
        log_shortfall(&report, self.pool.len());

        // Anything not claimed this pass leaves the screen.
        for n in 0..self.pool.len() {
            let Some(slot) = self.pool.get(n) else {
                continue;
            };
            if slot.pass == pass || (slot.index.is_none() && slot.flags.is_empty()) {
                continue;
            }
            self.pool.unassign(n);
            if let Some(slot) = self.pool.get_mut(n) {
                hide_slot(surface, slot);
                report.hidden += 1;
            }
        }

        self.sync_spacer(surface, &layout);
        let short = !report.skipped.is_empty();
        if short {
            // Every slot holds a band index here.
            self.band_floor = self.pool.len() + report.skipped.len();
        }
        self.last_pass = Some(report);
        if short {
            self.relayout(surface);
            self.schedule(surface);
            return false;
        }
        true
    }
}

fn render_slot<S, R>(
    surface: &mut S,
    renderer: &mut R,
    slot: &mut Slot<S::Node>,
    index: usize,
    report: &mut PassReport,
    stats: &mut EngineStats,
) where
    S: Surface,
    R: RenderItem<S::Node>,
{
    report.rendered += 1;
    stats.renders += 1;
    slot.flags.remove(SlotFlags::STALE);
    if let Err(_error) = renderer.render_item(index, &mut slot.node) {
        #[cfg(feature = "tracing")]
        tracing::warn!(index, error = %_error, "renderer failed; node cleared");

        surface.clear_node(&mut slot.node);
        report.failed.push(index);
        stats.render_failures += 1;
    }
}

#[cfg(feature = "tracing")]
fn log_shortfall(report: &PassReport, pool: usize) {
    if !report.skipped.is_empty() {
        tracing::warn!(
            skipped = report.skipped.len(),
            pool,
            "grid pool undersized; growing to fit the band"
        );
    }
}

fn hide_slot<S: Surface>(surface: &mut S, slot: &mut Slot<S::Node>) {
    if slot.flags.contains(SlotFlags::VISIBLE) {
        surface.set_node_visible(&mut slot.node, false);
    }
    if slot.flags.contains(SlotFlags::FOCUSED) {
        surface.set_node_focused(&mut slot.node, false);
    }
    slot.flags = SlotFlags::empty();
}

/// Top of the row holding `index`, clamped to the item range.
fn row_top_of(layout: &GridLayout, index: usize) -> f64 {
    match layout.item_count().checked_sub(1) {
        Some(last) => layout.row_top(layout.row_of(index.min(last))),
        None => 0.0,
    }
}

/// Scrolls the least distance that puts `row` at a viewport edge.
fn reveal_row<S: Surface>(surface: &mut S, layout: &GridLayout, row: usize) {
    let scroll = surface.scroll_offset();
    let align = if layout.row_top(row) < scroll {
        ScrollAlign::Start
    } else {
        ScrollAlign::End
    };
    surface.set_scroll_offset(layout.scroll_offset_for_row(row, align, scroll));
}
