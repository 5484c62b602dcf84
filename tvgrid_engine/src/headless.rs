// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] for tests, demos, and hosts without a display.
//!
//! [`HeadlessSurface`] behaves like a browser scroll container: it clamps
//! the scroll offset to the spacer's extent and records frame and retry
//! requests instead of running them. Drive it with
//! [`GridEngine::pump`], or call [`HeadlessSurface::take_frame_request`] and
//! [`GridEngine::on_frame`] by hand.

use alloc::string::String;
use core::time::Duration;

use kurbo::{Rect, Size};

use crate::{GridEngine, Positioning, RenderItem, Surface};

/// A display node living in a [`HeadlessSurface`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessNode {
    /// Creation order within the surface, starting at 0.
    pub id: usize,
    /// Last placement, in virtual coordinates.
    pub rect: Rect,
    /// Positioning mode used for the last placement.
    pub positioning: Positioning,
    /// Whether the node is shown.
    pub visible: bool,
    /// Whether the node carries the focused rendering.
    pub focused: bool,
    /// Content written by a renderer.
    pub text: String,
    /// Number of times heavy resources were flushed.
    pub flushes: usize,
}

/// In-memory scroll container.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    viewport: Size,
    scroll_offset: f64,
    spacer: Option<f64>,
    mountable: bool,
    prepared: bool,
    listening: bool,
    frame_requested: bool,
    retry_requested: Option<Duration>,
    nodes_created: usize,
    nodes_released: usize,
}

impl HeadlessSurface {
    /// Creates a surface with the given visible size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scroll_offset: 0.0,
            spacer: None,
            mountable: true,
            prepared: false,
            listening: false,
            frame_requested: false,
            retry_requested: None,
            nodes_created: 0,
            nodes_released: 0,
        }
    }

    /// Creates a surface that refuses to host nodes.
    #[must_use]
    pub fn unmountable() -> Self {
        Self {
            mountable: false,
            ..Self::new(Size::ZERO)
        }
    }

    /// Changes the visible size, as a window resize would.
    ///
    /// Call [`GridEngine::on_resize`] afterwards if the engine should be notified.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp_scroll();
    }

    /// Scrolls to `offset`, clamped like a browser would.
    ///
    /// Call [`GridEngine::on_scroll`] afterwards if the engine should be notified.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.clamp_scroll();
    }

    /// Height of the spacer, or `None` if there is no spacer.
    #[must_use]
    pub fn content_height(&self) -> Option<f64> {
        self.spacer
    }

    /// Returns `true` once [`Surface::prepare`] has run.
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Returns `true` while scroll and resize events would be forwarded.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Returns `true` if a frame has been requested and not yet taken.
    #[must_use]
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Consumes a pending frame request.
    pub fn take_frame_request(&mut self) -> bool {
        core::mem::take(&mut self.frame_requested)
    }

    /// Delay of the pending retry, if one has been requested and not yet taken.
    #[must_use]
    pub fn retry_requested(&self) -> Option<Duration> {
        self.retry_requested
    }

    /// Consumes a pending retry request.
    pub fn take_retry_request(&mut self) -> Option<Duration> {
        self.retry_requested.take()
    }

    /// Number of nodes created and not yet released.
    #[must_use]
    pub fn live_nodes(&self) -> usize {
        self.nodes_created - self.nodes_released
    }

    /// Number of nodes created over the surface's lifetime.
    #[must_use]
    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    fn clamp_scroll(&mut self) {
        let content = self.spacer.unwrap_or(0.0);
        let max = (content - self.viewport.height).max(0.0);
        self.scroll_offset = self.scroll_offset.clamp(0.0, max);
    }
}

impl Surface for HeadlessSurface {
    type Node = HeadlessNode;

    fn is_mountable(&self) -> bool {
        self.mountable
    }

    fn prepare(&mut self) {
        self.prepared = true;
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_to(offset);
    }

    fn insert_spacer(&mut self) {
        self.spacer = Some(0.0);
    }

    fn set_content_height(&mut self, height: f64) {
        self.spacer = Some(height);
        self.clamp_scroll();
    }

    fn remove_spacer(&mut self) {
        self.spacer = None;
        self.clamp_scroll();
    }

    fn create_node(&mut self) -> HeadlessNode {
        let id = self.nodes_created;
        self.nodes_created += 1;
        HeadlessNode {
            id,
            ..HeadlessNode::default()
        }
    }

    fn release_node(&mut self, _node: HeadlessNode) {
        self.nodes_released += 1;
    }

    fn place_node(&mut self, node: &mut HeadlessNode, rect: Rect, positioning: Positioning) {
        node.rect = rect;
        node.positioning = positioning;
    }

    fn set_node_visible(&mut self, node: &mut HeadlessNode, visible: bool) {
        node.visible = visible;
    }

    fn set_node_focused(&mut self, node: &mut HeadlessNode, focused: bool) {
        node.focused = focused;
    }

    fn clear_node(&mut self, node: &mut HeadlessNode) {
        node.text.clear();
    }

    fn flush_node(&mut self, node: &mut HeadlessNode) {
        node.flushes += 1;
    }

    fn listen(&mut self) {
        self.listening = true;
    }

    fn unlisten(&mut self) {
        self.listening = false;
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn cancel_frame(&mut self) {
        self.frame_requested = false;
    }

    fn request_retry(&mut self, delay: Duration) {
        self.retry_requested = Some(delay);
    }

    fn cancel_retry(&mut self) {
        self.retry_requested = None;
    }
}

impl<R: RenderItem<HeadlessNode>> GridEngine<HeadlessSurface, R> {
    /// Runs pending frames until none is requested, up to `max_frames`.
    ///
    /// Returns the number of frames run. Retry requests are left alone; take
    /// them with [`HeadlessSurface::take_retry_request`] and call
    /// [`GridEngine::on_retry`] to simulate the timer.
    pub fn pump(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.surface_mut().take_frame_request() {
            self.on_frame();
            frames += 1;
        }
        frames
    }
}
