// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: scroll container, display nodes, and frame scheduling.

use core::time::Duration;

use kurbo::{Rect, Size};

use crate::{Positioning, RenderError};

/// Delay before re-checking a container that measured zero width or height.
pub const RETRY_DELAY: Duration = Duration::from_millis(100);

/// A scroll container that can host pooled display nodes.
///
/// A surface is everything the engine needs from its host: the container's
/// measured size and scroll offset, a spacer that gives the container its
/// full scrollable extent, the ability to create and release nodes, and a way
/// to ask for work on the next display frame.
///
/// The engine is single-threaded and cooperative. It never renders
/// re-entrantly: instead it calls [`Surface::request_frame`] and expects the
/// host to call [`GridEngine::on_frame`](crate::GridEngine::on_frame) once the
/// frame arrives. Likewise [`Surface::request_retry`] must eventually lead to
/// [`GridEngine::on_retry`](crate::GridEngine::on_retry) unless it is cancelled.
///
/// While listening (between [`Surface::listen`] and [`Surface::unlisten`]) the
/// host forwards container scrolls to
/// [`GridEngine::on_scroll`](crate::GridEngine::on_scroll) and viewport
/// resizes to [`GridEngine::on_resize`](crate::GridEngine::on_resize).
///
/// Nodes belong to the engine's pool. Surface methods that take a node may
/// change how it is displayed but must not retain it.
pub trait Surface {
    /// A display node, for example a DOM element handle or a widget id.
    type Node;

    /// Returns `false` if this surface cannot host nodes at all.
    fn is_mountable(&self) -> bool {
        true
    }

    /// Establishes a positioning context and enables scroll overflow.
    fn prepare(&mut self);

    /// Current visible size of the container.
    ///
    /// Zero width or height means the container is hidden or not mounted yet.
    fn viewport(&self) -> Size;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Sets the vertical scroll offset. Containers may clamp it.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Inserts the spacer element.
    fn insert_spacer(&mut self);

    /// Sizes the spacer to the full virtual content height.
    fn set_content_height(&mut self, height: f64);

    /// Removes the spacer element.
    fn remove_spacer(&mut self);

    /// Creates a hidden node.
    fn create_node(&mut self) -> Self::Node;

    /// Detaches and drops a node.
    fn release_node(&mut self, node: Self::Node);

    /// Positions and sizes a node at `rect` in virtual coordinates.
    fn place_node(&mut self, node: &mut Self::Node, rect: Rect, positioning: Positioning);

    /// Shows or hides a node.
    fn set_node_visible(&mut self, node: &mut Self::Node, visible: bool);

    /// Applies or removes the focused rendering of a node.
    fn set_node_focused(&mut self, node: &mut Self::Node, focused: bool);

    /// Clears a node's visible content so it does not show stale data.
    fn clear_node(&mut self, node: &mut Self::Node);

    /// Releases heavy resources (images, textures) held by a hidden node.
    fn flush_node(&mut self, node: &mut Self::Node) {
        let _ = node;
    }

    /// Starts forwarding scroll and resize events to the engine.
    fn listen(&mut self);

    /// Stops forwarding scroll and resize events.
    fn unlisten(&mut self);

    /// Asks for [`GridEngine::on_frame`](crate::GridEngine::on_frame) on the next display frame.
    fn request_frame(&mut self);

    /// Cancels a pending frame request.
    fn cancel_frame(&mut self);

    /// Asks for [`GridEngine::on_retry`](crate::GridEngine::on_retry) after `delay`.
    fn request_retry(&mut self, delay: Duration);

    /// Cancels a pending retry.
    fn cancel_retry(&mut self);
}

/// Populates one display node with the data for one item.
///
/// Renderers must be synchronous and must only touch the node they are
/// given. The same node is reused for many indices over its lifetime, so a
/// renderer should always re-read the current data for `index` rather than
/// assume anything about what the node showed before.
///
/// Any `FnMut(usize, &mut N) -> Result<(), RenderError>` is a renderer.
pub trait RenderItem<N> {
    /// Renders item `index` into `node`.
    fn render_item(&mut self, index: usize, node: &mut N) -> Result<(), RenderError>;
}

impl<N, F> RenderItem<N> for F
where
    F: FnMut(usize, &mut N) -> Result<(), RenderError>,
{
    fn render_item(&mut self, index: usize, node: &mut N) -> Result<(), RenderError> {
        self(index, node)
    }
}
