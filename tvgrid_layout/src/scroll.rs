// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll alignment modes.

/// Alignment mode when scrolling a specific row into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the row with the top of the viewport.
    Start,
    /// Align the bottom edge of the row with the bottom of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}
