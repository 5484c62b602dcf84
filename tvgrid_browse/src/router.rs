// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns key presses into engine navigation.

use tvgrid_engine::{GridEngine, RenderItem, Surface};

use crate::{GridPolicy, Navigation};

/// Owns the focused index of one grid and drives the engine to show it.
///
/// The focus index is tracked here, independently of which pool node
/// displays it. Every move is an
/// [`ensure_visible_then`](GridEngine::ensure_visible_then) followed by a
/// [`highlight`](GridEngine::highlight) once the target has a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusRouter {
    focus: usize,
}

impl FocusRouter {
    /// Creates a router focused on index 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused index.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Handles a directional key.
    ///
    /// Returns `true` if the focus moved. A move that stays on the same
    /// index (for example right on the last item) leaves the engine alone.
    pub fn navigate<S, R>(&mut self, grid: &mut GridEngine<S, R>, direction: Navigation) -> bool
    where
        S: Surface,
        R: RenderItem<S::Node>,
    {
        let policy = GridPolicy::new(grid.columns(), grid.item_count());
        let Some(target) = policy.next(self.focus, direction) else {
            return false;
        };
        if target == self.focus {
            return false;
        }
        self.focus_index(grid, target);
        true
    }

    /// Moves focus straight to `index`, scrolling as needed.
    ///
    /// Indices past the end are clamped to the last item.
    pub fn focus_index<S, R>(&mut self, grid: &mut GridEngine<S, R>, index: usize)
    where
        S: Surface,
        R: RenderItem<S::Node>,
    {
        let Some(last) = grid.item_count().checked_sub(1) else {
            self.focus = 0;
            return;
        };
        let target = index.min(last);
        self.focus = target;
        grid.ensure_visible_then(target, move |grid| grid.highlight(target));
    }

    /// Re-applies focus after the item count changed, clamping it into range.
    pub fn sync<S, R>(&mut self, grid: &mut GridEngine<S, R>)
    where
        S: Surface,
        R: RenderItem<S::Node>,
    {
        self.focus_index(grid, self.focus);
    }
}
