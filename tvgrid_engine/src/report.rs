// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pass reports and running counters.

use smallvec::SmallVec;
use tvgrid_layout::VisibleRows;

/// What happened during one render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassReport {
    /// Sequence number of the pass, starting at 1.
    pub pass: u64,
    /// Row band the pass covered, or `None` when there were no rows.
    pub band: Option<VisibleRows>,
    /// Renderer invocations, including failed ones.
    pub rendered: usize,
    /// Indices whose node was already in place and left untouched.
    pub reused: usize,
    /// Nodes hidden and unassigned because they fell outside the band.
    pub hidden: usize,
    /// Indices left without a node because the pool was undersized.
    pub skipped: SmallVec<[usize; 4]>,
    /// Indices whose renderer reported an error; their nodes were cleared.
    pub failed: SmallVec<[usize; 4]>,
}

impl PassReport {
    /// Returns `true` if every index in the band got a node and rendered cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Running counters over the lifetime of an engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Completed render passes.
    pub passes: u64,
    /// Layout recomputes that produced a layout.
    pub layouts: u64,
    /// Renderer invocations.
    pub renders: u64,
    /// Renderer invocations that reported an error.
    pub render_failures: u64,
    /// Indices skipped because the pool was undersized.
    pub capacity_warnings: u64,
    /// Retries scheduled because the container measured zero.
    pub retries: u64,
}
