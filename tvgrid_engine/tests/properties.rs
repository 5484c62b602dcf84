// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the render/recycle pass: pool bounds, unique
//! assignment and band coverage under arbitrary scroll, resize and
//! count changes.

use std::num::NonZeroUsize;

use kurbo::Size;
use proptest::prelude::*;
use tvgrid_engine::{
    Columns, GridConfig, GridEngine, HeadlessNode, HeadlessSurface, RenderError,
};

type Labels = fn(usize, &mut HeadlessNode) -> Result<(), RenderError>;

fn label(index: usize, node: &mut HeadlessNode) -> Result<(), RenderError> {
    node.text = index.to_string();
    Ok(())
}

#[derive(Clone, Debug)]
enum Op {
    Scroll(f64),
    Resize(f64, f64),
    SetCount(usize),
    Refresh,
    Reveal(usize),
    Highlight(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0.0..60_000.0f64).prop_map(Op::Scroll),
        1 => (100.0..2000.0f64, 100.0..1200.0f64).prop_map(|(w, h)| Op::Resize(w, h)),
        1 => (0usize..3000).prop_map(Op::SetCount),
        1 => Just(Op::Refresh),
        2 => (0usize..3200).prop_map(Op::Reveal),
        1 => (0usize..3200).prop_map(Op::Highlight),
    ]
}

fn config() -> impl Strategy<Value = GridConfig> {
    let columns = prop_oneof![
        Just(Columns::Auto),
        (1usize..9).prop_map(|n| Columns::Fixed(NonZeroUsize::new(n).unwrap())),
    ];
    (
        columns,
        100.0..400.0f64,
        50.0..400.0f64,
        0usize..5,
        1.0..2.0f64,
        0usize..3000,
    )
        .prop_map(|(columns, width, height, buffer, multiplier, count)| {
            GridConfig::grid(columns, Size::new(width, height))
                .with_buffer_rows(buffer)
                .with_pool_multiplier(multiplier)
                .with_item_count(count)
        })
}

fn apply(grid: &mut GridEngine<HeadlessSurface, Labels>, op: &Op) {
    match *op {
        Op::Scroll(offset) => {
            grid.surface_mut().scroll_to(offset);
            grid.on_scroll();
        }
        Op::Resize(width, height) => {
            grid.surface_mut().set_viewport(Size::new(width, height));
            grid.on_resize();
        }
        Op::SetCount(count) => grid.set_item_count(count),
        Op::Refresh => grid.refresh(),
        Op::Reveal(index) => grid.ensure_visible_then(index, move |grid| grid.highlight(index)),
        Op::Highlight(index) => grid.highlight(index),
    }
}

fn check(grid: &GridEngine<HeadlessSurface, Labels>) -> Result<(), TestCaseError> {
    // The pool never outgrows the size computed by the last layout.
    prop_assert_eq!(grid.pool_len(), grid.pool_target());
    prop_assert!(grid.live_nodes() <= grid.pool_len());
    prop_assert_eq!(grid.surface().live_nodes(), grid.pool_len());

    // No index is held by two slots, and hidden slots hold nothing.
    let mut held: Vec<usize> = grid.slots().filter_map(|slot| slot.index).collect();
    held.sort_unstable();
    let before = held.len();
    held.dedup();
    prop_assert_eq!(held.len(), before);
    for slot in grid.slots() {
        prop_assert_eq!(slot.index.is_some(), slot.visible);
        if slot.focused {
            prop_assert_eq!(slot.index, grid.highlighted());
        }
    }

    // Every index of the band is either shown or reported as skipped.
    let layout = grid.layout().expect("laid out");
    let expected: Vec<usize> = grid
        .visible_range()
        .map(|band| band.index_range(&layout).collect())
        .unwrap_or_default();
    let report = grid.last_pass().expect("a pass ran");
    let mut covered = held;
    covered.extend(report.skipped.iter().copied());
    covered.sort_unstable();
    prop_assert_eq!(covered, expected);
    for index in grid.slots().filter_map(|slot| slot.index) {
        prop_assert!(index < grid.item_count());
        let expected = index.to_string();
        let text = grid.node_for_index(index).map(|node| node.text.as_str());
        prop_assert_eq!(text, Some(expected.as_str()));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn pool_assignment_and_band_coverage_hold(
        grid_config in config(),
        ops in prop::collection::vec(op(), 1..24),
    ) {
        let surface = HeadlessSurface::new(Size::new(1280.0, 720.0));
        let mut grid = GridEngine::new(surface, grid_config, label as Labels).unwrap();
        grid.pump(8);
        check(&grid)?;

        for op in &ops {
            apply(&mut grid, op);
            grid.pump(8);
            check(&grid)?;
        }
    }

    #[test]
    fn destroy_releases_everything(
        grid_config in config(),
        ops in prop::collection::vec(op(), 0..8),
    ) {
        let surface = HeadlessSurface::new(Size::new(1280.0, 720.0));
        let mut grid = GridEngine::new(surface, grid_config, label as Labels).unwrap();
        for op in &ops {
            apply(&mut grid, op);
            grid.pump(8);
        }
        grid.destroy();
        grid.destroy();
        prop_assert_eq!(grid.surface().live_nodes(), 0);
        prop_assert_eq!(grid.surface().content_height(), None);
        prop_assert!(!grid.surface().frame_requested());
        prop_assert_eq!(grid.columns(), 0);
    }
}
