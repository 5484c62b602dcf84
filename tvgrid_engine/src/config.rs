// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::num::NonZeroUsize;

use kurbo::Size;
use tvgrid_layout::Columns;

use crate::ConfigError;

/// How a surface should express a node's position.
///
/// Both modes must put the node at the same on-screen location; the choice
/// only affects how a host applies it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positioning {
    /// Absolute `left`/`top` offsets.
    Offset,
    /// A 2D translation.
    #[default]
    Transform,
}

/// Configuration supplied once when a [`GridEngine`](crate::GridEngine) is created.
///
/// Everything except [`GridConfig::item_count`] is fixed for the lifetime
/// of the engine; the item count can be changed later with
/// [`GridEngine::set_item_count`](crate::GridEngine::set_item_count).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Total number of logical items.
    pub item_count: usize,
    /// Nominal cell size.
    ///
    /// The height is the fixed row height. The width only matters for
    /// [`Columns::Auto`]; resolved cells always divide the viewport width
    /// equally.
    pub cell_size: Size,
    /// Column count, or `Auto` to fit the viewport.
    pub columns: Columns,
    /// Extra rows kept live above and below the viewport.
    pub buffer_rows: usize,
    /// Inflates the computed pool size for headroom. Must be finite and `>= 1`.
    pub pool_multiplier: f64,
    /// How surfaces should position nodes.
    pub positioning: Positioning,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            cell_size: Size::new(150.0, 300.0),
            columns: Columns::default(),
            buffer_rows: 4,
            pool_multiplier: 1.2,
            positioning: Positioning::Transform,
        }
    }
}

impl GridConfig {
    /// A grid of `columns` resolution with cells of `cell_size`.
    #[must_use]
    pub fn grid(columns: Columns, cell_size: Size) -> Self {
        Self {
            columns,
            cell_size,
            ..Self::default()
        }
    }

    /// A single-column list whose rows span the viewport.
    #[must_use]
    pub fn list(row_height: f64) -> Self {
        Self {
            columns: Columns::LIST,
            cell_size: Size::new(row_height, row_height),
            ..Self::default()
        }
    }

    /// Sets the item count.
    #[must_use]
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Sets an explicit column count.
    #[must_use]
    pub fn with_columns(mut self, columns: NonZeroUsize) -> Self {
        self.columns = Columns::Fixed(columns);
        self
    }

    /// Sets the number of buffer rows.
    #[must_use]
    pub fn with_buffer_rows(mut self, buffer_rows: usize) -> Self {
        self.buffer_rows = buffer_rows;
        self
    }

    /// Sets the pool multiplier.
    #[must_use]
    pub fn with_pool_multiplier(mut self, pool_multiplier: f64) -> Self {
        self.pool_multiplier = pool_multiplier;
        self
    }

    /// Sets the positioning mode.
    #[must_use]
    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    /// Checks the numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.cell_size;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidCellSize { width, height });
        }
        if !self.pool_multiplier.is_finite() || self.pool_multiplier < 1.0 {
            return Err(ConfigError::InvalidPoolMultiplier(self.pool_multiplier));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use tvgrid_layout::Columns;

    use super::{GridConfig, Positioning};
    use crate::ConfigError;

    #[test]
    fn defaults_are_valid() {
        let config = GridConfig::default();
        assert_eq!(config.buffer_rows, 4);
        assert_eq!(config.positioning, Positioning::Transform);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn list_is_single_column() {
        let config = GridConfig::list(48.0);
        assert_eq!(config.columns, Columns::LIST);
        assert_eq!(config.cell_size.height, 48.0);
    }

    #[test]
    fn rejects_degenerate_cells() {
        let config = GridConfig::grid(Columns::Auto, Size::new(150.0, 0.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCellSize {
                width: 150.0,
                height: 0.0
            })
        );
        let config = GridConfig::grid(Columns::Auto, Size::new(f64::NAN, 10.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }

    #[test]
    fn rejects_shrinking_multiplier() {
        let config = GridConfig::default().with_pool_multiplier(0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPoolMultiplier(0.5))
        );
        let config = GridConfig::default().with_pool_multiplier(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = GridConfig::default().with_item_count(12).with_buffer_rows(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
