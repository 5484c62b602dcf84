// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-count configuration.

use core::num::NonZeroUsize;

use crate::floor_to_usize;

/// How many columns a grid should use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Columns {
    /// Fit as many nominal cell widths into the viewport as possible (at least one).
    Auto,
    /// Use exactly this many columns regardless of viewport width.
    Fixed(NonZeroUsize),
}

impl Columns {
    /// A single column spanning the viewport, i.e. a plain vertical list.
    pub const LIST: Self = Self::Fixed(NonZeroUsize::MIN);

    /// Resolves the column count for a viewport of `viewport_width`.
    ///
    /// An explicit count always wins. For [`Columns::Auto`] the result is
    /// `floor(viewport_width / nominal_cell_width)`, clamped to at least one.
    #[must_use]
    pub fn resolve(self, viewport_width: f64, nominal_cell_width: f64) -> NonZeroUsize {
        match self {
            Self::Fixed(columns) => columns,
            Self::Auto => {
                if nominal_cell_width <= 0.0 || !nominal_cell_width.is_finite() {
                    return NonZeroUsize::MIN;
                }
                NonZeroUsize::new(floor_to_usize(viewport_width / nominal_cell_width))
                    .unwrap_or(NonZeroUsize::MIN)
            }
        }
    }
}

impl Default for Columns {
    fn default() -> Self {
        // Six poster columns, the usual 1080p catalog layout.
        Self::Fixed(NonZeroUsize::new(6).unwrap_or(NonZeroUsize::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::Columns;
    use core::num::NonZeroUsize;

    #[test]
    fn explicit_columns_win() {
        let columns = Columns::Fixed(NonZeroUsize::new(3).unwrap());
        assert_eq!(columns.resolve(10_000.0, 10.0).get(), 3);
        assert_eq!(Columns::LIST.resolve(800.0, 150.0).get(), 1);
    }

    #[test]
    fn auto_fits_whole_cells() {
        assert_eq!(Columns::Auto.resolve(1000.0, 150.0).get(), 6);
        assert_eq!(Columns::Auto.resolve(750.0, 150.0).get(), 5);
        assert_eq!(Columns::Auto.resolve(749.0, 150.0).get(), 4);
    }

    #[test]
    fn auto_never_drops_below_one() {
        assert_eq!(Columns::Auto.resolve(100.0, 150.0).get(), 1);
        assert_eq!(Columns::Auto.resolve(0.0, 150.0).get(), 1);
        assert_eq!(Columns::Auto.resolve(500.0, 0.0).get(), 1);
    }
}
