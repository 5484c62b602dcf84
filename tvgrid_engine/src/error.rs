// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Reasons a [`GridEngine`](crate::GridEngine) cannot be created.
///
/// This is the only error the engine ever returns; everything that goes
/// wrong inside a render pass is counted and reported instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The surface cannot host display nodes.
    NotMountable,
    /// No renderer was supplied.
    MissingRenderer,
    /// The nominal cell size is zero, negative, or not finite.
    InvalidCellSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// The pool multiplier is below one or not finite.
    InvalidPoolMultiplier(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMountable => write!(f, "surface cannot host display nodes"),
            Self::MissingRenderer => write!(f, "a renderer is required"),
            Self::InvalidCellSize { width, height } => {
                write!(f, "cell size must be positive and finite, got {width}x{height}")
            }
            Self::InvalidPoolMultiplier(multiplier) => {
                write!(f, "pool multiplier must be finite and >= 1, got {multiplier}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Failure reported by a renderer for a single item.
///
/// The engine clears the node's content and carries on with the rest of the
/// pass; the failure is recorded in [`PassReport::failed`](crate::PassReport::failed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The item provider had no data for the index.
    MissingItem,
    /// The renderer failed for a host-specific reason.
    Failed(&'static str),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingItem => write!(f, "no item data for index"),
            Self::Failed(reason) => write!(f, "render failed: {reason}"),
        }
    }
}

impl core::error::Error for RenderError {}
