// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Value range normalization and linear scaling

use crate::types::Node;
use serde::{Deserialize, Serialize};

/// Default `[min, max]` output size for nodes
pub const NODE_SIZE: VisualRange = VisualRange { lo: 10.0, hi: 30.0 };

/// Observed `[min, max]` of a set of node values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl ValueRange {
    /// True when every value was equal
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Target output range, serialized as a `[lo, hi]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct VisualRange {
    /// Output for the smallest value
    pub lo: f64,
    /// Output for the largest value
    pub hi: f64,
}

impl VisualRange {
    /// Point halfway between `lo` and `hi`
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lo + (self.hi - self.lo) / 2.0
    }
}

impl Default for VisualRange {
    fn default() -> Self {
        NODE_SIZE
    }
}

impl From<[f64; 2]> for VisualRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<VisualRange> for [f64; 2] {
    fn from(r: VisualRange) -> Self {
        [r.lo, r.hi]
    }
}

/// Compute the `[min, max]` of node values
///
/// Returns `None` when there are no finite values to fold.
#[must_use]
pub fn value_range(nodes: &[Node]) -> Option<ValueRange> {
    nodes
        .iter()
        .map(|n| n.value)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some(ValueRange { min: v, max: v }),
            Some(r) => Some(ValueRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
}

/// Linearly map `value` from `range` into `target`
///
/// A missing or degenerate range maps every value to the target midpoint,
/// and so does any input that would otherwise produce a non-finite result.
#[must_use]
pub fn linear_map(value: f64, range: Option<ValueRange>, target: VisualRange) -> f64 {
    let Some(range) = range.filter(|r| !r.is_degenerate()) else {
        return target.midpoint();
    };

    if value == range.min {
        return target.lo;
    }
    if value == range.max {
        return target.hi;
    }

    // `max - min` overflows for ranges wider than f64::MAX; halve both sides
    let span = range.max - range.min;
    let t = if span.is_finite() {
        (value - range.min) / span
    } else {
        (value / 2.0 - range.min / 2.0) / (range.max / 2.0 - range.min / 2.0)
    };
    let mapped = target.lo + t * (target.hi - target.lo);
    if mapped.is_finite() {
        mapped
    } else {
        target.midpoint()
    }
}
