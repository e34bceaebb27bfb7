// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Theme palettes and threshold bucketing

use crate::types::Theme;
use serde::Serialize;
use tracing::warn;

/// Default ascending bucket breakpoints
pub const THRESHOLDS: [f64; 3] = [10.0, 100.0, 1000.0];

/// Light theme palette, one color per bucket
pub const LIGHT_PALETTE: [&str; 4] = ["#9EB9A8", "#40C463", "#30A14E", "#216E39"];

/// Dark theme palette, one color per bucket
pub const DARK_PALETTE: [&str; 4] = ["#0E4429", "#006D32", "#26A641", "#39D353"];

/// Color used when a scheme has no colors at all
pub const FALLBACK_COLOR: &str = "#9E9E9E";

/// Get the built-in palette for a theme
#[must_use]
pub fn palette(theme: Theme) -> &'static [&'static str; 4] {
    match theme {
        Theme::Light => &LIGHT_PALETTE,
        Theme::Dark => &DARK_PALETTE,
    }
}

/// Configuration errors in a threshold/palette pair
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemeError {
    /// Palette length is not `thresholds + 1`
    #[error("palette has {colors} colors for {thresholds} thresholds, expected one more color than thresholds")]
    LengthMismatch {
        /// Number of thresholds
        thresholds: usize,
        /// Number of colors
        colors: usize,
    },
    /// Thresholds are not strictly ascending
    #[error("thresholds must be ascending: {prev} is followed by {next}")]
    NotAscending {
        /// Earlier breakpoint
        prev: f64,
        /// Later breakpoint that is not larger
        next: f64,
    },
    /// A threshold is NaN or infinite
    #[error("threshold {0} is not finite")]
    NonFinite(f64),
}

/// A threshold table paired with the colors of its buckets
///
/// Bucket `i` holds values below `thresholds[i]` (and at or above the
/// previous threshold); the last bucket holds everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScheme {
    thresholds: Vec<f64>,
    colors: Vec<String>,
    #[serde(skip)]
    valid: bool,
}

impl ColorScheme {
    /// Default thresholds with the built-in palette of `theme`
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            thresholds: THRESHOLDS.to_vec(),
            colors: palette(theme).iter().map(|c| (*c).to_string()).collect(),
            valid: true,
        }
    }

    /// Build a scheme, rejecting inconsistent configurations
    pub fn try_new(thresholds: Vec<f64>, colors: Vec<String>) -> Result<Self, SchemeError> {
        validate(&thresholds, &colors)?;
        Ok(Self {
            thresholds,
            colors,
            valid: true,
        })
    }

    /// Build a scheme, degrading an inconsistent configuration
    ///
    /// An invalid pair is reported through `tracing` and then colors every
    /// value with the overflow color.
    #[must_use]
    pub fn new(thresholds: Vec<f64>, colors: Vec<String>) -> Self {
        let valid = match validate(&thresholds, &colors) {
            Ok(()) => true,
            Err(e) => {
                warn!("Invalid color scheme, using overflow color for all values: {}", e);
                false
            }
        };
        Self {
            thresholds,
            colors,
            valid,
        }
    }

    /// Breakpoints in ascending order
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Palette entries in bucket order
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Whether the thresholds and palette agree
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of buckets, always `thresholds + 1`
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Index of the bucket `value` falls in
    ///
    /// First threshold strictly greater than `value` wins; a value equal to
    /// a threshold lands in the next bucket up.
    #[must_use]
    pub fn bucket_of(&self, value: f64) -> usize {
        for (i, threshold) in self.thresholds.iter().enumerate() {
            if value < *threshold {
                return i;
            }
        }
        self.thresholds.len()
    }

    /// Color of the last bucket
    #[must_use]
    pub fn overflow_color(&self) -> &str {
        self.colors.last().map_or(FALLBACK_COLOR, String::as_str)
    }

    /// Color of bucket `index`
    #[must_use]
    pub fn bucket_color(&self, index: usize) -> &str {
        if !self.valid {
            return self.overflow_color();
        }
        self.colors
            .get(index)
            .map_or_else(|| self.overflow_color(), String::as_str)
    }

    /// Color for `value`
    #[must_use]
    pub fn color_for(&self, value: f64) -> &str {
        self.bucket_color(self.bucket_of(value))
    }
}

fn validate(thresholds: &[f64], colors: &[String]) -> Result<(), SchemeError> {
    if let Some(bad) = thresholds.iter().find(|t| !t.is_finite()) {
        return Err(SchemeError::NonFinite(*bad));
    }
    if let Some(pair) = thresholds.windows(2).find(|w| w[0] >= w[1]) {
        return Err(SchemeError::NotAscending {
            prev: pair[0],
            next: pair[1],
        });
    }
    if colors.len() != thresholds.len() + 1 {
        return Err(SchemeError::LengthMismatch {
            thresholds: thresholds.len(),
            colors: colors.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("#00000{i}")).collect()
    }

    #[test]
    fn test_bucket_boundaries() {
        let scheme = ColorScheme::for_theme(Theme::Light);
        assert_eq!(scheme.bucket_of(5.0), 0);
        assert_eq!(scheme.bucket_of(10.0), 1);
        assert_eq!(scheme.bucket_of(99.99), 1);
        assert_eq!(scheme.bucket_of(100.0), 2);
        assert_eq!(scheme.bucket_of(1000.0), 3);
        assert_eq!(scheme.bucket_of(1000.01), 3);
    }

    #[test]
    fn test_negative_values_use_first_bucket() {
        let scheme = ColorScheme::for_theme(Theme::Dark);
        assert_eq!(scheme.bucket_of(-42.0), 0);
        assert_eq!(scheme.color_for(-42.0), "#0E4429");
    }

    #[test]
    fn test_theme_palettes() {
        let light = ColorScheme::for_theme(Theme::Light);
        let dark = ColorScheme::for_theme(Theme::Dark);
        assert_eq!(light.color_for(5.0), "#9EB9A8");
        assert_eq!(light.color_for(5000.0), "#216E39");
        assert_eq!(dark.color_for(50.0), "#006D32");
        assert_eq!(dark.color_for(500.0), "#26A641");
        assert!(LIGHT_PALETTE.iter().all(|c| !DARK_PALETTE.contains(c)));
    }

    #[test]
    fn test_try_new_rejects_mismatch() {
        let err = ColorScheme::try_new(vec![1.0, 2.0], colors(2)).unwrap_err();
        assert_eq!(
            err,
            SchemeError::LengthMismatch {
                thresholds: 2,
                colors: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "palette has 2 colors for 2 thresholds, expected one more color than thresholds"
        );
    }

    #[test]
    fn test_try_new_rejects_unordered() {
        let err = ColorScheme::try_new(vec![5.0, 5.0], colors(3)).unwrap_err();
        assert!(matches!(err, SchemeError::NotAscending { .. }));
    }

    #[test]
    fn test_mismatch_falls_back_to_overflow() {
        let scheme = ColorScheme::new(vec![10.0, 100.0, 1000.0], colors(2));
        assert!(!scheme.is_valid());
        assert_eq!(scheme.color_for(1.0), "#000001");
        assert_eq!(scheme.color_for(5000.0), "#000001");
    }

    #[test]
    fn test_empty_palette_uses_fallback() {
        let scheme = ColorScheme::new(vec![10.0], vec![]);
        assert_eq!(scheme.color_for(1.0), FALLBACK_COLOR);
    }

    #[test]
    fn test_no_thresholds_single_bucket() {
        let scheme = ColorScheme::try_new(vec![], colors(1)).unwrap();
        assert_eq!(scheme.bucket_count(), 1);
        assert_eq!(scheme.bucket_of(1e9), 0);
        assert_eq!(scheme.color_for(-1.0), "#000000");
    }
}
