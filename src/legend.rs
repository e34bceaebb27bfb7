// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Legend generation from a color scheme

use crate::palette::ColorScheme;
use serde::Serialize;

/// Caption shown before the lowest bucket
pub const LESS_CAPTION: &str = "Less";
/// Caption shown after the highest bucket
pub const MORE_CAPTION: &str = "More";

/// One legend swatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendCell {
    /// Stable identifier, `L<bucket>`
    pub id: String,
    /// Human-readable range
    pub label: String,
    /// Bucket color
    pub color: String,
}

/// Ordered swatches plus the captions at either end of the strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Caption before the first cell
    pub less: &'static str,
    /// One cell per bucket, in bucket order
    pub cells: Vec<LegendCell>,
    /// Caption after the last cell
    pub more: &'static str,
}

/// Build the legend for `scheme`
///
/// Labels read `< T0`, `T0 - T1`, ..., `> Tn`. A scheme without thresholds
/// has a single `all` cell.
#[must_use]
pub fn build_legend(scheme: &ColorScheme) -> Legend {
    let cells = (0..scheme.bucket_count())
        .map(|bucket| LegendCell {
            id: format!("L{bucket}"),
            label: bucket_label(scheme.thresholds(), bucket),
            color: scheme.bucket_color(bucket).to_string(),
        })
        .collect();

    Legend {
        less: LESS_CAPTION,
        cells,
        more: MORE_CAPTION,
    }
}

fn bucket_label(thresholds: &[f64], bucket: usize) -> String {
    match (bucket.checked_sub(1).and_then(|i| thresholds.get(i)), thresholds.get(bucket)) {
        (None, Some(upper)) => format!("< {upper}"),
        (Some(lower), Some(upper)) => format!("{lower} - {upper}"),
        (Some(lower), None) => format!("> {lower}"),
        (None, None) => "all".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn test_default_legend_labels() {
        let legend = build_legend(&ColorScheme::for_theme(Theme::Light));
        let labels: Vec<_> = legend.cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["< 10", "10 - 100", "100 - 1000", "> 1000"]);
        let ids: Vec<_> = legend.cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["L0", "L1", "L2", "L3"]);
    }

    #[test]
    fn test_legend_colors_follow_bucketizer() {
        let scheme = ColorScheme::for_theme(Theme::Dark);
        let legend = build_legend(&scheme);
        for (value, bucket) in [(1.0, 0), (50.0, 1), (500.0, 2), (5000.0, 3)] {
            assert_eq!(legend.cells[bucket].color, scheme.color_for(value));
        }
    }

    #[test]
    fn test_legend_fractional_thresholds() {
        let scheme = ColorScheme::try_new(
            vec![0.5, 2.5],
            vec!["#a".into(), "#b".into(), "#c".into()],
        )
        .unwrap();
        let legend = build_legend(&scheme);
        assert_eq!(legend.cells.len(), 3);
        assert_eq!(legend.cells[0].label, "< 0.5");
        assert_eq!(legend.cells[1].label, "0.5 - 2.5");
        assert_eq!(legend.cells[2].label, "> 2.5");
    }

    #[test]
    fn test_legend_without_thresholds() {
        let scheme = ColorScheme::try_new(vec![], vec!["#a".into()]).unwrap();
        let legend = build_legend(&scheme);
        assert_eq!(legend.cells.len(), 1);
        assert_eq!(legend.cells[0].label, "all");
    }

    #[test]
    fn test_legend_captions() {
        let legend = build_legend(&ColorScheme::for_theme(Theme::Light));
        assert_eq!(legend.less, "Less");
        assert_eq!(legend.more, "More");
    }
}
