// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Legend command - prints the bucket legend for a theme

use anyhow::{Context, Result};
use graph_visual::config::Settings;
use graph_visual::legend::build_legend;
use graph_visual::types::Theme;
use owo_colors::OwoColorize;

/// Run the legend command
pub fn run(theme: Option<Theme>, json: bool, no_color: bool, settings: &Settings) -> Result<()> {
    let theme = theme.unwrap_or(settings.theme);
    let legend = build_legend(&settings.scheme(theme));

    if json {
        let content = serde_json::to_string_pretty(&legend).context("Failed to serialize legend")?;
        println!("{content}");
        return Ok(());
    }

    println!("{} legend:", theme);
    for cell in &legend.cells {
        let swatch = match hex_rgb(&cell.color) {
            Some((r, g, b)) if !no_color => "██".truecolor(r, g, b).to_string(),
            _ => "[]".to_string(),
        };
        println!("  {} {:<4} {:<12} {}", swatch, cell.id, cell.label, cell.color);
    }
    println!("  {} ... {}", legend.less, legend.more);

    Ok(())
}

/// Parse `#RRGGBB`
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
