// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Inspect command - shows the per-node visual mapping

use super::read_graph;
use anyhow::{Context, Result};
use graph_visual::config::Settings;
use graph_visual::graph::VisualGraph;
use graph_visual::types::Theme;
use std::path::PathBuf;

/// Run the inspect command
pub fn run(input: Option<PathBuf>, theme: Option<Theme>, json: bool, settings: &Settings) -> Result<()> {
    let Some(data) = read_graph(input.as_deref())? else {
        println!("Graph payload is null");
        return Ok(());
    };

    let theme = theme.unwrap_or(settings.theme);
    let graph = VisualGraph::map(&data, &settings.scheme(theme), settings.node_size);

    if json {
        let content = serde_json::to_string_pretty(&graph).context("Failed to serialize mapping")?;
        println!("{content}");
        return Ok(());
    }

    match graph.range {
        Some(range) => println!(
            "{} nodes, {} edges, values {} to {}",
            graph.node_count(),
            graph.edge_count(),
            range.min,
            range.max
        ),
        None => println!("{} nodes, {} edges", graph.node_count(), graph.edge_count()),
    }
    println!();

    println!("{:<24} {:>12} {:>8} {:>6}  COLOR", "NAME", "VALUE", "SIZE", "BUCKET");
    for node in &graph.nodes {
        println!(
            "{:<24} {:>12} {:>8.2} {:>6}  {}",
            node.name, node.value, node.size, node.bucket, node.color
        );
    }

    let dangling = graph.dangling_edges();
    if !dangling.is_empty() {
        println!();
        println!("Edges referencing missing nodes:");
        for edge in dangling {
            println!("  {} -> {}", edge.source, edge.target);
        }
    }

    Ok(())
}
