// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Render command - maps a graph and emits the backend payload as JSON

use super::{read_graph, write_output};
use anyhow::{Context, Result};
use graph_visual::config::Settings;
use graph_visual::render::{compose, render, RenderRequest};
use graph_visual::types::{GraphType, Theme};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the render command
pub struct RenderArgs {
    /// Graph JSON file; stdin when absent
    pub input: Option<PathBuf>,
    /// Backend override
    pub graph_type: Option<String>,
    /// Theme override
    pub theme: Option<Theme>,
    /// Container style JSON
    pub style: Option<String>,
    /// Emit toggle and legend state alongside the payload
    pub view: bool,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Run the render command
pub fn run(args: RenderArgs, settings: &Settings) -> Result<()> {
    let data = read_graph(args.input.as_deref())?;
    if data.is_none() {
        info!("Graph payload is null, nothing to render");
    }

    let mut settings = settings.clone();
    if let Some(graph_type) = args.graph_type.as_deref() {
        settings.graph_type = GraphType::parse(graph_type);
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    let mut request = RenderRequest::from_settings(data, &settings);
    if let Some(style) = args.style {
        let style: serde_json::Value =
            serde_json::from_str(&style).context("--style must be a JSON object")?;
        request = request.with_style(style);
    }

    info!("Rendering with {} backend, {} theme", settings.graph_type, settings.theme);

    let encoded = if args.view {
        serde_json::to_string_pretty(&compose(&request, &settings.locale))
    } else {
        serde_json::to_string_pretty(&render(&request))
    };
    let content = encoded.context("Failed to serialize render output")?;

    write_output(&content, args.output)
}
