// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use graph_visual::render::{compose, RenderRequest};
use graph_visual::types::{GraphData, GraphType, Theme};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(graph) = GraphData::from_json(text) else {
        return;
    };

    for graph_type in [GraphType::Force, GraphType::NodeLink, GraphType::Unsupported] {
        for theme in [Theme::Light, Theme::Dark] {
            let request = RenderRequest::new(graph.clone(), graph_type, theme);
            if let Some(view) = compose(&request, "en") {
                let _ = serde_json::to_string(&view);
            }
        }
    }
});
