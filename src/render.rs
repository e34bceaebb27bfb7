// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Render dispatch - one adapter per backend, selected by graph type

use crate::adapters::force::ChartOption;
use crate::adapters::node_link::{NodeLinkEdge, NodeLinkNode};
use crate::adapters::{Adapted, Adapter, ForceAdapter, NodeLinkAdapter};
use crate::config::Settings;
use crate::graph::VisualGraph;
use crate::interaction::{EventHooks, OnNodeClick, ThemeToggle};
use crate::legend::{build_legend, Legend};
use crate::palette::ColorScheme;
use crate::scale::VisualRange;
use crate::types::{GraphData, GraphType, Theme};
use serde::Serialize;
use tracing::{debug, warn, Level};

/// Everything one render needs
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Graph to draw; `None` draws nothing
    pub data: Option<GraphData>,
    /// Backend selector
    pub graph_type: GraphType,
    /// Active theme
    pub theme: Theme,
    /// Container style, passed through untouched
    pub style: serde_json::Value,
    /// Click handler, passed through untouched
    pub on_node_click: OnNodeClick,
    /// Node size range
    pub node_size: VisualRange,
    /// Scheme override; the theme's built-in scheme otherwise
    pub scheme: Option<ColorScheme>,
}

impl RenderRequest {
    /// Request with default style, sizes, click handler and scheme
    #[must_use]
    pub fn new(data: Option<GraphData>, graph_type: GraphType, theme: Theme) -> Self {
        Self {
            data,
            graph_type,
            theme,
            style: serde_json::Value::Object(serde_json::Map::new()),
            on_node_click: OnNodeClick::default(),
            node_size: VisualRange::default(),
            scheme: None,
        }
    }

    /// Request shaped by loaded settings
    #[must_use]
    pub fn from_settings(data: Option<GraphData>, settings: &Settings) -> Self {
        let mut request = Self::new(data, settings.graph_type, settings.theme);
        request.node_size = settings.node_size;
        request.scheme = settings.scheme_override(settings.theme);
        request
    }

    /// Replace the container style
    #[must_use]
    pub fn with_style(mut self, style: serde_json::Value) -> Self {
        self.style = style;
        self
    }

    /// Replace the click handler
    #[must_use]
    pub fn with_on_node_click(mut self, handler: OnNodeClick) -> Self {
        self.on_node_click = handler;
        self
    }

    /// Replace the color scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// The scheme this request colors with
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
            .clone()
            .unwrap_or_else(|| ColorScheme::for_theme(self.theme))
    }
}

/// Backend-ready output of one render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "renderer", rename_all = "kebab-case")]
pub enum RenderOutput {
    /// Force-directed chart option plus its event hooks
    Force {
        /// Theme the chart is drawn in
        theme: Theme,
        /// Container style
        style: serde_json::Value,
        /// Complete chart option
        option: ChartOption,
        /// Event hooks, `click` bound to the caller's handler
        #[serde(skip)]
        events: EventHooks,
    },
    /// Node-link records plus the click handler
    NodeLink {
        /// Theme at mount time
        theme: Theme,
        /// Container style
        style: serde_json::Value,
        /// Adapted nodes and edges
        data: Adapted<NodeLinkNode, NodeLinkEdge>,
        /// Caller's click handler
        #[serde(skip)]
        on_node_click: OnNodeClick,
    },
    /// Nothing to draw
    Blank,
}

impl RenderOutput {
    /// Check if nothing will be drawn
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Click handler bound to the output, if any
    #[must_use]
    pub fn click_handler(&self) -> Option<&OnNodeClick> {
        match self {
            Self::Force { events, .. } => Some(&events.click),
            Self::NodeLink { on_node_click, .. } => Some(on_node_click),
            Self::Blank => None,
        }
    }
}

/// Run the pipeline for `request`
#[must_use]
pub fn render(request: &RenderRequest) -> RenderOutput {
    let Some(data) = request.data.as_ref() else {
        debug!("No graph data, rendering nothing");
        return RenderOutput::Blank;
    };

    let map = || {
        let graph = VisualGraph::map(data, &request.color_scheme(), request.node_size);
        if tracing::enabled!(Level::DEBUG) {
            let dangling = graph.dangling_edges().len();
            if dangling > 0 {
                debug!("{} edge(s) reference missing nodes", dangling);
            }
        }
        graph
    };

    match request.graph_type {
        GraphType::Force => {
            let graph = map();
            debug!(
                "Rendering force chart: {} nodes, {} edges, {} theme",
                graph.node_count(),
                graph.edge_count(),
                request.theme
            );
            RenderOutput::Force {
                theme: request.theme,
                style: request.style.clone(),
                option: ForceAdapter.option(ForceAdapter.adapt(&graph)),
                events: EventHooks {
                    click: request.on_node_click.clone(),
                },
            }
        }
        GraphType::NodeLink => {
            let graph = map();
            debug!(
                "Rendering node-link graph: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            RenderOutput::NodeLink {
                theme: request.theme,
                style: request.style.clone(),
                data: NodeLinkAdapter.adapt(&graph),
                on_node_click: request.on_node_click.clone(),
            }
        }
        GraphType::Unsupported => {
            warn!("Unsupported graph type, rendering nothing");
            RenderOutput::Blank
        }
    }
}

/// Toggle, legend and backend output for one graph panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    /// Dark-mode toggle state
    pub toggle: ThemeToggle,
    /// Color legend
    pub legend: Legend,
    /// Backend output
    pub output: RenderOutput,
}

/// Compose the whole panel; `None` when there is no graph at all
#[must_use]
pub fn compose(request: &RenderRequest, locale: &str) -> Option<GraphView> {
    request.data.as_ref()?;
    Some(GraphView {
        toggle: ThemeToggle::new(request.theme, request.graph_type, locale),
        legend: build_legend(&request.color_scheme()),
        output: render(request),
    })
}
