// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Force-directed chart backend (ECharts `graph` series)

use super::{Adapted, Adapter};
use crate::graph::MappedNode;
use crate::types::Edge;
use serde::Serialize;

/// Intro animation length in milliseconds
pub const ANIMATION_DURATION_MS: u32 = 3000;
/// Node repulsion factor of the force layout
pub const REPULSION: f64 = 50.0;
/// Allowed edge length range of the force layout
pub const EDGE_LENGTH: [f64; 2] = [1.0, 100.0];
/// Edge curvature
pub const CURVENESS: f64 = 0.3;
/// Edge opacity
pub const LINE_OPACITY: f64 = 0.7;

/// Node fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStyle {
    /// Bucket color
    pub color: String,
}

/// Node record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceNode {
    /// Node name
    pub id: String,
    /// Node name, shown as label
    pub name: String,
    /// Original value
    pub value: f64,
    /// Scaled size
    pub symbol_size: f64,
    /// Fill
    pub item_style: ItemStyle,
}

/// Edge record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceEdge {
    /// Source node name
    pub source: String,
    /// Target node name
    pub target: String,
    /// Edge weight
    pub value: f64,
}

/// Empty tooltip config; its presence enables default tooltips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tooltip {}

/// Label placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Side of the node the label sits on
    pub position: &'static str,
    /// Force label visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

/// Force layout parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceLayout {
    /// Node repulsion
    pub repulsion: f64,
    /// Edge length range
    pub edge_length: [f64; 2],
    /// Animate each layout iteration
    pub layout_animation: bool,
}

/// Edge styling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Edge curvature
    pub curveness: f64,
    /// Edge opacity
    pub opacity: f64,
}

/// Highlight behaviour on hover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emphasis {
    /// What else is highlighted with the hovered node
    pub focus: &'static str,
    /// Label while highlighted
    pub label: Label,
}

/// The single `graph` series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSeries {
    /// Always `graph`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Always `force`
    pub layout: &'static str,
    /// Node records
    pub nodes: Vec<ForceNode>,
    /// Edge records
    pub edges: Vec<ForceEdge>,
    /// Mouse pan and zoom
    pub roam: bool,
    /// Label placement
    pub label: Label,
    /// Force layout parameters
    pub force: ForceLayout,
    /// Edge styling
    pub line_style: LineStyle,
    /// Hover highlight
    pub emphasis: Emphasis,
}

/// Complete chart option handed to the force backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    /// Tooltip config
    pub tooltip: Tooltip,
    /// Intro animation enabled
    pub animation: bool,
    /// Intro animation length
    pub animation_duration: u32,
    /// Chart series
    pub series: Vec<GraphSeries>,
}

/// Adapter for the force-directed chart backend
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceAdapter;

impl Adapter for ForceAdapter {
    type Node = ForceNode;
    type Edge = ForceEdge;

    fn node(&self, node: &MappedNode) -> ForceNode {
        ForceNode {
            id: node.name.clone(),
            name: node.name.clone(),
            value: node.value,
            symbol_size: node.size,
            item_style: ItemStyle {
                color: node.color.clone(),
            },
        }
    }

    fn edge(&self, edge: &Edge) -> ForceEdge {
        ForceEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            value: edge.weight,
        }
    }
}

impl ForceAdapter {
    /// Wrap adapted records in the static chart policy
    ///
    /// Per-tick layout animation is off so the settled layout is the only
    /// one ever drawn.
    #[must_use]
    pub fn option(&self, adapted: Adapted<ForceNode, ForceEdge>) -> ChartOption {
        ChartOption {
            tooltip: Tooltip::default(),
            animation: true,
            animation_duration: ANIMATION_DURATION_MS,
            series: vec![GraphSeries {
                kind: "graph",
                layout: "force",
                nodes: adapted.nodes,
                edges: adapted.edges,
                roam: true,
                label: Label {
                    position: "right",
                    show: None,
                },
                force: ForceLayout {
                    repulsion: REPULSION,
                    edge_length: EDGE_LENGTH,
                    layout_animation: false,
                },
                line_style: LineStyle {
                    curveness: CURVENESS,
                    opacity: LINE_OPACITY,
                },
                emphasis: Emphasis {
                    focus: "adjacency",
                    label: Label {
                        position: "right",
                        show: Some(true),
                    },
                },
            }],
        }
    }
}
