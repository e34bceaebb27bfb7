// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Node-link backend (Graphin keyshape records)
//!
//! This backend cannot restyle after its first render, so theme changes
//! only take effect on a fresh mount.

use super::Adapter;
use crate::graph::MappedNode;
use crate::types::Edge;
use serde::Serialize;

/// Control-point distance of polyline edges
pub const POLY_DISTANCE: f64 = 40.0;

/// Node shape style
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeKeyShape {
    /// Scaled size
    pub size: f64,
    /// Outline color
    pub stroke: String,
    /// Fill color
    pub fill: String,
    /// Fill opacity
    pub fill_opacity: f64,
}

/// Node style wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    /// Main shape
    pub keyshape: NodeKeyShape,
}

/// Node record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLinkNode {
    /// Node name
    pub id: String,
    /// Original value
    pub value: f64,
    /// Shape style
    pub style: NodeStyle,
}

/// Polyline bend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poly {
    /// Control-point distance
    pub distance: f64,
}

/// Edge shape style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeKeyShape {
    /// Always `poly`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Polyline bend
    pub poly: Poly,
}

/// Edge style wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    /// Main shape
    pub keyshape: EdgeKeyShape,
}

/// Edge record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLinkEdge {
    /// Source node name
    pub source: String,
    /// Target node name
    pub target: String,
    /// Edge weight
    pub value: f64,
    /// Shape style
    pub style: EdgeStyle,
}

/// Adapter for the node-link backend
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeLinkAdapter;

impl Adapter for NodeLinkAdapter {
    type Node = NodeLinkNode;
    type Edge = NodeLinkEdge;

    fn node(&self, node: &MappedNode) -> NodeLinkNode {
        NodeLinkNode {
            id: node.name.clone(),
            value: node.value,
            style: NodeStyle {
                keyshape: NodeKeyShape {
                    size: node.size,
                    stroke: node.color.clone(),
                    fill: node.color.clone(),
                    fill_opacity: 1.0,
                },
            },
        }
    }

    fn edge(&self, edge: &Edge) -> NodeLinkEdge {
        NodeLinkEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            value: edge.weight,
            style: EdgeStyle {
                keyshape: EdgeKeyShape {
                    kind: "poly",
                    poly: Poly {
                        distance: POLY_DISTANCE,
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VisualGraph;
    use crate::palette::ColorScheme;
    use crate::scale::NODE_SIZE;
    use crate::types::{GraphData, Node, Theme};
    use serde_json::json;

    #[test]
    fn test_record_shapes() {
        let data = GraphData {
            nodes: vec![Node::new("solo", 42.0)],
            edges: vec![Edge::new("solo", "missing", 7.0)],
        };
        let graph = VisualGraph::map(&data, &ColorScheme::for_theme(Theme::Dark), NODE_SIZE);
        let adapted = NodeLinkAdapter.adapt(&graph);

        assert_eq!(
            serde_json::to_value(&adapted.nodes[0]).unwrap(),
            json!({
                "id": "solo",
                "value": 42.0,
                "style": { "keyshape": {
                    "size": 20.0,
                    "stroke": "#006D32",
                    "fill": "#006D32",
                    "fillOpacity": 1.0
                }}
            })
        );
        assert_eq!(
            serde_json::to_value(&adapted.edges[0]).unwrap(),
            json!({
                "source": "solo",
                "target": "missing",
                "value": 7.0,
                "style": { "keyshape": { "type": "poly", "poly": { "distance": 40.0 } } }
            })
        );
    }
}
