// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph input loading and renderer-agnostic visual mapping

use crate::palette::ColorScheme;
use crate::scale::{linear_map, value_range, ValueRange, VisualRange};
use crate::types::{Edge, GraphData};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while reading graph input
#[derive(Debug, thiserror::Error)]
pub enum GraphDataError {
    /// The file could not be read
    #[error("failed to read {path}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The payload is not a graph
    #[error("failed to parse graph data")]
    Parse(#[from] serde_json::Error),
}

impl GraphData {
    /// Parse a JSON payload
    ///
    /// A JSON `null` yields `Ok(None)`: there is nothing to draw.
    pub fn from_json(json: &str) -> Result<Option<Self>, GraphDataError> {
        Ok(serde_json::from_str::<Option<Self>>(json)?)
    }

    /// Load a JSON payload from disk
    pub fn load(path: &Path) -> Result<Option<Self>, GraphDataError> {
        let content = fs::read_to_string(path).map_err(|source| GraphDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node with its derived visual attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedNode {
    /// Identifier and label
    pub name: String,
    /// Original value
    pub value: f64,
    /// Scaled size, always finite
    pub size: f64,
    /// Bucket index into the color scheme
    pub bucket: usize,
    /// Bucket color
    pub color: String,
}

/// The graph after sizing and coloring, before any backend shaping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualGraph {
    /// Value range the sizes were scaled from
    pub range: Option<ValueRange>,
    /// Nodes in input order
    pub nodes: Vec<MappedNode>,
    /// Edges in input order, untouched
    pub edges: Vec<Edge>,
}

impl VisualGraph {
    /// Size and color every node of `data`
    #[must_use]
    pub fn map(data: &GraphData, scheme: &ColorScheme, sizes: VisualRange) -> Self {
        let range = value_range(&data.nodes);
        let nodes = data
            .nodes
            .iter()
            .map(|n| {
                let bucket = scheme.bucket_of(n.value);
                MappedNode {
                    name: n.name.clone(),
                    value: n.value,
                    size: linear_map(n.value, range, sizes),
                    bucket,
                    color: scheme.bucket_color(bucket).to_string(),
                }
            })
            .collect();

        Self {
            range,
            nodes,
            edges: data.edges.clone(),
        }
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges whose endpoints are not both present in the node set
    #[must_use]
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let names: HashSet<&str> = self.nodes.iter().map(|n| n.name.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !(names.contains(e.source.as_str()) && names.contains(e.target.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::NODE_SIZE;
    use crate::types::{Node, Theme};
    use std::io::Write;

    fn sample() -> GraphData {
        GraphData {
            nodes: vec![Node::new("a", 5.0), Node::new("b", 50.0), Node::new("c", 5000.0)],
            edges: vec![Edge::new("a", "b", 1.0)],
        }
    }

    #[test]
    fn test_map_sizes_and_colors() {
        let scheme = ColorScheme::for_theme(Theme::Light);
        let graph = VisualGraph::map(&sample(), &scheme, NODE_SIZE);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.nodes[0].size, 10.0);
        assert_eq!(graph.nodes[2].size, 30.0);
        assert!(graph.nodes[1].size > 10.0 && graph.nodes[1].size < 30.0);
        assert_eq!(graph.nodes[0].color, "#9EB9A8");
        assert_eq!(graph.nodes[2].bucket, 3);
    }

    #[test]
    fn test_map_empty() {
        let scheme = ColorScheme::for_theme(Theme::Dark);
        let graph = VisualGraph::map(&GraphData::default(), &scheme, NODE_SIZE);
        assert!(graph.range.is_none());
        assert!(graph.nodes.is_empty());
    }

    #[test]
    fn test_dangling_edges_are_kept() {
        let mut data = sample();
        data.edges.push(Edge::new("a", "ghost", 3.0));
        let graph = VisualGraph::map(&data, &ColorScheme::for_theme(Theme::Light), NODE_SIZE);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dangling_edges().len(), 1);
        assert_eq!(graph.dangling_edges()[0].target, "ghost");
    }

    #[test]
    fn test_dangling_edges_on_long_chain() {
        let n = 50_000;
        let mut data = GraphData {
            nodes: (0..n).map(|i| Node::new(format!("n{i}"), f64::from(i))).collect(),
            edges: (0..n - 1)
                .map(|i| Edge::new(format!("n{i}"), format!("n{}", i + 1), 1.0))
                .collect(),
        };
        data.edges.push(Edge::new("n0", "missing", 1.0));
        data.edges.push(Edge::new("gone", format!("n{}", n - 1), 1.0));

        let graph = VisualGraph::map(&data, &ColorScheme::for_theme(Theme::Light), NODE_SIZE);
        let dangling = graph.dangling_edges();
        assert_eq!(graph.edge_count(), 50_001);
        assert_eq!(dangling.len(), 2);
        assert_eq!(dangling[0].target, "missing");
        assert_eq!(dangling[1].source, "gone");
    }

    #[test]
    fn test_from_json_null() {
        assert!(GraphData::from_json("null").unwrap().is_none());
    }

    #[test]
    fn test_from_json_defaults_missing_lists() {
        let data = GraphData::from_json(r#"{"nodes":[{"name":"x","value":1}]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(data.nodes.len(), 1);
        assert!(data.edges.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GraphData::from_json("{\"nodes\": 3}"),
            Err(GraphDataError::Parse(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&sample()).unwrap()).unwrap();

        let data = GraphData::load(file.path()).unwrap().unwrap();
        assert_eq!(data, sample());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GraphData::load(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(err, GraphDataError::Read { .. }));
    }
}
