// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Backend adapters
//!
//! Each rendering backend expects its own node and edge record shapes. An
//! adapter turns a [`VisualGraph`] into those records without changing node
//! order, identity, or color assignment.

pub mod force;
pub mod node_link;

use crate::graph::{MappedNode, VisualGraph};
use crate::types::Edge;
use serde::Serialize;

pub use force::ForceAdapter;
pub use node_link::NodeLinkAdapter;

/// Adapted node and edge lists for one backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adapted<N, E> {
    /// Backend node records, in input order
    pub nodes: Vec<N>,
    /// Backend edge records, in input order
    pub edges: Vec<E>,
}

/// Shapes mapped graph elements into one backend's records
pub trait Adapter {
    /// Backend node record
    type Node: Serialize;
    /// Backend edge record
    type Edge: Serialize;

    /// Shape a single node
    fn node(&self, node: &MappedNode) -> Self::Node;

    /// Shape a single edge
    fn edge(&self, edge: &Edge) -> Self::Edge;

    /// Shape the whole graph
    fn adapt(&self, graph: &VisualGraph) -> Adapted<Self::Node, Self::Edge> {
        Adapted {
            nodes: graph.nodes.iter().map(|n| self.node(n)).collect(),
            edges: graph.edges.iter().map(|e| self.edge(e)).collect(),
        }
    }
}
