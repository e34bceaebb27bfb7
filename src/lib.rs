// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! graph-visual library - visual mapping for weighted graphs
//!
//! This crate turns a weighted graph (valued nodes, weighted edges) into
//! renderer-ready visual attributes: node sizes, bucketed colors, a legend,
//! and the record shapes expected by a force-directed chart backend and a
//! node-link backend. Everything here is a pure transform; nothing is drawn.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod config;
pub mod graph;
pub mod interaction;
pub mod legend;
pub mod palette;
pub mod render;
pub mod scale;

/// Core input types shared by every stage of the pipeline
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    // =========================================================================
    // Graph Input
    // =========================================================================

    /// A graph node; `name` is both its identifier and its display label
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Node {
        /// Unique identifier and label
        pub name: String,
        /// Scalar driving size and color
        pub value: f64,
    }

    impl Node {
        /// Convenience constructor
        #[must_use]
        pub fn new(name: impl Into<String>, value: f64) -> Self {
            Self {
                name: name.into(),
                value,
            }
        }
    }

    /// A weighted edge between two node names
    ///
    /// Endpoints are not checked against the node set.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Edge {
        /// Source node name
        pub source: String,
        /// Target node name
        pub target: String,
        /// Carried through to adapted output unchanged
        pub weight: f64,
    }

    impl Edge {
        /// Convenience constructor
        #[must_use]
        pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
            Self {
                source: source.into(),
                target: target.into(),
                weight,
            }
        }
    }

    /// The graph handed to the engine by its caller
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GraphData {
        /// All nodes, in display order
        #[serde(default)]
        pub nodes: Vec<Node>,
        /// All edges, in display order
        #[serde(default)]
        pub edges: Vec<Edge>,
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Error returned when a selector string cannot be parsed
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unknown theme `{0}` (expected light|dark)")]
    pub struct ParseThemeError(pub String);

    /// Display theme; selects the color palette
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Theme {
        /// Light page background
        #[default]
        Light,
        /// Dark page background
        Dark,
    }

    impl Theme {
        /// Get the lowercase name of this theme
        #[must_use]
        pub fn code(&self) -> &'static str {
            match self {
                Self::Light => "light",
                Self::Dark => "dark",
            }
        }

        /// Theme selected by a dark-mode toggle
        #[must_use]
        pub fn from_dark_mode(checked: bool) -> Self {
            if checked {
                Self::Dark
            } else {
                Self::Light
            }
        }
    }

    impl fmt::Display for Theme {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.code())
        }
    }

    impl FromStr for Theme {
        type Err = ParseThemeError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "light" => Ok(Self::Light),
                "dark" => Ok(Self::Dark),
                other => Err(ParseThemeError(other.to_string())),
            }
        }
    }

    /// Rendering backend selector
    ///
    /// Unrecognized names deserialize to [`GraphType::Unsupported`], which
    /// renders nothing.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum GraphType {
        /// Force-directed chart backend (ECharts-style option object)
        #[default]
        #[serde(alias = "echarts")]
        Force,
        /// Node-link backend (Graphin-style node/edge records)
        #[serde(alias = "antv", alias = "graphin")]
        NodeLink,
        /// Anything else
        #[serde(other)]
        Unsupported,
    }

    impl GraphType {
        /// Parse a backend name; never fails
        #[must_use]
        pub fn parse(s: &str) -> Self {
            match s.trim().to_ascii_lowercase().as_str() {
                "force" | "echarts" => Self::Force,
                "node-link" | "nodelink" | "antv" | "graphin" => Self::NodeLink,
                _ => Self::Unsupported,
            }
        }

        /// Get the canonical name of this backend
        #[must_use]
        pub fn code(&self) -> &'static str {
            match self {
                Self::Force => "force",
                Self::NodeLink => "node-link",
                Self::Unsupported => "unsupported",
            }
        }

        /// Whether the theme toggle stays live; only node-link opts out
        #[must_use]
        pub fn supports_theme_switch(&self) -> bool {
            !matches!(self, Self::NodeLink)
        }
    }

    impl fmt::Display for GraphType {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.code())
        }
    }

    impl From<&str> for GraphType {
        fn from(s: &str) -> Self {
            Self::parse(s)
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::interaction::{ClickAction, OnNodeClick, ThemeToggle};
    pub use crate::legend::{build_legend, Legend, LegendCell};
    pub use crate::palette::ColorScheme;
    pub use crate::render::{render, RenderOutput, RenderRequest};
    pub use crate::types::*;
}
