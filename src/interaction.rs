// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interaction contracts with the host surface: node clicks and the theme toggle

use crate::types::{GraphType, Theme};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Prefix of the default click target
pub const GITHUB_BASE_URL: &str = "https://github.com/";

/// The node a click landed on, as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickedNode {
    /// Node identifier (its name)
    pub id: String,
    /// Node value, when the backend reports it
    pub value: Option<f64>,
}

impl ClickedNode {
    /// Click on a node known only by id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }
}

/// What the host should do after a click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "url", rename_all = "snake_case")]
pub enum ClickAction {
    /// Open this URL in place of the current page
    Navigate(String),
    /// Do nothing
    Ignore,
}

type ClickFn = dyn Fn(&ClickedNode) -> ClickAction + Send + Sync;

/// Caller-supplied click handler
///
/// The engine never calls or wraps the handler; it hands the same instance
/// to whichever backend renders.
#[derive(Clone)]
pub struct OnNodeClick(Arc<ClickFn>);

impl OnNodeClick {
    /// Wrap a handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&ClickedNode) -> ClickAction + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Invoke the handler
    #[must_use]
    pub fn call(&self, node: &ClickedNode) -> ClickAction {
        (self.0)(node)
    }

    /// True when both values wrap the very same handler
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for OnNodeClick {
    fn default() -> Self {
        Self::new(|node| ClickAction::Navigate(github_url(&node.id)))
    }
}

impl PartialEq for OnNodeClick {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl fmt::Debug for OnNodeClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnNodeClick(..)")
    }
}

/// GitHub page for a user or `owner/repo` node id
#[must_use]
pub fn github_url(id: &str) -> String {
    format!("{GITHUB_BASE_URL}{id}")
}

/// Event hooks registered on the force chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventHooks {
    /// Fired when a node is clicked
    pub click: OnNodeClick,
}

/// Label of the dark-mode toggle in `locale`; unknown locales get English
#[must_use]
pub fn dark_mode_label(locale: &str) -> &'static str {
    match locale.replace('-', "_").to_ascii_lowercase().as_str() {
        "zh_cn" | "zh" => "深色模式",
        _ => "Dark Mode",
    }
}

/// State of the dark-mode toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeToggle {
    /// On when the dark theme is active
    pub checked: bool,
    /// Off-limits when the backend cannot restyle live
    pub disabled: bool,
    /// Localized caption
    pub label: &'static str,
}

impl ThemeToggle {
    /// Toggle state for the current theme and backend
    #[must_use]
    pub fn new(theme: Theme, graph_type: GraphType, locale: &str) -> Self {
        Self {
            checked: theme == Theme::Dark,
            disabled: !graph_type.supports_theme_switch(),
            label: dark_mode_label(locale),
        }
    }

    /// Theme the host should switch to, or `None` while disabled
    #[must_use]
    pub fn on_change(&self, checked: bool) -> Option<Theme> {
        if self.disabled {
            None
        } else {
            Some(Theme::from_dark_mode(checked))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_click_navigates_to_github() {
        let action = OnNodeClick::default().call(&ClickedNode::new("hypertrons/hypertrons-crx"));
        assert_eq!(
            action,
            ClickAction::Navigate("https://github.com/hypertrons/hypertrons-crx".into())
        );
    }

    #[test]
    fn test_custom_click_handler() {
        let handler = OnNodeClick::new(|_| ClickAction::Ignore);
        assert_eq!(handler.call(&ClickedNode::new("x")), ClickAction::Ignore);
        assert!(handler.is_same(&handler.clone()));
        assert!(!handler.is_same(&OnNodeClick::default()));
    }

    #[test]
    fn test_toggle_reflects_theme() {
        let toggle = ThemeToggle::new(Theme::Dark, GraphType::Force, "en");
        assert!(toggle.checked);
        assert!(!toggle.disabled);
        assert_eq!(toggle.on_change(false), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_disabled_for_node_link() {
        let toggle = ThemeToggle::new(Theme::Dark, GraphType::NodeLink, "en");
        assert!(toggle.checked);
        assert!(toggle.disabled);
        assert_eq!(toggle.on_change(false), None);
    }

    #[test]
    fn test_toggle_enabled_for_unsupported_type() {
        let toggle = ThemeToggle::new(Theme::Light, GraphType::Unsupported, "en");
        assert!(!toggle.disabled);
        assert_eq!(toggle.on_change(true), Some(Theme::Dark));
    }

    #[test]
    fn test_toggle_label_locale() {
        assert_eq!(dark_mode_label("zh-CN"), "深色模式");
        assert_eq!(dark_mode_label("en"), "Dark Mode");
        assert_eq!(dark_mode_label("fr"), "Dark Mode");
    }
}
