//! Dashboard module - Financial summary web interface
//!
//! Provides a single-page dashboard over the proxy routes.
//! Separated into submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page shell (header, tabs, content area)
//! - `css.rs`: Styling with light/dark CSS custom properties
//! - `js.rs`: Tab controller, theme, health polling
//! - `format.rs`: Derived labels, classes, number and date formats
//! - `views.rs`: Per-tab HTML fragments served from `/view/{tab}`, rendered
//!   from the askama templates in `templates/`
//!
//! # Features
//! - Today / History / Stocks / News tabs
//! - Distinct loading, error and empty states
//! - 30-second health polling

mod css;
pub mod format;
mod html;
mod js;
pub mod views;

use serde_json::Value;

use crate::error::Result;
use crate::proxy::{ProxyReply, ProxyRoute, QueryParams};

/// Dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Today,
    History,
    Stocks,
    News,
}

impl Tab {
    /// Parse the `{tab}` segment of `/view/{tab}`
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "today" => Some(Tab::Today),
            "history" => Some(Tab::History),
            "stocks" => Some(Tab::Stocks),
            "news" => Some(Tab::News),
            _ => None,
        }
    }

    /// Proxy route backing this tab
    pub fn route(self) -> ProxyRoute {
        match self {
            Tab::Today => ProxyRoute::Latest,
            Tab::History => ProxyRoute::Summaries,
            Tab::Stocks => ProxyRoute::Stocks,
            Tab::News => ProxyRoute::News,
        }
    }

    /// Page size the dashboard asks for
    fn default_limit(self) -> Option<&'static str> {
        match self {
            Tab::Today => None,
            Tab::History => Some("10"),
            Tab::Stocks => Some("20"),
            Tab::News => Some("15"),
        }
    }

    /// Client query with the dashboard's page size filled in
    pub fn query(self, params: QueryParams) -> QueryParams {
        match self.default_limit() {
            Some(limit) => params.with_default("limit", limit),
            None => params,
        }
    }
}

/// What `/view/{tab}` answers with
#[derive(Debug, Clone, PartialEq)]
pub enum ViewReply {
    /// Rendered fragment
    Html(String),
    /// JSON error envelope
    Error(ProxyReply),
}

impl ViewReply {
    pub fn unknown() -> Self {
        ViewReply::Error(ProxyReply::not_found("Unknown view"))
    }

    /// Render the tab from its upstream result. Any failure, upstream or
    /// template, becomes the backing route's fixed envelope.
    pub fn for_tab(tab: Tab, result: &Result<Value>) -> Self {
        let fallback = tab.route().failure_message();
        match result {
            Ok(payload) => match views::render(tab, payload) {
                Ok(html) => ViewReply::Html(html),
                Err(e) => ViewReply::Error(ProxyReply::failure(&e, fallback)),
            },
            Err(e) => ViewReply::Error(ProxyReply::failure(e, fallback)),
        }
    }
}

/// Generate the complete dashboard HTML page
pub fn dashboard_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Financial Summary Dashboard</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script>
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        js = js::SCRIPT
    )
}
