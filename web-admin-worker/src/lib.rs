//! Web Admin Worker - Financial Summary Dashboard for Cloudflare Workers
//!
//! A thin proxy and dashboard in front of the financial-data pipeline.
//!
//! # Architecture
//! - Main entry point routes HTTP requests
//! - Each `/api/*` route forwards to exactly one upstream call
//!   (data collector or AI analyzer) with a fixed error envelope
//! - `/view/{tab}` renders dashboard fragments from the same upstream calls
//! - `/dashboard` serves the single-page UI
//!
//! # Non-features
//! No storage, no auth, no retries, no caching.

#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns
#![allow(clippy::float_cmp)] // Exact zero checks mirror JSON truthiness

mod client;
mod config;
pub mod dashboard;
mod error;
mod proxy;
mod types;

use std::sync::OnceLock;

use serde_json::Value;
use worker::{
    Context, Cors, Env, Method, Request, Response, Router, console_debug, console_error,
    console_log, console_warn, event,
};

pub use client::{HttpUpstream, Upstream};
pub use config::Config;
pub use dashboard::{Tab, ViewReply};
pub use error::ProxyError;
pub use proxy::{AnalyzeRequest, Proxy, ProxyReply, ProxyRoute, QueryParams, resolve_config};
pub use types::*;

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Resolved on the first request of the isolate, never re-read
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let config = load_config(&env);
    let router = Router::with_data(config);

    router
        // Service info
        .get("/", |_req, _ctx| Response::from_json(&ServiceInfo::default()))
        // Liveness check, independent of upstreams and config
        .get("/health", |_req, _ctx| {
            Response::from_json(&HealthStatus::healthy())
        })
        // Dashboard UI
        .get("/dashboard", |_req, _ctx| {
            Response::from_html(dashboard::dashboard_html())
        })
        .get_async("/view/:tab", |req, ctx| async move {
            let tab = ctx.param("tab").and_then(|slug| Tab::from_slug(slug));
            render_view(tab, req, ctx.data).await
        })
        // Data collector passthrough
        .get_async("/api/latest", |req, ctx| {
            forward(ProxyRoute::Latest, req, ctx.data)
        })
        .get_async("/api/summaries", |req, ctx| {
            forward(ProxyRoute::Summaries, req, ctx.data)
        })
        .get_async("/api/stocks", |req, ctx| {
            forward(ProxyRoute::Stocks, req, ctx.data)
        })
        .get_async("/api/news", |req, ctx| forward(ProxyRoute::News, req, ctx.data))
        // AI analyzer passthrough
        .post_async("/api/analyze", |req, ctx| analyze(req, ctx.data))
        // CORS preflight
        .options("/api/:endpoint", |_req, _ctx| Response::empty())
        .run(req, env)
        .await?
        .with_cors(&cors())
}

/// Load and validate configuration once per isolate
fn load_config(env: &Env) -> Option<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Some(config);
    }

    match Config::from_env(env) {
        Ok(config) => {
            console_log!(
                "Web admin config loaded ({}): collector={} analyzer={}",
                config.environment,
                config.data_collector_url,
                config.ai_analyzer_url
            );
            Some(CONFIG.get_or_init(|| config))
        }
        Err(e) => {
            console_error!("{}", e);
            None
        }
    }
}

fn cors() -> Cors {
    Cors::new()
        .with_origins(["*"])
        .with_methods([Method::Get, Method::Post, Method::Options])
        .with_allowed_headers(["Content-Type"])
}

fn query_params(req: &Request) -> WResult<QueryParams> {
    let url = req.url()?;
    Ok(QueryParams::from_pairs(url.query_pairs()))
}

fn respond(reply: &ProxyReply) -> WResult<Response> {
    Ok(Response::from_json(&reply.body)?.with_status(reply.status))
}

/// One upstream call for a collector route; failures are logged here with
/// full detail and never leave the worker
async fn fetch_route(
    config: Option<&'static Config>,
    route: ProxyRoute,
    params: &QueryParams,
) -> Result<Value, ProxyError> {
    let config = resolve_config(config)?;
    let proxy = Proxy::new(config, HttpUpstream::new());
    if config.is_debug() {
        console_debug!(
            "GET {} {:?}",
            proxy.collector_url(route),
            route.upstream_query(params)
        );
    }

    let result = proxy.forward(route, params).await;
    if let Err(e) = &result {
        console_error!("{}: {}", route.failure_message(), e);
    }
    result
}

/// `/api/{latest,summaries,stocks,news}`
async fn forward(
    route: ProxyRoute,
    req: Request,
    config: Option<&'static Config>,
) -> WResult<Response> {
    let params = query_params(&req)?;
    let result = fetch_route(config, route, &params).await;
    respond(&ProxyReply::from_result(&result, route.failure_message()))
}

/// `/view/{tab}`: same upstream call as the tab's API route, rendered to HTML
async fn render_view(
    tab: Option<Tab>,
    req: Request,
    config: Option<&'static Config>,
) -> WResult<Response> {
    let Some(tab) = tab else {
        console_warn!("Unknown dashboard view: {}", req.path());
        return send_view(ViewReply::unknown());
    };

    let params = tab.query(query_params(&req)?);
    let result = fetch_route(config, tab.route(), &params).await;
    send_view(ViewReply::for_tab(tab, &result))
}

fn send_view(reply: ViewReply) -> WResult<Response> {
    match reply {
        ViewReply::Html(html) => Response::from_html(html),
        ViewReply::Error(reply) => respond(&reply),
    }
}

/// `POST /api/analyze`
async fn analyze(mut req: Request, config: Option<&'static Config>) -> WResult<Response> {
    let body = req.text().await.unwrap_or_default();
    let request = AnalyzeRequest::from_body(&body);

    if let Some(config) = config.filter(|c| c.is_debug()) {
        console_debug!("POST {}{}", config.ai_analyzer_url, proxy::ANALYZE_PATH);
    }
    let result = proxy::analyze_request(config, HttpUpstream::new(), request).await;

    match &result {
        Err(ProxyError::BadRequest(msg)) => console_warn!("Analyze rejected: {}", msg),
        Err(e) => console_error!("{}: {}", proxy::ANALYZE_FAILURE, e),
        Ok(_) => {}
    }

    respond(&ProxyReply::from_result(&result, proxy::ANALYZE_FAILURE))
}
