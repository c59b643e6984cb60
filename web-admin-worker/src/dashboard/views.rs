//! Tab views rendered from upstream payloads
//!
//! Pure functions from a JSON payload to an HTML fragment, built from the
//! askama templates under `templates/`. Every interpolated value is escaped
//! by the template engine. A payload that is empty, not the expected shape,
//! or `{error: ...}` renders the tab's empty state; transport failures never
//! reach this module.

use askama::Template;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Tab;
use super::format::{MISSING, RiskTone, Sentiment, format_date, format_number, format_volume};
use crate::error::Result;
use crate::types::{NewsItem, Stock, Summary};

const NEWS_EXCERPT_CHARS: usize = 150;

const TODAY_EMPTY: &str = "No summary available. Data generates at 08:00 daily.";

/// One tile in the stats grid
struct StatCard {
    label: &'static str,
    value: String,
    /// Change-dot class; empty means no dot
    class: &'static str,
}

impl StatCard {
    fn new(label: &'static str, value: impl Into<String>, class: &'static str) -> Self {
        Self {
            label,
            value: value.into(),
            class,
        }
    }

    fn missing(label: &'static str) -> Self {
        Self::new(label, MISSING, "")
    }
}

struct SummarySection {
    heading: &'static str,
    body: String,
}

#[derive(Template)]
#[template(path = "today.html")]
struct TodayView {
    stats: Vec<StatCard>,
    risk_badge: &'static str,
    risk_text: String,
    date: String,
    sections: Vec<SummarySection>,
}

#[derive(Template)]
#[template(path = "today_empty.html")]
struct TodayEmptyView {
    stats: Vec<StatCard>,
    message: &'static str,
}

#[derive(Template)]
#[template(path = "empty_state.html")]
struct EmptyState {
    message: &'static str,
}

struct HistoryRow {
    date: String,
    badge: &'static str,
    risk: String,
    overview: String,
}

#[derive(Template)]
#[template(path = "history.html")]
struct HistoryView {
    rows: Vec<HistoryRow>,
}

struct StockRow {
    symbol: String,
    market: String,
    price: String,
    change_class: &'static str,
    change: String,
    volume: String,
}

#[derive(Template)]
#[template(path = "stocks.html")]
struct StocksView {
    rows: Vec<StockRow>,
}

struct NewsRow {
    title: String,
    indicator: &'static str,
    score: String,
    excerpt: String,
    date: String,
    source: String,
}

#[derive(Template)]
#[template(path = "news.html")]
struct NewsView {
    items: Vec<NewsRow>,
}

/// Render the fragment for `tab` from its upstream payload
pub fn render(tab: Tab, payload: &Value) -> Result<String> {
    match tab {
        Tab::Today => render_today(payload),
        Tab::History => render_history(payload),
        Tab::Stocks => render_stocks(payload),
        Tab::News => render_news(payload),
    }
}

/// Today's summary: stat cards plus the daily summary card
pub fn render_today(payload: &Value) -> Result<String> {
    let summary = match payload.as_object() {
        Some(obj) if obj.get("error").is_none_or(Value::is_null) => {
            serde_json::from_value::<Summary>(payload.clone()).ok()
        }
        _ => None,
    };
    let Some(summary) = summary else {
        return render_today_empty();
    };

    let date = summary
        .summary_date
        .as_deref()
        .map_or_else(|| "Today".to_string(), display_date);
    let sentiment = Sentiment::from_score(summary.overall_sentiment());
    let risk_level = summary.risk_level.as_deref().filter(|l| !l.is_empty());
    let risk = RiskTone::of(risk_level);
    let risk_text = risk_level.unwrap_or("Medium").to_string();

    let view = TodayView {
        stats: vec![
            StatCard::new("Status", "Active", "positive"),
            StatCard::new("Sentiment", sentiment.label(), sentiment.class()),
            StatCard::new("Risk", risk_text.clone(), risk.class()),
            StatCard::new("Updated", date.clone(), ""),
        ],
        risk_badge: risk.badge(),
        risk_text,
        date,
        sections: vec![
            section("\u{1F3E2} Market Overview", summary.market_overview.as_deref()),
            section("\u{1F4F0} Key News", summary.key_news.as_deref()),
            section("\u{1F4A1} Investment Advice", summary.investment_advice.as_deref()),
        ],
    };
    Ok(view.render()?)
}

fn render_today_empty() -> Result<String> {
    let view = TodayEmptyView {
        stats: ["Status", "Sentiment", "Risk", "Updated"]
            .into_iter()
            .map(StatCard::missing)
            .collect(),
        message: TODAY_EMPTY,
    };
    Ok(view.render()?)
}

/// Recent summaries, newest first as the collector returns them
pub fn render_history(payload: &Value) -> Result<String> {
    let summaries: Vec<Summary> = decode_list(payload);
    if summaries.is_empty() {
        return empty_state("No historical data");
    }

    let rows = summaries
        .iter()
        .map(|s| {
            let risk_level = s.risk_level.as_deref().filter(|l| !l.is_empty());
            HistoryRow {
                date: s
                    .summary_date
                    .as_deref()
                    .map_or_else(|| MISSING.to_string(), display_date),
                badge: RiskTone::of(risk_level).badge(),
                risk: risk_level.unwrap_or("N/A").to_string(),
                overview: text_or(s.market_overview.as_deref(), "No data"),
            }
        })
        .collect();

    Ok(HistoryView { rows }.render()?)
}

/// Quote table
pub fn render_stocks(payload: &Value) -> Result<String> {
    let stocks: Vec<Stock> = decode_list(payload);
    if stocks.is_empty() {
        return empty_state("No stock data");
    }

    let rows = stocks
        .iter()
        .map(|stock| {
            let rising = stock.change_percent.unwrap_or(0.0) >= 0.0;
            StockRow {
                symbol: text_or(stock.symbol.as_deref(), "N/A"),
                market: text_or(stock.market.as_deref(), "N/A"),
                price: format_number(stock.price, 2),
                change_class: if rising { "positive" } else { "negative" },
                change: format!(
                    "{}{}%",
                    if rising { "+" } else { "" },
                    format_number(stock.change_percent, 2)
                ),
                volume: format_volume(stock.volume),
            }
        })
        .collect();

    Ok(StocksView { rows }.render()?)
}

/// News feed with per-article sentiment
pub fn render_news(payload: &Value) -> Result<String> {
    let news: Vec<NewsItem> = decode_list(payload);
    if news.is_empty() {
        return empty_state("No news data");
    }

    let items = news
        .iter()
        .map(|item| NewsRow {
            title: text_or(item.title.as_deref(), "Untitled"),
            indicator: Sentiment::from_score(item.sentiment_score).indicator_class(),
            score: format_number(item.sentiment_score, 2),
            excerpt: news_excerpt(item),
            date: item
                .published_at
                .as_deref()
                .map_or_else(|| MISSING.to_string(), display_date),
            source: text_or(item.source.as_deref(), "Unknown"),
        })
        .collect();

    Ok(NewsView { items }.render()?)
}

/// "No data" panel shown instead of a populated view
pub fn empty_state(message: &'static str) -> Result<String> {
    Ok(EmptyState { message }.render()?)
}

/// Summary if present, else the head of the content, else a placeholder
fn news_excerpt(item: &NewsItem) -> String {
    if let Some(summary) = item.summary.as_deref().filter(|s| !s.is_empty()) {
        return summary.to_string();
    }
    match item.content.as_deref().filter(|c| !c.is_empty()) {
        Some(content) => {
            let head: String = content.chars().take(NEWS_EXCERPT_CHARS).collect();
            format!("{head}...")
        }
        None => "No content".to_string(),
    }
}

/// Decode a JSON array, skipping elements that do not fit `T`
fn decode_list<T: DeserializeOwned>(payload: &Value) -> Vec<T> {
    payload
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|| MISSING.to_string())
}

/// Text, or `fallback` when missing or empty
fn text_or(text: Option<&str>, fallback: &str) -> String {
    text.filter(|t| !t.is_empty()).unwrap_or(fallback).to_string()
}

fn section(heading: &'static str, text: Option<&str>) -> SummarySection {
    SummarySection {
        heading,
        body: text_or(text, "No data"),
    }
}
