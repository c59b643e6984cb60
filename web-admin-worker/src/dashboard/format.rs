//! Display formatting for dashboard views
//!
//! Derived labels, CSS classes and number formats. Values come out as plain
//! text; the view templates escape them on the way into markup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for values that are missing or not numbers
pub const MISSING: &str = "--";

/// Fixed-decimal number, `--` when missing or not finite
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => MISSING.to_string(),
    }
}

/// Volume with B/M/K suffix; zero or missing is `--`
pub fn format_volume(volume: Option<f64>) -> String {
    let vol = match volume {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return MISSING.to_string(),
    };

    if vol >= 1e9 {
        format!("{:.2}B", vol / 1e9)
    } else if vol >= 1e6 {
        format!("{:.2}M", vol / 1e6)
    } else if vol >= 1e3 {
        format!("{:.2}K", vol / 1e3)
    } else {
        vol.to_string()
    }
}

/// Short date in `YYYY/M/D` form, or `None` if unparseable
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%Y/%-m/%-d").to_string())
}

/// Market mood derived from a 0..1 sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl Sentiment {
    /// Missing scores count as 0.5
    pub fn from_score(score: Option<f64>) -> Self {
        let score = score.unwrap_or(0.5);
        if score >= 0.6 {
            Sentiment::Bullish
        } else if score <= 0.4 {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Bullish => "Bullish",
            Sentiment::Neutral => "Neutral",
            Sentiment::Bearish => "Bearish",
        }
    }

    /// Stat-card class; neutral has none
    pub fn class(self) -> &'static str {
        match self {
            Sentiment::Bullish => "positive",
            Sentiment::Neutral => "",
            Sentiment::Bearish => "negative",
        }
    }

    /// Indicator class on a news item
    pub fn indicator_class(self) -> &'static str {
        match self {
            Sentiment::Bullish => "sentiment-positive",
            Sentiment::Neutral => "sentiment-neutral",
            Sentiment::Bearish => "sentiment-negative",
        }
    }
}

/// Risk level bucket, matched on "low"/"低" and "high"/"高"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTone {
    Low,
    High,
    Unrated,
}

impl RiskTone {
    pub fn of(level: Option<&str>) -> Self {
        let Some(level) = level else {
            return RiskTone::Unrated;
        };
        let level = level.to_lowercase();
        if level.contains('低') || level.contains("low") {
            RiskTone::Low
        } else if level.contains('高') || level.contains("high") {
            RiskTone::High
        } else {
            RiskTone::Unrated
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RiskTone::Low => "positive",
            RiskTone::High => "negative",
            RiskTone::Unrated => "",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RiskTone::Low => "badge-success",
            RiskTone::High => "badge-danger",
            RiskTone::Unrated => "badge-warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_suffixes() {
        assert_eq!(format_volume(Some(1_500_000_000.0)), "1.50B");
        assert_eq!(format_volume(Some(2_500_000.0)), "2.50M");
        assert_eq!(format_volume(Some(12_300.0)), "12.30K");
        assert_eq!(format_volume(Some(500.0)), "500");
        assert_eq!(format_volume(Some(0.0)), "--");
        assert_eq!(format_volume(None), "--");
        assert_eq!(format_volume(Some(f64::INFINITY)), "--");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(Some(189.456), 2), "189.46");
        assert_eq!(format_number(Some(-1.5), 2), "-1.50");
        assert_eq!(format_number(Some(0.7), 1), "0.7");
        assert_eq!(format_number(None, 2), "--");
        assert_eq!(format_number(Some(f64::NAN), 2), "--");
        assert_eq!(format_number(Some(f64::INFINITY), 2), "--");
    }

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(Sentiment::from_score(Some(0.7)).label(), "Bullish");
        assert_eq!(Sentiment::from_score(Some(0.6)).label(), "Bullish");
        assert_eq!(Sentiment::from_score(Some(0.3)).label(), "Bearish");
        assert_eq!(Sentiment::from_score(Some(0.4)).label(), "Bearish");
        assert_eq!(Sentiment::from_score(Some(0.5)).label(), "Neutral");
        assert_eq!(Sentiment::from_score(None).label(), "Neutral");
        assert_eq!(Sentiment::from_score(None).class(), "");
        assert_eq!(
            Sentiment::from_score(Some(0.2)).indicator_class(),
            "sentiment-negative"
        );
    }

    #[test]
    fn test_risk_tone() {
        let low = RiskTone::of(Some("低风险"));
        assert_eq!((low.class(), low.badge()), ("positive", "badge-success"));

        let high = RiskTone::of(Some("High Risk"));
        assert_eq!((high.class(), high.badge()), ("negative", "badge-danger"));

        assert_eq!(RiskTone::of(Some("高")), RiskTone::High);
        assert_eq!(RiskTone::of(Some("LOW")), RiskTone::Low);

        for level in [Some(""), None, Some("Medium")] {
            let tone = RiskTone::of(level);
            assert_eq!((tone.class(), tone.badge()), ("", "badge-warning"));
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05T08:00:00+08:00").as_deref(), Some("2024/1/5"));
        assert_eq!(format_date("2024-11-23T00:00:00Z").as_deref(), Some("2024/11/23"));
        assert_eq!(format_date("2024-03-09").as_deref(), Some("2024/3/9"));
        assert_eq!(format_date("yesterday"), None);
    }
}
