use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Models often wrap JSON in a Markdown code fence.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*\n(.*?)\n?\s*```\s*$").expect("fence regex is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub hours: u32,
    pub pm25: f64,
    pub hardness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
    #[serde(default)]
    pub alert: Option<String>,
    #[serde(default)]
    pub recommend: Option<String>,
}

/// Strip a surrounding code fence, if any.
pub fn extract_json(text: &str) -> &str {
    match FENCE_RE.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => text.trim(),
    }
}

/// A reply counts as a forecast only if it carries at least one point,
/// an alert or a recommendation.
pub fn parse_forecast(text: &str) -> Result<Forecast, serde_json::Error> {
    let forecast: Forecast = serde_json::from_str(extract_json(text))?;
    if forecast.forecast.is_empty() && forecast.alert.is_none() && forecast.recommend.is_none() {
        return Err(serde::de::Error::custom("reply holds no forecast data"));
    }
    Ok(forecast)
}
