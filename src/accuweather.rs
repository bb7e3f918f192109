//! AccuWeather forecast client.
//!
//! One endpoint is consumed: the 5-day daily forecast for a fixed location.
//! The wire shape is deserialized as-is and flattened into
//! [`DailyForecast`] records in the order the API returned them.

use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::config::Config;
use crate::forecast::DailyForecast;

/// AccuWeather location key for Beirut. The app is single-city by design.
pub const LOCATION_ID: &str = "1825925";
pub const CITY: &str = "Beirut";

/// Everything that can go wrong between "send the request" and "hold a
/// forecast list". All variants are treated the same way at the call site:
/// logged once and swallowed, leaving the previous list in place.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Transport-level failure. The URL is stripped from the underlying
    /// error before it is stored so the API key cannot end up in a log line.
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed forecast payload: {0}")]
    Parse(String),

    /// The background worker could not be brought up (native only).
    #[error("fetch worker failed to start: {0}")]
    Worker(String),
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the 5-day daily forecast.
    ///
    /// Success is an HTTP 2xx whose body carries a `DailyForecasts` array;
    /// anything else is a [`ForecastError`]. No retries, no timeout.
    pub async fn five_day(&self) -> Result<Vec<DailyForecast>, ForecastError> {
        let url = format!("{}/forecasts/v1/daily/5day/{}", self.base_url, LOCATION_ID);
        log::debug!("requesting the 5-day forecast for location {LOCATION_ID}");

        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|err| ForecastError::Request(err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ForecastError::Request(err.without_url()))?;

        let payload: FiveDayResponse =
            serde_json::from_str(&body).map_err(|err| ForecastError::Parse(err.to_string()))?;

        payload
            .daily_forecasts
            .into_iter()
            .map(DailyEntry::into_forecast)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FiveDayResponse {
    daily_forecasts: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DailyEntry {
    date: String,
    temperature: TemperatureRange,
    day: DayPart,
    night: DayPart,
    /// Not present on every payload; an absent flag means night.
    #[serde(default)]
    is_day_time: bool,
}

impl DailyEntry {
    fn into_forecast(self) -> Result<DailyForecast, ForecastError> {
        Ok(DailyForecast {
            date: parse_forecast_date(&self.date)?,
            max_fahrenheit: self.temperature.maximum.value,
            day_phrase: self.day.icon_phrase,
            night_phrase: self.night.icon_phrase,
            has_precipitation: self.day.has_precipitation,
            is_day_time: self.is_day_time,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemperatureRange {
    maximum: UnitValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UnitValue {
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DayPart {
    icon_phrase: String,
    #[serde(default)]
    has_precipitation: bool,
}

/// The API reports dates as RFC 3339 datetimes with the location's offset;
/// accept a bare `YYYY-MM-DD` as well.
fn parse_forecast_date(raw: &str) -> Result<Date, ForecastError> {
    if let Ok(datetime) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(datetime.date());
    }

    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|err| ForecastError::Parse(format!("invalid forecast date `{raw}`: {err}")))
}
