//! Weather Endpoints

use crate::models::{WeatherAlert, WeatherRequest};
use super::{client, ApiError};

pub async fn get_weather_alerts(request: &WeatherRequest) -> Result<Vec<WeatherAlert>, ApiError> {
    client().post("/weather/alerts", request).await
}

/// Raw current conditions for a "City,CC" location
pub async fn get_current_weather(location: &str) -> Result<serde_json::Value, ApiError> {
    client().get("/weather/current", &[("location", location)]).await
}
