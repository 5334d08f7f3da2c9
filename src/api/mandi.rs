//! Mandi Price Endpoints

use crate::models::MandiPrice;
use super::{client, ApiError};

pub async fn get_mandi_prices(commodity: &str) -> Result<Vec<MandiPrice>, ApiError> {
    log::debug!("[API] Fetching mandi prices for {}", commodity);
    client().get("/mandi/", &[("commodity", commodity)]).await
}
