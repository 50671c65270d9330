pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

use crate::error::FetchError;
use crate::models::WeatherBundle;
use std::future::Future;

/// Source of current conditions plus a daily forecast for a named location.
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather and up to `days` forecast days, in
    /// chronological order. An empty forecast is a valid answer.
    fn fetch(
        &self,
        location: &str,
        days: u32,
    ) -> impl Future<Output = Result<WeatherBundle, FetchError>> + Send;
}
