use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::error::{CropWatchError, FetchError, Result};
use crate::models::{ForecastDayInput, Location, WeatherBundle, WeatherObservation};
use chrono::NaiveDate;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// WeatherAPI.com error code for an unresolvable `q` parameter
const LOCATION_NOT_FOUND_CODE: u32 = 1006;

pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherConfig,
    forecast_url: Url,
    current_url: Url,
}

// WeatherAPI.com response structures
#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    feelslike_c: Option<f64>,
    humidity: f64,
    #[serde(default)]
    precip_mm: f64,
    condition: ApiCondition,
    wind_kph: Option<f64>,
    wind_dir: Option<String>,
    uv: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    #[serde(default)]
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: NaiveDate,
    day: ApiDay,
    astro: ApiAstro,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
    #[serde(default)]
    totalprecip_mm: f64,
    avghumidity: f64,
    #[serde(default)]
    daily_chance_of_rain: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiAstro {
    #[serde(default)]
    sunrise: String,
    #[serde(default)]
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: u32,
    message: String,
}

impl WeatherApiClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CropWatchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base = parse_base_url(&config.base_url)?;
        let forecast_url = join_endpoint(&base, "forecast.json")?;
        let current_url = join_endpoint(&base, "current.json")?;

        Ok(Self {
            client,
            config,
            forecast_url,
            current_url,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    fn endpoint(&self, base: &Url, location: &str, days: u32) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key)
            .append_pair("q", location)
            .append_pair("days", &days.to_string())
            .append_pair("aqi", "no")
            .append_pair("alerts", "yes");
        url
    }

    fn transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout())
        } else {
            FetchError::Network(e.to_string())
        }
    }

    /// Fetch current conditions and the daily forecast from WeatherAPI.com
    pub async fn fetch_forecast(
        &self,
        location: &str,
        days: u32,
    ) -> std::result::Result<WeatherBundle, FetchError> {
        let url = self.endpoint(&self.forecast_url, location, days);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(classify_error(location, status.as_u16(), body));
        }

        let bundle = parse_forecast(&body)?;
        tracing::info!(
            "Fetched weather for {} ({} forecast days)",
            bundle.location.display_name(),
            bundle.forecast_days.len()
        );
        Ok(bundle)
    }

    /// Test connection to WeatherAPI.com
    pub async fn test_connection(&self, location: &str) -> std::result::Result<bool, FetchError> {
        let url = self.endpoint(&self.current_url, location, 1);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(response.status().is_success())
    }
}

impl WeatherProvider for WeatherApiClient {
    async fn fetch(
        &self,
        location: &str,
        days: u32,
    ) -> std::result::Result<WeatherBundle, FetchError> {
        self.fetch_forecast(location, days).await
    }
}

/// Parse `weather.base_url`, keeping any path prefix such as `/v1`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = format!("{}/", raw.trim().trim_end_matches('/'));
    let url = Url::parse(&normalized).map_err(|e| {
        CropWatchError::Config(format!("Invalid weather.base_url '{}': {}", raw, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CropWatchError::Config(format!(
            "weather.base_url must be http or https, got '{}'",
            raw
        )));
    }
    Ok(url)
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| CropWatchError::Config(format!("Invalid weather endpoint {}: {}", path, e)))
}

fn classify_error(location: &str, status: u16, body: String) -> FetchError {
    match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(err) if err.error.code == LOCATION_NOT_FOUND_CODE => {
            FetchError::LocationNotFound(location.to_string())
        }
        Ok(err) => FetchError::Status {
            status,
            body: err.error.message,
        },
        Err(_) => FetchError::Status { status, body },
    }
}

fn parse_forecast(body: &str) -> std::result::Result<WeatherBundle, FetchError> {
    let response: ApiForecastResponse = serde_json::from_str(body).map_err(|e| {
        FetchError::InvalidResponse(format!("Failed to parse WeatherAPI response: {}", e))
    })?;
    Ok(convert_response(response))
}

fn convert_response(response: ApiForecastResponse) -> WeatherBundle {
    let location = Location {
        name: response.location.name,
        region: response.location.region,
        country: response.location.country,
        local_time: response.location.localtime,
    };

    let current = response.current;
    let current = WeatherObservation {
        temp_c: current.temp_c,
        feels_like_c: current.feelslike_c.unwrap_or(current.temp_c),
        humidity_pct: current.humidity,
        precipitation_mm: current.precip_mm,
        condition_text: current.condition.text,
        wind_kph: current.wind_kph,
        wind_dir: current.wind_dir,
        uv_index: current.uv,
    };

    // Provider order is chronological; keep it
    let forecast_days = response
        .forecast
        .forecastday
        .into_iter()
        .map(|d| ForecastDayInput {
            date: d.date,
            min_temp_c: d.day.mintemp_c,
            avg_temp_c: d.day.avgtemp_c,
            max_temp_c: d.day.maxtemp_c,
            avg_humidity_pct: d.day.avghumidity,
            total_rainfall_mm: d.day.totalprecip_mm,
            chance_of_rain_pct: d.day.daily_chance_of_rain,
            condition_text: d.day.condition.text,
            sunrise: d.astro.sunrise,
            sunset: d.astro.sunset,
        })
        .collect();

    WeatherBundle {
        location,
        current,
        forecast_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "location": {
            "name": "Bangalore",
            "region": "Karnataka",
            "country": "India",
            "localtime": "2025-12-08 09:15"
        },
        "current": {
            "temp_c": 27.0,
            "feelslike_c": 29.4,
            "humidity": 85,
            "precip_mm": 6.0,
            "condition": { "text": "Light rain" },
            "wind_kph": 14.4,
            "wind_dir": "WSW",
            "uv": 5.0
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2025-12-08",
                    "day": {
                        "maxtemp_c": 29.1, "mintemp_c": 19.8, "avgtemp_c": 23.6,
                        "totalprecip_mm": 0.4, "avghumidity": 62,
                        "daily_chance_of_rain": 20,
                        "condition": { "text": "Partly cloudy" }
                    },
                    "astro": { "sunrise": "06:31 AM", "sunset": "05:54 PM" }
                },
                {
                    "date": "2025-12-09",
                    "day": {
                        "maxtemp_c": 28.0, "mintemp_c": 20.2, "avgtemp_c": 24.1,
                        "totalprecip_mm": 12.7, "avghumidity": 88,
                        "daily_chance_of_rain": 89,
                        "condition": { "text": "Moderate rain" }
                    },
                    "astro": { "sunrise": "06:32 AM", "sunset": "05:54 PM" }
                }
            ]
        }
    }"#;

    fn sample_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test_key".to_string(),
            ..WeatherConfig::default()
        }
    }

    #[test]
    fn parses_forecast_response() {
        let bundle = parse_forecast(SAMPLE_RESPONSE).unwrap();

        assert_eq!(bundle.location.display_name(), "Bangalore, Karnataka");
        assert_eq!(bundle.current.humidity_pct, 85.0);
        assert_eq!(bundle.current.wind_kph, Some(14.4));
        assert_eq!(bundle.current.condition_text, "Light rain");

        assert_eq!(bundle.forecast_days.len(), 2);
        let wet = &bundle.forecast_days[1];
        assert_eq!(wet.date.to_string(), "2025-12-09");
        assert_eq!(wet.total_rainfall_mm, 12.7);
        assert_eq!(wet.avg_humidity_pct, 88.0);
        assert_eq!(wet.chance_of_rain_pct, 89.0);
        assert_eq!(wet.sunrise, "06:32 AM");
    }

    #[test]
    fn empty_forecast_is_not_an_error() {
        let body = r#"{
            "location": { "name": "Nowhere" },
            "current": { "temp_c": 20, "humidity": 50, "condition": {} },
            "forecast": { "forecastday": [] }
        }"#;

        let bundle = parse_forecast(body).unwrap();
        assert!(bundle.forecast_days.is_empty());
        assert_eq!(bundle.current.feels_like_c, 20.0);
        assert!(bundle.current.wind_kph.is_none());
    }

    #[test]
    fn malformed_body_is_invalid_response() {
        assert!(matches!(
            parse_forecast("<html>bad gateway</html>"),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn unknown_location_is_classified() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert_eq!(
            classify_error("Atlantis", 400, body.to_string()),
            FetchError::LocationNotFound("Atlantis".to_string())
        );
    }

    #[test]
    fn other_api_errors_keep_status() {
        let body = r#"{"error":{"code":2006,"message":"API key is invalid."}}"#;
        assert_eq!(
            classify_error("Bangalore", 401, body.to_string()),
            FetchError::Status {
                status: 401,
                body: "API key is invalid.".to_string()
            }
        );

        assert_eq!(
            classify_error("Bangalore", 502, "upstream down".to_string()),
            FetchError::Status {
                status: 502,
                body: "upstream down".to_string()
            }
        );
    }

    #[test]
    fn endpoint_encodes_location() {
        let client = WeatherApiClient::new(sample_config()).unwrap();
        let url = client.endpoint(&client.forecast_url, "New Delhi", 3);

        assert!(url.as_str().starts_with("http://api.weatherapi.com/v1/forecast.json?"));
        assert!(url.as_str().contains("q=New+Delhi"));
        assert!(url.as_str().contains("days=3"));
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let config = WeatherConfig {
            base_url: "https://proxy.example.com/weather/v1/".to_string(),
            ..sample_config()
        };
        let client = WeatherApiClient::new(config).unwrap();

        assert_eq!(
            client.current_url.as_str(),
            "https://proxy.example.com/weather/v1/current.json"
        );
    }

    #[test]
    fn malformed_base_url_is_config_error() {
        for base_url in ["not a url", "ftp://api.weatherapi.com/v1", ""] {
            let config = WeatherConfig {
                base_url: base_url.to_string(),
                ..sample_config()
            };
            assert!(
                matches!(WeatherApiClient::new(config), Err(CropWatchError::Config(_))),
                "{:?} should be rejected",
                base_url
            );
        }
    }
}
