use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three numbers every rule and the risk score are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
}

impl WeatherSample {
    pub fn new(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            rainfall_mm,
        }
    }
}

/// Location as resolved by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub local_time: String,
}

impl Location {
    /// Location known only by the string the user typed.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: String::new(),
            country: String::new(),
            local_time: String::new(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.region.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.region)
        }
    }
}

/// Current conditions as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub precipitation_mm: f64,
    pub condition_text: String,
    pub wind_kph: Option<f64>,
    pub wind_dir: Option<String>,
    pub uv_index: Option<f64>,
}

impl WeatherObservation {
    pub fn from_sample(sample: WeatherSample) -> Self {
        Self {
            temp_c: sample.temperature_c,
            feels_like_c: sample.temperature_c,
            humidity_pct: sample.humidity_pct,
            precipitation_mm: sample.rainfall_mm,
            condition_text: String::new(),
            wind_kph: None,
            wind_dir: None,
            uv_index: None,
        }
    }

    pub fn sample(&self) -> WeatherSample {
        WeatherSample::new(self.temp_c, self.humidity_pct, self.precipitation_mm)
    }
}

/// One forecast day as delivered by the provider, before any evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDayInput {
    pub date: NaiveDate,
    pub min_temp_c: f64,
    pub avg_temp_c: f64,
    pub max_temp_c: f64,
    pub avg_humidity_pct: f64,
    pub total_rainfall_mm: f64,
    pub chance_of_rain_pct: f64,
    pub condition_text: String,
    pub sunrise: String,
    pub sunset: String,
}

impl ForecastDayInput {
    /// Daily sample: average temperature, average humidity, total rainfall.
    pub fn sample(&self) -> WeatherSample {
        WeatherSample::new(self.avg_temp_c, self.avg_humidity_pct, self.total_rainfall_mm)
    }
}

/// Everything one provider call returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub location: Location,
    pub current: WeatherObservation,
    pub forecast_days: Vec<ForecastDayInput>,
}
