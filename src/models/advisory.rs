use super::risk::RiskLevel;
use super::weather::{Location, WeatherSample};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label carried by every rule-triggered prediction. Rules flag a disease,
/// they do not grade it; grading is the job of [`RiskLevel`].
pub const PREDICTION_RISK_LABEL: &str = "HIGH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub disease: String,
    pub risk_label: String,
    pub conditions: String,
    pub prevention: String,
}

impl DiseasePrediction {
    pub fn new(
        disease: impl Into<String>,
        conditions: impl Into<String>,
        prevention: impl Into<String>,
    ) -> Self {
        Self {
            disease: disease.into(),
            risk_label: PREDICTION_RISK_LABEL.to_string(),
            conditions: conditions.into(),
            prevention: prevention.into(),
        }
    }
}

/// Field alerts raised from current conditions. Several may fire at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationalAlert {
    HeavyRainfall,
    LowMoisture,
    HighHumidity,
    StrongWind,
}

impl SituationalAlert {
    pub fn as_str(&self) -> &'static str {
        match self {
            SituationalAlert::HeavyRainfall => "HEAVY RAINFALL ALERT",
            SituationalAlert::LowMoisture => "LOW MOISTURE CONDITIONS",
            SituationalAlert::HighHumidity => "HIGH HUMIDITY WARNING",
            SituationalAlert::StrongWind => "STRONG WIND ALERT",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SituationalAlert::HeavyRainfall => "🌧",
            SituationalAlert::LowMoisture => "💧",
            SituationalAlert::HighHumidity => "🌫",
            SituationalAlert::StrongWind => "💨",
        }
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            SituationalAlert::HeavyRainfall => &[
                "Postpone pesticide/fungicide spraying",
                "Ensure proper field drainage",
                "Monitor for waterlogging",
            ],
            SituationalAlert::LowMoisture => &[
                "Schedule irrigation for crops",
                "Check soil moisture regularly",
            ],
            SituationalAlert::HighHumidity => &[
                "Increase vigilance for fungal diseases",
                "Improve air circulation in fields",
                "Consider preventive fungicide application",
            ],
            SituationalAlert::StrongWind => &[
                "Postpone pesticide spraying",
                "Provide support to tall crops",
            ],
        }
    }
}

impl std::fmt::Display for SituationalAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assessment of the current observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub sample: WeatherSample,
    pub feels_like_c: f64,
    pub condition_text: String,
    pub wind_kph: Option<f64>,
    pub wind_dir: Option<String>,
    pub uv_index: Option<f64>,
    pub risk: RiskLevel,
    pub predictions: Vec<DiseasePrediction>,
    pub alerts: Vec<SituationalAlert>,
}

/// One evaluated forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub sample: WeatherSample,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub sunrise: String,
    pub sunset: String,
    pub condition_text: String,
    pub chance_of_rain_pct: f64,
    pub risk: RiskLevel,
    pub predictions: Vec<DiseasePrediction>,
    pub spray_recommended: bool,
    /// Heavy rain expected: keep out of the field and see to drainage.
    pub avoid_field_operations: bool,
}

impl ForecastDay {
    pub fn has_predictions(&self) -> bool {
        !self.predictions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub location: Location,
    pub crop: String,
    pub current: CurrentConditions,
    pub forecast_days: Vec<ForecastDay>,
    pub spray_days: Vec<NaiveDate>,
}

impl Advisory {
    /// Highest risk across current conditions and every forecast day.
    pub fn peak_risk(&self) -> RiskLevel {
        self.forecast_days
            .iter()
            .map(|d| d.risk)
            .fold(self.current.risk, RiskLevel::max)
    }

    /// Forecast days on which at least one disease rule fired.
    pub fn days_with_predictions(&self) -> Vec<&ForecastDay> {
        self.forecast_days
            .iter()
            .filter(|d| d.has_predictions())
            .collect()
    }

    /// One-based day number of a spray day, as shown to growers.
    pub fn day_number(&self, date: NaiveDate) -> Option<usize> {
        self.forecast_days
            .iter()
            .position(|d| d.date == date)
            .map(|idx| idx + 1)
    }
}
