use crate::models::{RiskLevel, WeatherSample};

/// Additive point score for overall disease risk.
///
/// Humidity and rainfall each contribute up to 3 points, temperature outside
/// the 10-35°C comfort band adds 2. The total (0-8) maps onto [`RiskLevel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn score(&self, sample: &WeatherSample) -> RiskLevel {
        match Self::points(sample) {
            p if p >= 5 => RiskLevel::Critical,
            p if p >= 3 => RiskLevel::High,
            p if p >= 1 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn points(sample: &WeatherSample) -> u8 {
        humidity_points(sample.humidity_pct)
            + rainfall_points(sample.rainfall_mm)
            + temperature_points(sample.temperature_c)
    }
}

fn humidity_points(humidity: f64) -> u8 {
    if humidity > 85.0 {
        3
    } else if humidity > 70.0 {
        2
    } else if humidity > 60.0 {
        1
    } else {
        0
    }
}

fn rainfall_points(rainfall: f64) -> u8 {
    if rainfall > 15.0 {
        3
    } else if rainfall > 5.0 {
        2
    } else if rainfall > 1.0 {
        1
    } else {
        0
    }
}

fn temperature_points(temp: f64) -> u8 {
    if temp > 35.0 || temp < 10.0 {
        2
    } else {
        0
    }
}
