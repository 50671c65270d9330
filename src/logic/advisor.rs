use super::predictor::DiseasePredictor;
use super::risk::RiskScorer;
use crate::models::{
    Advisory, CurrentConditions, ForecastDay, ForecastDayInput, Location, SituationalAlert,
    WeatherObservation, WeatherSample,
};

const SPRAY_MAX_RAIN_MM: f64 = 2.0;
const SPRAY_MAX_HUMIDITY_PCT: f64 = 80.0;
const HEAVY_RAIN_MM: f64 = 10.0;
const LOW_MOISTURE_RAIN_MM: f64 = 1.0;
const LOW_MOISTURE_HUMIDITY_PCT: f64 = 50.0;
const HIGH_HUMIDITY_PCT: f64 = 85.0;
const STRONG_WIND_KPH: f64 = 30.0;

/// Dry enough and calm enough for pesticide or fungicide application
pub fn spray_suitable(sample: &WeatherSample) -> bool {
    sample.rainfall_mm < SPRAY_MAX_RAIN_MM && sample.humidity_pct < SPRAY_MAX_HUMIDITY_PCT
}

/// Heavy rain day: stay out of the field and see to drainage
pub fn avoid_field_operations(sample: &WeatherSample) -> bool {
    !spray_suitable(sample) && sample.rainfall_mm > HEAVY_RAIN_MM
}

/// Independent field alerts for the current observation.
pub fn situational_alerts(sample: &WeatherSample, wind_kph: Option<f64>) -> Vec<SituationalAlert> {
    let mut alerts = Vec::new();

    if sample.rainfall_mm > HEAVY_RAIN_MM {
        alerts.push(SituationalAlert::HeavyRainfall);
    }
    if sample.rainfall_mm < LOW_MOISTURE_RAIN_MM && sample.humidity_pct < LOW_MOISTURE_HUMIDITY_PCT
    {
        alerts.push(SituationalAlert::LowMoisture);
    }
    if sample.humidity_pct > HIGH_HUMIDITY_PCT {
        alerts.push(SituationalAlert::HighHumidity);
    }
    if wind_kph.is_some_and(|w| w > STRONG_WIND_KPH) {
        alerts.push(SituationalAlert::StrongWind);
    }

    alerts
}

/// Combines risk scoring and rule predictions over current conditions and a
/// multi-day forecast.
#[derive(Debug, Clone, Copy)]
pub struct ForecastAdvisor<'a> {
    scorer: RiskScorer,
    predictor: DiseasePredictor<'a>,
}

impl<'a> ForecastAdvisor<'a> {
    pub fn new(predictor: DiseasePredictor<'a>) -> Self {
        Self {
            scorer: RiskScorer,
            predictor,
        }
    }

    pub fn build_advisory(
        &self,
        location: Location,
        crop: &str,
        current: &WeatherObservation,
        forecast: &[ForecastDayInput],
    ) -> Advisory {
        if !self.predictor.catalog().contains_crop(crop) {
            tracing::info!(
                "No disease rules for crop '{}' - risk and spray guidance only",
                crop
            );
        }

        let current = self.assess_current(crop, current);

        let mut forecast_days = Vec::with_capacity(forecast.len());
        let mut spray_days = Vec::new();

        for input in forecast {
            let day = self.assess_day(crop, input);
            if day.spray_recommended {
                spray_days.push(day.date);
            }
            forecast_days.push(day);
        }

        Advisory {
            location,
            crop: crop.to_string(),
            current,
            forecast_days,
            spray_days,
        }
    }

    pub fn assess_current(&self, crop: &str, observation: &WeatherObservation) -> CurrentConditions {
        let sample = observation.sample();

        CurrentConditions {
            sample,
            feels_like_c: observation.feels_like_c,
            condition_text: observation.condition_text.clone(),
            wind_kph: observation.wind_kph,
            wind_dir: observation.wind_dir.clone(),
            uv_index: observation.uv_index,
            risk: self.scorer.score(&sample),
            predictions: self.predictor.predict(crop, &sample),
            alerts: situational_alerts(&sample, observation.wind_kph),
        }
    }

    pub fn assess_day(&self, crop: &str, input: &ForecastDayInput) -> ForecastDay {
        let sample = input.sample();
        let risk = self.scorer.score(&sample);
        let predictions = self.predictor.predict(crop, &sample);
        let spray_recommended = spray_suitable(&sample);

        tracing::debug!(
            date = %input.date,
            risk = %risk,
            predictions = predictions.len(),
            spray_recommended,
            "Evaluated forecast day"
        );

        ForecastDay {
            date: input.date,
            sample,
            min_temp_c: input.min_temp_c,
            max_temp_c: input.max_temp_c,
            sunrise: input.sunrise.clone(),
            sunset: input.sunset.clone(),
            condition_text: input.condition_text.clone(),
            chance_of_rain_pct: input.chance_of_rain_pct,
            risk,
            predictions,
            spray_recommended,
            avoid_field_operations: avoid_field_operations(&sample),
        }
    }
}

impl Default for ForecastAdvisor<'static> {
    fn default() -> Self {
        Self::new(DiseasePredictor::default())
    }
}
