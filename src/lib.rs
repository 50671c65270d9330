//! Weather-driven crop disease risk prediction.
//!
//! [`logic::CropDiseaseRuleCatalog`] holds the per-crop trigger rules,
//! [`logic::RiskScorer`] grades a weather sample, [`logic::DiseasePredictor`]
//! evaluates a crop's rules, and [`logic::ForecastAdvisor`] walks a forecast
//! to produce an [`models::Advisory`] with spray-day recommendations.

pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod presenter;
