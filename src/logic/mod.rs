pub mod advisor;
pub mod advisory_sync;
pub mod catalog;
pub mod predictor;
pub mod risk;

pub use advisor::ForecastAdvisor;
pub use advisory_sync::{AdvisoryService, RefreshOutcome};
pub use catalog::{catalog, CropDiseaseRuleCatalog, DiseaseRule};
pub use predictor::DiseasePredictor;
pub use risk::RiskScorer;
