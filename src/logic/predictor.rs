use super::catalog::{catalog, CropDiseaseRuleCatalog};
use crate::models::{DiseasePrediction, WeatherSample};

/// Evaluates a crop's disease rules against one weather sample.
#[derive(Debug, Clone, Copy)]
pub struct DiseasePredictor<'a> {
    catalog: &'a CropDiseaseRuleCatalog,
}

impl<'a> DiseasePredictor<'a> {
    pub fn new(catalog: &'a CropDiseaseRuleCatalog) -> Self {
        Self { catalog }
    }

    /// Every disease whose trigger holds, in catalog order.
    /// A crop missing from the catalog simply yields nothing.
    pub fn predict(&self, crop: &str, sample: &WeatherSample) -> Vec<DiseasePrediction> {
        self.catalog
            .rules_for(crop)
            .iter()
            .filter(|rule| rule.triggered(sample))
            .map(|rule| DiseasePrediction::new(rule.disease, rule.conditions, rule.prevention))
            .collect()
    }

    pub fn catalog(&self) -> &'a CropDiseaseRuleCatalog {
        self.catalog
    }
}

impl Default for DiseasePredictor<'static> {
    fn default() -> Self {
        Self::new(catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diseases(crop: &str, t: f64, h: f64, r: f64) -> Vec<String> {
        DiseasePredictor::default()
            .predict(crop, &WeatherSample::new(t, h, r))
            .into_iter()
            .map(|p| p.disease)
            .collect()
    }

    #[test]
    fn rice_blast_scenario() {
        let predictions =
            DiseasePredictor::default().predict("Rice", &WeatherSample::new(27.0, 85.0, 6.0));

        assert_eq!(predictions.len(), 1);
        let blast = &predictions[0];
        assert_eq!(blast.disease, "Blast");
        assert_eq!(blast.risk_label, "HIGH");
        assert_eq!(blast.conditions, "High humidity (>80%) + Temperature 25-30°C");
        assert!(blast.prevention.starts_with("Apply Tricyclazole"));
    }

    #[test]
    fn tomato_late_blight_scenario() {
        assert_eq!(diseases("Tomato", 20.0, 95.0, 3.0), vec!["Late Blight"]);
    }

    #[test]
    fn dry_day_triggers_nothing_for_humidity_driven_crops() {
        for crop in ["Rice", "Tomato", "Potato", "Sugarcane", "Maize"] {
            assert!(diseases(crop, 22.0, 40.0, 0.0).is_empty(), "{}", crop);
        }
    }

    #[test]
    fn multiple_rules_fire_in_catalog_order() {
        // Too warm for Blast
        assert_eq!(
            diseases("Rice", 32.0, 90.0, 12.0),
            vec!["Bacterial Leaf Blight", "Sheath Blight"]
        );
        assert_eq!(
            diseases("Rice", 28.0, 90.0, 12.0),
            vec!["Blast", "Bacterial Leaf Blight"]
        );
        assert_eq!(
            diseases("Cotton", 28.0, 90.0, 20.0),
            vec!["Boll Rot"]
        );
        assert_eq!(
            diseases("Wheat", 20.0, 75.0, 0.0),
            vec!["Rust"]
        );
    }

    #[test]
    fn unknown_crop_is_empty_not_an_error() {
        assert!(diseases("Banana", 27.0, 95.0, 20.0).is_empty());
        assert!(diseases("", 27.0, 95.0, 20.0).is_empty());
    }

    #[test]
    fn custom_catalog_is_respected() {
        let rules: Vec<_> = catalog()
            .rules_for("Maize")
            .iter()
            .cloned()
            .collect();
        let custom = CropDiseaseRuleCatalog::from_rules(rules).unwrap();
        let predictor = DiseasePredictor::new(&custom);

        let sample = WeatherSample::new(27.0, 85.0, 6.0);
        assert!(predictor.predict("Rice", &sample).is_empty());
        assert_eq!(predictor.predict("Maize", &sample).len(), 1);
    }
}
