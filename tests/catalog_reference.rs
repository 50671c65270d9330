//! The built-in catalog checked rule by rule against the published table.

mod common;

use common::{
    reference_predictions, BOUNDARY_HUMIDITY, BOUNDARY_RAIN, BOUNDARY_TEMPS, REFERENCE_RULES,
};
use cropwatch::logic::{catalog, DiseasePredictor};
use cropwatch::models::WeatherSample;

#[test]
fn catalog_lists_published_rules_in_order() {
    let actual: Vec<(&str, &str)> = catalog().rules().map(|r| (r.crop, r.disease)).collect();
    let expected: Vec<(&str, &str)> = REFERENCE_RULES
        .iter()
        .map(|r| (r.crop, r.disease))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn rule_text_is_verbatim() {
    for reference in &REFERENCE_RULES {
        let rule = catalog()
            .rule(reference.crop, reference.disease)
            .unwrap_or_else(|| panic!("missing {} / {}", reference.crop, reference.disease));
        assert_eq!(rule.conditions, reference.conditions, "{} / {}", rule.crop, rule.disease);
        assert_eq!(rule.prevention, reference.prevention, "{} / {}", rule.crop, rule.disease);
    }
}

#[test]
fn every_rule_matches_published_trigger_on_boundary_grid() {
    for reference in &REFERENCE_RULES {
        let rule = catalog()
            .rule(reference.crop, reference.disease)
            .unwrap_or_else(|| panic!("missing {} / {}", reference.crop, reference.disease));

        for &t in &BOUNDARY_TEMPS {
            for &h in &BOUNDARY_HUMIDITY {
                for &r in &BOUNDARY_RAIN {
                    assert_eq!(
                        rule.triggered(&WeatherSample::new(t, h, r)),
                        (reference.trigger)(t, h, r),
                        "{} / {} at {}°C, {}%, {}mm",
                        reference.crop,
                        reference.disease,
                        t,
                        h,
                        r
                    );
                }
            }
        }
    }
}

#[test]
fn predictor_matches_published_table_on_boundary_grid() {
    let predictor = DiseasePredictor::default();

    for crop in catalog().crops() {
        for &t in &BOUNDARY_TEMPS {
            for &h in &BOUNDARY_HUMIDITY {
                for &r in &BOUNDARY_RAIN {
                    let sample = WeatherSample::new(t, h, r);
                    let predicted: Vec<String> = predictor
                        .predict(crop, &sample)
                        .into_iter()
                        .map(|p| p.disease)
                        .collect();
                    assert_eq!(
                        predicted,
                        reference_predictions(crop, &sample),
                        "{} at {}°C, {}%, {}mm",
                        crop,
                        t,
                        h,
                        r
                    );
                }
            }
        }
    }
}

#[test]
fn shifted_thresholds_would_be_caught() {
    // Points that separate each strict threshold from a nearby looser one
    let predictor = DiseasePredictor::default();

    // Potato Late Blight needs more than 5mm, not just more than 2mm
    assert!(predictor.predict("Potato", &WeatherSample::new(20.0, 91.0, 3.0)).is_empty());
    // Maize Blight needs humidity above 80%, not just above 70%
    assert!(predictor.predict("Maize", &WeatherSample::new(24.0, 75.0, 5.0)).is_empty());
    // Boll Rot needs more than 15mm
    assert!(predictor.predict("Cotton", &WeatherSample::new(27.0, 90.0, 15.0)).is_empty());
    // Red Rot needs more than 10mm
    assert!(predictor.predict("Sugarcane", &WeatherSample::new(32.0, 85.0, 10.0)).is_empty());
}
