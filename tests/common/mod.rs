//! Published disease triggers written out as plain comparisons, independent
//! of the catalog's condition table.

#![allow(dead_code)]
use cropwatch::models::WeatherSample;

pub struct ReferenceRule {
    pub crop: &'static str,
    pub disease: &'static str,
    pub conditions: &'static str,
    pub prevention: &'static str,
    pub trigger: fn(f64, f64, f64) -> bool,
}

pub const REFERENCE_RULES: [ReferenceRule; 12] = [
    ReferenceRule {
        crop: "Rice",
        disease: "Blast",
        conditions: "High humidity (>80%) + Temperature 25-30°C",
        prevention: "Apply Tricyclazole fungicide, Avoid excessive nitrogen, Ensure proper drainage",
        trigger: |t, h, r| (25.0..=30.0).contains(&t) && h > 80.0 && r > 5.0,
    },
    ReferenceRule {
        crop: "Rice",
        disease: "Bacterial Leaf Blight",
        conditions: "Temperature 25-34°C + High humidity (>70%) + Rainfall",
        prevention: "Use copper-based bactericides, Remove infected plants",
        trigger: |t, h, r| (25.0..=34.0).contains(&t) && h > 70.0 && r > 10.0,
    },
    ReferenceRule {
        crop: "Rice",
        disease: "Sheath Blight",
        conditions: "High temperature (>30°C) + High humidity (>85%)",
        prevention: "Apply Validamycin, Maintain proper spacing",
        trigger: |t, h, _| t > 30.0 && h > 85.0,
    },
    ReferenceRule {
        crop: "Wheat",
        disease: "Rust",
        conditions: "Temperature 15-25°C + High humidity (>70%)",
        prevention: "Spray Propiconazole, Use resistant varieties",
        trigger: |t, h, _| (15.0..=25.0).contains(&t) && h > 70.0,
    },
    ReferenceRule {
        crop: "Wheat",
        disease: "Powdery Mildew",
        conditions: "Cool temperature (15-22°C) + Moderate humidity",
        prevention: "Apply Sulfur or Triadimefon",
        trigger: |t, h, _| (15.0..=22.0).contains(&t) && (50.0..=70.0).contains(&h),
    },
    ReferenceRule {
        crop: "Tomato",
        disease: "Late Blight",
        conditions: "Cool temperature (15-25°C) + High humidity (>90%) + Rain",
        prevention: "Apply Metalaxyl + Mancozeb, Remove infected plants",
        trigger: |t, h, r| (15.0..=25.0).contains(&t) && h > 90.0 && r > 2.0,
    },
    ReferenceRule {
        crop: "Tomato",
        disease: "Early Blight",
        conditions: "Temperature 25-30°C + High humidity (>80%)",
        prevention: "Spray Chlorothalonil or Mancozeb",
        trigger: |t, h, r| (25.0..=30.0).contains(&t) && h > 80.0 && r > 1.0,
    },
    ReferenceRule {
        crop: "Potato",
        disease: "Late Blight",
        conditions: "Temperature 15-25°C + High humidity (>90%) + Rainfall",
        prevention: "Apply Metalaxyl + Mancozeb immediately",
        trigger: |t, h, r| (15.0..=25.0).contains(&t) && h > 90.0 && r > 5.0,
    },
    ReferenceRule {
        crop: "Cotton",
        disease: "Wilt",
        conditions: "High temperature (>30°C) + Moderate rainfall",
        prevention: "Use Carbendazim as soil drench, Practice crop rotation",
        trigger: |t, _, r| t > 30.0 && r > 5.0,
    },
    ReferenceRule {
        crop: "Cotton",
        disease: "Boll Rot",
        conditions: "High rainfall + High humidity (>85%)",
        prevention: "Improve drainage, Apply Carbendazim + Mancozeb",
        trigger: |t, h, r| (25.0..=30.0).contains(&t) && h > 85.0 && r > 15.0,
    },
    ReferenceRule {
        crop: "Sugarcane",
        disease: "Red Rot",
        conditions: "High temperature (>30°C) + High humidity (>80%)",
        prevention: "Use disease-free setts, Apply Carbendazim",
        trigger: |t, h, r| t > 30.0 && h > 80.0 && r > 10.0,
    },
    ReferenceRule {
        crop: "Maize",
        disease: "Blight",
        conditions: "Temperature 20-28°C + High humidity (>80%)",
        prevention: "Apply Mancozeb, Use resistant hybrids",
        trigger: |t, h, r| (20.0..=28.0).contains(&t) && h > 80.0 && r > 3.0,
    },
];

/// Every threshold in the table, plus a hair on either side.
pub const BOUNDARY_TEMPS: [f64; 21] = [
    14.9, 15.0, 15.1, 19.9, 20.0, 20.1, 21.9, 22.0, 22.1, 24.9, 25.0, 25.1, 27.9, 28.0, 28.1,
    29.9, 30.0, 30.1, 33.9, 34.0, 34.1,
];

pub const BOUNDARY_HUMIDITY: [f64; 15] = [
    49.9, 50.0, 50.1, 69.9, 70.0, 70.1, 79.9, 80.0, 80.1, 84.9, 85.0, 85.1, 89.9, 90.0, 90.1,
];

pub const BOUNDARY_RAIN: [f64; 19] = [
    0.0, 0.9, 1.0, 1.1, 1.9, 2.0, 2.1, 2.9, 3.0, 3.1, 4.9, 5.0, 5.1, 9.9, 10.0, 10.1, 14.9, 15.0,
    15.1,
];

/// Diseases the published table predicts for a crop, in table order.
pub fn reference_predictions(crop: &str, sample: &WeatherSample) -> Vec<&'static str> {
    REFERENCE_RULES
        .iter()
        .filter(|rule| rule.crop == crop)
        .filter(|rule| (rule.trigger)(sample.temperature_c, sample.humidity_pct, sample.rainfall_mm))
        .map(|rule| rule.disease)
        .collect()
}
