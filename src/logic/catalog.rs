use crate::error::{CropWatchError, Result};
use crate::models::WeatherSample;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Weather quantity a condition reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Temperature,
    Humidity,
    Rainfall,
}

impl Field {
    pub fn read(&self, sample: &WeatherSample) -> f64 {
        match self {
            Field::Temperature => sample.temperature_c,
            Field::Humidity => sample.humidity_pct,
            Field::Rainfall => sample.rainfall_mm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::Rainfall => "rainfall",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Temperature => "°C",
            Field::Humidity => "%",
            Field::Rainfall => "mm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Op {
    Gt,
    Ge,
    Lt,
    Le,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Gt => ">",
            Op::Ge => "≥",
            Op::Lt => "<",
            Op::Le => "≤",
        }
    }
}

/// A single comparison `field op threshold`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Condition {
    pub field: Field,
    pub op: Op,
    pub threshold: f64,
}

impl Condition {
    pub const fn new(field: Field, op: Op, threshold: f64) -> Self {
        Self {
            field,
            op,
            threshold,
        }
    }

    pub fn holds(&self, sample: &WeatherSample) -> bool {
        let value = self.field.read(sample);
        match self.op {
            Op::Gt => value > self.threshold,
            Op::Ge => value >= self.threshold,
            Op::Lt => value < self.threshold,
            Op::Le => value <= self.threshold,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.field.as_str(),
            self.op.as_str(),
            self.threshold,
            self.field.unit()
        )
    }
}

/// Empirical weather trigger for one disease of one crop.
///
/// The trigger holds when every condition holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseRule {
    pub crop: &'static str,
    pub disease: &'static str,
    pub conditions: &'static str,
    pub trigger: &'static [Condition],
    pub prevention: &'static str,
}

impl DiseaseRule {
    pub fn triggered(&self, sample: &WeatherSample) -> bool {
        self.trigger.iter().all(|c| c.holds(sample))
    }

    pub fn trigger_expression(&self) -> String {
        self.trigger
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

const fn temp(op: Op, threshold: f64) -> Condition {
    Condition::new(Field::Temperature, op, threshold)
}

const fn humidity(op: Op, threshold: f64) -> Condition {
    Condition::new(Field::Humidity, op, threshold)
}

const fn rain(op: Op, threshold: f64) -> Condition {
    Condition::new(Field::Rainfall, op, threshold)
}

// Thresholds are agronomic field knowledge; keep them exactly as published.
static BUILTIN_RULES: &[DiseaseRule] = &[
    DiseaseRule {
        crop: "Rice",
        disease: "Blast",
        conditions: "High humidity (>80%) + Temperature 25-30°C",
        trigger: &[
            temp(Op::Ge, 25.0),
            temp(Op::Le, 30.0),
            humidity(Op::Gt, 80.0),
            rain(Op::Gt, 5.0),
        ],
        prevention: "Apply Tricyclazole fungicide, Avoid excessive nitrogen, Ensure proper drainage",
    },
    DiseaseRule {
        crop: "Rice",
        disease: "Bacterial Leaf Blight",
        conditions: "Temperature 25-34°C + High humidity (>70%) + Rainfall",
        trigger: &[
            temp(Op::Ge, 25.0),
            temp(Op::Le, 34.0),
            humidity(Op::Gt, 70.0),
            rain(Op::Gt, 10.0),
        ],
        prevention: "Use copper-based bactericides, Remove infected plants",
    },
    DiseaseRule {
        crop: "Rice",
        disease: "Sheath Blight",
        conditions: "High temperature (>30°C) + High humidity (>85%)",
        trigger: &[temp(Op::Gt, 30.0), humidity(Op::Gt, 85.0)],
        prevention: "Apply Validamycin, Maintain proper spacing",
    },
    DiseaseRule {
        crop: "Wheat",
        disease: "Rust",
        conditions: "Temperature 15-25°C + High humidity (>70%)",
        trigger: &[
            temp(Op::Ge, 15.0),
            temp(Op::Le, 25.0),
            humidity(Op::Gt, 70.0),
        ],
        prevention: "Spray Propiconazole, Use resistant varieties",
    },
    DiseaseRule {
        crop: "Wheat",
        disease: "Powdery Mildew",
        conditions: "Cool temperature (15-22°C) + Moderate humidity",
        trigger: &[
            temp(Op::Ge, 15.0),
            temp(Op::Le, 22.0),
            humidity(Op::Ge, 50.0),
            humidity(Op::Le, 70.0),
        ],
        prevention: "Apply Sulfur or Triadimefon",
    },
    DiseaseRule {
        crop: "Tomato",
        disease: "Late Blight",
        conditions: "Cool temperature (15-25°C) + High humidity (>90%) + Rain",
        trigger: &[
            temp(Op::Ge, 15.0),
            temp(Op::Le, 25.0),
            humidity(Op::Gt, 90.0),
            rain(Op::Gt, 2.0),
        ],
        prevention: "Apply Metalaxyl + Mancozeb, Remove infected plants",
    },
    DiseaseRule {
        crop: "Tomato",
        disease: "Early Blight",
        conditions: "Temperature 25-30°C + High humidity (>80%)",
        trigger: &[
            temp(Op::Ge, 25.0),
            temp(Op::Le, 30.0),
            humidity(Op::Gt, 80.0),
            rain(Op::Gt, 1.0),
        ],
        prevention: "Spray Chlorothalonil or Mancozeb",
    },
    DiseaseRule {
        crop: "Potato",
        disease: "Late Blight",
        conditions: "Temperature 15-25°C + High humidity (>90%) + Rainfall",
        trigger: &[
            temp(Op::Ge, 15.0),
            temp(Op::Le, 25.0),
            humidity(Op::Gt, 90.0),
            rain(Op::Gt, 5.0),
        ],
        prevention: "Apply Metalaxyl + Mancozeb immediately",
    },
    DiseaseRule {
        crop: "Cotton",
        disease: "Wilt",
        conditions: "High temperature (>30°C) + Moderate rainfall",
        trigger: &[temp(Op::Gt, 30.0), rain(Op::Gt, 5.0)],
        prevention: "Use Carbendazim as soil drench, Practice crop rotation",
    },
    DiseaseRule {
        crop: "Cotton",
        disease: "Boll Rot",
        conditions: "High rainfall + High humidity (>85%)",
        trigger: &[
            temp(Op::Ge, 25.0),
            temp(Op::Le, 30.0),
            humidity(Op::Gt, 85.0),
            rain(Op::Gt, 15.0),
        ],
        prevention: "Improve drainage, Apply Carbendazim + Mancozeb",
    },
    DiseaseRule {
        crop: "Sugarcane",
        disease: "Red Rot",
        conditions: "High temperature (>30°C) + High humidity (>80%)",
        trigger: &[
            temp(Op::Gt, 30.0),
            humidity(Op::Gt, 80.0),
            rain(Op::Gt, 10.0),
        ],
        prevention: "Use disease-free setts, Apply Carbendazim",
    },
    DiseaseRule {
        crop: "Maize",
        disease: "Blight",
        conditions: "Temperature 20-28°C + High humidity (>80%)",
        trigger: &[
            temp(Op::Ge, 20.0),
            temp(Op::Le, 28.0),
            humidity(Op::Gt, 80.0),
            rain(Op::Gt, 3.0),
        ],
        prevention: "Apply Mancozeb, Use resistant hybrids",
    },
];

static BUILTIN: LazyLock<CropDiseaseRuleCatalog> = LazyLock::new(CropDiseaseRuleCatalog::builtin);

/// The process-wide built-in catalog.
pub fn catalog() -> &'static CropDiseaseRuleCatalog {
    &BUILTIN
}

#[derive(Debug, Clone)]
struct CropRules {
    crop: &'static str,
    rules: Vec<DiseaseRule>,
}

/// Immutable registry of disease rules, grouped per crop in insertion order.
#[derive(Debug, Clone)]
pub struct CropDiseaseRuleCatalog {
    crops: Vec<CropRules>,
}

impl CropDiseaseRuleCatalog {
    pub fn builtin() -> Self {
        Self::group(BUILTIN_RULES.iter().cloned())
    }

    /// Build a catalog from arbitrary rules, rejecting duplicate
    /// `(crop, disease)` pairs.
    pub fn from_rules(rules: impl IntoIterator<Item = DiseaseRule>) -> Result<Self> {
        let rules: Vec<DiseaseRule> = rules.into_iter().collect();
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert((rule.crop, rule.disease)) {
                return Err(CropWatchError::InvalidCatalog(format!(
                    "duplicate rule for {} / {}",
                    rule.crop, rule.disease
                )));
            }
        }
        Ok(Self::group(rules))
    }

    fn group(rules: impl IntoIterator<Item = DiseaseRule>) -> Self {
        let mut crops: Vec<CropRules> = Vec::new();
        for rule in rules {
            match crops.iter_mut().find(|c| c.crop == rule.crop) {
                Some(entry) => entry.rules.push(rule),
                None => crops.push(CropRules {
                    crop: rule.crop,
                    rules: vec![rule],
                }),
            }
        }
        Self { crops }
    }

    /// Rules for a crop, matched exactly and case-sensitively.
    /// Unknown crops have no rules.
    pub fn rules_for(&self, crop: &str) -> &[DiseaseRule] {
        self.crops
            .iter()
            .find(|c| c.crop == crop)
            .map(|c| c.rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn rule(&self, crop: &str, disease: &str) -> Option<&DiseaseRule> {
        self.rules_for(crop).iter().find(|r| r.disease == disease)
    }

    pub fn crops(&self) -> Vec<&'static str> {
        self.crops.iter().map(|c| c.crop).collect()
    }

    pub fn contains_crop(&self, crop: &str) -> bool {
        self.crops.iter().any(|c| c.crop == crop)
    }

    pub fn rules(&self) -> impl Iterator<Item = &DiseaseRule> {
        self.crops.iter().flat_map(|c| c.rules.iter())
    }

    pub fn len(&self) -> usize {
        self.crops.iter().map(|c| c.rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CropDiseaseRuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
