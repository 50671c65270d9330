use crate::models::{Advisory, CurrentConditions, ForecastDay};
use std::fmt::{self, Display, Formatter};

/// Closing pointers to further agricultural help
pub const FOOTER: [&str; 2] = [
    "📱 For more advisories: Meghdoot App (IMD-ICAR)",
    "📞 Kisan Call Centre: 1800-180-1551",
];

/// Turns an [`Advisory`] into something a grower can read.
pub trait AdvisoryPresenter {
    fn present(&self, advisory: &Advisory) -> String;
}

/// Plain-text report for terminals and logs
#[derive(Debug, Clone)]
pub struct TextPresenter {
    width: usize,
}

impl TextPresenter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Borrowing view that formats the full report on demand.
    pub fn report<'a>(&'a self, advisory: &'a Advisory) -> Report<'a> {
        Report {
            presenter: self,
            advisory,
        }
    }

    fn rule(&self, f: &mut Formatter<'_>, ch: char) -> fmt::Result {
        writeln!(f, "{}", ch.to_string().repeat(self.width))
    }

    fn heading(&self, f: &mut Formatter<'_>, title: &str) -> fmt::Result {
        self.rule(f, '=')?;
        writeln!(f, "{}", title)?;
        self.rule(f, '=')?;
        writeln!(f)
    }

    fn current_section(&self, f: &mut Formatter<'_>, current: &CurrentConditions) -> fmt::Result {
        self.heading(f, "CURRENT WEATHER CONDITIONS")?;

        let sample = &current.sample;
        writeln!(
            f,
            "Temperature: {:.1}°C (Feels like: {:.1}°C)",
            sample.temperature_c, current.feels_like_c
        )?;
        writeln!(f, "Humidity: {:.0}%", sample.humidity_pct)?;
        writeln!(f, "Rainfall: {:.1} mm", sample.rainfall_mm)?;
        if !current.condition_text.is_empty() {
            writeln!(f, "Condition: {}", current.condition_text)?;
        }
        if let Some(wind) = current.wind_kph {
            write!(f, "Wind: {:.1} kph", wind)?;
            if let Some(dir) = &current.wind_dir {
                write!(f, ", {}", dir)?;
            }
            writeln!(f)?;
        }
        if let Some(uv) = current.uv_index {
            writeln!(f, "UV Index: {:.0}", uv)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{} OVERALL DISEASE RISK: {}\n",
            current.risk.symbol(),
            current.risk
        )?;

        if current.predictions.is_empty() {
            writeln!(
                f,
                "No immediate disease risk detected under current conditions\n"
            )?;
        } else {
            writeln!(f, "DISEASE ALERTS (Current Conditions)")?;
            self.rule(f, '-')?;
            for pred in &current.predictions {
                writeln!(f, "{} - {} RISK", pred.disease, pred.risk_label)?;
                writeln!(f, "   Conditions: {}", pred.conditions)?;
                writeln!(f, "   Prevention: {}\n", pred.prevention)?;
            }
        }

        if !current.alerts.is_empty() {
            self.heading(f, "FARMING RECOMMENDATIONS")?;
            for alert in &current.alerts {
                writeln!(f, "{} {}:", alert.symbol(), alert)?;
                for action in alert.actions() {
                    writeln!(f, "   • {}", action)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }

    fn day_section(&self, f: &mut Formatter<'_>, number: usize, day: &ForecastDay) -> fmt::Result {
        writeln!(f, "Day {}: {} {}", number, day.date, day.risk.symbol())?;
        self.rule(f, '-')?;
        writeln!(
            f,
            "Temperature: Max {:.1}°C, Min {:.1}°C, Avg {:.1}°C",
            day.max_temp_c, day.min_temp_c, day.sample.temperature_c
        )?;
        if !day.condition_text.is_empty() {
            writeln!(f, "Condition: {}", day.condition_text)?;
        }
        writeln!(
            f,
            "Rainfall: {:.1} mm (Chance: {:.0}%)",
            day.sample.rainfall_mm, day.chance_of_rain_pct
        )?;
        writeln!(f, "Humidity: {:.0}%", day.sample.humidity_pct)?;
        writeln!(f, "Sunrise/Sunset: {} / {}", day.sunrise, day.sunset)?;
        writeln!(f, "Risk Level: {} {}\n", day.risk, day.risk.symbol())?;

        if day.predictions.is_empty() {
            writeln!(f, "Low disease risk")?;
        } else {
            writeln!(f, "Predicted Diseases:")?;
            for pred in &day.predictions {
                writeln!(f, "   • {} - {} RISK", pred.disease, pred.risk_label)?;
            }
        }

        if day.spray_recommended {
            writeln!(f, "   ✓ Good day for pesticide spraying")?;
        } else if day.avoid_field_operations {
            writeln!(f, "   ⚠ Avoid field operations, ensure drainage")?;
        }
        writeln!(f)
    }

    fn write_advisory(&self, f: &mut Formatter<'_>, advisory: &Advisory) -> fmt::Result {
        writeln!(f, "📍 {}", advisory.location.display_name())?;
        writeln!(f, "🌾 Crop: {}", advisory.crop)?;
        if !advisory.location.local_time.is_empty() {
            writeln!(f, "🕒 {}", advisory.location.local_time)?;
        }
        writeln!(f)?;

        self.current_section(f, &advisory.current)?;

        let title = format!(
            "{}-DAY WEATHER FORECAST & DISEASE PREDICTION",
            advisory.forecast_days.len()
        );
        self.heading(f, &title)?;
        for (idx, day) in advisory.forecast_days.iter().enumerate() {
            self.day_section(f, idx + 1, day)?;
        }

        if !advisory.spray_days.is_empty() {
            self.heading(f, "BEST DAYS FOR SPRAYING")?;
            for date in &advisory.spray_days {
                match advisory.day_number(*date) {
                    Some(n) => writeln!(f, "✓ {} (Day {})", date, n)?,
                    None => writeln!(f, "✓ {}", date)?,
                }
            }
        }

        writeln!(f)?;
        self.rule(f, '=')?;
        for line in FOOTER {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(80)
    }
}

pub struct Report<'a> {
    presenter: &'a TextPresenter,
    advisory: &'a Advisory,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.presenter.write_advisory(f, self.advisory)
    }
}

impl AdvisoryPresenter for TextPresenter {
    fn present(&self, advisory: &Advisory) -> String {
        self.report(advisory).to_string()
    }
}
