mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cropwatch::config::Config;
use cropwatch::datasources::WeatherApiClient;
use cropwatch::logic::{
    advisor::spray_suitable, catalog, AdvisoryService, DiseasePredictor, RefreshOutcome,
    RiskScorer,
};
use cropwatch::models::{AnalysisSession, WeatherSample};
use cropwatch::presenter::{AdvisoryPresenter, TextPresenter};
use dialoguer::Confirm;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v/-vv raise the default level
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Advise {
            location,
            crop,
            json,
        } => advise(cli.config, location, crop, json).await,
        Commands::Predict {
            crop,
            temp,
            humidity,
            rain,
        } => {
            predict(&crop, WeatherSample::new(temp, humidity, rain));
            Ok(())
        }
        Commands::Crops => {
            list_crops();
            Ok(())
        }
        Commands::Init => {
            Config::setup_interactive(&catalog().crops())?;
            Ok(())
        }
        Commands::Check => check(cli.config).await,
    }
}

/// Load the config, offering first-run setup when none exists yet.
fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    if config_path.is_none() && !Config::exists(None) && std::io::stdin().is_terminal() {
        let run_setup = Confirm::new()
            .with_prompt("No config file found. Run setup now?")
            .default(true)
            .interact()?;
        if run_setup {
            let (config, _) = Config::setup_interactive(&catalog().crops())?;
            return Ok(config);
        }
    }
    Ok(Config::load(config_path)?)
}

async fn advise(
    config_path: Option<PathBuf>,
    location: Option<String>,
    crop: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut session = AnalysisSession::new(config.advisory.default_location.clone());
    if let Some(location) = location {
        session.set_location(&location);
    }
    if let Some(crop) = crop.or(config.advisory.default_crop.clone()) {
        session.set_crop(crop);
    }

    match session.crop() {
        None => tracing::warn!(
            "No crop selected; only risk and spray guidance will be shown (pass --crop)"
        ),
        Some(crop) if !catalog().contains_crop(crop) => tracing::warn!(
            "'{}' is not in the disease catalog ({}); only risk and spray guidance will be shown",
            crop,
            catalog().crops().join(", ")
        ),
        Some(_) => {}
    }

    let client = WeatherApiClient::new(config.weather.clone())?;
    let service = AdvisoryService::new(
        client,
        config.weather.forecast_days,
        config.weather.timeout(),
    );

    let advisory = match service.refresh(&session).await? {
        RefreshOutcome::Updated(advisory) => advisory,
        RefreshOutcome::Superseded => anyhow::bail!("weather request was superseded"),
    };

    if json {
        let out = serde_json::to_string_pretty(&advisory).context("serializing advisory")?;
        println!("{}", out);
    } else {
        print!("{}", TextPresenter::default().present(&advisory));
    }

    Ok(())
}

fn predict(crop: &str, sample: WeatherSample) {
    let risk = RiskScorer.score(&sample);
    let predictions = DiseasePredictor::default().predict(crop, &sample);

    println!(
        "{} at {:.1}°C, {:.0}% humidity, {:.1} mm rain",
        crop, sample.temperature_c, sample.humidity_pct, sample.rainfall_mm
    );
    println!(
        "{} Risk: {} (score {})",
        risk.symbol(),
        risk,
        RiskScorer::points(&sample)
    );

    if predictions.is_empty() {
        println!("No disease triggers met");
    } else {
        for pred in &predictions {
            println!("• {} - {} RISK", pred.disease, pred.risk_label);
            println!("   Prevention: {}", pred.prevention);
        }
    }

    if spray_suitable(&sample) {
        println!("✓ Suitable for spraying");
    }
}

fn list_crops() {
    let catalog = catalog();
    for crop in catalog.crops() {
        println!("{}", crop);
        for rule in catalog.rules_for(crop) {
            println!("  {:<24} {}", rule.disease, rule.trigger_expression());
        }
    }
}

async fn check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    println!("Config OK: {:?}", config.weather);

    let client = WeatherApiClient::new(config.weather.clone())?;
    let location = &config.advisory.default_location;
    match client.test_connection(location).await {
        Ok(true) => println!("WeatherAPI: OK ({})", location),
        Ok(false) => println!("WeatherAPI: rejected request for {}", location),
        Err(e) => println!("WeatherAPI: OFFLINE ({})", e),
    }

    Ok(())
}
