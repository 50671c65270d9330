use super::advisor::ForecastAdvisor;
use crate::datasources::WeatherProvider;
use crate::error::{CropWatchError, FetchError, Result};
use crate::models::{Advisory, AnalysisSession};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Updated(Advisory),
    /// A newer refresh started while this one was in flight; its result was dropped.
    Superseded,
}

/// Fetches weather for an advisory view and feeds it through the engine.
///
/// At most one result is accepted per view: each refresh takes a new
/// generation, and a fetch that completes after a newer refresh started is
/// discarded (last writer wins).
pub struct AdvisoryService<P> {
    provider: P,
    advisor: ForecastAdvisor<'static>,
    forecast_days: u32,
    timeout: Duration,
    generation: AtomicU64,
    latest: Arc<RwLock<Option<Advisory>>>,
}

impl<P: WeatherProvider> AdvisoryService<P> {
    pub fn new(provider: P, forecast_days: u32, timeout: Duration) -> Self {
        Self {
            provider,
            advisor: ForecastAdvisor::default(),
            forecast_days,
            timeout,
            generation: AtomicU64::new(0),
            latest: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn refresh(&self, session: &AnalysisSession) -> Result<RefreshOutcome> {
        let crop = session.crop_or_unknown();
        let location = session.location();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(generation, location, crop, "Fetching weather");

        let fetched = match tokio::time::timeout(
            self.timeout,
            self.provider.fetch(location, self.forecast_days),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };

        // Check and publish under the write lock so a stale result can never
        // land after a newer one.
        let mut latest = self.latest.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::warn!(
                generation,
                location,
                "Discarding weather result superseded by a newer request"
            );
            return Ok(RefreshOutcome::Superseded);
        }

        let bundle = fetched.map_err(|e| {
            tracing::warn!("Failed to fetch weather for {}: {}", location, e);
            CropWatchError::weather_unavailable(location, e)
        })?;

        let advisory = self.advisor.build_advisory(
            bundle.location,
            crop,
            &bundle.current,
            &bundle.forecast_days,
        );
        *latest = Some(advisory.clone());

        Ok(RefreshOutcome::Updated(advisory))
    }

    /// Run a refresh on the runtime so the caller's loop stays responsive.
    pub fn spawn_refresh(self: &Arc<Self>, session: AnalysisSession) -> JoinHandle<Result<RefreshOutcome>>
    where
        P: 'static,
    {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.refresh(&session).await })
    }

    pub async fn latest(&self) -> Option<Advisory> {
        self.latest.read().await.clone()
    }
}
