//! Core Web Vitals reporting.
//!
//! A [`MetricsSource`] stands in for the browser measurement library: it is
//! loaded once, then calls back with measurements whenever it decides to. The
//! [`VitalsReporter`] registers one callback per tracked metric and forwards
//! each metric name at most once to an [`AnalyticsSink`].

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, OnceCell};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Metrics registered by [`VitalsReporter::init`].
pub const TRACKED_METRICS: [MetricName; 6] = [
    MetricName::Lcp,
    MetricName::Fid,
    MetricName::Inp,
    MetricName::Cls,
    MetricName::Fcp,
    MetricName::Ttfb,
];

/// Event category used for every vitals event.
pub const VITALS_CATEGORY: &str = "Web Vitals";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricName {
    Lcp,
    Fid,
    Inp,
    Cls,
    Fcp,
    Ttfb,
}

impl MetricName {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricName::Lcp => "LCP",
            MetricName::Fid => "FID",
            MetricName::Inp => "INP",
            MetricName::Cls => "CLS",
            MetricName::Fcp => "FCP",
            MetricName::Ttfb => "TTFB",
        }
    }

    /// Upper bounds of the "good" and "needs improvement" bands.
    fn thresholds(self) -> (f64, f64) {
        match self {
            MetricName::Lcp => (2500.0, 4000.0),
            MetricName::Fid => (100.0, 300.0),
            MetricName::Inp => (200.0, 500.0),
            MetricName::Cls => (0.1, 0.25),
            MetricName::Fcp => (1800.0, 3000.0),
            MetricName::Ttfb => (800.0, 1800.0),
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn for_value(name: MetricName, value: f64) -> Self {
        let (good, needs_improvement) = name.thresholds();
        if value <= good {
            Rating::Good
        } else if value <= needs_improvement {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

/// One measurement, as produced by the measurement library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebVitalMetric {
    pub name: MetricName,
    pub value: f64,
    #[serde(default)]
    pub delta: f64,
    pub rating: Rating,
    pub id: String,
}

impl WebVitalMetric {
    pub fn new(name: MetricName, value: f64, id: &str) -> Self {
        Self {
            name,
            value,
            delta: value,
            rating: Rating::for_value(name, value),
            id: id.to_string(),
        }
    }
}

/// Integer value sent to analytics. CLS is a unitless ratio and is scaled by
/// 1000; the other metrics are already milliseconds.
pub fn report_value(metric: &WebVitalMetric) -> i64 {
    let value = match metric.name {
        MetricName::Cls => metric.value * 1000.0,
        _ => metric.value,
    };
    value.round() as i64
}

impl From<&WebVitalMetric> for AnalyticsEvent {
    fn from(metric: &WebVitalMetric) -> Self {
        AnalyticsEvent {
            action: metric.name.as_str().to_string(),
            category: VITALS_CATEGORY.to_string(),
            label: Some(metric.id.clone()),
            value: report_value(metric),
            non_interaction: true,
        }
    }
}

/// Forward one metric to `sink`. Failures are logged and reported as `false`.
pub async fn forward_metric(sink: &dyn AnalyticsSink, metric: &WebVitalMetric) -> bool {
    let event = AnalyticsEvent::from(metric);
    match sink.send(&event).await {
        Ok(()) => {
            debug!(metric = %metric.name, value = event.value, sink = sink.name(), "web vital reported");
            true
        }
        Err(e) => {
            warn!(metric = %metric.name, sink = sink.name(), "failed to report web vital: {e}");
            false
        }
    }
}

pub type MetricCallback = Arc<dyn Fn(WebVitalMetric) + Send + Sync>;

/// A measurement library that must be loaded before callbacks can be registered.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn load(&self) -> Result<()>;

    fn on_metric(&self, name: MetricName, callback: MetricCallback);
}

/// Reports Web Vitals for one page load.
pub struct VitalsReporter {
    sink: Arc<dyn AnalyticsSink>,
    page_id: Uuid,
    enabled: OnceCell<bool>,
    reported: Arc<Mutex<HashSet<MetricName>>>,
    forwarder: Mutex<Option<JoinHandle<()>>>,
}

impl VitalsReporter {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            sink,
            page_id: Uuid::new_v4(),
            enabled: OnceCell::new(),
            reported: Arc::new(Mutex::new(HashSet::new())),
            forwarder: Mutex::new(None),
        }
    }

    pub fn page_id(&self) -> Uuid {
        self.page_id
    }

    /// Load `source` and register callbacks. Runs once; later calls return the
    /// first result without touching the source. Returns whether reporting is
    /// enabled.
    pub async fn init(&self, source: Arc<dyn MetricsSource>) -> bool {
        *self
            .enabled
            .get_or_init(|| async {
                if let Err(e) = source.load().await {
                    warn!(page = %self.page_id, "web vitals disabled: {e}");
                    return false;
                }
                self.register(source.as_ref());
                true
            })
            .await
    }

    fn register(&self, source: &dyn MetricsSource) {
        let (tx, mut rx) = mpsc::unbounded_channel::<WebVitalMetric>();

        for name in TRACKED_METRICS {
            let tx = tx.clone();
            let reported = Arc::clone(&self.reported);
            source.on_metric(
                name,
                Arc::new(move |metric: WebVitalMetric| {
                    let first = reported
                        .lock()
                        .map(|mut seen| seen.insert(metric.name))
                        .unwrap_or(false);
                    if first {
                        let _ = tx.send(metric);
                    }
                }),
            );
        }
        drop(tx);

        let sink = Arc::clone(&self.sink);
        let handle = tokio::spawn(async move {
            while let Some(metric) = rx.recv().await {
                forward_metric(sink.as_ref(), &metric).await;
            }
        });
        if let Ok(mut slot) = self.forwarder.lock() {
            *slot = Some(handle);
        }
    }

    /// Metric names already forwarded.
    pub fn reported(&self) -> Vec<MetricName> {
        self.reported
            .lock()
            .map(|seen| seen.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Wait until the source has dropped its callbacks and every queued
    /// metric has been forwarded.
    pub async fn finish(&self) {
        let handle = self.forwarder.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
