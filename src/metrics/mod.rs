use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::tracking::Package;

// ============================================================================
// Metrics Module - Prometheus metrics for a generation run
// ============================================================================
//
// Tracks:
// - Packages generated per type and carrier
// - Tracking events generated per status
// - Final (current) status distribution
// - Tracking history length
// - Corpus generation duration and files written
//
// There is no scrape endpoint; `render` returns the text exposition so the
// binary can log it at the end of a run.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub packages_generated: IntCounterVec,
    pub tracking_events_generated: IntCounterVec,
    pub final_status: IntCounterVec,
    pub history_length: Histogram,
    pub generation_duration: Histogram,
    pub files_written: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let packages_generated = IntCounterVec::new(
            Opts::new("packages_generated_total", "Total package records generated"),
            &["package_type", "carrier"],
        )?;
        registry.register(Box::new(packages_generated.clone()))?;

        let tracking_events_generated = IntCounterVec::new(
            Opts::new("tracking_events_generated_total", "Total tracking events generated"),
            &["status"],
        )?;
        registry.register(Box::new(tracking_events_generated.clone()))?;

        let final_status = IntCounterVec::new(
            Opts::new("final_status_total", "Packages by current status"),
            &["status"],
        )?;
        registry.register(Box::new(final_status.clone()))?;

        let history_length = Histogram::with_opts(
            HistogramOpts::new("tracking_history_length", "Tracking events per package")
                .buckets(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
        )?;
        registry.register(Box::new(history_length.clone()))?;

        let generation_duration = Histogram::with_opts(
            HistogramOpts::new("corpus_generation_duration_seconds", "Corpus generation duration")
                .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]),
        )?;
        registry.register(Box::new(generation_duration.clone()))?;

        let files_written = IntCounterVec::new(
            Opts::new("corpus_files_written_total", "Output files written"),
            &["format"],
        )?;
        registry.register(Box::new(files_written.clone()))?;

        Ok(Self {
            registry,
            packages_generated,
            tracking_events_generated,
            final_status,
            history_length,
            generation_duration,
            files_written,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record one finished package and every event in its history
    pub fn record_package(&self, package: &Package) {
        self.packages_generated
            .with_label_values(&[package.package_type.as_str(), package.carrier.as_str()])
            .inc();
        for event in &package.tracking_history {
            self.tracking_events_generated
                .with_label_values(&[event.status.as_str()])
                .inc();
        }
        self.final_status
            .with_label_values(&[package.current_status.as_str()])
            .inc();
        self.history_length.observe(package.tracking_history.len() as f64);
    }

    pub fn observe_generation(&self, duration_secs: f64) {
        self.generation_duration.observe(duration_secs);
    }

    pub fn record_file_written(&self, format: &str) {
        self.files_written.with_label_values(&[format]).inc();
    }

    /// Prometheus text exposition of everything recorded so far
    pub fn render(&self) -> anyhow::Result<String> {
        Ok(TextEncoder::new().encode_to_string(&self.registry.gather())?)
    }
}
