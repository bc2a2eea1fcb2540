//! Core DecisionEngine implementation

use super::evaluator::{evaluate, evaluate_staged};
use super::trace::EvaluationTrace;
use super::trace_builder::TraceBuilder;
use super::types::{DecisionOptions, DecisionResponse};

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::metrics::{
    Metrics, MetricsCollector, DECISIONS_NOT_REQUIRED_TOTAL, DECISIONS_REJECTED_TOTAL,
    DECISIONS_REQUIRED_TOTAL, DECISIONS_TOTAL,
};
use planning_core::{DecisionRequest, DecisionResult};
use std::sync::Arc;
use std::time::Instant;

/// Planning permission decision engine
///
/// Holds configuration and metrics only. Every call is independent, so one
/// engine can be shared across threads.
pub struct DecisionEngine {
    /// Metrics collector
    metrics: Arc<MetricsCollector>,

    /// Configuration
    config: EngineConfig,
}

impl DecisionEngine {
    /// Generate a unique request ID
    /// Format: req_YYYYMMDDHHmmss_xxxxxx
    /// Example: req_20231209143052_a3f2e1
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0x0100_0000);

        format!("req_{}_{:06x}", datetime_str, random)
    }

    /// Create a new decision engine from configuration
    pub fn new(config: EngineConfig) -> Self {
        tracing::debug!(
            enable_metrics = config.enable_metrics,
            enable_tracing = config.enable_tracing,
            strict_structure_types = config.strict_structure_types,
            "Decision engine created"
        );

        Self {
            metrics: Arc::new(MetricsCollector::new()),
            config,
        }
    }

    /// Evaluate a request without any bookkeeping
    pub fn evaluate(&self, request: &DecisionRequest) -> DecisionResult {
        evaluate(request)
    }

    /// Evaluate a request and return its trace
    pub fn evaluate_traced(&self, request: &DecisionRequest) -> (DecisionResult, EvaluationTrace) {
        TraceBuilder::evaluate(request)
    }

    /// Decide a request using the engine's default options
    pub fn decide(&self, request: DecisionRequest) -> Result<DecisionResponse> {
        let options = DecisionOptions {
            enable_trace: self.config.enable_tracing,
        };
        self.decide_with_options(request, options)
    }

    /// Decide a request
    ///
    /// Fails only in strict mode, for structures outside the matrix. The
    /// check runs before evaluation, so it applies even when a universal
    /// condition would have decided the outcome.
    pub fn decide_with_options(
        &self,
        request: DecisionRequest,
        options: DecisionOptions,
    ) -> Result<DecisionResponse> {
        let start = Instant::now();
        let request_id = Self::generate_request_id();

        if self.config.strict_structure_types && !request.structure_type.is_recognized() {
            tracing::warn!(
                request_id = %request_id,
                structure_type = %request.structure_type,
                "Rejecting unrecognized structure type"
            );
            if self.config.enable_metrics {
                self.metrics.counter(DECISIONS_REJECTED_TOTAL).inc();
            }
            return Err(SdkError::UnrecognizedStructure(request.structure_type));
        }

        let (result, decided_by, trace) = if options.enable_trace {
            let (result, trace) = TraceBuilder::evaluate(&request);
            (result, trace.decided_by, Some(trace))
        } else {
            let (result, decided_by) = evaluate_staged(&request);
            (result, decided_by, None)
        };

        let elapsed = start.elapsed();

        if self.config.enable_metrics {
            self.metrics.counter(DECISIONS_TOTAL).inc();
            let outcome_counter = if result.is_required() {
                DECISIONS_REQUIRED_TOTAL
            } else {
                DECISIONS_NOT_REQUIRED_TOTAL
            };
            self.metrics.counter(outcome_counter).inc();
            self.metrics.record_execution_time("decide", elapsed);
        }

        tracing::info!(
            request_id = %request_id,
            structure_type = %request.structure_type,
            location = %request.location,
            height = %request.height,
            decided_by = %decided_by,
            result = result.as_code(),
            "Decision made"
        );

        Ok(DecisionResponse {
            request_id,
            result,
            decided_by,
            processing_time_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            trace,
        })
    }

    /// Get metrics collector
    pub fn metrics(&self) -> Arc<MetricsCollector> {
        self.metrics.clone()
    }

    /// Get configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
