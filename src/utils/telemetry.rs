// file: src/utils/telemetry.rs
// description: Health reporting for the index and timing of search requests
// reference: https://docs.rs/tracing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Ordered from best to worst so a report takes the `max` of its checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn icon(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
            HealthStatus::Unhealthy => "✗",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthCheck {
    pub fn new(
        component: &str,
        status: HealthStatus,
        message: Option<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            component: component.to_string(),
            status,
            message,
            response_time_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn ok(component: &str, message: Option<String>, elapsed: Duration) -> Self {
        Self::new(component, HealthStatus::Healthy, message, elapsed)
    }

    /// Reachable but not answering correctly
    pub fn degraded(component: &str, message: String, elapsed: Duration) -> Self {
        Self::new(component, HealthStatus::Degraded, Some(message), elapsed)
    }

    pub fn failed(component: &str, message: String, elapsed: Duration) -> Self {
        Self::new(component, HealthStatus::Unhealthy, Some(message), elapsed)
    }
}

/// Served as JSON on `/health` and printed by `verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: i64,
    pub version: String,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>) -> Self {
        let overall_status = checks
            .iter()
            .map(|check| check.status)
            .max()
            .unwrap_or(HealthStatus::Healthy);

        Self {
            overall_status,
            checks,
            timestamp: chrono::Utc::now().timestamp(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Whether search can be served at all
    pub fn is_available(&self) -> bool {
        self.overall_status != HealthStatus::Unhealthy
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checked_at = chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        writeln!(
            f,
            "{} Search index: {:?} (v{}, {})",
            self.overall_status.icon(),
            self.overall_status,
            self.version,
            checked_at
        )?;

        for check in &self.checks {
            write!(
                f,
                "  {} {:<10} {}ms",
                check.status.icon(),
                check.component,
                check.response_time_ms
            )?;
            match &check.message {
                Some(message) => writeln!(f, "  {}", message)?,
                None => writeln!(f)?,
            }
        }

        Ok(())
    }
}

/// Times one search and logs it on completion, as a warning past `slow`.
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn start(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    pub fn finish(self, count: usize, slow: Duration) -> Duration {
        let elapsed = self.start.elapsed();

        if elapsed > slow {
            warn!(
                "Slow search {:?}: {} results in {:.2}s",
                self.operation,
                count,
                elapsed.as_secs_f64()
            );
        } else {
            debug!(
                "Search {:?}: {} results in {}ms",
                self.operation,
                count,
                elapsed.as_millis()
            );
        }

        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_status_is_worst_check() {
        let report = HealthReport::new(vec![
            HealthCheck::ok("connection", None, Duration::from_millis(3)),
            HealthCheck::degraded("table", "slow count".to_string(), Duration::from_millis(9)),
        ]);
        assert_eq!(report.overall_status, HealthStatus::Degraded);
        assert!(report.is_available());

        let report = HealthReport::new(vec![
            HealthCheck::ok("connection", None, Duration::from_millis(3)),
            HealthCheck::failed(
                "table",
                "Error opening table: wpai_7500_tools".to_string(),
                Duration::from_millis(5),
            ),
        ]);
        assert_eq!(report.overall_status, HealthStatus::Unhealthy);
        assert!(!report.is_available());
    }

    #[test]
    fn test_report_display_lists_checks() {
        let report = HealthReport::new(vec![
            HealthCheck::ok("connection", Some("./lancedb".to_string()), Duration::from_millis(50)),
            HealthCheck::failed("table", "missing".to_string(), Duration::ZERO),
        ]);
        let text = report.to_string();

        assert!(text.starts_with("✗ Search index: Unhealthy"));
        assert!(text.contains("connection"));
        assert!(text.contains("50ms  ./lancedb"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_empty_report_is_healthy() {
        assert_eq!(HealthReport::new(Vec::new()).overall_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = OperationTimer::start("chatbot");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish(3, Duration::from_secs(60));
        assert!(elapsed >= Duration::from_millis(10));
    }
}
