//! Structured logging for region processing
//!
//! Region skips are never printed to stdout. They are logged here at `debug`
//! level so `-vv` or `RUST_LOG=debug` reveals them.

use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::reporter::{RegionOutcome, RegionResult};

/// Timer for measuring how long a region took
pub struct RegionTimer {
    start: Instant,
}

impl RegionTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Log the resolved region list
pub fn log_regions_resolved(service_code: &str, regions: &[String]) {
    info!(
        service_code = %service_code,
        region_count = regions.len(),
        regions = ?regions,
        "Resolved target regions"
    );
}

/// Log the start of a region query
pub fn log_region_started(region: &str) {
    debug!(region = %region, "Querying service quotas");
}

/// Log how a region finished
pub fn log_region_outcome(outcome: &RegionOutcome, elapsed: Duration) {
    match &outcome.result {
        RegionResult::Rows(rows) => debug!(
            region = %outcome.region,
            rows = rows.len(),
            elapsed_ms = elapsed.as_millis(),
            "Region processed"
        ),
        RegionResult::Skipped(reason) => debug!(
            region = %outcome.region,
            reason = %reason,
            elapsed_ms = elapsed.as_millis(),
            "Region skipped"
        ),
    }
}

/// Log an applied quota that has no default counterpart
pub fn log_unmatched_quota(region: &str, quota_code: &str) {
    debug!(
        region = %region,
        quota_code = %quota_code,
        "No default quota for applied quota, skipping"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_timer() {
        let timer = RegionTimer::start();
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed().as_millis() >= 10);
    }
}
