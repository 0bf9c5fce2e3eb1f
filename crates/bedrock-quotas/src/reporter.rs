//! The quota reporter
//!
//! Regions are resolved once, then processed strictly one after another.
//! Each region yields a [`RegionOutcome`]: either its rows or the reason it
//! was skipped. A failing region never aborts the run.

use std::collections::HashMap;

use crate::{
    context::{QuotaContext, QuotaSource},
    error::{Error, QuotaListing, Result, SkipReason},
    observability::{self, RegionTimer},
    quotas::{QuotaRecord, QuotaType, ReportRow},
    region::{RegionSelector, dedup_regions},
};

/// What happened in one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOutcome {
    /// Region code
    pub region: String,
    /// Rows produced, or why none were
    pub result: RegionResult,
}

/// Result of querying a single region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionResult {
    /// Both listings succeeded; rows may still be empty
    Rows(Vec<ReportRow>),
    /// A listing failed and the region was left out
    Skipped(SkipReason),
}

impl RegionOutcome {
    /// Rows produced in this region (empty when skipped).
    pub fn rows(&self) -> &[ReportRow] {
        match &self.result {
            RegionResult::Rows(rows) => rows,
            RegionResult::Skipped(_) => &[],
        }
    }

    /// Whether the region was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self.result, RegionResult::Skipped(_))
    }
}

/// Compares applied quotas against AWS defaults across regions.
#[derive(Debug, Clone)]
pub struct QuotaReporter {
    context: QuotaContext,
}

impl QuotaReporter {
    /// Create a reporter over a context.
    pub fn new(context: QuotaContext) -> Self {
        Self { context }
    }

    /// Turn a selector into the ordered list of regions to visit.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] for `CurrentRegion` when no region is configured
    /// - [`Error::RegionCatalog`] when the all-regions lookup fails
    pub async fn resolve_regions(&self, selector: &RegionSelector) -> Result<Vec<String>> {
        let regions = match selector {
            RegionSelector::CurrentRegion => {
                let region = self.context.current_region().ok_or_else(|| {
                    Error::Configuration(
                        "no AWS region configured; set AWS_REGION or use --regions".to_string(),
                    )
                })?;
                vec![region.to_string()]
            }
            RegionSelector::ExplicitRegions(regions) => dedup_regions(regions.iter().cloned()),
            RegionSelector::AllRegions => {
                self.context
                    .catalog()
                    .regions_for_service(self.context.service_code())
                    .await?
            }
        };

        observability::log_regions_resolved(self.context.service_code(), &regions);
        Ok(regions)
    }

    /// Run the report, keeping per-region outcomes.
    pub async fn run_detailed(&self, selector: &RegionSelector) -> Result<Vec<RegionOutcome>> {
        let regions = self.resolve_regions(selector).await?;

        let mut outcomes = Vec::with_capacity(regions.len());
        for region in regions {
            outcomes.push(self.query_region(&region).await);
        }

        Ok(outcomes)
    }

    /// Run the report and return every row, in region order.
    pub async fn run(&self, selector: &RegionSelector) -> Result<Vec<ReportRow>> {
        let outcomes = self.run_detailed(selector).await?;
        Ok(flatten_rows(outcomes))
    }

    /// Query a single region. Never fails; failures become a skip.
    pub async fn query_region(&self, region: &str) -> RegionOutcome {
        let source = self.context.source_for(region);
        observability::log_region_started(source.region());
        let timer = RegionTimer::start();

        let result = match self.fetch(source.as_ref()).await {
            Ok((applied, defaults)) => RegionResult::Rows(join_quotas(&applied, &defaults)),
            Err(reason) => RegionResult::Skipped(reason),
        };

        let outcome = RegionOutcome {
            region: source.region().to_string(),
            result,
        };
        observability::log_region_outcome(&outcome, timer.elapsed());
        outcome
    }

    async fn fetch(
        &self,
        source: &dyn QuotaSource,
    ) -> std::result::Result<(Vec<QuotaRecord>, Vec<QuotaRecord>), SkipReason> {
        let service_code = self.context.service_code();
        let applied = source
            .applied_quotas(service_code)
            .await
            .map_err(|err| SkipReason::unavailable(QuotaListing::Applied, err))?;
        let defaults = source
            .default_quotas(service_code)
            .await
            .map_err(|err| SkipReason::unavailable(QuotaListing::Default, err))?;
        Ok((applied, defaults))
    }
}

/// Concatenate the rows of every outcome, skipped regions contributing none.
pub fn flatten_rows(outcomes: impl IntoIterator<Item = RegionOutcome>) -> Vec<ReportRow> {
    outcomes
        .into_iter()
        .flat_map(|outcome| match outcome.result {
            RegionResult::Rows(rows) => rows,
            RegionResult::Skipped(_) => Vec::new(),
        })
        .collect()
}

/// Pair tracked applied quotas with their defaults.
///
/// Applied order is preserved. Untracked codes are dropped, and so are
/// applied quotas with no default under the same code.
pub fn join_quotas(applied: &[QuotaRecord], defaults: &[QuotaRecord]) -> Vec<ReportRow> {
    let mut default_values = HashMap::with_capacity(defaults.len());
    for record in defaults {
        default_values
            .entry(record.quota_code.as_str())
            .or_insert(record.value);
    }

    applied
        .iter()
        .filter_map(|record| {
            let quota_type = QuotaType::from_code(record.quota_code.as_str())?;
            let Some(default_value) = default_values.get(record.quota_code.as_str()) else {
                observability::log_unmatched_quota(&record.region, record.quota_code.as_str());
                return None;
            };

            Some(ReportRow {
                quota_type,
                quota_name: record.quota_name.clone(),
                current_value: record.value,
                default_value: *default_value,
                region: record.region.clone(),
                quota_code: record.quota_code.clone(),
            })
        })
        .collect()
}
