//! In-memory Service Quotas for testing without AWS
//!
//! Regions are registered with canned applied/default listings or with an
//! injected failure. Every listing call is recorded so tests can assert on
//! which regions were visited and in what order. Regions that were never
//! registered behave like an unreachable endpoint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bedrock_quotas::{
    Error, QuotaClientFactory, QuotaContext, QuotaListing, QuotaRecord, QuotaSource,
    RegionCatalog, Result,
};

#[derive(Debug, Clone)]
enum Listing {
    Records(Vec<QuotaRecord>),
    Fail(String),
}

#[derive(Debug, Clone)]
struct RegionFixture {
    applied: Listing,
    defaults: Listing,
}

#[derive(Debug, Default)]
struct State {
    regions: HashMap<String, RegionFixture>,
    calls: Vec<(String, QuotaListing)>,
}

/// A fake Service Quotas backend shared by every source it hands out
#[derive(Debug, Clone, Default)]
pub struct MockQuotas {
    state: Arc<Mutex<State>>,
}

impl MockQuotas {
    /// Create a backend with no regions
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region whose listings both succeed
    pub fn with_region(
        self,
        region: &str,
        applied: Vec<QuotaRecord>,
        defaults: Vec<QuotaRecord>,
    ) -> Self {
        self.insert(
            region,
            RegionFixture {
                applied: Listing::Records(applied),
                defaults: Listing::Records(defaults),
            },
        )
    }

    /// Register a region whose applied listing fails
    pub fn with_failing_applied(self, region: &str, message: &str) -> Self {
        self.insert(
            region,
            RegionFixture {
                applied: Listing::Fail(message.to_string()),
                defaults: Listing::Records(Vec::new()),
            },
        )
    }

    /// Register a region whose default listing fails
    pub fn with_failing_defaults(self, region: &str, applied: Vec<QuotaRecord>, message: &str) -> Self {
        self.insert(
            region,
            RegionFixture {
                applied: Listing::Records(applied),
                defaults: Listing::Fail(message.to_string()),
            },
        )
    }

    fn insert(self, region: &str, fixture: RegionFixture) -> Self {
        self.state
            .lock()
            .unwrap()
            .regions
            .insert(region.to_string(), fixture);
        self
    }

    /// Every listing call made, in order
    pub fn calls(&self) -> Vec<(String, QuotaListing)> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Regions whose applied listing was requested, in order
    pub fn visited_regions(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, listing)| *listing == QuotaListing::Applied)
            .map(|(region, _)| region)
            .collect()
    }

    /// A context backed by this mock, with `catalog` as the all-regions answer
    pub fn context(&self, current_region: Option<&str>, catalog: &[&str]) -> QuotaContext {
        QuotaContext::new(
            current_region.map(String::from),
            Arc::new(self.clone()),
            Arc::new(StaticCatalog(catalog.iter().map(|r| r.to_string()).collect())),
        )
    }

    fn listing(&self, region: &str, operation: QuotaListing) -> Result<Vec<QuotaRecord>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push((region.to_string(), operation));

        let listing = match state.regions.get(region) {
            Some(fixture) => match operation {
                QuotaListing::Applied => fixture.applied.clone(),
                QuotaListing::Default => fixture.defaults.clone(),
            },
            None => Listing::Fail(format!(
                "dispatch failure: could not connect to servicequotas.{region}.amazonaws.com"
            )),
        };

        match listing {
            Listing::Records(records) => Ok(records),
            Listing::Fail(message) => Err(Error::Service {
                operation,
                region: region.to_string(),
                message,
            }),
        }
    }
}

impl QuotaClientFactory for MockQuotas {
    fn for_region(&self, region: &str) -> Box<dyn QuotaSource> {
        Box::new(MockSource {
            region: region.to_string(),
            quotas: self.clone(),
        })
    }
}

struct MockSource {
    region: String,
    quotas: MockQuotas,
}

#[async_trait]
impl QuotaSource for MockSource {
    fn region(&self) -> &str {
        &self.region
    }

    async fn applied_quotas(&self, _service_code: &str) -> Result<Vec<QuotaRecord>> {
        self.quotas.listing(&self.region, QuotaListing::Applied)
    }

    async fn default_quotas(&self, _service_code: &str) -> Result<Vec<QuotaRecord>> {
        self.quotas.listing(&self.region, QuotaListing::Default)
    }
}

/// Region catalog returning a fixed list
pub struct StaticCatalog(pub Vec<String>);

#[async_trait]
impl RegionCatalog for StaticCatalog {
    async fn regions_for_service(&self, _service_code: &str) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}
