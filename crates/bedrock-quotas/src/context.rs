//! Explicit AWS context handed to the reporter
//!
//! The reporter never reads the process environment. Everything it needs
//! (the current region, a way to reach Service Quotas in an arbitrary region
//! and a way to enumerate regions) lives in a [`QuotaContext`], built either
//! from the ambient AWS configuration with [`QuotaContext::load`] or assembled
//! by hand with [`QuotaContext::new`].

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{config::ReporterConfig, error::Result, quotas::QuotaRecord};

/// Read access to Service Quotas in one region.
#[async_trait]
pub trait QuotaSource: Send + Sync {
    /// Region this source talks to.
    fn region(&self) -> &str;

    /// All applied (account-level) quotas for a service, every page.
    async fn applied_quotas(&self, service_code: &str) -> Result<Vec<QuotaRecord>>;

    /// All AWS default quotas for a service, every page.
    async fn default_quotas(&self, service_code: &str) -> Result<Vec<QuotaRecord>>;
}

/// Creates a [`QuotaSource`] bound to a region.
pub trait QuotaClientFactory: Send + Sync {
    /// Build a source for `region`.
    fn for_region(&self, region: &str) -> Box<dyn QuotaSource>;
}

/// Lists the regions in which a service is offered.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegionCatalog: Send + Sync {
    /// Regions offering `service_code`, in the order the lookup returns them.
    async fn regions_for_service(&self, service_code: &str) -> Result<Vec<String>>;
}

/// Resolved AWS environment plus client factories.
#[derive(Clone)]
pub struct QuotaContext {
    current_region: Option<String>,
    service_code: String,
    factory: Arc<dyn QuotaClientFactory>,
    catalog: Arc<dyn RegionCatalog>,
}

impl std::fmt::Debug for QuotaContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotaContext")
            .field("current_region", &self.current_region)
            .field("service_code", &self.service_code)
            .finish_non_exhaustive()
    }
}

impl QuotaContext {
    /// Assemble a context from its parts.
    pub fn new(
        current_region: Option<String>,
        factory: Arc<dyn QuotaClientFactory>,
        catalog: Arc<dyn RegionCatalog>,
    ) -> Self {
        Self {
            current_region,
            service_code: crate::quotas::BEDROCK_SERVICE_CODE.to_string(),
            factory,
            catalog,
        }
    }

    /// Report on a different Service Quotas service code.
    pub fn with_service_code(mut self, service_code: impl Into<String>) -> Self {
        self.service_code = service_code.into();
        self
    }

    /// Resolve credentials and region from the standard AWS chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Credentials`](crate::Error::Credentials) when no
    /// credentials can be resolved or `sts:GetCallerIdentity` rejects them,
    /// so the run fails before any region is queried.
    pub async fn load(config: &ReporterConfig) -> Result<Self> {
        let sdk_config = crate::providers::aws::load_sdk_config(config).await?;
        let current_region = sdk_config.region().map(|r| r.as_ref().to_string());

        let catalog_region = config
            .catalog_region
            .clone()
            .or_else(|| current_region.clone())
            .unwrap_or_else(|| crate::config::DEFAULT_CATALOG_REGION.to_string());

        let factory = crate::providers::aws::ServiceQuotasFactory::new(
            sdk_config.clone(),
            config.endpoint_url.clone(),
        );
        let catalog = crate::providers::aws::SsmRegionCatalog::new(&sdk_config, catalog_region);

        Ok(Self::new(current_region, Arc::new(factory), Arc::new(catalog))
            .with_service_code(config.service_code()))
    }

    /// Region configured in the AWS environment, if any.
    pub fn current_region(&self) -> Option<&str> {
        self.current_region.as_deref()
    }

    /// Service code reported on.
    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    /// Source for a region.
    pub fn source_for(&self, region: &str) -> Box<dyn QuotaSource> {
        self.factory.for_region(region)
    }

    /// Region catalog.
    pub fn catalog(&self) -> &dyn RegionCatalog {
        self.catalog.as_ref()
    }
}
