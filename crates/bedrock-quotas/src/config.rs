//! Configuration for the quota reporter

use crate::quotas::BEDROCK_SERVICE_CODE;

/// Region used for the region catalog lookup when nothing else is configured.
pub const DEFAULT_CATALOG_REGION: &str = "us-east-1";

/// Configuration for building a [`QuotaContext`](crate::context::QuotaContext).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Service Quotas service code to report on; `bedrock` when unset
    pub service_code: Option<String>,

    /// AWS shared-config profile name
    pub profile: Option<String>,

    /// Custom Service Quotas endpoint (for testing or VPC endpoints)
    pub endpoint_url: Option<String>,

    /// Region queried for the list of regions offering the service
    pub catalog_region: Option<String>,
}

impl ReporterConfig {
    /// Create a builder.
    pub fn builder() -> ReporterConfigBuilder {
        ReporterConfigBuilder::default()
    }

    /// Service code to report on.
    pub fn service_code(&self) -> &str {
        self.service_code.as_deref().unwrap_or(BEDROCK_SERVICE_CODE)
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `BEDROCK_QUOTAS_PROFILE` for the AWS profile
    /// - `BEDROCK_QUOTAS_ENDPOINT_URL` for a Service Quotas endpoint override
    /// - `BEDROCK_QUOTAS_CATALOG_REGION` for the region catalog lookup
    ///
    /// Standard AWS variables (`AWS_PROFILE`, `AWS_REGION`, credentials) are
    /// still honoured by the AWS SDK itself.
    pub fn from_env() -> Self {
        use std::env;

        let mut config = Self::default();

        if let Ok(profile) = env::var("BEDROCK_QUOTAS_PROFILE")
            && !profile.is_empty()
        {
            config.profile = Some(profile);
        }

        if let Ok(endpoint_url) = env::var("BEDROCK_QUOTAS_ENDPOINT_URL")
            && !endpoint_url.is_empty()
        {
            config.endpoint_url = Some(endpoint_url);
        }

        if let Ok(region) = env::var("BEDROCK_QUOTAS_CATALOG_REGION")
            && !region.is_empty()
        {
            config.catalog_region = Some(region);
        }

        config
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ReporterConfig) -> Self {
        if other.service_code.is_some() {
            self.service_code = other.service_code;
        }
        if other.profile.is_some() {
            self.profile = other.profile;
        }
        if other.endpoint_url.is_some() {
            self.endpoint_url = other.endpoint_url;
        }
        if other.catalog_region.is_some() {
            self.catalog_region = other.catalog_region;
        }

        self
    }
}

/// Builder for creating [`ReporterConfig`] with a fluent API.
#[derive(Debug, Default)]
pub struct ReporterConfigBuilder {
    config: ReporterConfig,
}

impl ReporterConfigBuilder {
    /// Set the service code.
    pub fn service_code(mut self, service_code: impl Into<String>) -> Self {
        self.config.service_code = Some(service_code.into());
        self
    }

    /// Set the AWS profile name.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.profile = Some(profile.into());
        self
    }

    /// Set a custom Service Quotas endpoint URL.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = Some(url.into());
        self
    }

    /// Set the region used for the region catalog lookup.
    pub fn catalog_region(mut self, region: impl Into<String>) -> Self {
        self.config.catalog_region = Some(region.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ReporterConfig {
        self.config
    }
}
