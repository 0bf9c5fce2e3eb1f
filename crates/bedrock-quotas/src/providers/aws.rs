//! AWS SDK implementations of the context traits
//!
//! - [`ServiceQuotasFactory`] / [`ServiceQuotasSource`]: `ListServiceQuotas` and
//!   `ListAWSDefaultServiceQuotas` through `aws-sdk-servicequotas`, draining
//!   every page.
//! - [`SsmRegionCatalog`]: the regions a service is offered in, read from the
//!   public global-infrastructure parameters through `aws-sdk-ssm`.
//! - [`verify_caller_identity`]: `sts:GetCallerIdentity`, so credentials that
//!   resolve locally but are rejected by AWS stop the run up front.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_servicequotas::{
    Client as ServiceQuotasClient, error::DisplayErrorContext, types::ServiceQuota,
};
use aws_sdk_ssm::Client as SsmClient;
use aws_sdk_sts::Client as StsClient;

use crate::{
    config::{DEFAULT_CATALOG_REGION, ReporterConfig},
    context::{QuotaClientFactory, QuotaSource, RegionCatalog},
    error::{Error, QuotaListing, Result},
    quotas::QuotaRecord,
    region::dedup_regions,
};

/// Page size requested from Service Quotas.
const PAGE_SIZE: i32 = 100;

/// Load the shared AWS configuration and make sure the credentials work.
///
/// # Errors
///
/// Returns an error if no credentials provider is configured, the provider
/// chain yields no credentials, or AWS rejects them.
pub async fn load_sdk_config(config: &ReporterConfig) -> Result<SdkConfig> {
    let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = &config.profile {
        config_loader = config_loader.profile_name(profile);
    }

    let sdk_config = config_loader.load().await;

    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        Error::Configuration("no AWS credentials provider is configured".to_string())
    })?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| Error::Credentials(sdk_message(&e)))?;

    let sts_region = config
        .catalog_region
        .as_deref()
        .or_else(|| sdk_config.region().map(|r| r.as_ref()))
        .unwrap_or(DEFAULT_CATALOG_REGION);
    verify_caller_identity(&sdk_config, sts_region, None).await?;

    tracing::debug!(
        region = sdk_config.region().map(|r| r.as_ref()),
        profile = config.profile.as_deref(),
        "Loaded AWS configuration"
    );

    Ok(sdk_config)
}

/// Ask STS who the credentials belong to.
///
/// Env or profile credentials are never checked against AWS while they are
/// resolved; this call is the first that can reject them.
///
/// # Errors
///
/// Any failure maps to [`Error::Credentials`].
pub async fn verify_caller_identity(
    sdk_config: &SdkConfig,
    region: &str,
    endpoint_url: Option<&str>,
) -> Result<()> {
    let mut builder =
        aws_sdk_sts::config::Builder::from(sdk_config).region(Region::new(region.to_string()));

    if let Some(endpoint) = endpoint_url {
        builder = builder.endpoint_url(endpoint);
    }

    let identity = StsClient::from_conf(builder.build())
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| Error::Credentials(sdk_message(&e)))?;

    tracing::debug!(
        account = identity.account(),
        arn = identity.arn(),
        "Verified AWS credentials"
    );

    Ok(())
}

fn sdk_message<E: std::error::Error>(err: &E) -> String {
    DisplayErrorContext(err).to_string()
}

/// Builds per-region Service Quotas clients from one shared configuration.
#[derive(Debug, Clone)]
pub struct ServiceQuotasFactory {
    sdk_config: SdkConfig,
    endpoint_url: Option<String>,
}

impl ServiceQuotasFactory {
    /// Create a factory; `endpoint_url` overrides the regional endpoint.
    pub fn new(sdk_config: SdkConfig, endpoint_url: Option<String>) -> Self {
        Self {
            sdk_config,
            endpoint_url,
        }
    }
}

impl QuotaClientFactory for ServiceQuotasFactory {
    fn for_region(&self, region: &str) -> Box<dyn QuotaSource> {
        let mut builder = aws_sdk_servicequotas::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_string()));

        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Box::new(ServiceQuotasSource {
            client: ServiceQuotasClient::from_conf(builder.build()),
            region: region.to_string(),
        })
    }
}

/// Service Quotas client bound to a single region.
#[derive(Debug, Clone)]
pub struct ServiceQuotasSource {
    client: ServiceQuotasClient,
    region: String,
}

impl ServiceQuotasSource {
    fn service_error<E: std::error::Error>(&self, operation: QuotaListing, err: &E) -> Error {
        Error::Service {
            operation,
            region: self.region.clone(),
            message: sdk_message(err),
        }
    }

    fn to_records(&self, quotas: Vec<ServiceQuota>) -> Vec<QuotaRecord> {
        quotas
            .iter()
            .filter_map(|quota| {
                let (Some(code), Some(value)) = (quota.quota_code(), quota.value()) else {
                    tracing::trace!(
                        region = %self.region,
                        name = quota.quota_name(),
                        "Ignoring quota without code or value"
                    );
                    return None;
                };
                Some(QuotaRecord::new(
                    code,
                    quota.quota_name().unwrap_or_default(),
                    value,
                    self.region.as_str(),
                ))
            })
            .collect()
    }
}

#[async_trait]
impl QuotaSource for ServiceQuotasSource {
    fn region(&self) -> &str {
        &self.region
    }

    async fn applied_quotas(&self, service_code: &str) -> Result<Vec<QuotaRecord>> {
        let quotas = self
            .client
            .list_service_quotas()
            .service_code(service_code)
            .max_results(PAGE_SIZE)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(|e| self.service_error(QuotaListing::Applied, &e))?;

        Ok(self.to_records(quotas))
    }

    async fn default_quotas(&self, service_code: &str) -> Result<Vec<QuotaRecord>> {
        let quotas = self
            .client
            .list_aws_default_service_quotas()
            .service_code(service_code)
            .max_results(PAGE_SIZE)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(|e| self.service_error(QuotaListing::Default, &e))?;

        Ok(self.to_records(quotas))
    }
}

/// Path of the public parameters listing the regions a service runs in.
pub fn service_regions_path(service_code: &str) -> String {
    format!("/aws/service/global-infrastructure/services/{service_code}/regions")
}

/// Region catalog backed by the AWS global-infrastructure public parameters.
#[derive(Debug, Clone)]
pub struct SsmRegionCatalog {
    client: SsmClient,
}

impl SsmRegionCatalog {
    /// Create a catalog that queries SSM in `region`.
    pub fn new(sdk_config: &SdkConfig, region: impl Into<String>) -> Self {
        let ssm_config = aws_sdk_ssm::config::Builder::from(sdk_config)
            .region(Region::new(region.into()))
            .build();

        Self {
            client: SsmClient::from_conf(ssm_config),
        }
    }
}

#[async_trait]
impl RegionCatalog for SsmRegionCatalog {
    async fn regions_for_service(&self, service_code: &str) -> Result<Vec<String>> {
        let parameters = self
            .client
            .get_parameters_by_path()
            .path(service_regions_path(service_code))
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(|e| Error::RegionCatalog {
                service_code: service_code.to_string(),
                message: sdk_message(&e),
            })?;

        Ok(dedup_regions(
            parameters.iter().filter_map(|parameter| parameter.value()),
        ))
    }
}
