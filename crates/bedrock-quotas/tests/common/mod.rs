//! Common test utilities and helpers

pub mod mock_quotas;

use bedrock_quotas::QuotaRecord;

/// Quota name used for the requests-per-minute fixture
#[allow(dead_code)]
pub const RPM_NAME: &str = "On-demand InvokeModel requests per minute for Anthropic Claude 3.5 Sonnet";

/// Quota name used for the tokens-per-minute fixture
#[allow(dead_code)]
pub const TPM_NAME: &str = "On-demand InvokeModel tokens per minute for Anthropic Claude 3.5 Sonnet";

/// Applied quotas for a region with both tracked codes raised above default
#[allow(dead_code)]
pub fn raised_applied(region: &str) -> Vec<QuotaRecord> {
    vec![
        QuotaRecord::new("L-A8BAF44F", RPM_NAME, 10.0, region),
        QuotaRecord::new("L-D40B4EF2", TPM_NAME, 100000.0, region),
    ]
}

/// AWS defaults matching [`raised_applied`]
#[allow(dead_code)]
pub fn standard_defaults(region: &str) -> Vec<QuotaRecord> {
    vec![
        QuotaRecord::new("L-A8BAF44F", RPM_NAME, 5.0, region),
        QuotaRecord::new("L-D40B4EF2", TPM_NAME, 50000.0, region),
    ]
}
