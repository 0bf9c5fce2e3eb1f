//! Quota records and the table of tracked InvokeModel quotas

use std::fmt;

/// Service code Service Quotas uses for Amazon Bedrock.
pub const BEDROCK_SERVICE_CODE: &str = "bedrock";

/// Quota code for on-demand InvokeModel requests per minute.
pub const REQUESTS_PER_MINUTE_CODE: &str = "L-A8BAF44F";

/// Quota code for on-demand InvokeModel tokens per minute.
pub const TOKENS_PER_MINUTE_CODE: &str = "L-D40B4EF2";

/// The only quota codes that ever appear in a report.
pub const TRACKED_QUOTAS: [(&str, QuotaType); 2] = [
    (REQUESTS_PER_MINUTE_CODE, QuotaType::RequestsPerMinute),
    (TOKENS_PER_MINUTE_CODE, QuotaType::TokensPerMinute),
];

/// Kind of limit a tracked quota code expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaType {
    /// InvokeModel requests per minute
    RequestsPerMinute,
    /// InvokeModel tokens per minute
    TokensPerMinute,
}

impl QuotaType {
    /// Look up a quota code in [`TRACKED_QUOTAS`].
    pub fn from_code(code: &str) -> Option<Self> {
        TRACKED_QUOTAS
            .iter()
            .find(|(tracked, _)| *tracked == code)
            .map(|(_, quota_type)| *quota_type)
    }

    /// Label printed in the first report column.
    pub fn label(&self) -> &'static str {
        match self {
            QuotaType::RequestsPerMinute => "requests per minute",
            QuotaType::TokensPerMinute => "tokens per minute",
        }
    }
}

impl fmt::Display for QuotaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier Service Quotas assigns to a quota, e.g. `L-A8BAF44F`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuotaCode(String);

impl QuotaCode {
    /// Wrap a raw quota code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tracked quota type for this code, if any.
    pub fn quota_type(&self) -> Option<QuotaType> {
        QuotaType::from_code(&self.0)
    }
}

impl fmt::Display for QuotaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuotaCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A single quota value as returned by either listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaRecord {
    /// Join key between applied and default listings
    pub quota_code: QuotaCode,
    /// Human readable quota name
    pub quota_name: String,
    /// Quota value
    pub value: f64,
    /// Region the record was read from
    pub region: String,
}

impl QuotaRecord {
    /// Create a new record.
    pub fn new(
        quota_code: impl Into<QuotaCode>,
        quota_name: impl Into<String>,
        value: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            quota_code: quota_code.into(),
            quota_name: quota_name.into(),
            value,
            region: region.into(),
        }
    }
}

/// One line of the report: an applied quota next to its AWS default.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Which tracked limit this row describes
    pub quota_type: QuotaType,
    /// Quota name as reported by the applied listing
    pub quota_name: String,
    /// Applied account-level value
    pub current_value: f64,
    /// AWS default value
    pub default_value: f64,
    /// Region the values belong to
    pub region: String,
    /// Quota code
    pub quota_code: QuotaCode,
}
