//! Error types for the quota reporter
//!
//! Only failures that prevent the report from starting are modelled as
//! [`Error`]. Failures scoped to a single region are carried as
//! [`SkipReason`] values inside the per-region outcome instead.

use thiserror::Error;

/// Result type alias for operations that can fail with a reporter error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the quota reporter.
#[derive(Debug, Error)]
pub enum Error {
    /// AWS environment is unusable: no credentials, or no region where one is required.
    #[error("AWS configuration error: {0}")]
    Configuration(String),

    /// AWS credentials could not be resolved or were rejected by STS.
    #[error("AWS credentials error: {0}")]
    Credentials(String),

    /// The list of regions offering the service could not be obtained.
    #[error("Failed to list regions for service '{service_code}': {message}")]
    RegionCatalog {
        /// Service whose regions were requested
        service_code: String,
        /// Underlying SDK message
        message: String,
    },

    /// A Service Quotas call failed.
    #[error("Service Quotas {operation} failed in {region}: {message}")]
    Service {
        /// Operation that failed
        operation: QuotaListing,
        /// Region the call was made against
        region: String,
        /// Underlying SDK message
        message: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error stops the whole run rather than a single region.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Service { .. })
    }
}

/// The two listing operations issued per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaListing {
    /// Account-level values currently in effect
    Applied,
    /// AWS baseline values
    Default,
}

impl std::fmt::Display for QuotaListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotaListing::Applied => f.write_str("ListServiceQuotas"),
            QuotaListing::Default => f.write_str("ListAWSDefaultServiceQuotas"),
        }
    }
}

/// Why a region contributed no rows to the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// One of the listing calls failed: unreachable region, service not
    /// offered, permission denied, throttling and the like.
    #[error("region unavailable ({operation}): {message}")]
    RegionUnavailable {
        /// Listing that failed first
        operation: QuotaListing,
        /// Underlying SDK message
        message: String,
    },
}

impl SkipReason {
    /// Skip caused by `err` while running `operation`.
    pub fn unavailable(operation: QuotaListing, err: Error) -> Self {
        let message = match err {
            Error::Service { message, .. } => message,
            other => other.to_string(),
        };
        SkipReason::RegionUnavailable { operation, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_is_not_fatal() {
        let err = Error::Service {
            operation: QuotaListing::Default,
            region: "eu-fake-1".to_string(),
            message: "AccessDeniedException".to_string(),
        };
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Service Quotas ListAWSDefaultServiceQuotas failed in eu-fake-1: AccessDeniedException"
        );
    }

    #[test]
    fn test_configuration_error_is_fatal() {
        let err = Error::Configuration("no region".to_string());
        assert!(err.is_fatal());
        assert!(err.to_string().contains("no region"));
    }

    #[test]
    fn test_skip_reason_keeps_service_message() {
        let reason = SkipReason::unavailable(
            QuotaListing::Default,
            Error::Service {
                operation: QuotaListing::Default,
                region: "us-west-2".to_string(),
                message: "Throttling".to_string(),
            },
        );

        assert_eq!(
            reason,
            SkipReason::RegionUnavailable {
                operation: QuotaListing::Default,
                message: "Throttling".to_string(),
            }
        );
    }

    #[test]
    fn test_skip_reason_labels_non_service_errors_with_caller_operation() {
        let reason = SkipReason::unavailable(
            QuotaListing::Default,
            Error::Credentials("ExpiredToken".to_string()),
        );

        assert_eq!(
            reason,
            SkipReason::RegionUnavailable {
                operation: QuotaListing::Default,
                message: "AWS credentials error: ExpiredToken".to_string(),
            }
        );
    }
}
