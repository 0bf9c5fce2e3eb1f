//! Backends for the [`QuotaSource`](crate::context::QuotaSource) and
//! [`RegionCatalog`](crate::context::RegionCatalog) seams
//!
//! ## Authentication
//!
//! The AWS backend resolves credentials through the standard AWS credential chain:
//! - Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN)
//! - AWS credentials file (~/.aws/credentials)
//! - IAM role (when running on AWS services like EC2, Lambda, ECS)
//! - AWS profile (via `ReporterConfig::profile`)
//!
//! ## Required permissions
//!
//! - `servicequotas:ListServiceQuotas`
//! - `servicequotas:ListAWSDefaultServiceQuotas`
//! - `ssm:GetParametersByPath` (only for `--all-region`)

pub mod aws;
