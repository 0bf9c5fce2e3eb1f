//! # bedrock-quotas
//!
//! Reports Amazon Bedrock on-demand InvokeModel quotas (requests per minute
//! and tokens per minute) for one, several or all regions, comparing the
//! account's applied values with the AWS defaults.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock_quotas::{QuotaContext, QuotaReporter, RegionSelector, ReporterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = QuotaContext::load(&ReporterConfig::from_env()).await?;
//!     let reporter = QuotaReporter::new(context);
//!
//!     let selector = RegionSelector::ExplicitRegions(vec!["us-east-1".into()]);
//!     for row in reporter.run(&selector).await? {
//!         println!("{row}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use config::{ReporterConfig, ReporterConfigBuilder};
pub use context::{QuotaClientFactory, QuotaContext, QuotaSource, RegionCatalog};
pub use error::{Error, QuotaListing, Result, SkipReason};
pub use quotas::{QuotaCode, QuotaRecord, QuotaType, ReportRow, TRACKED_QUOTAS};
pub use region::RegionSelector;
pub use reporter::{QuotaReporter, RegionOutcome, RegionResult};

// Module declarations
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod observability;
pub mod providers;
pub mod quotas;
pub mod region;
pub mod report;
pub mod reporter;

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
