//! Command-line arguments

use clap::{ArgAction, Parser};

use crate::{config::ReporterConfig, region::RegionSelector};

/// Retrieve and display Amazon Bedrock service quotas across AWS regions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated list of AWS regions to check
    #[arg(long, value_name = "REGIONS", conflicts_with = "all_region")]
    pub regions: Option<String>,

    /// Check quotas in all regions where Bedrock is available
    #[arg(long, visible_alias = "all-regions")]
    pub all_region: bool,

    /// AWS profile to use
    #[arg(long, env = "BEDROCK_QUOTAS_PROFILE")]
    pub profile: Option<String>,

    /// Do not print the header line
    #[arg(long)]
    pub no_header: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The region selection these arguments describe.
    pub fn region_selector(&self) -> RegionSelector {
        if self.all_region {
            RegionSelector::AllRegions
        } else if let Some(regions) = &self.regions {
            RegionSelector::parse_list(regions)
        } else {
            RegionSelector::CurrentRegion
        }
    }

    /// Environment configuration with command-line overrides applied.
    pub fn reporter_config(&self) -> ReporterConfig {
        let mut overrides = ReporterConfig::builder();
        if let Some(profile) = &self.profile {
            overrides = overrides.profile(profile);
        }
        ReporterConfig::from_env().merge(overrides.build())
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
