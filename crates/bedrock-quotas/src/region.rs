//! Region selection

use std::collections::HashSet;

/// Which regions a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelector {
    /// The region configured in the AWS environment
    CurrentRegion,
    /// An explicit list of region codes
    ExplicitRegions(Vec<String>),
    /// Every region where the service is offered
    AllRegions,
}

impl RegionSelector {
    /// Build an explicit selector from a comma-separated list.
    ///
    /// Entries are trimmed and empty entries are dropped, so `""` selects no
    /// regions at all.
    pub fn parse_list(list: &str) -> Self {
        RegionSelector::ExplicitRegions(
            list.split(',')
                .map(str::trim)
                .filter(|region| !region.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Remove repeated regions, keeping the first occurrence of each.
pub fn dedup_regions<I, S>(regions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    regions
        .into_iter()
        .map(Into::into)
        .filter(|region| seen.insert(region.clone()))
        .collect()
}
