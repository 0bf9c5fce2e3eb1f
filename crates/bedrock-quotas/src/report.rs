//! Pipe-delimited report output

use std::fmt;
use std::io::Write;

use crate::{error::Result, quotas::ReportRow};

/// Header line printed above the rows.
pub const HEADER: &str = "Quota type | Quota name | Applied account-level quota value | AWS default quota value | Region | Quota code";

/// Render a quota value the way Service Quotas reports it: a double, with
/// integral values keeping a trailing `.0`.
pub fn format_quota_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {}",
            self.quota_type,
            self.quota_name,
            format_quota_value(self.current_value),
            format_quota_value(self.default_value),
            self.region,
            self.quota_code
        )
    }
}

/// Write the report, one line per row, optionally preceded by [`HEADER`].
pub fn write_report<W: Write>(out: &mut W, rows: &[ReportRow], header: bool) -> Result<()> {
    if header {
        writeln!(out, "{HEADER}")?;
    }
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotas::{QuotaCode, QuotaType};
    use rstest::rstest;

    #[rstest]
    #[case(10.0, "10.0")]
    #[case(100000.0, "100000.0")]
    #[case(0.0, "0.0")]
    #[case(2.5, "2.5")]
    #[case(1e20, "100000000000000000000")]
    fn test_format_quota_value(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_quota_value(value), expected);
    }

    #[test]
    fn test_row_display() {
        let row = ReportRow {
            quota_type: QuotaType::RequestsPerMinute,
            quota_name: "On-demand InvokeModel requests per minute for Anthropic Claude 3 Haiku"
                .to_string(),
            current_value: 10.0,
            default_value: 5.0,
            region: "us-east-1".to_string(),
            quota_code: QuotaCode::new("L-A8BAF44F"),
        };

        assert_eq!(
            row.to_string(),
            "requests per minute | On-demand InvokeModel requests per minute for Anthropic Claude 3 Haiku | 10.0 | 5.0 | us-east-1 | L-A8BAF44F"
        );
    }

    #[test]
    fn test_write_report_without_rows() {
        let mut out = Vec::new();
        write_report(&mut out, &[], true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{HEADER}\n"));

        let mut out = Vec::new();
        write_report(&mut out, &[], false).unwrap();
        assert!(out.is_empty());
    }
}
