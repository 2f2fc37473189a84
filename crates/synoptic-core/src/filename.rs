//! Report download naming.

use jiff::civil::DateTime;

/// `{slug}_pathology_report_{YYYYMMDD_HHMMSS}.txt`
pub fn report_filename(slug: &str, at: DateTime) -> String {
    format!("{slug}_pathology_report_{}.txt", at.strftime("%Y%m%d_%H%M%S"))
}
