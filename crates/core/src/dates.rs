// crates/core/src/dates.rs
//! Date normalization at the upload boundary.

use chrono::NaiveDate;

/// Rewrite an ISO calendar date (`YYYY-MM-DD`) to the fixed textual form the
/// upload backend expects: `DD/Mon/YYYY`, e.g. `2005-12-08` → `08/Dec/2005`.
///
/// Empty input is submitted as the literal string `NA` (missing collection
/// dates are common in the field data). Non-empty input that is not a valid
/// ISO date passes through unchanged; the backend owns final validation and
/// rewriting garbage into different garbage helps nobody.
pub fn format_upload_date(iso: &str) -> String {
    if iso.is_empty() {
        return "NA".to_string();
    }
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%b/%Y").to_string(),
        Err(_) => {
            tracing::debug!(input = iso, "Upload date is not ISO, passing through");
            iso.to_string()
        }
    }
}
