// crates/core/src/geo.rs
//! Per-region occurrence counts for choropleth coloring.
//!
//! The map renderer joins these counts against GeoJSON shape properties by
//! exact region name: case-sensitive, accent-sensitive, no normalization.
//! A shape whose name never appears here reads as count 0 and gets the
//! lightest bucket color.

use std::collections::BTreeMap;

use crate::aggregate::UNKNOWN_LABEL;
use crate::record::ClusterRecord;

/// Count records per region name (district or province, chosen by `field`).
///
/// Records with an empty region land under `"Unknown"` so the total across
/// the map still equals the input length.
pub fn region_counts<F>(records: &[ClusterRecord], field: F) -> BTreeMap<String, u64>
where
    F: Fn(&ClusterRecord) -> &str,
{
    let mut counts = BTreeMap::new();
    for record in records {
        let raw = field(record);
        let name = if raw.is_empty() { UNKNOWN_LABEL } else { raw };
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Map a region count to its choropleth fill color.
///
/// The thresholds and palette must stay in sync with the frontend map
/// legend.
pub fn color_bucket(count: u64) -> &'static str {
    if count > 100 {
        "#800026"
    } else if count > 50 {
        "#BD0026"
    } else if count > 20 {
        "#E31A1C"
    } else if count > 10 {
        "#FC4E2A"
    } else if count > 5 {
        "#FD8D3C"
    } else if count > 2 {
        "#FEB24C"
    } else if count > 0 {
        "#FED976"
    } else {
        "#FFEDA0"
    }
}
