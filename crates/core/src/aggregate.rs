// crates/core/src/aggregate.rs
//! The record aggregation pipeline: raw backend records in, dashboard
//! view-model out.
//!
//! All functions here are pure and deterministic given input order. Absent
//! or malformed fields degrade per record ("Unknown" buckets, NaN points),
//! never fail the whole aggregation.

use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use crate::record::ClusterRecord;

/// Default label for records whose grouping field is empty or absent.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Number of rows in the recent-clusters preview table.
pub const RECENT_CLUSTER_LIMIT: usize = 5;

/// One bucket of a grouping: a category label and how many records fell in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub label: String,
    #[ts(type = "number")]
    pub count: u64,
}

/// One paired numeric point for the coverage/depth scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub coverage: f64,
    pub mean_depth: f64,
}

/// What to do with a scatter point whose coverage or depth fails to parse.
///
/// The upstream data does not guarantee numeric fields, so the policy is an
/// explicit argument rather than a silent behavior:
/// - `Propagate` keeps the point with NaN components (legacy charting input).
/// - `Drop` removes the point entirely (what the dashboard endpoint uses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPointPolicy {
    Propagate,
    Drop,
}

/// One display row of the recent-clusters preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct RecentCluster {
    pub id: String,
    pub risk: String,
    pub status: String,
    pub assigned_to: String,
}

/// The aggregate result consumed by the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel {
    #[ts(type = "number")]
    pub total_clusters: u64,
    /// Counts by drug-resistance genotype. Drives both the summary cards and
    /// the risk bar chart (one grouping, two presentations).
    pub risk_summary: Vec<CategoryCount>,
    /// Counts by major lineage (pie chart).
    pub lineage_distribution: Vec<CategoryCount>,
    /// Counts by province (pie chart; the choropleth uses the geo module).
    pub province_distribution: Vec<CategoryCount>,
    /// Coverage vs. mean depth, invalid points dropped.
    pub scatter: Vec<ScatterPoint>,
    /// First [`RECENT_CLUSTER_LIMIT`] records in input order.
    pub recent_clusters: Vec<RecentCluster>,
}

/// Group records by one field, counting occurrences.
///
/// Each record contributes to exactly one bucket; an empty field value lands
/// in `default_label`. Bucket order is first-seen order, so output is
/// deterministic for a given input order while the count multiset is
/// insensitive to permutation.
pub fn group_by<F>(records: &[ClusterRecord], field: F, default_label: &str) -> Vec<CategoryCount>
where
    F: Fn(&ClusterRecord) -> &str,
{
    let mut order: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let raw = field(record);
        let label = if raw.is_empty() { default_label } else { raw };
        match index.get(label) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(label.to_string(), order.len());
                order.push(CategoryCount { label: label.to_string(), count: 1 });
            }
        }
    }

    order
}

/// Project each record onto the (coverage, mean_depth) plane.
///
/// Parse failures become NaN components; `policy` decides whether such
/// points survive. With `Propagate` the output length always equals the
/// input length.
pub fn project_scatter(records: &[ClusterRecord], policy: InvalidPointPolicy) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            coverage: ClusterRecord::numeric(&r.coverage),
            mean_depth: ClusterRecord::numeric(&r.mean_depth),
        })
        .filter(|p| match policy {
            InvalidPointPolicy::Propagate => true,
            InvalidPointPolicy::Drop => !p.coverage.is_nan() && !p.mean_depth.is_nan(),
        })
        .collect()
}

/// Take the first `limit` records, in input order, as preview rows.
///
/// `assigned_to` is a static placeholder; case assignment does not exist in
/// the backend data.
pub fn preview_rows(records: &[ClusterRecord], limit: usize) -> Vec<RecentCluster> {
    records
        .iter()
        .take(limit)
        .map(|r| RecentCluster {
            id: r.sample_id.clone(),
            risk: non_empty_or(&r.overall_dr_genotype, UNKNOWN_LABEL),
            status: non_empty_or(&r.major_lineage, UNKNOWN_LABEL),
            assigned_to: "N/A".to_string(),
        })
        .collect()
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Build the full dashboard view-model from an ordered record sequence.
pub fn build_dashboard(records: &[ClusterRecord]) -> DashboardViewModel {
    DashboardViewModel {
        total_clusters: records.len() as u64,
        risk_summary: group_by(records, |r| &r.overall_dr_genotype, UNKNOWN_LABEL),
        lineage_distribution: group_by(records, |r| &r.major_lineage, UNKNOWN_LABEL),
        province_distribution: group_by(records, |r| &r.province, UNKNOWN_LABEL),
        scatter: project_scatter(records, InvalidPointPolicy::Drop),
        recent_clusters: preview_rows(records, RECENT_CLUSTER_LIMIT),
    }
}
