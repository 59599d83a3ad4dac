// crates/core/src/record.rs
//! The flat cluster record as delivered by the upstream `/api/csv` endpoint.

use serde::{Deserialize, Serialize};

/// One patient/sample entry from the surveillance backend.
///
/// Every field arrives as a string and may be empty or absent; the backend
/// serves CSV-derived rows with no schema enforcement. Numeric fields
/// (`coverage`, `mean_depth`, ...) are parsed on demand by the aggregation
/// layer; an unparsable value must never fail a whole fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub sample_id: String,
    #[serde(default)]
    pub seq_id: String,
    #[serde(default)]
    pub collection_date: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub ethnic_group: String,
    #[serde(default)]
    pub chest_x_ray: String,
    #[serde(default)]
    pub treatment_outcome: String,
    #[serde(default)]
    pub lineage: String,
    #[serde(default)]
    pub major_lineage: String,
    /// Drug-resistance genotype, e.g. "MDR-TB", "Pre-XDR-TB". The dashboard
    /// treats this as the risk level.
    #[serde(default, rename = "overall_DR_genotype")]
    pub overall_dr_genotype: String,
    #[serde(default)]
    pub coverage: String,
    #[serde(default)]
    pub mean_depth: String,
    #[serde(default)]
    pub mean_base_qual: String,
    #[serde(default)]
    pub mean_mapping_qual: String,
    #[serde(default, rename = "number_of_SNPs_supporting_lineage_assignment")]
    pub number_of_snps_supporting_lineage_assignment: String,
    #[serde(default)]
    pub number_of_bases_covered: String,
    #[serde(default)]
    pub number_of_reads: String,
}

impl ClusterRecord {
    /// Parse a string field as `f64`. Empty or malformed values come back as
    /// NaN so downstream policy (drop vs. propagate) stays explicit.
    pub fn numeric(value: &str) -> f64 {
        value.trim().parse::<f64>().unwrap_or(f64::NAN)
    }
}
