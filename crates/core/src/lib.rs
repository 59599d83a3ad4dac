// crates/core/src/lib.rs
//! Core domain logic for the cluster-view dashboard service.
//!
//! This crate holds everything that is a pure function of its input: the
//! flat cluster record model, the aggregation pipeline that shapes records
//! into the dashboard view-model, the per-region geo summary, date
//! normalization for the upload boundary, and the supersede guard that
//! closes the stale dependent-fetch race. No I/O, no async.

pub mod aggregate;
pub mod dates;
pub mod geo;
pub mod identity;
pub mod record;
pub mod role;
pub mod supersede;
pub mod user;

pub use aggregate::{
    build_dashboard, group_by, preview_rows, project_scatter, CategoryCount,
    DashboardViewModel, InvalidPointPolicy, RecentCluster, ScatterPoint, RECENT_CLUSTER_LIMIT,
};
pub use dates::format_upload_date;
pub use geo::{color_bucket, region_counts};
pub use identity::{Claims, LoginPayload};
pub use record::ClusterRecord;
pub use role::Role;
pub use supersede::{SelectionTag, SupersedeGuard};
pub use user::UserAccount;
