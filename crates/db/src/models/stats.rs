//! Aggregated totals for the stats overview.

use edumedia_core::types::Timestamp;
use serde::Serialize;

/// Library-wide totals shown on the dashboard landing page.
#[derive(Debug, Serialize)]
pub struct LibraryStats {
    pub audio_total: i64,
    pub video_total: i64,
    pub picbook_total: i64,
    pub annotation_total: i64,
    pub hotspot_total: i64,
    /// Creation time of the newest asset across all three tables.
    pub latest_upload: Option<Timestamp>,
}
