use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Location, PackageStatus, ScanType, ShippingCarrier};

// ============================================================================
// Tracking Events
// ============================================================================

/// One scan within a package's delivery history.
///
/// Events are kept in creation order. Timestamps are sampled independently,
/// so a history is not necessarily sorted by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub event_id: Uuid,
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    pub status: PackageStatus,
    pub location: Location,
    pub description: String,
    pub carrier: ShippingCarrier,
    pub scan_type: ScanType,
    pub operator_id: String,
}
