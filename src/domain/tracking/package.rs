use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::events::TrackingEvent;
use super::value_objects::{Location, PackageDimensions, PackageStatus, PackageType, ShippingCarrier};

// ============================================================================
// Package Record
// ============================================================================

/// A fully generated package with its tracking history.
///
/// Built once and serialized as-is; `current_status` always mirrors the last
/// history entry and `actual_delivery` is set only for delivered packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub tracking_number: String,
    pub package_type: PackageType,
    pub carrier: ShippingCarrier,
    pub dimensions: PackageDimensions,
    pub origin: Location,
    pub destination: Location,
    pub tracking_history: Vec<TrackingEvent>,
    pub current_status: PackageStatus,
    #[serde(with = "crate::utils::timestamp")]
    pub estimated_delivery: NaiveDateTime,
    #[serde(with = "crate::utils::timestamp::option")]
    pub actual_delivery: Option<NaiveDateTime>,
    pub description: String,
    pub special_handling: bool,
    pub insurance_value: Option<f64>,
    pub signature_required: bool,
}

impl Package {
    pub fn last_event(&self) -> Option<&TrackingEvent> {
        self.tracking_history.last()
    }

    pub fn is_delivered(&self) -> bool {
        self.current_status == PackageStatus::Delivered
    }
}
