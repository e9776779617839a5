use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tracking::{Package, PackageStatus, PackageType, ShippingCarrier};

// ============================================================================
// Flattened Package Row
// ============================================================================
//
// One CSV row per package. The tracking history is dropped; the status
// column is `current_status` for producer and consumer alike.
//
// ============================================================================

/// Header of the tabular output, in column order
pub const FLAT_COLUMNS: [&str; 21] = [
    "tracking_number",
    "package_type",
    "carrier",
    "weight_kg",
    "length_cm",
    "width_cm",
    "height_cm",
    "volume_cm3",
    "origin_city",
    "origin_state",
    "origin_zip",
    "destination_city",
    "destination_state",
    "destination_zip",
    "current_status",
    "estimated_delivery",
    "actual_delivery",
    "special_handling",
    "insurance_value",
    "signature_required",
    "description",
];

/// Field order must match `FLAT_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPackageRecord {
    pub tracking_number: String,
    pub package_type: PackageType,
    pub carrier: ShippingCarrier,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub volume_cm3: f64,
    pub origin_city: String,
    pub origin_state: String,
    pub origin_zip: String,
    pub destination_city: String,
    pub destination_state: String,
    pub destination_zip: String,
    pub current_status: PackageStatus,
    #[serde(with = "crate::utils::timestamp")]
    pub estimated_delivery: NaiveDateTime,
    #[serde(with = "crate::utils::timestamp::option")]
    pub actual_delivery: Option<NaiveDateTime>,
    pub special_handling: bool,
    pub insurance_value: Option<f64>,
    pub signature_required: bool,
    pub description: String,
}

impl From<&Package> for FlatPackageRecord {
    fn from(package: &Package) -> Self {
        Self {
            tracking_number: package.tracking_number.clone(),
            package_type: package.package_type,
            carrier: package.carrier,
            weight_kg: package.dimensions.weight,
            length_cm: package.dimensions.length,
            width_cm: package.dimensions.width,
            height_cm: package.dimensions.height,
            volume_cm3: package.dimensions.volume,
            origin_city: package.origin.city.clone(),
            origin_state: package.origin.state.clone(),
            origin_zip: package.origin.zip_code.clone(),
            destination_city: package.destination.city.clone(),
            destination_state: package.destination.state.clone(),
            destination_zip: package.destination.zip_code.clone(),
            current_status: package.current_status,
            estimated_delivery: package.estimated_delivery,
            actual_delivery: package.actual_delivery,
            special_handling: package.special_handling,
            insurance_value: package.insurance_value,
            signature_required: package.signature_required,
            description: package.description.clone(),
        }
    }
}

impl FlatPackageRecord {
    pub fn is_delivered(&self) -> bool {
        self.current_status == PackageStatus::Delivered
    }

    /// Hours between estimated and actual delivery; positive means late.
    pub fn delivery_delay_hours(&self) -> Option<f64> {
        self.actual_delivery
            .map(|actual| (actual - self.estimated_delivery).num_seconds() as f64 / 3600.0)
    }
}
