use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::TrackingError;
use crate::utils::round2;

// ============================================================================
// Tracking Value Objects
// ============================================================================
//
// Every vocabulary serializes as its display string. `as_str` is the single
// mapping; the serde renames must agree with it (checked in the tests).
//
// ============================================================================

fn parse_display<T: Copy>(
    values: &[T],
    as_str: fn(T) -> &'static str,
    kind: &'static str,
    raw: &str,
) -> Result<T, TrackingError> {
    values
        .iter()
        .copied()
        .find(|value| as_str(*value) == raw)
        .ok_or_else(|| TrackingError::UnknownValue {
            kind,
            value: raw.to_string(),
        })
}

/// Status of a package at one point of its tracking history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageStatus {
    Pending,
    Processing,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Exception,
    #[serde(rename = "Returned to Sender")]
    Returned,
    #[serde(rename = "Customs Hold")]
    CustomsHold,
    Damaged,
    Lost,
}

impl PackageStatus {
    pub const ALL: &'static [PackageStatus] = &[
        PackageStatus::Pending,
        PackageStatus::Processing,
        PackageStatus::InTransit,
        PackageStatus::OutForDelivery,
        PackageStatus::Delivered,
        PackageStatus::Exception,
        PackageStatus::Returned,
        PackageStatus::CustomsHold,
        PackageStatus::Damaged,
        PackageStatus::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageStatus::Pending => "Pending",
            PackageStatus::Processing => "Processing",
            PackageStatus::InTransit => "In Transit",
            PackageStatus::OutForDelivery => "Out for Delivery",
            PackageStatus::Delivered => "Delivered",
            PackageStatus::Exception => "Exception",
            PackageStatus::Returned => "Returned to Sender",
            PackageStatus::CustomsHold => "Customs Hold",
            PackageStatus::Damaged => "Damaged",
            PackageStatus::Lost => "Lost",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PackageStatus {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_display(Self::ALL, Self::as_str, "package status", s)
    }
}

/// Shipping service level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageType {
    Standard,
    Express,
    Priority,
    Overnight,
    International,
    Fragile,
    Refrigerated,
    #[serde(rename = "Hazardous Materials")]
    Hazmat,
}

impl PackageType {
    pub const ALL: &'static [PackageType] = &[
        PackageType::Standard,
        PackageType::Express,
        PackageType::Priority,
        PackageType::Overnight,
        PackageType::International,
        PackageType::Fragile,
        PackageType::Refrigerated,
        PackageType::Hazmat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageType::Standard => "Standard",
            PackageType::Express => "Express",
            PackageType::Priority => "Priority",
            PackageType::Overnight => "Overnight",
            PackageType::International => "International",
            PackageType::Fragile => "Fragile",
            PackageType::Refrigerated => "Refrigerated",
            PackageType::Hazmat => "Hazardous Materials",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_display(Self::ALL, Self::as_str, "package type", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShippingCarrier {
    #[serde(rename = "UPS")]
    Ups,
    FedEx,
    #[serde(rename = "DHL")]
    Dhl,
    #[serde(rename = "USPS")]
    Usps,
    #[serde(rename = "Amazon Logistics")]
    Amazon,
}

impl ShippingCarrier {
    pub const ALL: &'static [ShippingCarrier] = &[
        ShippingCarrier::Ups,
        ShippingCarrier::FedEx,
        ShippingCarrier::Dhl,
        ShippingCarrier::Usps,
        ShippingCarrier::Amazon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingCarrier::Ups => "UPS",
            ShippingCarrier::FedEx => "FedEx",
            ShippingCarrier::Dhl => "DHL",
            ShippingCarrier::Usps => "USPS",
            ShippingCarrier::Amazon => "Amazon Logistics",
        }
    }
}

impl fmt::Display for ShippingCarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShippingCarrier {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_display(Self::ALL, Self::as_str, "shipping carrier", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "Sorting Center")]
    SortingCenter,
    #[serde(rename = "Distribution Hub")]
    DistributionHub,
    #[serde(rename = "Local Facility")]
    LocalFacility,
    #[serde(rename = "International Gateway")]
    InternationalGateway,
    #[serde(rename = "Customs Clearance Center")]
    CustomsClearanceCenter,
}

impl FacilityType {
    pub const ALL: &'static [FacilityType] = &[
        FacilityType::SortingCenter,
        FacilityType::DistributionHub,
        FacilityType::LocalFacility,
        FacilityType::InternationalGateway,
        FacilityType::CustomsClearanceCenter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FacilityType::SortingCenter => "Sorting Center",
            FacilityType::DistributionHub => "Distribution Hub",
            FacilityType::LocalFacility => "Local Facility",
            FacilityType::InternationalGateway => "International Gateway",
            FacilityType::CustomsClearanceCenter => "Customs Clearance Center",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FacilityType {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_display(Self::ALL, Self::as_str, "facility type", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScanType {
    #[serde(rename = "Arrival Scan")]
    Arrival,
    #[serde(rename = "Departure Scan")]
    Departure,
    #[serde(rename = "Out for Delivery Scan")]
    OutForDelivery,
    #[serde(rename = "Delivery Scan")]
    Delivery,
    #[serde(rename = "Exception Scan")]
    Exception,
    #[serde(rename = "Customs Scan")]
    Customs,
}

impl ScanType {
    pub const ALL: &'static [ScanType] = &[
        ScanType::Arrival,
        ScanType::Departure,
        ScanType::OutForDelivery,
        ScanType::Delivery,
        ScanType::Exception,
        ScanType::Customs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScanType::Arrival => "Arrival Scan",
            ScanType::Departure => "Departure Scan",
            ScanType::OutForDelivery => "Out for Delivery Scan",
            ScanType::Delivery => "Delivery Scan",
            ScanType::Exception => "Exception Scan",
            ScanType::Customs => "Customs Scan",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScanType {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_display(Self::ALL, Self::as_str, "scan type", s)
    }
}

impl PackageType {
    /// Number of tracking events a package of this type accumulates
    pub fn event_count_range(self) -> RangeInclusive<usize> {
        match self {
            PackageType::Standard => 4..=6,
            PackageType::Express => 3..=5,
            PackageType::Priority => 3..=4,
            PackageType::Overnight => 2..=3,
            PackageType::International => 6..=8,
            PackageType::Fragile => 4..=6,
            PackageType::Refrigerated => 3..=5,
            PackageType::Hazmat => 5..=7,
        }
    }

    pub fn requires_special_handling(self) -> bool {
        matches!(
            self,
            PackageType::Fragile | PackageType::Refrigerated | PackageType::Hazmat
        )
    }
}

impl ShippingCarrier {
    /// First three characters of the display name, used in tracking numbers
    pub fn tracking_prefix(self) -> &'static str {
        let name = self.as_str();
        &name[..name.len().min(3)]
    }
}

// ============================================================================
// Locations & Dimensions
// ============================================================================

/// Continental US bounding box
pub const US_LATITUDE_RANGE: RangeInclusive<f64> = 24.396308..=49.384358;
pub const US_LONGITUDE_RANGE: RangeInclusive<f64> = -125.0..=-66.93457;

/// A scan facility or address. Generated fresh for every use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub facility_name: String,
    pub facility_type: FacilityType,
}

impl Location {
    pub fn within_us_bounds(&self) -> bool {
        US_LATITUDE_RANGE.contains(&self.latitude) && US_LONGITUDE_RANGE.contains(&self.longitude)
    }
}

/// Package size in centimetres and weight in kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub volume: f64,
}

impl PackageDimensions {
    /// Volume is always derived, never supplied.
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
            volume: round2(length * width * height),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_strings() {
        assert_eq!(PackageStatus::InTransit.to_string(), "In Transit");
        assert_eq!(PackageStatus::Returned.as_str(), "Returned to Sender");
        assert_eq!(PackageType::Hazmat.as_str(), "Hazardous Materials");
        assert_eq!(ShippingCarrier::Amazon.as_str(), "Amazon Logistics");
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(PackageStatus::ALL.len(), 10);
        assert_eq!(PackageType::ALL.len(), 8);
        assert_eq!(ShippingCarrier::ALL.len(), 5);
        assert_eq!(FacilityType::ALL.len(), 5);
        assert_eq!(ScanType::ALL.len(), 6);
    }

    #[test]
    fn test_every_status_parses_from_its_display_string() {
        for status in PackageStatus::ALL {
            assert_eq!(status.as_str().parse::<PackageStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_serde_names_match_display_strings() {
        fn check<T: Serialize + fmt::Display>(values: &[T]) {
            for value in values {
                let json = serde_json::to_string(value).unwrap();
                assert_eq!(json, format!("\"{value}\""));
            }
        }

        check(PackageStatus::ALL);
        check(PackageType::ALL);
        check(ShippingCarrier::ALL);
        check(FacilityType::ALL);
        check(ScanType::ALL);
    }

    #[test]
    fn test_unknown_display_string_is_rejected() {
        let err = "Teleported".parse::<PackageStatus>().unwrap_err();
        assert!(err.to_string().contains("Teleported"));
        assert!(err.to_string().contains("package status"));
    }

    #[test]
    fn test_enum_serializes_as_display_string() {
        let json = serde_json::to_string(&PackageStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Out for Delivery\"");

        let carrier: ShippingCarrier = serde_json::from_str("\"FedEx\"").unwrap();
        assert_eq!(carrier, ShippingCarrier::FedEx);

        assert!(serde_json::from_str::<ShippingCarrier>("\"FedEx Ground\"").is_err());
    }

    #[test]
    fn test_tracking_prefixes() {
        assert_eq!(ShippingCarrier::Ups.tracking_prefix(), "UPS");
        assert_eq!(ShippingCarrier::FedEx.tracking_prefix(), "Fed");
        assert_eq!(ShippingCarrier::Amazon.tracking_prefix(), "Ama");
    }

    #[test]
    fn test_special_handling_types() {
        let special: Vec<_> = PackageType::ALL
            .iter()
            .filter(|t| t.requires_special_handling())
            .collect();
        assert_eq!(
            special,
            vec![&PackageType::Fragile, &PackageType::Refrigerated, &PackageType::Hazmat]
        );
    }

    #[test]
    fn test_event_count_ranges_are_non_empty() {
        for package_type in PackageType::ALL {
            let range = package_type.event_count_range();
            assert!(*range.start() >= 1);
            assert!(range.start() <= range.end());
        }
        assert_eq!(PackageType::Overnight.event_count_range(), 2..=3);
    }

    #[test]
    fn test_dimensions_volume_is_derived() {
        let dims = PackageDimensions::new(10.5, 20.25, 30.0, 4.2);
        assert_eq!(dims.volume, round2(10.5 * 20.25 * 30.0));
        assert_eq!(dims.volume, 6378.75);
    }
}
