use rand::seq::SliceRandom;
use rand::Rng;

use super::value_objects::{PackageStatus, ShippingCarrier};

// ============================================================================
// Event Description Templates
// ============================================================================
//
// Placeholders: {facility}, {carrier}, {reason}. The reason is only drawn
// for Exception events; every other status interpolates an empty string.
//
// ============================================================================

pub const EXCEPTION_REASONS: [&str; 10] = [
    "address issue",
    "recipient not available",
    "weather conditions",
    "vehicle breakdown",
    "traffic delay",
    "security check",
    "customs delay",
    "incorrect address",
    "access restricted",
    "delivery area restricted",
];

pub fn templates_for(status: PackageStatus) -> &'static [&'static str; 4] {
    match status {
        PackageStatus::Pending => &[
            "Package received at origin facility",
            "Package awaiting pickup",
            "Package registered in system",
            "Package awaiting processing",
        ],
        PackageStatus::Processing => &[
            "Package being processed at {facility}",
            "Package undergoing customs clearance",
            "Package being prepared for shipping",
            "Package being sorted at {facility}",
        ],
        PackageStatus::InTransit => &[
            "Package in transit to next facility",
            "Package moving through network",
            "Package en route to destination",
            "Package transferred to {carrier} for delivery",
        ],
        PackageStatus::OutForDelivery => &[
            "Package out for delivery with {carrier}",
            "Package with delivery driver",
            "Package on final delivery route",
            "Package scheduled for delivery today",
        ],
        PackageStatus::Delivered => &[
            "Package delivered to recipient",
            "Package successfully delivered",
            "Package delivered and signed for",
            "Package delivered to secure location",
        ],
        PackageStatus::Exception => &[
            "Delivery exception - {reason}",
            "Package delayed due to {reason}",
            "Delivery attempt failed - {reason}",
            "Package requires special handling",
        ],
        PackageStatus::Returned => &[
            "Package being returned to sender",
            "Package return process initiated",
            "Package in return transit",
            "Package returned to origin facility",
        ],
        PackageStatus::CustomsHold => &[
            "Package held for customs inspection",
            "Package awaiting customs clearance",
            "Package requires additional documentation",
            "Package under customs review",
        ],
        PackageStatus::Damaged => &[
            "Package damaged during transit",
            "Package condition check required",
            "Package damage reported",
            "Package requires repackaging",
        ],
        PackageStatus::Lost => &[
            "Package location unknown",
            "Package tracking information unavailable",
            "Package search in progress",
            "Package investigation initiated",
        ],
    }
}

pub fn render(template: &str, facility: &str, carrier: ShippingCarrier, reason: &str) -> String {
    template
        .replace("{facility}", facility)
        .replace("{carrier}", carrier.as_str())
        .replace("{reason}", reason)
}

/// Pick a template for `status` uniformly and fill it in.
pub fn describe<R: Rng + ?Sized>(
    rng: &mut R,
    status: PackageStatus,
    carrier: ShippingCarrier,
    facility: &str,
) -> String {
    let templates = templates_for(status);
    let template = templates[rng.gen_range(0..templates.len())];
    let reason = if status == PackageStatus::Exception {
        EXCEPTION_REASONS.choose(rng).copied().unwrap_or_default()
    } else {
        ""
    };
    render(template, facility, carrier, reason)
}
