use rand::Rng;

use super::history::generate_tracking_history;
use super::location::generate_location;
use super::random_digits;
use super::time_window::TimeWindow;
use crate::domain::tracking::state_machine::INITIAL_STATUS;
use crate::domain::tracking::{
    Package, PackageDimensions, PackageStatus, PackageType, ShippingCarrier,
};
use crate::utils::round2;

// ============================================================================
// Package Record Builder
// ============================================================================

pub const INSURANCE_PROBABILITY: f64 = 0.3;
pub const SIGNATURE_PROBABILITY: f64 = 0.4;

pub fn generate_dimensions<R: Rng + ?Sized>(rng: &mut R) -> PackageDimensions {
    let length = round2(rng.gen_range(5.0..=100.0));
    let width = round2(rng.gen_range(5.0..=100.0));
    let height = round2(rng.gen_range(5.0..=100.0));
    let weight = round2(rng.gen_range(0.5..=50.0));
    PackageDimensions::new(length, width, height, weight)
}

fn describe_package(package_type: PackageType, dims: &PackageDimensions) -> String {
    format!(
        "{} package weighing {}kg, dimensions: {}x{}x{}cm, volume: {}cm³",
        package_type, dims.weight, dims.length, dims.width, dims.height, dims.volume
    )
}

/// A package of uniformly random type.
pub fn generate_package<R: Rng + ?Sized>(rng: &mut R, window: &TimeWindow) -> Package {
    let package_type = PackageType::ALL[rng.gen_range(0..PackageType::ALL.len())];
    generate_package_of_type(rng, window, package_type)
}

pub fn generate_package_of_type<R: Rng + ?Sized>(
    rng: &mut R,
    window: &TimeWindow,
    package_type: PackageType,
) -> Package {
    let carrier = ShippingCarrier::ALL[rng.gen_range(0..ShippingCarrier::ALL.len())];
    let dimensions = generate_dimensions(rng);
    let tracking_number = format!("{}{}", carrier.tracking_prefix(), random_digits(rng, 9));

    let tracking_history = generate_tracking_history(rng, window, package_type, carrier);
    let current_status = tracking_history
        .last()
        .map(|event| event.status)
        .unwrap_or(INITIAL_STATUS);
    let actual_delivery = match tracking_history.last() {
        Some(event) if current_status == PackageStatus::Delivered => Some(event.timestamp),
        _ => None,
    };

    let origin = generate_location(rng);
    let destination = generate_location(rng);
    let estimated_delivery = window.sample(rng);
    let insurance_value = if rng.gen_bool(INSURANCE_PROBABILITY) {
        Some(round2(rng.gen_range(100.0..=5000.0)))
    } else {
        None
    };
    let signature_required = rng.gen_bool(SIGNATURE_PROBABILITY);

    Package {
        tracking_number,
        package_type,
        carrier,
        description: describe_package(package_type, &dimensions),
        dimensions,
        origin,
        destination,
        tracking_history,
        current_status,
        estimated_delivery,
        actual_delivery,
        special_handling: package_type.requires_special_handling(),
        insurance_value,
        signature_required,
    }
}
