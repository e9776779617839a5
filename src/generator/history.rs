use rand::Rng;
use uuid::{Builder, Uuid};

use super::location::generate_location;
use super::random_digits;
use super::time_window::TimeWindow;
use crate::domain::tracking::state_machine::INITIAL_STATUS;
use crate::domain::tracking::templates;
use crate::domain::tracking::{
    Location, PackageStatus, PackageType, ScanType, ShippingCarrier, TrackingEvent,
};

// ============================================================================
// Tracking History Walk
// ============================================================================

/// UUID v4 from the generator's random source
fn random_event_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

pub fn generate_tracking_event<R: Rng + ?Sized>(
    rng: &mut R,
    window: &TimeWindow,
    status: PackageStatus,
    carrier: ShippingCarrier,
    location: Location,
) -> TrackingEvent {
    let event_id = random_event_id(rng);
    let timestamp = window.sample(rng);
    let scan_type = ScanType::ALL[rng.gen_range(0..ScanType::ALL.len())];
    let operator_id = format!("OP{}", random_digits(rng, 6));
    let description = templates::describe(rng, status, carrier, &location.facility_name);

    TrackingEvent {
        event_id,
        timestamp,
        status,
        location,
        description,
        carrier,
        scan_type,
        operator_id,
    }
}

/// Walk the status machine for a type-dependent number of steps.
///
/// The step count is fixed up front: the walk does not stop at Delivered or
/// Returned, it keeps emitting the terminal status until the count runs out.
pub fn generate_tracking_history<R: Rng + ?Sized>(
    rng: &mut R,
    window: &TimeWindow,
    package_type: PackageType,
    carrier: ShippingCarrier,
) -> Vec<TrackingEvent> {
    let num_events = rng.gen_range(package_type.event_count_range());
    let mut history = Vec::with_capacity(num_events);
    let mut status = INITIAL_STATUS;

    for _ in 0..num_events {
        let location = generate_location(rng);
        history.push(generate_tracking_event(rng, window, status, carrier, location));
        status = status.next(rng);
    }

    history
}
