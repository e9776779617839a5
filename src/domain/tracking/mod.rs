// ============================================================================
// Tracking Domain - Packages and their scan histories
// ============================================================================
//
// - Value objects (statuses, package types, carriers, locations, dimensions)
// - Events (TrackingEvent)
// - Package record
// - Status state machine
// - Description templates
// - Errors
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod package;
pub mod state_machine;
pub mod templates;
pub mod errors;

pub use value_objects::*;
pub use events::*;
pub use package::*;
pub use errors::*;
