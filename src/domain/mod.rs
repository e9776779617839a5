// ============================================================================
// Domain Layer
// ============================================================================
//
// Entities and rules of the shipment-tracking dataset. Generation and IO
// live elsewhere; nothing in here touches the filesystem.
//
// ============================================================================

pub mod tracking;
