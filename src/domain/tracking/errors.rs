// ============================================================================
// Tracking Domain Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackingError {
    #[error("Unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}
