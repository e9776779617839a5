use rand::Rng;

use super::value_objects::PackageStatus;

// ============================================================================
// Status State Machine
// ============================================================================
//
//   Pending -> Processing -> In Transit -> Out for Delivery -> Delivered
//                                ^   |              |
//                                |   v              v
//                                +-- Exception <----+
//                                        |
//                                        v
//                                 Returned to Sender
//
// Delivered and Returned to Sender loop on themselves, so a walk that runs
// past them keeps emitting the terminal status. Customs Hold, Damaged and
// Lost are never entered by the walk; if handed one they also stay put.
//
// ============================================================================

pub const INITIAL_STATUS: PackageStatus = PackageStatus::Pending;

/// In Transit -> Exception
pub const EXCEPTION_PROBABILITY: f64 = 0.10;
/// Out for Delivery -> Delivered
pub const DELIVERY_SUCCESS_PROBABILITY: f64 = 0.95;
/// Exception -> In Transit
pub const RECOVERY_PROBABILITY: f64 = 0.70;

impl PackageStatus {
    /// Statuses the walk can actually produce, starting from `Pending`
    pub const REACHABLE: [PackageStatus; 7] = [
        PackageStatus::Pending,
        PackageStatus::Processing,
        PackageStatus::InTransit,
        PackageStatus::OutForDelivery,
        PackageStatus::Delivered,
        PackageStatus::Exception,
        PackageStatus::Returned,
    ];

    pub fn is_absorbing(self) -> bool {
        matches!(self, PackageStatus::Delivered | PackageStatus::Returned)
    }

    /// Apply one transition. Only the probabilistic branches consume randomness.
    pub fn next<R: Rng + ?Sized>(self, rng: &mut R) -> PackageStatus {
        match self {
            PackageStatus::Pending => PackageStatus::Processing,
            PackageStatus::Processing => PackageStatus::InTransit,
            PackageStatus::InTransit => {
                if rng.gen_bool(EXCEPTION_PROBABILITY) {
                    PackageStatus::Exception
                } else {
                    PackageStatus::OutForDelivery
                }
            }
            PackageStatus::OutForDelivery => {
                if rng.gen_bool(DELIVERY_SUCCESS_PROBABILITY) {
                    PackageStatus::Delivered
                } else {
                    PackageStatus::Exception
                }
            }
            PackageStatus::Exception => {
                if rng.gen_bool(RECOVERY_PROBABILITY) {
                    PackageStatus::InTransit
                } else {
                    PackageStatus::Returned
                }
            }
            PackageStatus::Delivered
            | PackageStatus::Returned
            | PackageStatus::CustomsHold
            | PackageStatus::Damaged
            | PackageStatus::Lost => self,
        }
    }
}
