// ============================================================================
// Generator - Synthetic package records
// ============================================================================
//
// Every function here takes an explicit `&mut R: Rng` so a seeded StdRng
// yields a reproducible corpus. Nothing holds a global random source.
//
// ============================================================================

pub mod config;
pub mod time_window;
pub mod location;
pub mod history;
pub mod builder;

pub use config::GeneratorConfig;
pub use time_window::TimeWindow;
pub use location::generate_location;
pub use history::{generate_tracking_event, generate_tracking_history};
pub use builder::{generate_dimensions, generate_package, generate_package_of_type};

use rand::Rng;

/// `digits` decimal digits, zero padded
pub(crate) fn random_digits<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> String {
    let upper = 10u64.pow(digits);
    format!("{:0width$}", rng.gen_range(0..upper), width = digits as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_digits_are_zero_padded() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let digits = random_digits(&mut rng, 6);
            assert_eq!(digits.len(), 6);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
