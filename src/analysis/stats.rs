use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::FlatPackageRecord;
use crate::domain::tracking::{Package, PackageStatus, PackageType, ShippingCarrier};

/// Consecutive status pairs observed across all tracking histories
pub type TransitionCounts = BTreeMap<(PackageStatus, PackageStatus), usize>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    pub total_packages: usize,
    pub status_counts: BTreeMap<PackageStatus, usize>,
    pub package_type_counts: BTreeMap<PackageType, usize>,
    pub carrier_counts: BTreeMap<ShippingCarrier, usize>,
    /// `None` for an empty dataset
    pub avg_weight: Option<f64>,
    pub avg_dimensions: Option<AverageDimensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryTimeStats {
    pub delivered_packages: usize,
    pub avg_delay_hours: f64,
    pub max_delay_hours: f64,
    pub min_delay_hours: f64,
    pub on_time_delivery_percentage: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn count_by<K: Ord, T>(items: &[T], key: impl Fn(&T) -> K) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

pub fn basic_stats(rows: &[FlatPackageRecord]) -> BasicStats {
    let avg_dimensions = match (
        mean(rows.iter().map(|r| r.length_cm)),
        mean(rows.iter().map(|r| r.width_cm)),
        mean(rows.iter().map(|r| r.height_cm)),
    ) {
        (Some(length), Some(width), Some(height)) => Some(AverageDimensions { length, width, height }),
        _ => None,
    };

    BasicStats {
        total_packages: rows.len(),
        status_counts: count_by(rows, |r| r.current_status),
        package_type_counts: count_by(rows, |r| r.package_type),
        carrier_counts: count_by(rows, |r| r.carrier),
        avg_weight: mean(rows.iter().map(|r| r.weight_kg)),
        avg_dimensions,
    }
}

/// Delay statistics over delivered packages (actual minus estimated).
pub fn delivery_times(rows: &[FlatPackageRecord]) -> Option<DeliveryTimeStats> {
    let delays: Vec<f64> = rows
        .iter()
        .filter(|r| r.is_delivered())
        .filter_map(FlatPackageRecord::delivery_delay_hours)
        .collect();

    let avg_delay_hours = mean(delays.iter().copied())?;
    let on_time = delays.iter().filter(|d| **d <= 0.0).count();

    Some(DeliveryTimeStats {
        delivered_packages: delays.len(),
        avg_delay_hours,
        max_delay_hours: delays.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min_delay_hours: delays.iter().copied().fold(f64::INFINITY, f64::min),
        on_time_delivery_percentage: on_time as f64 / delays.len() as f64 * 100.0,
    })
}

pub fn status_transitions(packages: &[Package]) -> TransitionCounts {
    let mut counts = TransitionCounts::new();
    for package in packages {
        for pair in package.tracking_history.windows(2) {
            *counts.entry((pair[0].status, pair[1].status)).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_package, TimeWindow};
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn rows(count: usize) -> Vec<FlatPackageRecord> {
        let window = TimeWindow::this_month(at(28, 12));
        let mut rng = StdRng::seed_from_u64(55);
        (0..count)
            .map(|_| FlatPackageRecord::from(&generate_package(&mut rng, &window)))
            .collect()
    }

    #[test]
    fn test_basic_stats_counts_add_up() {
        let rows = rows(200);
        let stats = basic_stats(&rows);

        assert_eq!(stats.total_packages, 200);
        assert_eq!(stats.status_counts.values().sum::<usize>(), 200);
        assert_eq!(stats.package_type_counts.values().sum::<usize>(), 200);
        assert_eq!(stats.carrier_counts.values().sum::<usize>(), 200);

        let avg_weight = stats.avg_weight.unwrap();
        assert!((0.5..=50.0).contains(&avg_weight));
        assert!(stats.avg_dimensions.is_some());
    }

    #[test]
    fn test_basic_stats_on_empty_dataset() {
        let stats = basic_stats(&[]);
        assert_eq!(stats.total_packages, 0);
        assert!(stats.status_counts.is_empty());
        assert_eq!(stats.avg_weight, None);
        assert_eq!(stats.avg_dimensions, None);
    }

    #[test]
    fn test_delivery_times() {
        let mut rows = rows(3);
        for row in rows.iter_mut() {
            row.current_status = PackageStatus::Delivered;
            row.estimated_delivery = at(10, 12);
        }
        rows[0].actual_delivery = Some(at(10, 6)); // 6h early
        rows[1].actual_delivery = Some(at(10, 12)); // on time
        rows[2].actual_delivery = Some(at(11, 0)); // 12h late

        let stats = delivery_times(&rows).unwrap();
        assert_eq!(stats.delivered_packages, 3);
        assert_eq!(stats.avg_delay_hours, 2.0);
        assert_eq!(stats.max_delay_hours, 12.0);
        assert_eq!(stats.min_delay_hours, -6.0);
        assert!((stats.on_time_delivery_percentage - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_delivery_times_without_deliveries() {
        let mut rows = rows(5);
        for row in rows.iter_mut() {
            row.current_status = PackageStatus::InTransit;
            row.actual_delivery = None;
        }
        assert_eq!(delivery_times(&rows), None);
    }

    #[test]
    fn test_status_transitions_follow_walk() {
        let window = TimeWindow::this_month(at(28, 12));
        let mut rng = StdRng::seed_from_u64(8);
        let packages: Vec<_> = (0..300).map(|_| generate_package(&mut rng, &window)).collect();
        let transitions = status_transitions(&packages);

        let pending_to_processing = transitions
            .get(&(PackageStatus::Pending, PackageStatus::Processing))
            .copied()
            .unwrap_or_default();
        assert_eq!(pending_to_processing, packages.len());
        assert!(!transitions.contains_key(&(PackageStatus::Pending, PackageStatus::Delivered)));
    }
}
