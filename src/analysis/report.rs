use std::fmt;

use super::stats::{BasicStats, DeliveryTimeStats, TransitionCounts};

/// Plain-text analysis report
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub basic: BasicStats,
    pub delivery: Option<DeliveryTimeStats>,
    pub transitions: TransitionCounts,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Logistics Data Analysis Report ===")?;
        writeln!(f)?;
        writeln!(f, "Basic Statistics:")?;
        writeln!(f, "Total Packages: {}", self.basic.total_packages)?;

        writeln!(f)?;
        writeln!(f, "Delivery Status Distribution:")?;
        for (status, count) in &self.basic.status_counts {
            writeln!(f, "{status}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Package Type Distribution:")?;
        for (package_type, count) in &self.basic.package_type_counts {
            writeln!(f, "{package_type}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Carrier Distribution:")?;
        for (carrier, count) in &self.basic.carrier_counts {
            writeln!(f, "{carrier}: {count}")?;
        }

        if let Some(weight) = self.basic.avg_weight {
            writeln!(f)?;
            writeln!(f, "Average Weight: {weight:.2} kg")?;
        }
        if let Some(dims) = &self.basic.avg_dimensions {
            writeln!(
                f,
                "Average Dimensions: {:.2} x {:.2} x {:.2} cm",
                dims.length, dims.width, dims.height
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Delivery Time Analysis:")?;
        match &self.delivery {
            Some(delivery) => {
                writeln!(f, "Average Delay: {:.2} hours", delivery.avg_delay_hours)?;
                writeln!(
                    f,
                    "Delay Range: {:.2} to {:.2} hours",
                    delivery.min_delay_hours, delivery.max_delay_hours
                )?;
                writeln!(
                    f,
                    "On-time Delivery Rate: {:.2}%",
                    delivery.on_time_delivery_percentage
                )?;
            }
            None => writeln!(f, "No delivered packages")?,
        }

        writeln!(f)?;
        writeln!(f, "Status Transitions:")?;
        for ((from, to), count) in &self.transitions {
            writeln!(f, "{from} -> {to}: {count}")?;
        }

        Ok(())
    }
}
