pub mod numeric;
pub mod timestamp;

pub use numeric::round2;
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
