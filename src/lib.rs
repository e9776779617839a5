pub mod analysis;
pub mod corpus;
pub mod domain;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod utils;
