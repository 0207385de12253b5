//! Pure transforms and summaries over the literal datasets.

pub mod stats;
pub mod transform;

pub use stats::{describe, describe_readings, DescriptiveStats};
pub use transform::{difference, reporter_activity, undilute, z_scores};
