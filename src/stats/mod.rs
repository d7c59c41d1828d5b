//! Stats module - bucketed Monte Carlo estimate of the next price

mod buckets;
mod estimator;

pub use buckets::{Bucket, BucketLayout, LayoutError};
pub use estimator::{Estimate, EstimatorError, ProbabilityEstimator};
