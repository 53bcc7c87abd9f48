#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/distance_test.rs"]
mod distance_test;

use super::DistanceMetric;
use crate::utils::{Float, SomError, SomResult};

/// Euclidean distance: square root of the sum of squared differences.
#[derive(Clone, Debug, Default)]
pub struct EuclideanDistance;

/// Manhattan distance: sum of absolute differences.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance;

/// Chebyshev distance: maximum absolute difference.
#[derive(Clone, Debug, Default)]
pub struct ChebyshevDistance;

impl DistanceMetric for EuclideanDistance {
    fn distance(&self, a: &[Float], b: &[Float]) -> SomResult<Float> {
        ensure_same_length(a, b)?;

        Ok(a.iter().zip(b.iter()).fold(Float::default(), |acc, (a, b)| acc + (a - b) * (a - b)).sqrt())
    }

    fn name(&self) -> &'static str {
        "EuclideanDistanceMetric"
    }
}

impl DistanceMetric for ManhattanDistance {
    fn distance(&self, a: &[Float], b: &[Float]) -> SomResult<Float> {
        ensure_same_length(a, b)?;

        Ok(a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).sum())
    }

    fn name(&self) -> &'static str {
        "ManhattanDistanceMetric"
    }
}

impl DistanceMetric for ChebyshevDistance {
    fn distance(&self, a: &[Float], b: &[Float]) -> SomResult<Float> {
        ensure_same_length(a, b)?;

        Ok(a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).fold(Float::default(), Float::max))
    }

    fn name(&self) -> &'static str {
        "ChebyshevDistanceMetric"
    }
}

fn ensure_same_length(a: &[Float], b: &[Float]) -> SomResult<()> {
    if a.len() != b.len() {
        return Err(SomError::LengthMismatch { left: a.len(), right: b.len() });
    }

    Ok(())
}
