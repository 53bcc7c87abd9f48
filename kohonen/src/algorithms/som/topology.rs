#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/topology_test.rs"]
mod topology_test;

use super::{Dimension, GridTopology};
use crate::utils::{Float, SomError, SomResult};

/// A (row, column) pair of signed grid coordinates.
type Coordinate = (i64, i64);

/// A square grid where neurons are `sqrt(dr² + dc²)` apart.
#[derive(Clone, Debug, Default)]
pub struct SquareGrid {
    dimension: Option<Dimension>,
}

/// A square grid with rook (Manhattan) distance: `|dr| + |dc|`.
#[derive(Clone, Debug, Default)]
pub struct VonNeumannGrid {
    dimension: Option<Dimension>,
}

/// A square grid with king (Chebyshev) distance: `max(|dr|, |dc|)`.
#[derive(Clone, Debug, Default)]
pub struct MooreGrid {
    dimension: Option<Dimension>,
}

/// A square grid wrapped into a torus: each axis delta is `min(d, size - d)`.
#[derive(Clone, Debug, Default)]
pub struct ToroidalSquareGrid {
    dimension: Option<Dimension>,
}

/// A hexagonal grid where rows and columns are used directly as skewed axial coordinates.
#[derive(Clone, Debug, Default)]
pub struct SkewHexagonalGrid {
    dimension: Option<Dimension>,
}

/// A hexagonal grid where every other column is shifted by half a cell.
#[derive(Clone, Debug, Default)]
pub struct OffsetHexagonalGrid {
    dimension: Option<Dimension>,
}

/// A layout where neighbors are decided by weights instead of grid positions: neurons are
/// `sqrt(Σ (w0 - w1)²)` apart in the weight space.
#[derive(Clone, Debug, Default)]
pub struct WeightSpaceTopology {
    dimension: Option<Dimension>,
}

impl GridTopology for SquareGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), _) = get_coordinates(self.dimension, neuron0, neuron1)?;
        let (dr, dc) = ((r1 - r0) as Float, (c1 - c0) as Float);

        Ok((dr * dr + dc * dc).sqrt())
    }

    fn name(&self) -> &'static str {
        "SquareGrid"
    }
}

impl GridTopology for VonNeumannGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), _) = get_coordinates(self.dimension, neuron0, neuron1)?;

        Ok(((r1 - r0).abs() + (c1 - c0).abs()) as Float)
    }

    fn name(&self) -> &'static str {
        "VonNeumann"
    }
}

impl GridTopology for MooreGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), _) = get_coordinates(self.dimension, neuron0, neuron1)?;

        Ok((r1 - r0).abs().max((c1 - c0).abs()) as Float)
    }

    fn name(&self) -> &'static str {
        "Moore"
    }
}

impl GridTopology for ToroidalSquareGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), dimension) = get_coordinates(self.dimension, neuron0, neuron1)?;

        let wrap = |delta: i64, size: usize| {
            let delta = delta.abs();
            delta.min(size as i64 - delta) as Float
        };

        let dr = wrap(r1 - r0, dimension.height());
        let dc = wrap(c1 - c0, dimension.width());

        Ok((dr * dr + dc * dc).sqrt())
    }

    fn name(&self) -> &'static str {
        "ToroidalEuclideanSquare"
    }
}

impl GridTopology for SkewHexagonalGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), _) = get_coordinates(self.dimension, neuron0, neuron1)?;

        Ok(hex_distance(r1 - r0, c1 - c0))
    }

    fn name(&self) -> &'static str {
        "SkewHexagonalGrid"
    }
}

impl GridTopology for OffsetHexagonalGrid {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        let ((r0, c0), (r1, c1), _) = get_coordinates(self.dimension, neuron0, neuron1)?;

        // convert offset columns into axial coordinates
        let (y0, y1) = (r0 - c0 / 2, r1 - c1 / 2);

        Ok(hex_distance(c1 - c0, y1 - y0))
    }

    fn name(&self) -> &'static str {
        "OffsetHexagonalGrid"
    }
}

impl GridTopology for WeightSpaceTopology {
    fn configure(&mut self, dimension: Dimension) {
        self.dimension = Some(dimension);
    }

    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float> {
        get_coordinates(self.dimension, neuron0, neuron1)?;

        Err(SomError::IllegalState("weight space distance requires neuron weights".to_string()))
    }

    fn neuron_distance(&self, neuron0: usize, neuron1: usize, weights: &[Vec<Float>]) -> SomResult<Float> {
        get_coordinates(self.dimension, neuron0, neuron1)?;

        let (weights0, weights1) = match (weights.get(neuron0), weights.get(neuron1)) {
            (Some(weights0), Some(weights1)) => (weights0, weights1),
            _ => return Err(SomError::IndexRange { index: neuron0.max(neuron1), count: weights.len() }),
        };

        if weights0.len() != weights1.len() {
            return Err(SomError::LengthMismatch { left: weights0.len(), right: weights1.len() });
        }

        Ok(weights0.iter().zip(weights1.iter()).map(|(w0, w1)| (w0 - w1) * (w0 - w1)).sum::<Float>().sqrt())
    }

    fn name(&self) -> &'static str {
        "WeightSpace"
    }
}

/// Returns a distance on a hexagonal grid given axial coordinate deltas. Zero counts as positive.
fn hex_distance(dx: i64, dy: i64) -> Float {
    let distance = if (dx >= 0) == (dy >= 0) { (dx + dy).abs() } else { dx.abs().max(dy.abs()) };

    distance as Float
}

/// Validates both neuron indices and converts them into grid coordinates.
fn get_coordinates(
    dimension: Option<Dimension>,
    neuron0: usize,
    neuron1: usize,
) -> SomResult<(Coordinate, Coordinate, Dimension)> {
    let count = dimension.map_or(0, |dimension| dimension.area());

    let dimension = match dimension {
        Some(dimension) if neuron0 < count && neuron1 < count => dimension,
        _ => return Err(SomError::IndexRange { index: if neuron0 >= count { neuron0 } else { neuron1 }, count }),
    };

    let to_coordinate = |index: usize| {
        let (row, col) = dimension.to_coordinate(index);
        (row as i64, col as i64)
    };

    Ok((to_coordinate(neuron0), to_coordinate(neuron1), dimension))
}
