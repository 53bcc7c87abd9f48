#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/dimension_test.rs"]
mod dimension_test;

use crate::utils::{SomError, SomResult};
use std::fmt::{Display, Formatter};

/// A width by height layout of neurons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: usize,
    height: usize,
}

impl Dimension {
    /// Creates a new instance of `Dimension`. Both sides must be positive and their product must fit `usize`.
    pub fn new(width: usize, height: usize) -> SomResult<Self> {
        if width == 0 || height == 0 {
            return Err(SomError::Configuration(format!("grid dimensions must be positive, got {width}x{height}")));
        }

        if width.checked_mul(height).is_none() {
            return Err(SomError::Configuration(format!("grid dimensions are too large: {width}x{height}")));
        }

        Ok(Self { width, height })
    }

    /// Returns amount of neurons in a row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns amount of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns total amount of neurons.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Converts a neuron index into (row, column) grid coordinates.
    pub fn to_coordinate(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
