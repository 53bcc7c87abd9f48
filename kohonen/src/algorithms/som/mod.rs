//! Provides a trainable self organizing map and the strategy families which parametrize its training.

use crate::utils::{Float, SomResult};

mod dimension;
pub use self::dimension::*;

mod distance;
pub use self::distance::*;

mod learning_rate;
pub use self::learning_rate::*;

mod membership;
pub use self::membership::*;

mod neighborhood;
pub use self::neighborhood::*;

mod network;
pub use self::network::*;

mod topology;
pub use self::topology::*;

/// Measures how far an input vector is from a neuron's weight vector.
pub trait DistanceMetric: Send {
    /// Returns a distance between two vectors of the same length.
    fn distance(&self, a: &[Float], b: &[Float]) -> SomResult<Float>;

    /// Returns a name used to persist the metric.
    fn name(&self) -> &'static str;
}

/// Specifies how strongly neurons adapt at a given training iteration.
pub trait LearningRateFunction: Send {
    /// Scales the schedule to the expected amount of iterations. Only the first call has an effect.
    fn set_expected_iterations(&mut self, _expected_iterations: usize) {}

    /// Returns expected iterations the schedule is scaled to, if any.
    fn expected_iterations(&self) -> Option<usize> {
        None
    }

    /// Returns a learning rate at the given iteration.
    fn rate(&self, iteration: usize) -> Float;

    /// Returns a name used to persist the function.
    fn name(&self) -> &'static str;

    /// Returns a parameter string accepted by the function's factory.
    fn parameters(&self) -> String;
}

/// Specifies a topological radius within which neurons are adapted at a given training iteration.
pub trait NeighborhoodWidthFunction: Send {
    /// Scales the schedule to the expected amount of iterations. Only the first call has an effect.
    fn set_expected_iterations(&mut self, _expected_iterations: usize) {}

    /// Returns expected iterations the schedule is scaled to, if any.
    fn expected_iterations(&self) -> Option<usize> {
        None
    }

    /// Returns a neighborhood width at the given iteration.
    fn width(&self, iteration: usize) -> Float;

    /// Returns true if the width can be used to scale weight adjustments.
    fn can_scale_adjustments(&self) -> bool {
        false
    }

    /// Returns nested stages as pairs of activation iteration and width function.
    /// Empty for non compound functions.
    fn stages(&self) -> Vec<(usize, &dyn NeighborhoodWidthFunction)> {
        vec![]
    }

    /// Returns a name used to persist the function.
    fn name(&self) -> &'static str;

    /// Returns a parameter string accepted by the function's factory.
    fn parameters(&self) -> String;
}

/// Converts a topological distance and a current width into an adaptation strength multiplier.
pub trait NeighborhoodMembershipFunction: Send {
    /// Returns membership strength, zero when the distance is not less than the width.
    fn membership(&self, distance: Float, width: Float) -> Float;

    /// Returns a name used to persist the function.
    fn name(&self) -> &'static str;

    /// Returns a parameter string accepted by the function's factory.
    fn parameters(&self) -> String {
        String::new()
    }
}

/// Defines neurons layout and a topological distance between them.
pub trait GridTopology: Send {
    /// Configures the topology for the given grid dimension.
    fn configure(&mut self, dimension: Dimension);

    /// Returns a topological distance between two neurons.
    fn distance(&self, neuron0: usize, neuron1: usize) -> SomResult<Float>;

    /// Returns a distance between two neurons given current weights of all neurons.
    /// Grid layouts do not depend on weights.
    fn neuron_distance(&self, neuron0: usize, neuron1: usize, _weights: &[Vec<Float>]) -> SomResult<Float> {
        self.distance(neuron0, neuron1)
    }

    /// Returns a name used to persist the topology.
    fn name(&self) -> &'static str;
}
