#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/membership_test.rs"]
mod membership_test;

use super::NeighborhoodMembershipFunction;
use crate::utils::{DefaultRandom, Float, Random, format_parameters};
use std::sync::Arc;

/// Gives the same membership to every neuron inside the neighborhood.
#[derive(Clone, Debug)]
pub struct ConstantMembership {
    value: Float,
}

impl ConstantMembership {
    /// Creates a new instance of `ConstantMembership`.
    pub fn new(value: Float) -> Self {
        Self { value }
    }
}

impl Default for ConstantMembership {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl NeighborhoodMembershipFunction for ConstantMembership {
    fn membership(&self, distance: Float, width: Float) -> Float {
        if distance < width { self.value } else { 0. }
    }

    fn name(&self) -> &'static str {
        "ConstantNeighborhoodMembershipFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.value])
    }
}

/// Membership decreases linearly with distance: `(w - d) / w`.
#[derive(Clone, Debug, Default)]
pub struct LinearMembership;

impl NeighborhoodMembershipFunction for LinearMembership {
    fn membership(&self, distance: Float, width: Float) -> Float {
        if distance < width { (width - distance) / width } else { 0. }
    }

    fn name(&self) -> &'static str {
        "LinearNeighborhoodMembershipFunction"
    }
}

/// Membership follows a power of the linear shape: `((w - d) / w)^order`.
#[derive(Clone, Debug)]
pub struct GeometricMembership {
    order: Float,
}

impl GeometricMembership {
    /// Creates a new instance of `GeometricMembership`.
    pub fn new(order: Float) -> Self {
        Self { order }
    }
}

impl NeighborhoodMembershipFunction for GeometricMembership {
    fn membership(&self, distance: Float, width: Float) -> Float {
        if distance < width { ((width - distance) / width).powf(self.order) } else { 0. }
    }

    fn name(&self) -> &'static str {
        "GeometricNeighborhoodMembershipFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.order])
    }
}

/// Membership follows `e^(-(w - d) / w)` inside the neighborhood.
#[derive(Clone, Debug, Default)]
pub struct ExponentialMembership;

impl NeighborhoodMembershipFunction for ExponentialMembership {
    fn membership(&self, distance: Float, width: Float) -> Float {
        if distance < width { (-(width - distance) / width).exp() } else { 0. }
    }

    fn name(&self) -> &'static str {
        "ExponentialNeighborhoodMembershipFunction"
    }
}

/// Gives a uniformly distributed random membership in `[0, 1)` inside the neighborhood.
pub struct RandomMembership {
    random: Arc<dyn Random>,
}

impl RandomMembership {
    /// Creates a new instance of `RandomMembership` using the given random generator.
    pub fn new(random: Arc<dyn Random>) -> Self {
        Self { random }
    }
}

impl Default for RandomMembership {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()))
    }
}

impl NeighborhoodMembershipFunction for RandomMembership {
    fn membership(&self, distance: Float, width: Float) -> Float {
        if distance < width { self.random.uniform_real(0., 1.) } else { 0. }
    }

    fn name(&self) -> &'static str {
        "RandomNeighborhoodMembershipFunction"
    }
}
