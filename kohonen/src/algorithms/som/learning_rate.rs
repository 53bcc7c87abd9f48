#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/learning_rate_test.rs"]
mod learning_rate_test;

use super::LearningRateFunction;
use crate::utils::{Float, format_parameters};

/// A learning rate which does not change over time.
#[derive(Clone, Debug)]
pub struct ConstantLearningRate {
    rate: Float,
}

impl ConstantLearningRate {
    /// Creates a new instance of `ConstantLearningRate`.
    pub fn new(rate: Float) -> Self {
        Self { rate }
    }
}

impl LearningRateFunction for ConstantLearningRate {
    fn rate(&self, _: usize) -> Float {
        self.rate
    }

    fn name(&self) -> &'static str {
        "ConstantLearningRateFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.rate])
    }
}

/// A learning rate which moves from initial to final value following `a_i * (a_f / a_i)^(t / t_max)`.
#[derive(Clone, Debug)]
pub struct HyperbolicLearningRate {
    initial: Float,
    last: Float,
    expected_iterations: Option<usize>,
}

impl HyperbolicLearningRate {
    /// Creates a new instance of `HyperbolicLearningRate`.
    pub fn new(initial: Float, last: Float) -> Self {
        Self { initial, last, expected_iterations: None }
    }
}

impl LearningRateFunction for HyperbolicLearningRate {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn rate(&self, iteration: usize) -> Float {
        self.initial * (self.last / self.initial).powf(progress(iteration, self.expected_iterations))
    }

    fn name(&self) -> &'static str {
        "HyperbolicLearningRateFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial, self.last])
    }
}

/// A learning rate which decays exponentially following `a_i * e^(-t / t_max)`.
#[derive(Clone, Debug)]
pub struct ExponentialDecayLearningRate {
    initial: Float,
    expected_iterations: Option<usize>,
}

impl ExponentialDecayLearningRate {
    /// Creates a new instance of `ExponentialDecayLearningRate`.
    pub fn new(initial: Float) -> Self {
        Self { initial, expected_iterations: None }
    }
}

impl LearningRateFunction for ExponentialDecayLearningRate {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn rate(&self, iteration: usize) -> Float {
        self.initial * (-progress(iteration, self.expected_iterations)).exp()
    }

    fn name(&self) -> &'static str {
        "ExponentialDecayLearningRateFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial])
    }
}

/// Returns `t / t_max`. A schedule which was never scaled (or scaled to zero) stays at its start.
pub(crate) fn progress(iteration: usize, expected_iterations: Option<usize>) -> Float {
    expected_iterations.filter(|&expected| expected > 0).map_or(0., |expected| iteration as Float / expected as Float)
}
