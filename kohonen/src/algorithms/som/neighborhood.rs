#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/neighborhood_test.rs"]
mod neighborhood_test;

use super::NeighborhoodWidthFunction;
use super::learning_rate::progress;
use crate::utils::{Float, SomError, SomResult, format_parameters};
use std::cell::Cell;
use std::f64::consts::PI;

/// A neighborhood width which does not change over time.
#[derive(Clone, Debug)]
pub struct ConstantNeighborhoodWidth {
    width: Float,
}

impl ConstantNeighborhoodWidth {
    /// Creates a new instance of `ConstantNeighborhoodWidth`.
    pub fn new(width: Float) -> Self {
        Self { width }
    }
}

impl NeighborhoodWidthFunction for ConstantNeighborhoodWidth {
    fn width(&self, _: usize) -> Float {
        self.width
    }

    fn name(&self) -> &'static str {
        "ConstantNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.width])
    }
}

/// A neighborhood width which decays linearly: `w_i * (1 - t / t_max)`.
#[derive(Clone, Debug)]
pub struct LinearDecayNeighborhoodWidth {
    initial: Float,
    expected_iterations: Option<usize>,
}

impl LinearDecayNeighborhoodWidth {
    /// Creates a new instance of `LinearDecayNeighborhoodWidth`.
    pub fn new(initial: Float) -> Self {
        Self { initial, expected_iterations: None }
    }
}

impl NeighborhoodWidthFunction for LinearDecayNeighborhoodWidth {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn width(&self, iteration: usize) -> Float {
        self.initial * (1. - progress(iteration, self.expected_iterations))
    }

    fn name(&self) -> &'static str {
        "LinearDecayNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial])
    }
}

/// A neighborhood width which decays linearly as `w_i * (1 - t / t_max)` for the first
/// `⌊t_max * fraction⌋` iterations and is zero afterwards, so only the best matching neuron adapts
/// in the rest of training. An unscaled function has no neighborhood at all.
#[derive(Clone, Debug)]
pub struct CutoffLinearDecayNeighborhoodWidth {
    initial: Float,
    fraction: Float,
    expected_iterations: Option<usize>,
}

impl CutoffLinearDecayNeighborhoodWidth {
    /// Creates a new instance of `CutoffLinearDecayNeighborhoodWidth`.
    pub fn new(initial: Float, fraction: Float) -> Self {
        Self { initial, fraction, expected_iterations: None }
    }
}

impl NeighborhoodWidthFunction for CutoffLinearDecayNeighborhoodWidth {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn width(&self, iteration: usize) -> Float {
        let cutoff = self.expected_iterations.map_or(0., |expected| (expected as Float * self.fraction).floor());

        if (iteration as Float) < cutoff {
            self.initial * (1. - progress(iteration, self.expected_iterations))
        } else {
            0.
        }
    }

    fn name(&self) -> &'static str {
        "CutoffLinearDecayNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial, self.fraction])
    }
}

/// A neighborhood width which moves from initial to final value: `w_i * (w_f / w_i)^(t / t_max)`.
#[derive(Clone, Debug)]
pub struct HyperbolicNeighborhoodWidth {
    initial: Float,
    last: Float,
    expected_iterations: Option<usize>,
}

impl HyperbolicNeighborhoodWidth {
    /// Creates a new instance of `HyperbolicNeighborhoodWidth`.
    pub fn new(initial: Float, last: Float) -> Self {
        Self { initial, last, expected_iterations: None }
    }
}

impl NeighborhoodWidthFunction for HyperbolicNeighborhoodWidth {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn width(&self, iteration: usize) -> Float {
        self.initial * (self.last / self.initial).powf(progress(iteration, self.expected_iterations))
    }

    fn name(&self) -> &'static str {
        "HyperbolicNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial, self.last])
    }
}

/// A neighborhood width which decays exponentially: `w_i * e^(-t / t_max)`.
#[derive(Clone, Debug)]
pub struct ExponentialDecayNeighborhoodWidth {
    initial: Float,
    expected_iterations: Option<usize>,
}

impl ExponentialDecayNeighborhoodWidth {
    /// Creates a new instance of `ExponentialDecayNeighborhoodWidth`.
    pub fn new(initial: Float) -> Self {
        Self { initial, expected_iterations: None }
    }
}

impl NeighborhoodWidthFunction for ExponentialDecayNeighborhoodWidth {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        self.expected_iterations.get_or_insert(expected_iterations);
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn width(&self, iteration: usize) -> Float {
        self.initial * (-progress(iteration, self.expected_iterations)).exp()
    }

    fn name(&self) -> &'static str {
        "ExponentialDecayNeighborhoodWidth"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.initial])
    }
}

/// A neighborhood width shaped by the gaussian function centered at zero:
/// `1 / (σ * sqrt(2π)) * e^(-t² / 2σ²)`.
#[derive(Clone, Debug)]
pub struct GaussianNeighborhoodWidth {
    deviation: Float,
    coefficient: Float,
}

impl GaussianNeighborhoodWidth {
    /// Creates a new instance of `GaussianNeighborhoodWidth` using standard deviation.
    pub fn new(deviation: Float) -> Self {
        Self { deviation, coefficient: 1. / (deviation * (2. * PI).sqrt()) }
    }
}

impl NeighborhoodWidthFunction for GaussianNeighborhoodWidth {
    fn width(&self, iteration: usize) -> Float {
        let iteration = iteration as Float;
        self.coefficient * (-(iteration * iteration) / (2. * self.deviation * self.deviation)).exp()
    }

    fn can_scale_adjustments(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "GaussianNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.deviation])
    }
}

/// A neighborhood width shaped by the "mexican hat" (Ricker wavelet) function:
/// `2 / (sqrt(3σ) * π^(1/4)) * e^(-t² / 2σ²) * (1 - t² / σ²)`.
///
/// It decreases until its minimum at `t = σ * sqrt(3)` and increases towards zero afterwards.
#[derive(Clone, Debug)]
pub struct MexicanHatNeighborhoodWidth {
    deviation: Float,
    coefficient: Float,
    variance: Float,
}

impl MexicanHatNeighborhoodWidth {
    /// Creates a new instance of `MexicanHatNeighborhoodWidth` using standard deviation of
    /// the corresponding gaussian.
    pub fn new(deviation: Float) -> Self {
        Self {
            deviation,
            coefficient: 2. / ((3. * deviation).sqrt() * PI.powf(0.25)),
            variance: deviation * deviation,
        }
    }
}

impl NeighborhoodWidthFunction for MexicanHatNeighborhoodWidth {
    fn width(&self, iteration: usize) -> Float {
        let iteration = iteration as Float;
        let squared = iteration * iteration;
        self.coefficient * (-squared / (2. * self.variance)).exp() * (1. - squared / self.variance)
    }

    fn can_scale_adjustments(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "MexicanHatNeighborhoodWidthFunction"
    }

    fn parameters(&self) -> String {
        format_parameters(&[self.deviation])
    }
}

/// Collects a series of neighborhood width functions used sequentially: e.g. a large, linearly
/// decreasing width first, then an exponentially decreasing one.
///
/// Each stage starts at its threshold iteration. Once reached, a threshold is consumed: the active
/// stage never moves back. Stages keep their own expected iterations: when the compound is scaled,
/// only stages which were not scaled yet receive its value.
pub struct CompoundNeighborhoodWidth {
    stages: Vec<(usize, Box<dyn NeighborhoodWidthFunction>)>,
    active: Cell<usize>,
    expected_iterations: Option<usize>,
}

impl CompoundNeighborhoodWidth {
    /// Creates a new instance of `CompoundNeighborhoodWidth` with the function active from iteration zero.
    pub fn new(initial: Box<dyn NeighborhoodWidthFunction>) -> Self {
        Self { stages: vec![(0, initial)], active: Cell::new(0), expected_iterations: None }
    }

    /// Adds a width function to be used starting from the given iteration.
    /// Thresholds must strictly increase.
    pub fn add_neighborhood(
        &mut self,
        start_at: usize,
        mut width: Box<dyn NeighborhoodWidthFunction>,
    ) -> SomResult<()> {
        let last = self.stages.last().map_or(0, |(threshold, _)| *threshold);
        if start_at <= last {
            return Err(SomError::Configuration(format!(
                "compound neighborhood thresholds must strictly increase: {start_at} follows {last}"
            )));
        }

        if let Some(expected_iterations) = self.expected_iterations {
            width.set_expected_iterations(expected_iterations);
        }

        self.stages.push((start_at, width));

        Ok(())
    }

    /// Returns an index of currently active stage.
    pub fn active_stage(&self) -> usize {
        self.active.get()
    }
}

impl NeighborhoodWidthFunction for CompoundNeighborhoodWidth {
    fn set_expected_iterations(&mut self, expected_iterations: usize) {
        let expected_iterations = *self.expected_iterations.get_or_insert(expected_iterations);

        self.stages.iter_mut().for_each(|(_, width)| width.set_expected_iterations(expected_iterations));
    }

    fn expected_iterations(&self) -> Option<usize> {
        self.expected_iterations
    }

    fn width(&self, iteration: usize) -> Float {
        let mut active = self.active.get();

        // NOTE advance over all reached thresholds: a restored map may start in the middle of a schedule
        while active + 1 < self.stages.len() && self.stages[active + 1].0 <= iteration {
            active += 1;
        }
        self.active.set(active);

        self.stages[active].1.width(iteration)
    }

    fn can_scale_adjustments(&self) -> bool {
        self.stages.iter().all(|(_, width)| width.can_scale_adjustments())
    }

    fn stages(&self) -> Vec<(usize, &dyn NeighborhoodWidthFunction)> {
        self.stages.iter().map(|(threshold, width)| (*threshold, width.as_ref())).collect()
    }

    fn name(&self) -> &'static str {
        "CompoundNeighborhood"
    }

    fn parameters(&self) -> String {
        String::new()
    }
}
