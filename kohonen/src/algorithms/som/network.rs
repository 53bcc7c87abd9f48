#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/network_test.rs"]
mod network_test;

use super::*;
use crate::utils::{Environment, Float, InfoLogger, SomError, SomResult};
use std::fmt::{Display, Formatter};

/// A learning rate used by basic maps.
const BASIC_LEARNING_RATE: Float = 0.08;
/// An initial neighborhood width used by basic maps.
const BASIC_NEIGHBORHOOD_WIDTH: Float = 5.;
/// An initial neighborhood width used by planar maps.
const PLANAR_NEIGHBORHOOD_WIDTH: Float = 1.;
/// A share of expected iterations during which planar maps adapt neighbors.
const PLANAR_NEIGHBORHOOD_FRACTION: Float = 0.2;
/// A default learning rate used by customizable maps.
const DEFAULT_LEARNING_RATE: Float = 0.1;
/// Weights beyond this amount cannot be allocated.
const MAX_WEIGHTS: usize = isize::MAX as usize / std::mem::size_of::<Vec<Float>>();

/// Specifies a map variant which defines default strategies and what is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapType {
    /// All strategies can be replaced before training and are persisted.
    Customizable,
    /// A preset map on a square grid with constant learning rate and linearly decaying neighborhood.
    BasicSquareGrid,
    /// A preset map on a skewed hexagonal grid with constant learning rate and linearly decaying neighborhood.
    BasicHexGrid,
    /// A preset `N x 1` map where neighbors are decided by distance between weights. Neighbors adapt
    /// only during the first fifth of expected iterations.
    BasicPlanar,
}

impl MapType {
    /// Returns a name of the map type used by the persistence format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Customizable => "CustomizableSOM",
            Self::BasicSquareGrid => "BasicSquareGridSOM",
            Self::BasicHexGrid => "BasicHexGridSOM",
            Self::BasicPlanar => "BasicPlanarSOM",
        }
    }

    /// Resolves map type from its name, ignoring case.
    pub fn from_name(name: &str) -> SomResult<Self> {
        [Self::Customizable, Self::BasicSquareGrid, Self::BasicHexGrid, Self::BasicPlanar]
            .into_iter()
            .find(|map_type| map_type.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SomError::Configuration(format!("unknown map type: '{}'", name.trim())))
    }
}

impl Display for MapType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A map configuration.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// A grid dimension.
    pub dimension: Dimension,
    /// A length of input vectors.
    pub input_length: usize,
    /// An expected amount of training iterations used to scale schedules.
    pub expected_iterations: usize,
}

/// Keeps five strategies which parametrize the training rule.
pub struct Strategies {
    /// Measures distance between inputs and weights.
    pub distance_metric: Box<dyn DistanceMetric>,
    /// Specifies learning rate schedule.
    pub learning_rate: Box<dyn LearningRateFunction>,
    /// Specifies neighborhood width schedule.
    pub neighborhood_width: Box<dyn NeighborhoodWidthFunction>,
    /// Shapes adaptation strength inside the neighborhood.
    pub neighborhood_membership: Box<dyn NeighborhoodMembershipFunction>,
    /// Defines grid layout.
    pub grid_topology: Box<dyn GridTopology>,
}

impl Strategies {
    /// Creates default strategies for the given map type and grid dimension.
    pub fn for_type(map_type: MapType, dimension: Dimension) -> Self {
        let basic = |grid_topology: Box<dyn GridTopology>| Self {
            distance_metric: Box::new(EuclideanDistance),
            learning_rate: Box::new(ConstantLearningRate::new(BASIC_LEARNING_RATE)),
            neighborhood_width: Box::new(LinearDecayNeighborhoodWidth::new(BASIC_NEIGHBORHOOD_WIDTH)),
            neighborhood_membership: Box::new(ConstantMembership::default()),
            grid_topology,
        };

        match map_type {
            // NOTE initial radius follows Kohonen's recommendation: a half of the shortest grid side
            MapType::Customizable => Self {
                distance_metric: Box::new(EuclideanDistance),
                learning_rate: Box::new(ConstantLearningRate::new(DEFAULT_LEARNING_RATE)),
                neighborhood_width: Box::new(LinearDecayNeighborhoodWidth::new(
                    (dimension.width().min(dimension.height()) / 2).max(1) as Float,
                )),
                neighborhood_membership: Box::new(ConstantMembership::default()),
                grid_topology: Box::new(SquareGrid::default()),
            },
            MapType::BasicSquareGrid => basic(Box::new(SquareGrid::default())),
            MapType::BasicHexGrid => basic(Box::new(SkewHexagonalGrid::default())),
            MapType::BasicPlanar => Self {
                neighborhood_width: Box::new(CutoffLinearDecayNeighborhoodWidth::new(
                    PLANAR_NEIGHBORHOOD_WIDTH,
                    PLANAR_NEIGHBORHOOD_FRACTION,
                )),
                ..basic(Box::new(WeightSpaceTopology::default()))
            },
        }
    }
}

/// A mutable part of the map which is needed to restore it.
#[derive(Clone, Debug)]
pub struct NetworkState {
    /// Elapsed training iterations.
    pub time: usize,
    /// Neuron weights, one row per neuron.
    pub weights: Vec<Vec<Float>>,
    /// Whether adjustments are scaled by the neighborhood width.
    pub neighborhood_scaling: bool,
}

/// A trainable self organizing map.
pub struct Network {
    map_type: MapType,
    dimension: Dimension,
    input_length: usize,
    expected_iterations: usize,
    time: usize,
    weights: Vec<Vec<Float>>,
    strategies: Strategies,
    neighborhood_scaling: bool,
    logger: InfoLogger,
}

impl Network {
    /// Creates a new customizable map with default strategies and random weights in `[0, 1)`.
    pub fn new(config: NetworkConfig, environment: &Environment) -> SomResult<Self> {
        Self::with_type(MapType::Customizable, config, environment)
    }

    /// Creates a new map of the given type with random weights in `[0, 1)`.
    pub fn with_type(map_type: MapType, config: NetworkConfig, environment: &Environment) -> SomResult<Self> {
        validate_config(map_type, &config)?;

        let weights = (0..config.dimension.area())
            .map(|_| (0..config.input_length).map(|_| environment.random.uniform_real(0., 1.)).collect())
            .collect();

        let strategies = Strategies::for_type(map_type, config.dimension);
        let state = NetworkState { time: 0, weights, neighborhood_scaling: false };

        Self::restore(map_type, config, strategies, state, environment.logger.clone())
    }

    /// Assembles a map from already known state, e.g. read from a persisted file.
    pub fn restore(
        map_type: MapType,
        config: NetworkConfig,
        strategies: Strategies,
        state: NetworkState,
        logger: InfoLogger,
    ) -> SomResult<Self> {
        validate_config(map_type, &config)?;

        let neuron_count = config.dimension.area();
        if state.weights.len() != neuron_count {
            return Err(SomError::Configuration(format!(
                "expected {neuron_count} weight rows, got {}",
                state.weights.len()
            )));
        }

        let mismatched = state.weights.iter().enumerate().find(|(_, row)| row.len() != config.input_length);
        if let Some((neuron, row)) = mismatched {
            return Err(SomError::Configuration(format!(
                "expected {} weights for neuron {neuron}, got {}",
                config.input_length,
                row.len()
            )));
        }

        let mut strategies = strategies;
        strategies.learning_rate.set_expected_iterations(config.expected_iterations);
        strategies.neighborhood_width.set_expected_iterations(config.expected_iterations);
        strategies.grid_topology.configure(config.dimension);

        if state.neighborhood_scaling && !strategies.neighborhood_width.can_scale_adjustments() {
            return Err(SomError::Configuration(format!(
                "{} cannot be used to scale weight adjustments",
                strategies.neighborhood_width.name()
            )));
        }

        Ok(Self {
            map_type,
            dimension: config.dimension,
            input_length: config.input_length,
            expected_iterations: config.expected_iterations,
            time: state.time,
            weights: state.weights,
            strategies,
            neighborhood_scaling: state.neighborhood_scaling,
            logger,
        })
    }

    /// Finds the best matching unit: the neuron whose weights are closest to the input.
    /// Ties are resolved in favor of the lowest index.
    pub fn best_matching_neuron(&self, input: &[Float]) -> SomResult<usize> {
        self.check_input(input)?;

        self.weights
            .iter()
            .enumerate()
            .try_fold((0, Float::INFINITY), |(best, lowest), (neuron, weights)| {
                let distance = self.strategies.distance_metric.distance(weights, input)?;
                Ok(if distance < lowest { (neuron, distance) } else { (best, lowest) })
            })
            .map(|(best, _)| best)
    }

    /// Trains the map with a single input and advances time by one iteration.
    pub fn train_with(&mut self, input: &[Float]) -> SomResult<()> {
        let bmu = self.best_matching_neuron(input)?;

        if self.time == 0 {
            (self.logger)(&format!(
                "training started: {} map {} with input length {}, expected iterations: {}",
                self.map_type, self.dimension, self.input_length, self.expected_iterations
            ));
        }

        let learning_rate = self.strategies.learning_rate.rate(self.time);
        let width = self.strategies.neighborhood_width.width(self.time);
        let scale = if self.neighborhood_scaling { learning_rate * width } else { learning_rate };

        // NOTE compute all memberships before mutating weights so topology errors leave the map unchanged
        let memberships = (0..self.weights.len())
            .map(|neuron| {
                if neuron == bmu {
                    return Ok(1.);
                }

                let distance = self.strategies.grid_topology.neuron_distance(bmu, neuron, &self.weights)?;
                Ok(self.strategies.neighborhood_membership.membership(distance, width))
            })
            .collect::<SomResult<Vec<_>>>()?;

        self.weights.iter_mut().zip(memberships).filter(|(_, membership)| *membership != 0.).for_each(
            |(weights, membership)| {
                weights.iter_mut().zip(input.iter()).for_each(|(weight, value)| {
                    *weight += scale * membership * (value - *weight);
                });
            },
        );

        self.time += 1;
        self.log_progress(learning_rate, width);

        Ok(())
    }

    /// Returns a weight of the neuron for the given input component.
    pub fn weight(&self, neuron: usize, component: usize) -> SomResult<Float> {
        self.neuron_weights(neuron)?
            .get(component)
            .copied()
            .ok_or(SomError::IndexRange { index: component, count: self.input_length })
    }

    /// Returns all weights of the neuron.
    pub fn neuron_weights(&self, neuron: usize) -> SomResult<&[Float]> {
        self.weights
            .get(neuron)
            .map(|weights| weights.as_slice())
            .ok_or(SomError::IndexRange { index: neuron, count: self.weights.len() })
    }

    /// Returns weights of all neurons, one row per neuron.
    pub fn weights(&self) -> &[Vec<Float>] {
        &self.weights
    }

    /// Returns a distance between neuron's weights and the input using the map's distance metric.
    pub fn distance_to_input(&self, neuron: usize, input: &[Float]) -> SomResult<Float> {
        self.check_input(input)?;

        self.strategies.distance_metric.distance(self.neuron_weights(neuron)?, input)
    }

    /// Sets distance metric strategy. Fails once training has started.
    pub fn set_distance_metric(&mut self, distance_metric: Box<dyn DistanceMetric>) -> SomResult<()> {
        self.ensure_not_started("distance metric")?;
        self.strategies.distance_metric = distance_metric;
        self.map_type = MapType::Customizable;

        Ok(())
    }

    /// Sets learning rate strategy and scales it to expected iterations. Fails once training has started.
    pub fn set_learning_rate(&mut self, learning_rate: Box<dyn LearningRateFunction>) -> SomResult<()> {
        self.ensure_not_started("learning rate")?;
        self.strategies.learning_rate = learning_rate;
        self.strategies.learning_rate.set_expected_iterations(self.expected_iterations);
        self.map_type = MapType::Customizable;

        Ok(())
    }

    /// Sets neighborhood width strategy and scales it to expected iterations. Fails once training has started.
    /// Disables neighborhood scaling if the new strategy does not support it.
    pub fn set_neighborhood_width(&mut self, neighborhood_width: Box<dyn NeighborhoodWidthFunction>) -> SomResult<()> {
        self.ensure_not_started("neighborhood width")?;
        self.strategies.neighborhood_width = neighborhood_width;
        self.strategies.neighborhood_width.set_expected_iterations(self.expected_iterations);
        self.neighborhood_scaling &= self.strategies.neighborhood_width.can_scale_adjustments();
        self.map_type = MapType::Customizable;

        Ok(())
    }

    /// Sets neighborhood membership strategy. Fails once training has started.
    pub fn set_neighborhood_membership(
        &mut self,
        neighborhood_membership: Box<dyn NeighborhoodMembershipFunction>,
    ) -> SomResult<()> {
        self.ensure_not_started("neighborhood membership")?;
        self.strategies.neighborhood_membership = neighborhood_membership;
        self.map_type = MapType::Customizable;

        Ok(())
    }

    /// Sets grid topology strategy and configures it for the map's dimension. Fails once training has started.
    pub fn set_grid_topology(&mut self, grid_topology: Box<dyn GridTopology>) -> SomResult<()> {
        self.ensure_not_started("grid topology")?;
        self.strategies.grid_topology = grid_topology;
        self.strategies.grid_topology.configure(self.dimension);
        self.map_type = MapType::Customizable;

        Ok(())
    }

    /// Enables or disables scaling of weight adjustments by the current neighborhood width.
    /// Enabling requires a width strategy which advertises this capability.
    pub fn set_neighborhood_scaling(&mut self, enabled: bool) -> SomResult<()> {
        self.ensure_not_started("neighborhood scaling")?;

        if enabled && !self.strategies.neighborhood_width.can_scale_adjustments() {
            return Err(SomError::Configuration(format!(
                "{} cannot be used to scale weight adjustments",
                self.strategies.neighborhood_width.name()
            )));
        }

        self.neighborhood_scaling = enabled;

        Ok(())
    }

    /// Returns map type.
    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    /// Returns grid dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns expected input vector length.
    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Returns total amount of neurons.
    pub fn neuron_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns expected amount of training iterations.
    pub fn expected_iterations(&self) -> usize {
        self.expected_iterations
    }

    /// Returns elapsed training iterations.
    pub fn time(&self) -> usize {
        self.time
    }

    /// Returns true if weight adjustments are scaled by the neighborhood width.
    pub fn is_neighborhood_scaling(&self) -> bool {
        self.neighborhood_scaling
    }

    /// Returns distance metric strategy.
    pub fn distance_metric(&self) -> &dyn DistanceMetric {
        self.strategies.distance_metric.as_ref()
    }

    /// Returns learning rate strategy.
    pub fn learning_rate(&self) -> &dyn LearningRateFunction {
        self.strategies.learning_rate.as_ref()
    }

    /// Returns neighborhood width strategy.
    pub fn neighborhood_width(&self) -> &dyn NeighborhoodWidthFunction {
        self.strategies.neighborhood_width.as_ref()
    }

    /// Returns neighborhood membership strategy.
    pub fn neighborhood_membership(&self) -> &dyn NeighborhoodMembershipFunction {
        self.strategies.neighborhood_membership.as_ref()
    }

    /// Returns grid topology strategy.
    pub fn grid_topology(&self) -> &dyn GridTopology {
        self.strategies.grid_topology.as_ref()
    }

    fn check_input(&self, input: &[Float]) -> SomResult<()> {
        if input.len() != self.input_length {
            return Err(SomError::InputLength { expected: self.input_length, actual: input.len() });
        }

        Ok(())
    }

    fn ensure_not_started(&self, strategy: &str) -> SomResult<()> {
        if self.time != 0 {
            return Err(SomError::IllegalState(format!(
                "cannot change {strategy} strategy after training has begun (time: {})",
                self.time
            )));
        }

        Ok(())
    }

    fn log_progress(&self, learning_rate: Float, width: Float) {
        let step = self.expected_iterations / 10;

        if step > 0 && self.time % step == 0 && self.time <= self.expected_iterations {
            (self.logger)(&format!(
                "[{}/{}] learning rate: {:.4}, neighborhood width: {:.4}",
                self.time, self.expected_iterations, learning_rate, width
            ));
        }

        if self.time == self.expected_iterations + 1 {
            (self.logger)(&format!("training exceeds expected iterations: {}", self.expected_iterations));
        }
    }
}

fn validate_config(map_type: MapType, config: &NetworkConfig) -> SomResult<()> {
    if config.input_length == 0 {
        return Err(SomError::Configuration("input length must be positive".to_string()));
    }

    if config.dimension.area().checked_mul(config.input_length).is_none_or(|weights| weights > MAX_WEIGHTS) {
        return Err(SomError::Configuration(format!(
            "map {} with input length {} is too large",
            config.dimension, config.input_length
        )));
    }

    if map_type == MapType::BasicPlanar && config.dimension.height() != 1 {
        return Err(SomError::Configuration(format!(
            "{map_type} expects a single row of neurons, got {}",
            config.dimension
        )));
    }

    Ok(())
}
