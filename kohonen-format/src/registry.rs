//! A static registry which resolves strategies by their persisted names.
//!
//! Each strategy family has its own table populated once on first use. Names are matched
//! ignoring case, parameters are passed as a whitespace separated string, e.g. `"0.8 0.1"`.
//! Compound neighborhood widths are not registered here: they are assembled from stage
//! definitions, see [`WidthDefinition`](crate::common::WidthDefinition).

#[cfg(test)]
#[path = "../tests/unit/registry_test.rs"]
mod registry_test;

use kohonen::algorithms::som::*;
use kohonen::utils::{DefaultRandom, Float, SomError, SomResult, parse_parameters};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::sync::Arc;

type Factory<T> = fn(&str) -> SomResult<Box<T>>;

struct Registry<T: ?Sized> {
    kind: &'static str,
    factories: FxHashMap<String, Factory<T>>,
}

impl<T: ?Sized> Registry<T> {
    fn new(kind: &'static str) -> Self {
        Self { kind, factories: FxHashMap::default() }
    }

    fn with(mut self, name: &str, factory: Factory<T>) -> Self {
        self.factories.insert(name.to_lowercase(), factory);
        self
    }

    fn create(&self, name: &str, parameters: &str) -> SomResult<Box<T>> {
        let factory = self
            .factories
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| SomError::Configuration(format!("unknown {}: '{}'", self.kind, name.trim())))?;

        factory(parameters).map_err(|err| match err {
            SomError::Configuration(msg) => SomError::Configuration(format!("{} '{}': {msg}", self.kind, name.trim())),
            other => other,
        })
    }
}

lazy_static! {
    static ref DISTANCE_METRICS: Registry<dyn DistanceMetric> =
        Registry::<dyn DistanceMetric>::new("distance metric")
            .with("EuclideanDistanceMetric", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(EuclideanDistance))
            })
            .with("ManhattanDistanceMetric", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(ManhattanDistance))
            })
            .with("ChebyshevDistanceMetric", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(ChebyshevDistance))
            });

    static ref LEARNING_RATES: Registry<dyn LearningRateFunction> =
        Registry::<dyn LearningRateFunction>::new("learning rate function")
            .with("ConstantLearningRateFunction", |parameters| {
                let [rate] = parse_array(parameters)?;
                Ok(Box::new(ConstantLearningRate::new(rate)))
            })
            .with("HyperbolicLearningRateFunction", |parameters| {
                let [initial, last] = parse_array(parameters)?;
                Ok(Box::new(HyperbolicLearningRate::new(initial, last)))
            })
            .with("ExponentialDecayLearningRateFunction", |parameters| {
                let [initial] = parse_array(parameters)?;
                Ok(Box::new(ExponentialDecayLearningRate::new(initial)))
            });

    static ref NEIGHBORHOOD_WIDTHS: Registry<dyn NeighborhoodWidthFunction> =
        Registry::<dyn NeighborhoodWidthFunction>::new("neighborhood width function")
            .with("ConstantNeighborhoodWidthFunction", |parameters| {
                let [width] = parse_array(parameters)?;
                Ok(Box::new(ConstantNeighborhoodWidth::new(width)))
            })
            .with("LinearDecayNeighborhoodWidthFunction", |parameters| {
                let [initial] = parse_array(parameters)?;
                Ok(Box::new(LinearDecayNeighborhoodWidth::new(initial)))
            })
            .with("CutoffLinearDecayNeighborhoodWidthFunction", |parameters| {
                let [initial, fraction] = parse_array(parameters)?;
                Ok(Box::new(CutoffLinearDecayNeighborhoodWidth::new(initial, fraction)))
            })
            .with("HyperbolicNeighborhoodWidthFunction", |parameters| {
                let [initial, last] = parse_array(parameters)?;
                Ok(Box::new(HyperbolicNeighborhoodWidth::new(initial, last)))
            })
            .with("ExponentialDecayNeighborhoodWidth", |parameters| {
                let [initial] = parse_array(parameters)?;
                Ok(Box::new(ExponentialDecayNeighborhoodWidth::new(initial)))
            })
            .with("GaussianNeighborhoodWidthFunction", |parameters| {
                let [deviation] = parse_array(parameters)?;
                Ok(Box::new(GaussianNeighborhoodWidth::new(deviation)))
            })
            .with("MexicanHatNeighborhoodWidthFunction", |parameters| {
                let [deviation] = parse_array(parameters)?;
                Ok(Box::new(MexicanHatNeighborhoodWidth::new(deviation)))
            });

    static ref NEIGHBORHOOD_MEMBERSHIPS: Registry<dyn NeighborhoodMembershipFunction> =
        Registry::<dyn NeighborhoodMembershipFunction>::new("neighborhood membership function")
            .with("ConstantNeighborhoodMembershipFunction", |parameters| {
                // NOTE value is optional and defaults to full membership
                if parameters.trim().is_empty() {
                    return Ok(Box::new(ConstantMembership::default()));
                }

                let [value] = parse_array(parameters)?;
                Ok(Box::new(ConstantMembership::new(value)))
            })
            .with("LinearNeighborhoodMembershipFunction", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(LinearMembership))
            })
            .with("GeometricNeighborhoodMembershipFunction", |parameters| {
                let [order] = parse_array(parameters)?;
                Ok(Box::new(GeometricMembership::new(order)))
            })
            .with("ExponentialNeighborhoodMembershipFunction", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(ExponentialMembership))
            })
            .with("RandomNeighborhoodMembershipFunction", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(RandomMembership::new(Arc::new(DefaultRandom::default()))))
            });

    static ref GRID_TOPOLOGIES: Registry<dyn GridTopology> =
        Registry::<dyn GridTopology>::new("grid type")
            .with("SquareGrid", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(SquareGrid::default()))
            })
            .with("VonNeumann", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(VonNeumannGrid::default()))
            })
            .with("Moore", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(MooreGrid::default()))
            })
            .with("ToroidalEuclideanSquare", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(ToroidalSquareGrid::default()))
            })
            .with("SkewHexagonalGrid", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(SkewHexagonalGrid::default()))
            })
            .with("OffsetHexagonalGrid", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(OffsetHexagonalGrid::default()))
            })
            .with("WeightSpace", |parameters| {
                no_parameters(parameters)?;
                Ok(Box::new(WeightSpaceTopology::default()))
            });
}

/// Creates a distance metric by its name.
pub fn create_distance_metric(name: &str, parameters: &str) -> SomResult<Box<dyn DistanceMetric>> {
    DISTANCE_METRICS.create(name, parameters)
}

/// Creates a learning rate function by its name and parameters.
pub fn create_learning_rate(name: &str, parameters: &str) -> SomResult<Box<dyn LearningRateFunction>> {
    LEARNING_RATES.create(name, parameters)
}

/// Creates a (non compound) neighborhood width function by its name and parameters.
pub fn create_neighborhood_width(name: &str, parameters: &str) -> SomResult<Box<dyn NeighborhoodWidthFunction>> {
    NEIGHBORHOOD_WIDTHS.create(name, parameters)
}

/// Creates a neighborhood membership function by its name and parameters.
pub fn create_neighborhood_membership(
    name: &str,
    parameters: &str,
) -> SomResult<Box<dyn NeighborhoodMembershipFunction>> {
    NEIGHBORHOOD_MEMBERSHIPS.create(name, parameters)
}

/// Creates a grid topology by its name. The topology still has to be configured with grid dimension.
pub fn create_grid_topology(name: &str, parameters: &str) -> SomResult<Box<dyn GridTopology>> {
    GRID_TOPOLOGIES.create(name, parameters)
}

fn no_parameters(parameters: &str) -> SomResult<()> {
    parse_parameters(parameters, 0).map(|_| ())
}

fn parse_array<const N: usize>(parameters: &str) -> SomResult<[Float; N]> {
    let values = parse_parameters(parameters, N)?;

    values.try_into().map_err(|_| SomError::Configuration(format!("expected {N} parameter(s)")))
}
