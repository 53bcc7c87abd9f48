//! A json configuration which describes a new map.
//!
//! ```json
//! {
//!   "grid": { "width": 10, "height": 8 },
//!   "inputLength": 3,
//!   "expectedIterations": 1000,
//!   "seed": 42,
//!   "strategies": {
//!     "learningRate": { "name": "HyperbolicLearningRateFunction", "parameters": "0.8 0.1" },
//!     "neighborhoodWidth": {
//!       "stages": [
//!         { "startAt": 0, "width": { "name": "LinearDecayNeighborhoodWidthFunction", "parameters": "4" } },
//!         { "startAt": 500, "width": { "name": "ConstantNeighborhoodWidthFunction", "parameters": "1" } }
//!       ]
//!     },
//!     "gridTopology": { "name": "OffsetHexagonalGrid" }
//!   }
//! }
//! ```

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::common::StrategyDefinitions;
use crate::registry::*;
use kohonen::algorithms::som::*;
use kohonen::utils::{DefaultRandom, Environment, InfoLogger, SomError, SomResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A map configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// A map type name, `CustomizableSOM` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_type: Option<String>,
    /// A grid size.
    pub grid: GridConfig,
    /// A length of input vectors.
    pub input_length: usize,
    /// An expected amount of training iterations.
    pub expected_iterations: usize,
    /// A seed for weight initialization. Weights are random on each run if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Strategy overrides.
    #[serde(default)]
    pub strategies: StrategyDefinitions,
    /// Whether weight adjustments are scaled by the neighborhood width.
    #[serde(default)]
    pub neighborhood_scaling: bool,
}

/// A grid size.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridConfig {
    /// Amount of neurons in a row.
    pub width: usize,
    /// Amount of rows.
    pub height: usize,
}

/// Reads map config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> SomResult<MapConfig> {
    serde_json::from_reader(reader)
        .map_err(|err| SomError::Configuration(format!("cannot deserialize config: '{err}'")))
}

/// Creates a new map from json config.
pub fn create_network_from_config_file<R: Read>(reader: BufReader<R>, logger: InfoLogger) -> SomResult<Network> {
    read_config(reader).and_then(|config| create_network(&config, logger))
}

/// Creates a new map from config.
pub fn create_network(config: &MapConfig, logger: InfoLogger) -> SomResult<Network> {
    let map_type = config.map_type.as_deref().map_or(Ok(MapType::Customizable), MapType::from_name)?;

    if map_type != MapType::Customizable && !config.strategies.is_empty() {
        return Err(SomError::Configuration(format!("{map_type} does not allow to override strategies")));
    }

    let environment = match config.seed {
        Some(seed) => Environment::new_repeatable(seed, logger),
        None => Environment::new(Arc::new(DefaultRandom::default()), logger),
    };

    let network_config = NetworkConfig {
        dimension: Dimension::new(config.grid.width, config.grid.height)?,
        input_length: config.input_length,
        expected_iterations: config.expected_iterations,
    };

    let network = Network::with_type(map_type, network_config, &environment)?;
    configure_network(network, config)
}

fn configure_network(mut network: Network, config: &MapConfig) -> SomResult<Network> {
    let strategies = &config.strategies;

    if let Some(definition) = &strategies.distance_metric {
        network.set_distance_metric(create_distance_metric(&definition.name, &definition.parameters)?)?;
    }

    if let Some(definition) = &strategies.learning_rate {
        network.set_learning_rate(definition.to_learning_rate()?)?;
    }

    if let Some(definition) = &strategies.neighborhood_width {
        network.set_neighborhood_width(definition.create(config.expected_iterations)?)?;
    }

    if let Some(definition) = &strategies.neighborhood_membership {
        network.set_neighborhood_membership(create_neighborhood_membership(&definition.name, &definition.parameters)?)?;
    }

    if let Some(definition) = &strategies.grid_topology {
        network.set_grid_topology(create_grid_topology(&definition.name, &definition.parameters)?)?;
    }

    if config.neighborhood_scaling {
        network.set_neighborhood_scaling(true)?;
    }

    Ok(network)
}
