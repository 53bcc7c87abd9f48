#[cfg(test)]
#[path = "../../tests/unit/common/definition_test.rs"]
mod definition_test;

use super::parse_usize;
use crate::registry::*;
use kohonen::algorithms::som::*;
use kohonen::utils::{SomError, SomResult};
use serde::{Deserialize, Serialize};

/// A named strategy with its parameter string, e.g. `HyperbolicLearningRateFunction` with `0.8 0.1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDefinition {
    /// A strategy name as returned by its `name()`.
    pub name: String,
    /// Whitespace separated parameters.
    #[serde(default)]
    pub parameters: String,
    /// Iterations a schedule is scaled to. Defaults to the map's expected iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_iterations: Option<usize>,
}

impl StrategyDefinition {
    /// Creates a new instance of `StrategyDefinition`.
    pub fn new(name: &str, parameters: &str) -> Self {
        Self { name: name.trim().to_string(), parameters: parameters.trim().to_string(), expected_iterations: None }
    }

    /// Sets iterations the schedule is scaled to.
    pub fn with_expected_iterations(mut self, expected_iterations: Option<usize>) -> Self {
        self.expected_iterations = expected_iterations;
        self
    }

    /// Splits `"<name> <parameters>"` or `"<name> <parameters> of <expected>"` into a definition.
    pub fn parse(value: &str) -> SomResult<Self> {
        let value = value.trim();

        let (value, expected_iterations) = match value.to_ascii_lowercase().rfind(" of ") {
            Some(idx) => (value[..idx].trim(), Some(parse_usize(&value[idx + 4..], "expected iterations")?)),
            None => (value, None),
        };

        let (name, parameters) = value.split_once(char::is_whitespace).unwrap_or((value, ""));

        if name.is_empty() {
            return Err(SomError::Configuration("strategy name is missing".to_string()));
        }

        Ok(Self::new(name, parameters).with_expected_iterations(expected_iterations))
    }

    /// Creates a learning rate function scaled to its own expected iterations, if they are defined.
    pub fn to_learning_rate(&self) -> SomResult<Box<dyn LearningRateFunction>> {
        let mut learning_rate = create_learning_rate(&self.name, &self.parameters)?;

        if let Some(expected_iterations) = self.expected_iterations {
            learning_rate.set_expected_iterations(expected_iterations);
        }

        Ok(learning_rate)
    }
}

/// A neighborhood width definition: either a single function or a compound of stages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WidthDefinition {
    /// A series of width functions switched at threshold iterations.
    Compound {
        /// Stages ordered by strictly increasing start iteration, the first one starts at zero.
        stages: Vec<StageDefinition>,
    },
    /// A single width function.
    Simple(StrategyDefinition),
}

/// A stage of a compound neighborhood width.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDefinition {
    /// An iteration the stage becomes active at.
    pub start_at: usize,
    /// Iterations the stage's function is scaled to. Defaults to the enclosing schedule's value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_iterations: Option<usize>,
    /// A stage's width function.
    pub width: WidthDefinition,
}

impl WidthDefinition {
    /// Creates a width function scaled to its own expected iterations or to the given ones.
    pub fn create(&self, expected_iterations: usize) -> SomResult<Box<dyn NeighborhoodWidthFunction>> {
        let mut width = match self {
            Self::Simple(definition) => create_neighborhood_width(&definition.name, &definition.parameters)?,
            Self::Compound { stages } => {
                let (first, rest) = stages
                    .split_first()
                    .ok_or_else(|| SomError::Configuration("compound neighborhood has no stages".to_string()))?;

                if first.start_at != 0 {
                    return Err(SomError::Configuration(format!(
                        "first compound neighborhood stage must start at zero, got {}",
                        first.start_at
                    )));
                }

                let mut compound = CompoundNeighborhoodWidth::new(first.create(expected_iterations)?);
                rest.iter().try_for_each(|stage| {
                    compound.add_neighborhood(stage.start_at, stage.create(expected_iterations)?)
                })?;

                Box::new(compound)
            }
        };

        width.set_expected_iterations(match self {
            Self::Simple(definition) => definition.expected_iterations.unwrap_or(expected_iterations),
            Self::Compound { .. } => expected_iterations,
        });

        Ok(width)
    }

    /// Describes an existing width function.
    pub fn describe(width: &dyn NeighborhoodWidthFunction) -> Self {
        let stages = width.stages();

        if stages.is_empty() {
            Self::Simple(
                StrategyDefinition::new(width.name(), &width.parameters())
                    .with_expected_iterations(width.expected_iterations()),
            )
        } else {
            Self::Compound {
                stages: stages
                    .into_iter()
                    .map(|(start_at, stage)| StageDefinition {
                        start_at,
                        expected_iterations: stage.expected_iterations(),
                        width: Self::describe(stage),
                    })
                    .collect(),
            }
        }
    }
}

impl StageDefinition {
    fn create(&self, expected_iterations: usize) -> SomResult<Box<dyn NeighborhoodWidthFunction>> {
        self.width.create(self.expected_iterations.unwrap_or(expected_iterations))
    }
}

/// Optional strategy overrides for a map. Missing ones keep map type defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDefinitions {
    /// A distance metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_metric: Option<StrategyDefinition>,
    /// A learning rate function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<StrategyDefinition>,
    /// A neighborhood width function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood_width: Option<WidthDefinition>,
    /// A neighborhood membership function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood_membership: Option<StrategyDefinition>,
    /// A grid topology.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_topology: Option<StrategyDefinition>,
}

impl StrategyDefinitions {
    /// Returns true if no strategy is defined.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Resolves definitions through the registry, filling gaps with the given defaults.
    pub fn create_strategies(&self, defaults: Strategies, expected_iterations: usize) -> SomResult<Strategies> {
        Ok(Strategies {
            distance_metric: match &self.distance_metric {
                Some(definition) => create_distance_metric(&definition.name, &definition.parameters)?,
                None => defaults.distance_metric,
            },
            learning_rate: match &self.learning_rate {
                Some(definition) => definition.to_learning_rate()?,
                None => defaults.learning_rate,
            },
            neighborhood_width: match &self.neighborhood_width {
                Some(definition) => definition.create(expected_iterations)?,
                None => defaults.neighborhood_width,
            },
            neighborhood_membership: match &self.neighborhood_membership {
                Some(definition) => create_neighborhood_membership(&definition.name, &definition.parameters)?,
                None => defaults.neighborhood_membership,
            },
            grid_topology: match &self.grid_topology {
                Some(definition) => create_grid_topology(&definition.name, &definition.parameters)?,
                None => defaults.grid_topology,
            },
        })
    }
}
