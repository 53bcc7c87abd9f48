//! This module reimports a common used types.

pub use crate::algorithms::som::Dimension;
pub use crate::algorithms::som::DistanceMetric;
pub use crate::algorithms::som::GridTopology;
pub use crate::algorithms::som::LearningRateFunction;
pub use crate::algorithms::som::MapType;
pub use crate::algorithms::som::NeighborhoodMembershipFunction;
pub use crate::algorithms::som::NeighborhoodWidthFunction;
pub use crate::algorithms::som::Network;
pub use crate::algorithms::som::NetworkConfig;
pub use crate::algorithms::som::NetworkState;
pub use crate::algorithms::som::Strategies;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{SomError, SomResult};
