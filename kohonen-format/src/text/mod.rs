//! A line oriented text format to persist trained maps.
//!
//! ```text
//! Map type: CustomizableSOM
//! Grid dimensions: 3, 3
//! Input length: 2
//! Iterations: 10 of 100
//! Distance metric: EuclideanDistanceMetric
//! Learning rate function: HyperbolicLearningRateFunction 0.8 0.1
//! Neighborhood width function: CompoundNeighborhood begin
//!     0 of 500: LinearDecayNeighborhoodWidthFunction 2
//!     500 of 500: ConstantNeighborhoodWidthFunction 1
//! end
//! Neighborhood membership function: LinearNeighborhoodMembershipFunction
//! Neighborhood scaling: false
//! Grid type: SquareGrid
//! Weights:
//!     0.5, 0.25
//!     ...
//! end weights
//! ```
//!
//! Keys are case insensitive and whitespace inside them is ignored. Basic map types persist
//! only the header, dimensions, input length, iterations and weights.
//!
//! A learning rate or simple width scaled to its own iteration count carries an
//! ` of <expected>` suffix, e.g. `HyperbolicLearningRateFunction 0.8 0.1 of 10`.

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
