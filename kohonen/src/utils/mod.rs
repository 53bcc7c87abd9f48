//! This module contains helper functionality.

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod random;
pub use self::random::*;

mod types;
pub use self::types::*;
