//! This crate persists [`kohonen`] maps in a line oriented text format and creates new maps
//! from json configuration.
//!
//! Strategies are resolved by name through a static [`registry`]: a map written with
//! [`SomMapWriter`] can be read back with [`SomMapReader`] and continues training exactly
//! where it stopped.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod common;
pub mod config;
pub mod registry;

mod text;
pub use self::text::*;

#[cfg(test)]
#[path = "../tests/integration/round_trip_test.rs"]
mod round_trip_test;
