//! This crate exposes a trainable self organizing map (SOM, also known as a Kohonen map) together
//! with families of pluggable strategies which parametrize its training rule:
//!
//! - **distance metrics**: how close an input is to a neuron's weight vector
//! - **learning rate functions**: how strongly neurons adapt at a given iteration
//! - **neighborhood width functions**: how far on the grid the adaptation spreads
//! - **neighborhood membership functions**: how adaptation strength fades with grid distance
//! - **grid topologies**: how neurons are laid out and how far apart they are
//!
//! Persistence and json configuration live in the `kohonen-format` crate.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
