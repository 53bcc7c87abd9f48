//! This module contains implementations of specific algorithms.

pub mod som;
