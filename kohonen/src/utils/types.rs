#[cfg(test)]
#[path = "../../tests/unit/utils/types_test.rs"]
mod types_test;

use crate::utils::{SomError, SomResult};

/// Alias to a scalar floating type.
///
/// NOTE: weights, distances and schedule values are all kept in `f64`: the persistence format relies
/// on shortest round-trip formatting of this type to reproduce weights exactly.
pub type Float = f64;

/// Parses whitespace (or comma) separated floating point parameters, expecting exactly `count` of them.
pub fn parse_parameters(parameters: &str, count: usize) -> SomResult<Vec<Float>> {
    let values = parameters
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Float>().map_err(|err| SomError::Parse(format!("cannot parse '{token}': {err}"))))
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != count {
        return Err(SomError::Configuration(format!(
            "expected {count} parameter(s), got {}: '{}'",
            values.len(),
            parameters.trim()
        )));
    }

    Ok(values)
}

/// Formats parameters as a space separated string which can be parsed back by `parse_parameters`.
pub fn format_parameters(values: &[Float]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ")
}
