use kohonen::utils::{SomError, SomResult};
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads next line into the buffer, returns amount of bytes read: zero means end of input.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> SomResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(SomError::from)
}

/// Normalizes a key: whitespace is removed and case is ignored.
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

/// Splits `"<key>: <value>"` line into normalized key and trimmed value.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    line.split_once(':').map(|(key, value)| (normalize_key(key), value.trim()))
}

pub(crate) fn parse_usize(value: &str, what: &str) -> SomResult<usize> {
    let value = value.trim();
    value.parse::<usize>().map_err(|err| SomError::Parse(format!("cannot parse {what} '{value}': {err}")))
}

/// Parses `"<iteration> of <expected>"` or a bare `"<iteration>"`.
pub(crate) fn parse_schedule(value: &str) -> SomResult<(usize, Option<usize>)> {
    let lowercase = value.to_lowercase();
    let parts = lowercase.split(" of ").map(str::trim).collect::<Vec<_>>();

    match parts.as_slice() {
        [iteration] => Ok((parse_usize(iteration, "iteration")?, None)),
        [iteration, expected] => {
            Ok((parse_usize(iteration, "iteration")?, Some(parse_usize(expected, "expected iterations")?)))
        }
        _ => Err(SomError::Configuration(format!("invalid iteration schedule: '{}'", value.trim()))),
    }
}
