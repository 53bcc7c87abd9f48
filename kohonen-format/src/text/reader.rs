#[cfg(test)]
#[path = "../../tests/unit/text/reader_test.rs"]
mod reader_test;

use crate::common::*;
use kohonen::algorithms::som::*;
use kohonen::utils::{Float, InfoLogger, SomError, SomResult, parse_parameters};
use std::io::{BufReader, Read};

/// A trait to read a map persisted in the text format.
pub trait SomMapReader {
    /// Reads a map. The logger is used to report further training progress.
    fn read_som(self, logger: InfoLogger) -> SomResult<Network>;
}

impl<R: Read> SomMapReader for BufReader<R> {
    fn read_som(self, logger: InfoLogger) -> SomResult<Network> {
        SomReader::new(self).read_network(logger)
    }
}

impl SomMapReader for String {
    fn read_som(self, logger: InfoLogger) -> SomResult<Network> {
        SomReader::new(BufReader::new(self.as_bytes())).read_network(logger)
    }
}

/// Map properties collected before the weights section.
struct MapHeader {
    map_type: MapType,
    dimension: Option<Dimension>,
    input_length: Option<usize>,
    time: usize,
    expected_iterations: usize,
    definitions: StrategyDefinitions,
    neighborhood_scaling: bool,
}

struct SomReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> SomReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, line_number: 0 }
    }

    fn read_network(&mut self, logger: InfoLogger) -> SomResult<Network> {
        let map_type = self.read_map_type()?;
        let header = self.read_header(map_type)?;

        let dimension = header
            .dimension
            .ok_or_else(|| SomError::Configuration("'Grid dimensions' must be defined before weights".to_string()))?;
        let input_length = header
            .input_length
            .ok_or_else(|| SomError::Configuration("'Input length' must be defined before weights".to_string()))?;

        let weights = self.read_weights(dimension.area(), input_length)?;

        let defaults = Strategies::for_type(header.map_type, dimension);
        // NOTE basic maps have fixed strategies: definitions are ignored
        let strategies = match header.map_type {
            MapType::Customizable => header.definitions.create_strategies(defaults, header.expected_iterations)?,
            MapType::BasicSquareGrid | MapType::BasicHexGrid | MapType::BasicPlanar => defaults,
        };

        Network::restore(
            header.map_type,
            NetworkConfig { dimension, input_length, expected_iterations: header.expected_iterations },
            strategies,
            NetworkState { time: header.time, weights, neighborhood_scaling: header.neighborhood_scaling },
            logger,
        )
    }

    fn read_map_type(&mut self) -> SomResult<MapType> {
        let line = self
            .next_line()?
            .ok_or_else(|| SomError::Configuration("empty input: 'Map type' is expected".to_string()))?;

        match split_key_value(&line) {
            Some((key, value)) if key == "maptype" => MapType::from_name(value),
            _ => Err(SomError::Configuration(format!("expecting 'Map type' on the first line, got: '{line}'"))),
        }
    }

    fn read_header(&mut self, map_type: MapType) -> SomResult<MapHeader> {
        let mut header = MapHeader {
            map_type,
            dimension: None,
            input_length: None,
            time: 0,
            expected_iterations: 0,
            definitions: StrategyDefinitions::default(),
            neighborhood_scaling: false,
        };

        loop {
            let line = self.next_line()?.ok_or_else(|| {
                SomError::Configuration("unexpected end of input: 'Weights:' section is missing".to_string())
            })?;

            let Some((key, value)) = split_key_value(&line) else {
                continue;
            };

            let definitions = &mut header.definitions;
            match key.as_str() {
                "griddimensions" => header.dimension = Some(self.at_line(parse_dimension(value))?),
                "inputlength" => header.input_length = Some(self.at_line(parse_usize(value, "input length"))?),
                "iterations" => {
                    let (time, expected_iterations) = match self.at_line(parse_schedule(value))? {
                        (expected_iterations, None) => (0, expected_iterations),
                        (time, Some(expected_iterations)) => (time, expected_iterations),
                    };
                    header.time = time;
                    header.expected_iterations = expected_iterations;
                }
                "distancemetric" => definitions.distance_metric = Some(self.at_line(StrategyDefinition::parse(value))?),
                "learningratefunction" => {
                    definitions.learning_rate = Some(self.at_line(StrategyDefinition::parse(value))?)
                }
                "neighborhoodwidthfunction" => definitions.neighborhood_width = Some(self.read_width(value)?),
                "neighborhoodmembershipfunction" => {
                    definitions.neighborhood_membership = Some(self.at_line(StrategyDefinition::parse(value))?)
                }
                "neighborhoodscaling" => header.neighborhood_scaling = self.at_line(parse_bool(value))?,
                "gridtype" => definitions.grid_topology = Some(self.at_line(StrategyDefinition::parse(value))?),
                "weights" => break,
                _ => {}
            }
        }

        Ok(header)
    }

    fn read_width(&mut self, value: &str) -> SomResult<WidthDefinition> {
        let definition = self.at_line(StrategyDefinition::parse(value))?;

        if !definition.name.eq_ignore_ascii_case("CompoundNeighborhood") {
            return Ok(WidthDefinition::Simple(definition));
        }

        if !definition.parameters.eq_ignore_ascii_case("begin") {
            return Err(self.at_line_error(SomError::Configuration(format!(
                "expecting 'CompoundNeighborhood begin', got: '{}'",
                value.trim()
            ))));
        }

        let mut stages = Vec::new();
        loop {
            let line = self.next_line()?.ok_or_else(|| {
                SomError::Configuration("unexpected end of input: compound neighborhood 'end' is missing".to_string())
            })?;

            if line.eq_ignore_ascii_case("end") {
                break;
            }

            let (schedule, value) = line.split_once(':').ok_or_else(|| {
                self.at_line_error(SomError::Configuration(format!("invalid compound neighborhood stage: '{line}'")))
            })?;
            let (start_at, expected_iterations) = self.at_line(parse_schedule(schedule))?;

            stages.push(StageDefinition { start_at, expected_iterations, width: self.read_width(value)? });
        }

        Ok(WidthDefinition::Compound { stages })
    }

    fn read_weights(&mut self, neuron_count: usize, input_length: usize) -> SomResult<Vec<Vec<Float>>> {
        let mut weights = Vec::new();

        loop {
            let line = self.next_line()?.ok_or_else(|| {
                SomError::Configuration("unexpected end of input: 'end weights' is missing".to_string())
            })?;

            if normalize_key(&line) == "endweights" {
                break;
            }

            if weights.len() == neuron_count {
                return Err(self.at_line_error(SomError::Configuration(format!(
                    "too many weight rows, expected {neuron_count}"
                ))));
            }

            weights.push(self.at_line(parse_parameters(&line, input_length))?);
        }

        if weights.len() != neuron_count {
            return Err(SomError::Configuration(format!(
                "expected {neuron_count} weight rows, got {}",
                weights.len()
            )));
        }

        Ok(weights)
    }

    /// Returns next non empty trimmed line or `None` at the end of input.
    fn next_line(&mut self) -> SomResult<Option<String>> {
        loop {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Ok(None);
            }

            self.line_number += 1;

            let line = self.buffer.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn at_line<T>(&self, result: SomResult<T>) -> SomResult<T> {
        result.map_err(|err| self.at_line_error(err))
    }

    fn at_line_error(&self, err: SomError) -> SomError {
        match err {
            SomError::Configuration(msg) => SomError::Configuration(format!("line {}: {msg}", self.line_number)),
            SomError::Parse(msg) => SomError::Parse(format!("line {}: {msg}", self.line_number)),
            other => other,
        }
    }
}

fn parse_dimension(value: &str) -> SomResult<Dimension> {
    let sides =
        value.split(|c: char| c == ',' || c.is_whitespace()).filter(|side| !side.is_empty()).collect::<Vec<_>>();

    match sides.as_slice() {
        [width, height] => Dimension::new(parse_usize(width, "grid width")?, parse_usize(height, "grid height")?),
        _ => Err(SomError::Configuration(format!("expecting grid dimensions as 'width, height', got: '{value}'"))),
    }
}

fn parse_bool(value: &str) -> SomResult<bool> {
    value.to_lowercase().parse::<bool>().map_err(|err| SomError::Parse(format!("cannot parse flag '{value}': {err}")))
}
