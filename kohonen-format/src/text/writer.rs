#[cfg(test)]
#[path = "../../tests/unit/text/writer_test.rs"]
mod writer_test;

use crate::common::WidthDefinition;
use kohonen::algorithms::som::{MapType, Network};
use kohonen::utils::{Float, SomResult};
use std::io::{BufWriter, Error, Write};

/// A trait to write a map in the text format.
pub trait SomMapWriter<W: Write> {
    /// Writes a map: weights are formatted to be read back exactly.
    fn write_som(&self, writer: BufWriter<W>) -> SomResult<()>;
}

impl<W: Write> SomMapWriter<W> for Network {
    fn write_som(&self, writer: BufWriter<W>) -> SomResult<()> {
        write_network(writer, self)?;

        Ok(())
    }
}

fn write_network<W: Write>(mut writer: BufWriter<W>, network: &Network) -> Result<(), Error> {
    let dimension = network.dimension();

    writeln!(writer, "Map type: {}", network.map_type())?;
    writeln!(writer, "Grid dimensions: {}, {}", dimension.width(), dimension.height())?;
    writeln!(writer, "Input length: {}", network.input_length())?;
    writeln!(writer, "Iterations: {} of {}", network.time(), network.expected_iterations())?;

    if network.map_type() == MapType::Customizable {
        write_strategies(&mut writer, network)?;
    }

    writeln!(writer, "Weights:")?;
    network.weights().iter().try_for_each(|weights| writeln!(writer, "\t{}", format_weights(weights)))?;
    writeln!(writer, "end weights")?;

    writer.flush()
}

fn write_strategies<W: Write>(writer: &mut BufWriter<W>, network: &Network) -> Result<(), Error> {
    let distance_metric = network.distance_metric();
    let learning_rate = network.learning_rate();
    let width = network.neighborhood_width();
    let membership = network.neighborhood_membership();
    // NOTE a schedule keeps its own expected iterations when it was scaled before it was set
    let own_schedule = |expected_iterations: Option<usize>| {
        expected_iterations.filter(|&expected_iterations| expected_iterations != network.expected_iterations())
    };

    writeln!(writer, "Distance metric: {}", distance_metric.name())?;
    writeln!(
        writer,
        "Learning rate function: {}",
        format_strategy(
            learning_rate.name(),
            &learning_rate.parameters(),
            own_schedule(learning_rate.expected_iterations())
        )
    )?;

    write!(writer, "Neighborhood width function: ")?;
    write_width(writer, &WidthDefinition::describe(width), own_schedule(width.expected_iterations()), 0)?;

    writeln!(
        writer,
        "Neighborhood membership function: {}",
        format_strategy(membership.name(), &membership.parameters(), None)
    )?;
    writeln!(writer, "Neighborhood scaling: {}", network.is_neighborhood_scaling())?;
    writeln!(writer, "Grid type: {}", network.grid_topology().name())
}

fn write_width<W: Write>(
    writer: &mut BufWriter<W>,
    definition: &WidthDefinition,
    expected_iterations: Option<usize>,
    depth: usize,
) -> Result<(), Error> {
    match definition {
        WidthDefinition::Simple(definition) => {
            writeln!(writer, "{}", format_strategy(&definition.name, &definition.parameters, expected_iterations))
        }
        WidthDefinition::Compound { stages } => {
            writeln!(writer, "CompoundNeighborhood begin")?;

            let indent = "\t".repeat(depth + 1);
            stages.iter().try_for_each(|stage| {
                match stage.expected_iterations {
                    Some(expected_iterations) => {
                        write!(writer, "{indent}{} of {expected_iterations}: ", stage.start_at)?
                    }
                    None => write!(writer, "{indent}{}: ", stage.start_at)?,
                }

                // NOTE stage's expected iterations are already written on the stage line
                write_width(writer, &stage.width, None, depth + 1)
            })?;

            writeln!(writer, "{}end", "\t".repeat(depth))
        }
    }
}

fn format_strategy(name: &str, parameters: &str, expected_iterations: Option<usize>) -> String {
    let strategy = if parameters.is_empty() { name.to_string() } else { format!("{name} {parameters}") };

    match expected_iterations {
        Some(expected_iterations) => format!("{strategy} of {expected_iterations}"),
        None => strategy,
    }
}

fn format_weights(weights: &[Float]) -> String {
    weights.iter().map(|weight| weight.to_string()).collect::<Vec<_>>().join(", ")
}
