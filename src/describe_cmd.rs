//! Describe command: human-readable summary of a converted state.

use anyhow::{Context, Result};
use tracing::info_span;

use climxr_convert::{StateConversion, state_to_dataset};
use climxr_labeled::Coordinate;

use crate::cli::DescribeArgs;
use crate::{config, convert};

/// Run the conversion and print its summary to stdout.
pub fn run(args: DescribeArgs) -> Result<()> {
    let _cmd = info_span!("describe").entered();

    let cfg = config::load(&args.input)?;
    let state = convert::build_state(&cfg)?;
    let conversion = state_to_dataset(&state).context("conversion failed")?;

    print!("{}", summarize(&conversion));
    Ok(())
}

fn coord_line(name: &str, coord: &Coordinate) -> String {
    match coord.units() {
        Some(units) => format!("  {name} ({}) [{units}]", coord.dim()),
        None => format!("  {name} ({})", coord.dim()),
    }
}

/// Formats dimensions, coordinates, variables and excluded keys.
pub fn summarize(conversion: &StateConversion) -> String {
    let ds = conversion.dataset();

    let dims: Vec<String> = ds
        .dims()
        .iter()
        .map(|(name, size)| format!("{name}: {size}"))
        .collect();

    let mut lines = vec![format!("Dimensions: ({})", dims.join(", "))];
    lines.push("Coordinates:".to_string());
    lines.extend(ds.coords().iter().map(|(name, coord)| coord_line(name, coord)));
    lines.push("Data variables:".to_string());
    lines.extend(
        ds.data_vars()
            .iter()
            .map(|(name, var)| format!("  {name} ({})", var.dims().join(", "))),
    );
    if !conversion.excluded().is_empty() {
        lines.push(format!("Excluded: {}", conversion.excluded().join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateToml;

    const STATE: &str = r#"
[[domains]]
name = "sfc"

[[domains.axes]]
name = "lat"
points = [-45.0, 45.0]
bounds = [-90.0, 0.0, 90.0]
units = "degrees_north"

[[entries]]
name = "Ts"
domain = "sfc"
shape = [2]
data = [288.0, 280.0]

[[entries]]
name = "timestep"
value = 3600
"#;

    #[test]
    fn summary_lists_everything() {
        let cfg: StateToml = toml::from_str(STATE).unwrap();
        let state = convert::build_state(&cfg).unwrap();
        let text = summarize(&state_to_dataset(&state).unwrap());

        assert!(text.contains("Dimensions: (lat: 2, lat_bounds: 3)"), "{text}");
        assert!(text.contains("  lat (lat) [degrees_north]"), "{text}");
        assert!(text.contains("  lat_bounds (lat_bounds) [degrees_north]"), "{text}");
        assert!(text.contains("  Ts (lat)"), "{text}");
        assert!(text.contains("Excluded: timestep"), "{text}");
    }
}
