//! Convert command: state file -> labeled JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use climxr_convert::{Labeled, to_labeled};
use climxr_field::Value;

use crate::cli::ConvertArgs;
use crate::{config, convert};

/// Run the conversion and write JSON to the output path or stdout.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let cfg = config::load(&args.input)?;
    let state = convert::build_state(&cfg)?;
    info!(n_entries = state.len(), "state loaded");

    let input = match &args.entry {
        Some(name) => state.get(name).cloned().with_context(|| {
            format!("no entry named '{name}' in {}", args.input.display())
        })?,
        None => Value::State(state),
    };

    let labeled = to_labeled(&input).context("conversion failed")?;
    let json = render(&labeled, args.compact)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "JSON written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Serializes a conversion result to JSON.
pub fn render(labeled: &Labeled, compact: bool) -> Result<String> {
    let value = match labeled {
        Labeled::Array(array) => serde_json::to_value(array),
        Labeled::Dataset(dataset) => serde_json::to_value(dataset),
    }
    .context("failed to serialize labeled output")?;

    let json = if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }?;
    Ok(json)
}
