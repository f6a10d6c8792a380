//! Pure conversion functions: TOML config structs -> climxr data model.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use ndarray::{ArrayD, IxDyn};

use climxr_field::{Axis, Domain, Field, Grid, State, Value};

use crate::config::*;

/// Builds an [`Axis`] from its TOML description.
pub fn build_axis(ax: &AxisToml) -> Result<Axis> {
    let axis = Axis::new(ax.name.as_str(), ax.points.clone(), ax.bounds.clone())
        .with_context(|| format!("invalid axis '{}'", ax.name))?;
    Ok(match &ax.units {
        Some(units) => axis.with_units(units.as_str()),
        None => axis,
    })
}

/// Builds a [`Domain`] from its TOML description.
///
/// `grid_order` defaults to the order of the axes; `storage_order` defaults
/// to `grid_order`.
pub fn build_domain(dom: &DomainToml) -> Result<Domain> {
    let axes = dom.axes.iter().map(build_axis).collect::<Result<Vec<_>>>()?;

    let grid_order = dom
        .grid_order
        .clone()
        .unwrap_or_else(|| axes.iter().map(|a| a.name().to_string()).collect());
    let storage_order = dom.storage_order.as_ref().unwrap_or(&grid_order);
    if storage_order.len() != grid_order.len() {
        bail!(
            "domain '{}': storage_order has {} axes, grid_order has {}",
            dom.name,
            storage_order.len(),
            grid_order.len()
        );
    }

    let axis_index: IndexMap<String, usize> = storage_order
        .iter()
        .enumerate()
        .map(|(pos, name)| (name.clone(), pos))
        .collect();
    let grid = Grid::new(grid_order, axis_index)
        .with_context(|| format!("invalid grid for domain '{}'", dom.name))?;

    let domain = Domain::new(grid, axes).with_context(|| format!("invalid domain '{}'", dom.name))?;
    Ok(domain.with_name(dom.name.as_str()))
}

/// Builds one state [`Value`] from its TOML description.
pub fn build_entry(entry: &EntryToml, domains: &IndexMap<String, Arc<Domain>>) -> Result<Value> {
    let name = &entry.name;

    if let Some(domain_name) = &entry.domain {
        let domain = domains
            .get(domain_name)
            .with_context(|| format!("entry '{name}' refers to unknown domain '{domain_name}'"))?;
        let (Some(shape), Some(data)) = (&entry.shape, &entry.data) else {
            bail!("field entry '{name}' needs both shape and data");
        };
        let data = ArrayD::from_shape_vec(IxDyn(shape), data.clone())
            .with_context(|| format!("entry '{name}': data does not fit shape {shape:?}"))?;

        let field = match &entry.interfaces {
            Some(flags) => Field::with_interfaces(data, Arc::clone(domain), flags.clone()),
            None => Field::new(data, Arc::clone(domain)),
        }
        .with_context(|| format!("invalid field '{name}'"))?;
        return Ok(Value::Field(field));
    }

    match (&entry.value, &entry.data) {
        (Some(value), None) => Ok(match value {
            ScalarToml::Int(v) => Value::Int(*v),
            ScalarToml::Float(v) => Value::Float(*v),
            ScalarToml::Bool(v) => Value::Bool(*v),
            ScalarToml::Str(v) => Value::Str(v.clone()),
        }),
        (None, Some(data)) => {
            let shape = entry.shape.clone().unwrap_or_else(|| vec![data.len()]);
            let array = ArrayD::from_shape_vec(IxDyn(&shape), data.clone())
                .with_context(|| format!("entry '{name}': data does not fit shape {shape:?}"))?;
            Ok(Value::Array(array))
        }
        (Some(_), Some(_)) => bail!("entry '{name}' has both value and data"),
        (None, None) => bail!("entry '{name}' has neither domain, value nor data"),
    }
}

/// Builds the full [`State`] described by a state file, preserving entry order.
pub fn build_state(cfg: &StateToml) -> Result<State> {
    let mut domains = IndexMap::new();
    for dom in &cfg.domains {
        if domains.contains_key(&dom.name) {
            bail!("duplicate domain '{}'", dom.name);
        }
        domains.insert(dom.name.clone(), Arc::new(build_domain(dom)?));
    }

    let mut state = State::new();
    for entry in &cfg.entries {
        if state.contains_key(&entry.name) {
            bail!("duplicate entry '{}'", entry.name);
        }
        state.insert(entry.name.clone(), build_entry(entry, &domains)?);
    }
    Ok(state)
}
