use crate::CommandError;
use ctrlmap_config::Environment;
use ctrlmap_controls::{
    Resolve,
    bindings::{BindingRow, compare, load_bindings},
};
use itertools::Itertools;

pub fn controls_bindings<R: Resolve>(
    resolver: &R,
    romname: &str,
    environment: &Environment,
) -> Result<(), CommandError> {
    let descriptor = resolver
        .resolve(romname)
        .into_descriptor()
        .ok_or_else(|| format!("No controls known for {romname}"))?;

    let bindings = load_bindings(environment.bindings_path(&descriptor.romname));
    let rows = compare(&descriptor, &bindings, environment.convention);

    println!("{}", descriptor.display_name);
    println!("{}", format_rows(&rows));

    Ok(())
}

fn format_rows(rows: &[BindingRow]) -> String {
    let control_width = rows
        .iter()
        .map(|row| row.control.chars().count())
        .max()
        .unwrap_or_default();

    let action_width = rows
        .iter()
        .map(|row| row.action.chars().count())
        .max()
        .unwrap_or_default();

    rows.iter()
        .map(|row| {
            format!(
                "{:<control_width$}  {:<action_width$}  {}",
                row.control,
                row.action,
                row.bound.as_deref().unwrap_or("default")
            )
            .trim_end()
            .to_string()
        })
        .join("\n")
}
