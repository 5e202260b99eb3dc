//! Build summary rendering.

use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use gamefeat_model::schema;
use gamefeat_transform::normalize::feature_name;

use crate::pipeline::Artifacts;

pub fn print_build_summary(artifacts: &Artifacts) {
    println!("Catalog entries: {}", artifacts.catalog.len());
    println!(
        "Feature table: {} rows x {} columns",
        artifacts.features.len(),
        artifacts.features.columns().len()
    );

    let present: BTreeSet<&str> = artifacts
        .features
        .columns()
        .iter()
        .map(String::as_str)
        .collect();

    let numeric: Vec<&str> = schema::NUMERIC_BOOL_COLUMNS
        .iter()
        .copied()
        .filter(|column| !schema::is_platform_flag(column))
        .collect();

    let mut table = Table::new();
    table.set_header(vec!["Group", "Declared", "Present"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(group_row("numeric", &numeric, &present));
    table.add_row(group_row(
        "platform flags",
        &schema::PLATFORM_FLAG_COLUMNS,
        &present,
    ));
    table.add_row(engineered_row(&present));
    table.add_row(group_row(
        "categorical",
        &schema::CATEGORICAL_COLUMNS,
        &present,
    ));
    println!("{table}");
}

fn group_row(label: &str, declared: &[&str], present: &BTreeSet<&str>) -> Vec<String> {
    let count = declared
        .iter()
        .filter(|column| present.contains(feature_name(column).as_str()))
        .count();
    vec![
        label.to_string(),
        declared.len().to_string(),
        count.to_string(),
    ]
}

fn engineered_row(present: &BTreeSet<&str>) -> Vec<String> {
    let count = schema::ENGINEERED_COLUMNS
        .iter()
        .filter(|column| present.contains(**column))
        .count();
    vec![
        "engineered".to_string(),
        schema::ENGINEERED_COLUMNS.len().to_string(),
        count.to_string(),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
