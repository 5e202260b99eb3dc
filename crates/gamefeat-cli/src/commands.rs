use anyhow::Result;
use comfy_table::Table;

use gamefeat_model::{AppId, ColumnRole, schema};
use gamefeat_transform::normalize::feature_name;

use crate::cli::{BuildArgs, QueryArgs};
use crate::pipeline::build_artifacts;
use crate::summary::{apply_table_style, print_build_summary};

pub fn run_build(args: &BuildArgs) -> Result<()> {
    let artifacts = build_artifacts(&args.csv)?;
    print_build_summary(&artifacts);
    Ok(())
}

pub fn run_query(args: &QueryArgs) -> Result<()> {
    let artifacts = build_artifacts(&args.csv)?;
    let ids: Vec<AppId> = args.ids.iter().map(|id| AppId::new(id.as_str())).collect();
    let rows = artifacts.features.select(&ids);

    let skipped: Vec<&str> = ids
        .iter()
        .filter(|id| !artifacts.features.contains(id))
        .map(AppId::as_str)
        .collect();
    if !skipped.is_empty() {
        eprintln!(
            "skipped {} unknown id(s): {}",
            skipped.len(),
            skipped.join(", ")
        );
    }
    if rows.is_empty() {
        println!("no matching rows");
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["AppID".to_string()];
    if args.labels {
        header.push("Label".to_string());
    }
    header.extend(artifacts.features.columns().iter().cloned());
    table.set_header(header);
    apply_table_style(&mut table);
    for row in rows {
        let mut cells = vec![row.id.to_string()];
        if args.labels {
            let label = artifacts
                .catalog
                .get(&row.id)
                .map(|entry| entry.display_label(&row.id))
                .unwrap_or_default();
            cells.push(label);
        }
        for column in artifacts.features.columns() {
            cells.push(row.get(column).to_string());
        }
        table.add_row(cells);
    }
    println!("{table}");
    Ok(())
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source column", "Role", "Feature column"]);
    apply_table_style(&mut table);

    table.add_row(vec![
        schema::ID_COLUMN.to_string(),
        ColumnRole::Identifier.to_string(),
        "-".to_string(),
    ]);
    for column in schema::NUMERIC_BOOL_COLUMNS {
        let role = if schema::is_platform_flag(column) {
            ColumnRole::PlatformFlag
        } else {
            ColumnRole::Numeric
        };
        table.add_row(vec![
            column.to_string(),
            role.to_string(),
            feature_name(column),
        ]);
    }
    table.add_row(vec![
        schema::RELEASE_DATE_COLUMN.to_string(),
        ColumnRole::Engineered.to_string(),
        "release_year".to_string(),
    ]);
    table.add_row(vec![
        schema::OWNERS_COLUMN.to_string(),
        ColumnRole::Engineered.to_string(),
        "owners_low, owners_high, owners_mid".to_string(),
    ]);
    for column in schema::CATEGORICAL_COLUMNS {
        table.add_row(vec![
            column.to_string(),
            ColumnRole::Categorical.to_string(),
            feature_name(column),
        ]);
    }
    for column in schema::DISPLAY_COLUMNS {
        // Fields that only feed the catalog; the rest already appear above
        // under their feature role.
        if schema::role_of(column) == Some(ColumnRole::Display) {
            table.add_row(vec![
                column.to_string(),
                ColumnRole::Display.to_string(),
                "-".to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}
