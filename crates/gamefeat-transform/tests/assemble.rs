//! Integration tests for feature table assembly.

use polars::prelude::{Column, DataFrame};

use gamefeat_model::{AppId, FeatureValue};
use gamefeat_transform::{TransformError, assemble_features, build_catalog};

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Column::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn games_df() -> DataFrame {
    test_df(vec![
        ("AppID", vec!["10", "20", "30"]),
        ("Name", vec!["Alpha", "Beta", "Gamma"]),
        ("Price", vec!["19.99", "0", "N/A"]),
        ("Recommendations", vec!["120", "", "3"]),
        ("Windows", vec!["True", "False", ""]),
        ("Release date", vec!["Oct 21, 2008", "2015", "unknown"]),
        (
            "Estimated owners",
            vec!["0 - 20000", "1,000,000 - 2,000,000", "N/A"],
        ),
        ("Genres", vec!["Action,Indie", "", "Casual"]),
        ("Tags", vec!["FPS, Classic", "Strategy", ""]),
    ])
}

#[test]
fn column_order_follows_declared_sequence() {
    let table = assemble_features(&games_df()).expect("assemble");
    assert_eq!(
        table.columns(),
        [
            "price",
            "recommendations",
            "windows",
            "release_year",
            "owners_low",
            "owners_high",
            "owners_mid",
            "genres",
            "tags",
        ]
    );
}

#[test]
fn assembly_is_idempotent() {
    let df = games_df();
    let first = assemble_features(&df).expect("assemble");
    let second = assemble_features(&df).expect("assemble again");
    assert_eq!(first, second);
}

#[test]
fn numeric_coercion_uses_missing_not_zero() {
    let table = assemble_features(&games_df()).expect("assemble");
    let row = table.get(&AppId::new("30")).expect("row 30");
    assert_eq!(row.get("price"), &FeatureValue::Missing);
    assert_eq!(row.get("recommendations"), &FeatureValue::Float(3.0));

    let row = table.get(&AppId::new("20")).expect("row 20");
    assert_eq!(row.get("recommendations"), &FeatureValue::Missing);
    assert_eq!(row.get("price"), &FeatureValue::Float(0.0));
}

#[test]
fn platform_flags_default_to_false() {
    let table = assemble_features(&games_df()).expect("assemble");
    assert_eq!(
        table.get(&AppId::new("10")).unwrap().get("windows"),
        &FeatureValue::Bool(true)
    );
    // A blank flag resolves to a concrete false, not the missing sentinel.
    assert_eq!(
        table.get(&AppId::new("30")).unwrap().get("windows"),
        &FeatureValue::Bool(false)
    );
}

#[test]
fn engineered_columns_derive_per_row() {
    let table = assemble_features(&games_df()).expect("assemble");

    let row = table.get(&AppId::new("10")).expect("row 10");
    assert_eq!(row.get("release_year"), &FeatureValue::Int(2008));
    assert_eq!(row.get("owners_low"), &FeatureValue::Int(0));
    assert_eq!(row.get("owners_high"), &FeatureValue::Int(20000));
    assert_eq!(row.get("owners_mid"), &FeatureValue::Int(10000));

    let row = table.get(&AppId::new("20")).expect("row 20");
    assert_eq!(row.get("release_year"), &FeatureValue::Int(2015));
    assert_eq!(row.get("owners_mid"), &FeatureValue::Int(1_500_000));

    let row = table.get(&AppId::new("30")).expect("row 30");
    assert_eq!(row.get("release_year"), &FeatureValue::Missing);
    assert_eq!(row.get("owners_low"), &FeatureValue::Missing);
}

#[test]
fn categorical_columns_parse_row_wise() {
    let table = assemble_features(&games_df()).expect("assemble");

    let row = table.get(&AppId::new("10")).expect("row 10");
    assert_eq!(
        row.get("genres"),
        &FeatureValue::List(vec!["Action".to_string(), "Indie".to_string()])
    );
    assert_eq!(
        row.get("tags"),
        &FeatureValue::List(vec!["FPS".to_string(), "Classic".to_string()])
    );

    // Blank string cells ingest as nulls upstream; here the raw frame holds
    // an empty string, which the list parser turns into an empty list.
    let row = table.get(&AppId::new("20")).expect("row 20");
    assert_eq!(row.get("genres"), &FeatureValue::List(Vec::new()));
}

#[test]
fn absent_declared_columns_are_omitted() {
    let df = test_df(vec![
        ("AppID", vec!["1"]),
        ("Price", vec!["4.99"]),
        ("Website", vec!["https://example.com"]),
    ]);
    let table = assemble_features(&df).expect("assemble");
    assert_eq!(table.columns(), ["price"]);
}

#[test]
fn zero_applicable_parts_yield_empty_table() {
    let df = test_df(vec![
        ("AppID", vec!["1", "2"]),
        ("Website", vec!["a", "b"]),
    ]);
    let table = assemble_features(&df).expect("assemble");
    assert!(table.is_empty());
    assert!(table.columns().is_empty());
}

#[test]
fn duplicate_identifiers_keep_the_last_row() {
    let df = test_df(vec![
        ("AppID", vec!["1", "1"]),
        ("Price", vec!["5.00", "7.50"]),
    ]);
    let table = assemble_features(&df).expect("assemble");
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get(&AppId::new("1")).unwrap().get("price"),
        &FeatureValue::Float(7.5)
    );
}

#[test]
fn key_space_matches_the_catalog() {
    let df = games_df();
    let catalog = build_catalog(&df).expect("catalog");
    let table = assemble_features(&df).expect("assemble");

    let catalog_ids: Vec<&AppId> = catalog.ids().collect();
    let table_ids: Vec<&AppId> = table.ids().collect();
    assert_eq!(catalog_ids, table_ids);
}

#[test]
fn typed_identifier_columns_key_identically() {
    let df = DataFrame::new(vec![
        Column::new("AppID".into(), vec![10i64, 20]),
        Column::new("Price".into(), vec![1.5f64, 2.5]),
    ])
    .unwrap();
    let table = assemble_features(&df).expect("assemble");
    assert!(table.contains(&AppId::new("10")));
    assert_eq!(
        table.get(&AppId::new("20")).unwrap().get("price"),
        &FeatureValue::Float(2.5)
    );
}

#[test]
fn missing_identifier_column_fails_loudly() {
    let df = test_df(vec![("Price", vec!["1.0"])]);
    let err = assemble_features(&df).expect_err("expected missing id error");
    assert!(matches!(err, TransformError::MissingIdColumn { .. }));
}
