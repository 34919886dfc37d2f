// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Engine-level completion scenarios against the mock world schema.
//!
//! Each case feeds document text and a cursor position through the same
//! path the backend uses for `textDocument/completion`.

use std::sync::Arc;

use squill_catalog::{MockCatalog, SchemaCache};
use squill_lsp::CompletionEngine;
use tower_lsp::lsp_types::{CompletionItem, Position};

async fn engine() -> CompletionEngine {
    let cache = SchemaCache::load(&MockCatalog::world()).await.unwrap();
    CompletionEngine::new(Arc::new(cache))
}

fn complete(engine: &CompletionEngine, text: &str, col: u32) -> Vec<CompletionItem> {
    engine.complete(text, Position::new(0, col))
}

fn labels(items: &[CompletionItem]) -> Vec<String> {
    items.iter().map(|i| i.label.clone()).collect()
}

#[track_caller]
fn assert_includes(items: &[CompletionItem], expected: &[&str]) {
    let labels = labels(items);
    for label in expected {
        assert!(
            labels.iter().any(|l| l == label),
            "missing label {label:?} in {labels:?}"
        );
    }
}

#[track_caller]
fn assert_excludes(items: &[CompletionItem], unexpected: &[&str]) {
    let labels = labels(items);
    for label in unexpected {
        assert!(
            !labels.iter().any(|l| l == label),
            "unexpected label {label:?} in {labels:?}"
        );
    }
}

const CITY_COLUMNS: &[&str] = &["ID", "Name", "CountryCode", "District", "Population"];
const ALL_TABLES: &[&str] = &["city", "country", "countrylanguage"];

#[tokio::test]
async fn select_projection_lists_columns_and_tables() {
    let engine = engine().await;
    let items = complete(&engine, "select  from city", 7);
    assert_includes(&items, CITY_COLUMNS);
    assert_includes(&items, ALL_TABLES);
}

#[tokio::test]
async fn select_projection_includes_alias() {
    let engine = engine().await;
    for text in ["select  from city as c", "select  from city c"] {
        let items = complete(&engine, text, 7);
        assert_includes(&items, CITY_COLUMNS);
        assert_includes(&items, &["c"]);
        assert_includes(&items, ALL_TABLES);
    }
}

#[tokio::test]
async fn select_projection_filters_by_prefix() {
    let engine = engine().await;
    let items = complete(&engine, "select Cou from city", 10);
    assert_includes(&items, &["CountryCode", "country", "countrylanguage"]);
    assert_excludes(&items, &["ID", "Name", "District", "Population", "city"]);
}

#[tokio::test]
async fn select_identifier_list_filters_last_fragment() {
    let engine = engine().await;
    let items = complete(&engine, "select id, cou from city", 14);
    assert_includes(&items, &["CountryCode", "country", "countrylanguage"]);
    assert_excludes(&items, &["ID", "city"]);
}

#[tokio::test]
async fn member_qualifier_narrows_to_aliased_table() {
    let engine = engine().await;
    let items = complete(&engine, "select c. from city as c", 9);
    assert_eq!(
        labels(&items),
        // alphabetical within the column category
        vec!["CountryCode", "District", "ID", "Name", "Population"]
    );
}

#[tokio::test]
async fn unknown_member_qualifier_yields_empty() {
    let engine = engine().await;
    let items = complete(&engine, "select nope. from city", 12);
    assert!(items.is_empty(), "got {:?}", labels(&items));
}

#[tokio::test]
async fn from_clause_lists_tables_not_columns() {
    let engine = engine().await;
    let items = complete(&engine, "select CountryCode from ", 24);
    assert_includes(&items, ALL_TABLES);
    assert_excludes(&items, &["ID", "Name", "Population"]);
}

#[tokio::test]
async fn from_clause_filters_by_prefix() {
    let engine = engine().await;
    let items = complete(&engine, "select CountryCode from co", 26);
    assert_includes(&items, &["country", "countrylanguage"]);
    assert_excludes(&items, &["city", "CountryCode"]);
}

#[tokio::test]
async fn join_clause_lists_tables() {
    let engine = engine().await;
    let items = complete(&engine, "select CountryCode from city left join ", 39);
    assert_includes(&items, ALL_TABLES);
    assert_excludes(&items, &["ID", "Population"]);
}

#[tokio::test]
async fn join_clause_filters_by_prefix() {
    let engine = engine().await;
    let items = complete(&engine, "select CountryCode from city left join co", 41);
    assert_includes(&items, &["country", "countrylanguage"]);
    assert_excludes(&items, &["city"]);
}

#[tokio::test]
async fn join_on_condition_lists_joined_columns() {
    let engine = engine().await;
    let items = complete(
        &engine,
        "select CountryCode from city left join country on co",
        52,
    );
    assert_includes(&items, &["Code", "Continent", "Code2"]);
    assert_excludes(&items, &["ID", "Name"]);
}

#[tokio::test]
async fn order_by_lists_columns_and_tables() {
    let engine = engine().await;
    let items = complete(&engine, "SELECT ID, Name FROM city ORDER BY ", 35);
    assert_includes(&items, CITY_COLUMNS);
    assert_includes(&items, ALL_TABLES);
}

#[tokio::test]
async fn group_by_lists_columns_and_tables() {
    let engine = engine().await;
    let items = complete(&engine, "SELECT CountryCode, COUNT(*) FROM city GROUP BY ", 48);
    assert_includes(&items, CITY_COLUMNS);
    assert_includes(&items, ALL_TABLES);
}

#[tokio::test]
async fn from_inside_unclosed_subquery_lists_tables() {
    let engine = engine().await;
    let items = complete(&engine, "SELECT * FROM (SELECT * FROM ", 29);
    assert_includes(&items, ALL_TABLES);
}

#[tokio::test]
async fn from_inside_unclosed_subquery_filters_by_prefix() {
    let engine = engine().await;
    let items = complete(&engine, "SELECT * FROM (SELECT * FROM co", 31);
    assert_includes(&items, &["country", "countrylanguage"]);
    assert_excludes(&items, &["city"]);
}

#[tokio::test]
async fn select_inside_subquery_uses_inner_scope() {
    let engine = engine().await;
    let items = complete(&engine, "SELECT * FROM (SELECT Cou FROM city)", 25);
    assert_includes(&items, &["CountryCode", "country", "countrylanguage"]);
    assert_excludes(&items, &["Code2"]);
}

#[tokio::test]
async fn subquery_projections_complete_in_outer_scope() {
    let engine = engine().await;
    let items = complete(
        &engine,
        "SELECT  FROM (SELECT ID as city_id, Name as city_name FROM city) as t",
        7,
    );
    assert_includes(&items, &["city_id", "city_name", "t"]);
    // inner columns do not leak into the outer scope
    assert_excludes(&items, &["ID", "Name"]);
}

#[tokio::test]
async fn multiple_statements_first_cursor() {
    let engine = engine().await;
    let text = "SELECT c. FROM city as c;SELECT c. FROM country as c;";
    let items = complete(&engine, text, 9);
    assert_includes(&items, CITY_COLUMNS);
    assert_excludes(&items, &["Code", "Region", "Capital"]);
}

#[tokio::test]
async fn multiple_statements_second_cursor() {
    let engine = engine().await;
    let text = "SELECT c. FROM city as c;SELECT c. FROM country as c;";
    let items = complete(&engine, text, 34);
    assert_includes(
        &items,
        &[
            "Code",
            "Name",
            "CountryCode",
            "Region",
            "SurfaceArea",
            "IndepYear",
            "LifeExpectancy",
            "GNP",
            "GNPOld",
            "LocalName",
            "GovernmentForm",
            "HeadOfState",
            "Capital",
            "Code2",
        ],
    );
    assert_excludes(&items, &["District", "Population"]);
}

#[tokio::test]
async fn statement_start_offers_keywords() {
    let engine = engine().await;
    let items = complete(&engine, "", 0);
    assert_includes(&items, &["SELECT", "INSERT INTO", "UPDATE"]);

    let items = complete(&engine, "sel", 3);
    assert_includes(&items, &["SELECT"]);
    assert_excludes(&items, &["FROM", "city"]);
}

#[tokio::test]
async fn completion_is_deterministic() {
    let engine = engine().await;
    let text = "select  from city as c";
    let first = complete(&engine, text, 7);
    let second = complete(&engine, text, 7);
    assert_eq!(labels(&first), labels(&second));
    // category ordering: columns before the alias, alias before tables
    let labels = labels(&first);
    let id = labels.iter().position(|l| l == "ID").unwrap();
    let alias = labels.iter().position(|l| l == "c").unwrap();
    let table = labels.iter().position(|l| l == "city").unwrap();
    assert!(id < alias && alias < table);
}

#[tokio::test]
async fn columns_of_both_joined_tables_in_where() {
    let engine = engine().await;
    let items = complete(
        &engine,
        "select Name from city left join country on city.CountryCode = country.Code where ",
        83,
    );
    assert_includes(&items, &["District", "Region"]);
}
