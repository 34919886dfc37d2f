// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Candidate synthesis.
//!
//! Materializes a ranked list of completion items from the permitted
//! kinds, the relations extracted from the statement, and the schema
//! cache. Ordering is by candidate category (columns, aliases, tables,
//! keywords, functions) then alphabetical, carried into `sort_text` so
//! clients preserve it.

use squill_catalog::{ColumnMetadata, SchemaCache, TableType};
use squill_parser::TableReference;
use squill_token::FUNCTIONS;
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind};

use crate::completion::context::{CompletionContext, CompletionType};
use crate::completion::keywords::SUGGEST_KEYWORDS;

/// Category ranks drive the final ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Category {
    Column,
    Alias,
    Table,
    Keyword,
    Function,
}

struct Candidate {
    category: Category,
    label: String,
    detail: Option<String>,
    kind: CompletionItemKind,
}

/// Build the completion items for a classified cursor.
pub fn build(
    ctx: &CompletionContext,
    tables: &[TableReference],
    cache: &SchemaCache,
    last_word: &str,
) -> Vec<CompletionItem> {
    let mut candidates = Vec::new();

    if let Some(qualifier) = &ctx.qualifier {
        collect_qualified(qualifier, tables, cache, &mut candidates);
    } else {
        if ctx.permits(CompletionType::Column) {
            collect_columns(tables, cache, &mut candidates);
        }
        if ctx.permits(CompletionType::Alias) {
            collect_aliases(tables, &mut candidates);
        }
        if ctx.permits(CompletionType::Table) {
            collect_tables(cache, TableType::Table, &mut candidates);
        }
        if ctx.permits(CompletionType::View) {
            collect_tables(cache, TableType::View, &mut candidates);
        }
        if ctx.permits(CompletionType::Keyword) {
            collect_keywords(&mut candidates);
        }
        if ctx.permits(CompletionType::Function) {
            collect_functions(&mut candidates);
        }
        // Database, User and Change contexts have no catalog source yet;
        // they synthesize nothing and the reply is an empty success.
    }

    render(candidates, last_word)
}

/// Columns of the single relation named by a member qualifier.
///
/// An alias match wins over a table-name match; a qualifier that names
/// nothing in scope yields no candidates at all.
fn collect_qualified(
    qualifier: &str,
    tables: &[TableReference],
    cache: &SchemaCache,
    out: &mut Vec<Candidate>,
) {
    let by_alias = tables.iter().find(|t| t.alias_is(qualifier));
    let resolved = by_alias.or_else(|| tables.iter().find(|t| t.name_is(qualifier)));
    let Some(relation) = resolved else {
        return;
    };
    push_relation_columns(relation, cache, out);
}

fn push_relation_columns(
    relation: &TableReference,
    cache: &SchemaCache,
    out: &mut Vec<Candidate>,
) {
    if relation.is_subquery {
        for projection in &relation.projections {
            out.push(Candidate {
                category: Category::Column,
                label: projection.clone(),
                detail: Some("subquery column".to_string()),
                kind: CompletionItemKind::FIELD,
            });
        }
        return;
    }
    let Some(name) = &relation.name else { return };
    let Some(columns) = cache.columns(name) else {
        return;
    };
    for column in columns {
        out.push(column_candidate(name, column));
    }
}

fn column_candidate(table: &str, column: &ColumnMetadata) -> Candidate {
    Candidate {
        category: Category::Column,
        label: column.name.clone(),
        detail: Some(format!("{} {}", table, column.data_type)),
        kind: CompletionItemKind::FIELD,
    }
}

/// Columns of every relation in scope, subquery projections included.
fn collect_columns(tables: &[TableReference], cache: &SchemaCache, out: &mut Vec<Candidate>) {
    for relation in tables {
        push_relation_columns(relation, cache, out);
    }
}

fn collect_aliases(tables: &[TableReference], out: &mut Vec<Candidate>) {
    for relation in tables {
        if let Some(alias) = &relation.alias {
            let detail = match &relation.name {
                Some(name) => format!("alias of {name}"),
                None => "subquery alias".to_string(),
            };
            out.push(Candidate {
                category: Category::Alias,
                label: alias.clone(),
                detail: Some(detail),
                kind: CompletionItemKind::VARIABLE,
            });
        }
    }
}

fn collect_tables(cache: &SchemaCache, table_type: TableType, out: &mut Vec<Candidate>) {
    let kind_label = match table_type {
        TableType::Table => "TABLE",
        TableType::View => "VIEW",
    };
    for table in cache.tables_of(table_type) {
        let detail = match &table.comment {
            Some(comment) => format!("{kind_label} · {comment}"),
            None => kind_label.to_string(),
        };
        out.push(Candidate {
            category: Category::Table,
            label: table.name.clone(),
            detail: Some(detail),
            kind: CompletionItemKind::CLASS,
        });
    }
}

fn collect_keywords(out: &mut Vec<Candidate>) {
    for keyword in SUGGEST_KEYWORDS {
        out.push(Candidate {
            category: Category::Keyword,
            label: (*keyword).to_string(),
            detail: None,
            kind: CompletionItemKind::KEYWORD,
        });
    }
}

fn collect_functions(out: &mut Vec<Candidate>) {
    for function in FUNCTIONS {
        out.push(Candidate {
            category: Category::Function,
            label: (*function).to_string(),
            detail: None,
            kind: CompletionItemKind::FUNCTION,
        });
    }
}

/// Prefix-filter by the word under the cursor, order by category then
/// label, drop duplicate labels within a category, and emit LSP items.
fn render(candidates: Vec<Candidate>, last_word: &str) -> Vec<CompletionItem> {
    let needle = last_word.to_lowercase();
    let mut survivors: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| needle.is_empty() || c.label.to_lowercase().starts_with(&needle))
        .collect();
    survivors.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
    });
    survivors.dedup_by(|a, b| a.category == b.category && a.label == b.label);

    survivors
        .into_iter()
        .enumerate()
        .map(|(rank, c)| CompletionItem {
            label: c.label.clone(),
            kind: Some(c.kind),
            detail: c.detail,
            insert_text: Some(c.label),
            sort_text: Some(format!("{rank:04}")),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use squill_catalog::MockCatalog;

    async fn world_cache() -> SchemaCache {
        SchemaCache::load(&MockCatalog::world()).await.unwrap()
    }

    fn ctx(types: &[CompletionType], qualifier: Option<&str>) -> CompletionContext {
        CompletionContext {
            types: types.to_vec(),
            qualifier: qualifier.map(str::to_string),
        }
    }

    fn table_ref(name: &str, alias: Option<&str>) -> TableReference {
        TableReference {
            name: Some(name.to_string()),
            alias: alias.map(str::to_string),
            is_subquery: false,
            projections: Vec::new(),
        }
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[tokio::test]
    async fn columns_come_before_tables() {
        let cache = world_cache().await;
        let tables = vec![table_ref("city", None)];
        let items = build(
            &ctx(
                &[
                    CompletionType::Column,
                    CompletionType::Alias,
                    CompletionType::Table,
                ],
                None,
            ),
            &tables,
            &cache,
            "",
        );
        let labels = labels(&items);
        let id_pos = labels.iter().position(|l| *l == "ID").unwrap();
        let city_pos = labels.iter().position(|l| *l == "city").unwrap();
        assert!(id_pos < city_pos);
    }

    #[tokio::test]
    async fn prefix_filter_is_case_insensitive() {
        let cache = world_cache().await;
        let tables = vec![table_ref("city", None)];
        let items = build(
            &ctx(&[CompletionType::Column, CompletionType::Table], None),
            &tables,
            &cache,
            "cou",
        );
        assert_eq!(
            labels(&items),
            vec!["CountryCode", "country", "countrylanguage"]
        );
    }

    #[tokio::test]
    async fn qualifier_narrows_to_one_relation() {
        let cache = world_cache().await;
        let tables = vec![table_ref("city", Some("c")), table_ref("country", None)];
        let items = build(
            &ctx(&[CompletionType::Column, CompletionType::Table], Some("c")),
            &tables,
            &cache,
            "",
        );
        let labels = labels(&items);
        assert!(labels.contains(&"District"));
        assert!(!labels.contains(&"Code2"));
        assert!(!labels.contains(&"country"));
    }

    #[tokio::test]
    async fn unknown_qualifier_yields_nothing() {
        let cache = world_cache().await;
        let tables = vec![table_ref("city", None)];
        let items = build(
            &ctx(&[CompletionType::Column], Some("nope")),
            &tables,
            &cache,
            "",
        );
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn duplicate_column_labels_collapse() {
        let cache = world_cache().await;
        // city and country both carry CountryCode
        let tables = vec![table_ref("city", None), table_ref("country", None)];
        let items = build(&ctx(&[CompletionType::Column], None), &tables, &cache, "");
        let count = items.iter().filter(|i| i.label == "CountryCode").count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn keyword_candidates_cover_vocabulary() {
        let cache = world_cache().await;
        let items = build(&ctx(&[CompletionType::Keyword], None), &[], &cache, "");
        let labels = labels(&items);
        assert!(labels.contains(&"SELECT"));
        assert!(labels.contains(&"GROUP BY"));
        assert!(labels.contains(&"INSERT INTO"));
    }

    #[tokio::test]
    async fn database_context_synthesizes_nothing() {
        let cache = world_cache().await;
        let items = build(&ctx(&[CompletionType::Database], None), &[], &cache, "");
        assert!(items.is_empty());
    }
}
