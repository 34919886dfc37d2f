// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Reserved vocabulary.
//!
//! A single static table distinguishes keywords from bare identifiers at
//! tokenization time. Lookups are case-insensitive via one uppercase pass;
//! no locale folding. Multi-word keywords (`GROUP BY`, `INSERT INTO`, ...)
//! are a parser-layer concern and deliberately absent here.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Reserved single-word keywords of the generic SQL grammar.
pub const KEYWORDS: &[&str] = &[
    "ACCESS",
    "ADD",
    "ALL",
    "ALTER",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "AUTO_INCREMENT",
    "BEFORE",
    "BEGIN",
    "BETWEEN",
    "BIGINT",
    "BINARY",
    "BY",
    "CASE",
    "CHANGE",
    "CHAR",
    "CHARACTER",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMENT",
    "COMMIT",
    "CONNECT",
    "CONSTRAINT",
    "COPY",
    "CREATE",
    "CROSS",
    "CURRENT",
    "CURRENT_TIMESTAMP",
    "DATABASE",
    "DATE",
    "DECIMAL",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DESCRIBE",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "ENGINE",
    "ESCAPE",
    "EXISTS",
    "EXPLAIN",
    "FILE",
    "FLOAT",
    "FOR",
    "FOREIGN",
    "FORMAT",
    "FROM",
    "FULL",
    "FUNCTION",
    "GRANT",
    "GROUP",
    "HAVING",
    "HOST",
    "IDENTIFIED",
    "IN",
    "INCREMENT",
    "INDEX",
    "INNER",
    "INSERT",
    "INT",
    "INTEGER",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LEFT",
    "LEVEL",
    "LIKE",
    "LIMIT",
    "LOCK",
    "LOGS",
    "LONG",
    "MASTER",
    "MEDIUMINT",
    "MODE",
    "MODIFY",
    "NOT",
    "NULL",
    "NUMBER",
    "OFFSET",
    "ON",
    "OPTION",
    "OR",
    "ORDER",
    "OUTER",
    "OWNER",
    "PASSWORD",
    "PORT",
    "PRIMARY",
    "PRIVILEGES",
    "PROCESSLIST",
    "PURGE",
    "REFERENCES",
    "REGEXP",
    "RENAME",
    "REPAIR",
    "RESET",
    "REVOKE",
    "RIGHT",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "ROW_FORMAT",
    "SAVEPOINT",
    "SELECT",
    "SESSION",
    "SET",
    "SHARE",
    "SHOW",
    "SLAVE",
    "SMALLINT",
    "START",
    "STOP",
    "TABLE",
    "TEMPLATE",
    "THEN",
    "TINYINT",
    "TO",
    "TRANSACTION",
    "TRIGGER",
    "TRUNCATE",
    "UNION",
    "UNIQUE",
    "UNSIGNED",
    "UPDATE",
    "USE",
    "USER",
    "USING",
    "VALUES",
    "VARCHAR",
    "VIEW",
    "WHEN",
    "WHERE",
    "WITH",
];

/// Function names recognized for function-literal grouping and Function
/// completion. Some double as keywords (`DATE`, `LEFT`, `RIGHT`); the
/// parser accepts either kind in front of a parenthesis.
pub const FUNCTIONS: &[&str] = &[
    "ABS",
    "AVG",
    "CEIL",
    "COALESCE",
    "CONCAT",
    "COUNT",
    "DATE",
    "DAY",
    "FLOOR",
    "HOUR",
    "IFNULL",
    "LEFT",
    "LENGTH",
    "LOWER",
    "LTRIM",
    "MAX",
    "MIN",
    "MINUTE",
    "MONTH",
    "NOW",
    "NULLIF",
    "REPLACE",
    "RIGHT",
    "ROUND",
    "RTRIM",
    "SECOND",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
    "YEAR",
];

static KEYWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static FUNCTION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FUNCTIONS.iter().copied().collect());

/// Case-insensitive membership test against the keyword table.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
}

/// Case-insensitive membership test against the function table.
pub fn is_function(word: &str) -> bool {
    FUNCTION_SET.contains(word.to_ascii_uppercase().as_str())
}
