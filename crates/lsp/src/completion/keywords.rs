// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Keyword suggestion vocabulary.
//!
//! Unlike the tokenizer's single-word table, this list is what gets
//! offered to the user, so multi-word forms (`GROUP BY`, `INSERT INTO`)
//! appear as single entries.

/// Keywords offered when the context calls for keyword completion.
pub const SUGGEST_KEYWORDS: &[&str] = &[
    "ACCESS",
    "ADD",
    "ALL",
    "ALTER TABLE",
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
    "CHANGE MASTER TO",
    "CHAR",
    "CHARACTER SET",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMENT",
    "COMMIT",
    "CONSTRAINT",
    "CREATE",
    "CURRENT",
    "CURRENT_TIMESTAMP",
    "DATABASE",
    "DATE",
    "DECIMAL",
    "DEFAULT",
    "DELETE FROM",
    "DESC",
    "DESCRIBE",
    "DROP",
    "ELSE",
    "END",
    "ENGINE",
    "ESCAPE",
    "EXISTS",
    "FILE",
    "FLOAT",
    "FOR",
    "FOREIGN KEY",
    "FORMAT",
    "FROM",
    "FULL",
    "FUNCTION",
    "GRANT",
    "GROUP BY",
    "HAVING",
    "HOST",
    "IDENTIFIED",
    "IN",
    "INCREMENT",
    "INDEX",
    "INSERT INTO",
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
    "ORDER BY",
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
