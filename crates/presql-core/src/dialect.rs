//! SQL dialect configuration.
//!
//! Rendering is dialect-neutral except where a construct has no portable
//! spelling. The dialect only affects those helpers (casts, identifier
//! quoting); clause ordering is identical everywhere.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL dialect for dialect-specific fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL (`expr::type` casts)
    #[default]
    Postgres,
    /// SQLite
    Sqlite,
    /// MySQL (backtick identifiers)
    Mysql,
    /// Plain ANSI SQL
    Ansi,
}

impl Dialect {
    /// Render a type cast.
    ///
    /// ```
    /// use presql_core::Dialect;
    ///
    /// assert_eq!(Dialect::Postgres.cast("age", "text"), "age::text");
    /// assert_eq!(Dialect::Sqlite.cast("age", "TEXT"), "CAST(age AS TEXT)");
    /// ```
    pub fn cast(self, expr: &str, type_name: &str) -> String {
        match self {
            Dialect::Postgres => format!("{expr}::{type_name}"),
            Dialect::Sqlite | Dialect::Mysql | Dialect::Ansi => {
                format!("CAST({expr} AS {type_name})")
            }
        }
    }

    /// Quote an identifier for this dialect.
    ///
    /// Embedded quote characters are escaped by doubling them:
    /// - Postgres/SQLite/ANSI: `"` becomes `""`
    /// - MySQL: `` ` `` becomes ``` `` ```
    pub fn quote_identifier(self, name: &str) -> String {
        match self {
            Dialect::Postgres | Dialect::Sqlite | Dialect::Ansi => {
                format!("\"{}\"", name.replace('"', "\"\""))
            }
            Dialect::Mysql => format!("`{}`", name.replace('`', "``")),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
            Dialect::Ansi => "ansi",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    /// Accepts: "postgres", "postgresql", "pg", "sqlite", "mysql", "ansi"
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::Mysql),
            "ansi" => Ok(Dialect::Ansi),
            other => Err(ConfigError {
                message: format!("unknown SQL dialect '{other}'"),
            }),
        }
    }
}
