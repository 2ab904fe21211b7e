// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tablewright - cross-dialect DDL/DML synthesis CLI
///
/// Render dialect-correct SQL from table definitions and spreadsheet layouts.
#[derive(Parser, Debug)]
#[command(name = "tablewright")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cross-dialect DDL/DML synthesis CLI tool")]
#[command(long_about = "Tablewright - cross-dialect DDL/DML synthesis

Render CREATE TABLE statements, DML skeletons and batched INSERTs
from a single table definition, for any supported dialect.

Supported dialects: MySQL, PostgreSQL, Oracle, SQL Server, Apache Doris")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Describe a table in YAML:      users.yaml
  2. Render its DDL:                tablewright ddl --schema users.yaml --dialect postgresql
  3. Render a DML skeleton:         tablewright dml --schema users.yaml --kind update
  4. Import rows from a CSV:        tablewright import --schema users.yaml --data users.csv

For detailed help on each command, use: tablewright <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a CREATE TABLE statement from a table definition
    ///
    /// EXAMPLES:
    ///   # Render for the dialect configured in .tablewright.yaml
    ///   tablewright ddl --schema users.yaml
    ///
    ///   # Render for Oracle
    ///   tablewright ddl --schema users.yaml --dialect oracle
    Ddl {
        /// Table definition file (YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Target dialect (mysql, postgresql, doris, oracle, sqlserver)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,
    },

    /// Render a SELECT / INSERT / UPDATE / DELETE skeleton
    ///
    /// EXAMPLES:
    ///   tablewright dml --schema users.yaml --kind insert --dialect mysql
    Dml {
        /// Table definition file (YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Statement kind (select, insert, update, delete)
        #[arg(short, long, value_name = "KIND", default_value = "select")]
        kind: String,

        /// Target dialect (mysql, postgresql, doris, oracle, sqlserver)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,
    },

    /// Extract a table definition from a spreadsheet grid and render its DDL
    ///
    /// EXAMPLES:
    ///   # Use the default template
    ///   tablewright extract --grid "User Accounts.csv"
    ///
    ///   # Use a named template and an explicit table name
    ///   tablewright extract --grid sheet.csv --template simple --table users
    Extract {
        /// Cell grid exported as CSV
        #[arg(short, long, value_name = "FILE")]
        grid: PathBuf,

        /// Template name (defaults to the configured default template)
        #[arg(short, long, value_name = "NAME")]
        template: Option<String>,

        /// Table name (defaults to a name derived from the file name)
        #[arg(long, value_name = "NAME")]
        table: Option<String>,

        /// Target dialect (mysql, postgresql, doris, oracle, sqlserver)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,
    },

    /// Render a batched INSERT from sheet rows and column mappings
    ///
    /// Without --mapping, columns are matched to headers automatically.
    ///
    /// EXAMPLES:
    ///   tablewright import --schema users.yaml --data users.csv
    ///   tablewright import --schema users.yaml --data users.csv --mapping mapping.yaml
    Import {
        /// Table definition file (YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Sheet data as CSV (first row is the header row)
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// Column mapping file (YAML)
        #[arg(short, long, value_name = "FILE")]
        mapping: Option<PathBuf>,

        /// Target dialect (mysql, postgresql, doris, oracle, sqlserver)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,
    },

    /// Detect whether an existing CREATE TABLE statement is MySQL or Doris
    ///
    /// EXAMPLES:
    ///   tablewright detect --ddl table.sql
    Detect {
        /// DDL file
        #[arg(long, value_name = "FILE")]
        ddl: PathBuf,
    },

    /// Convert a table definition between MySQL and Doris CREATE TABLE statements
    ///
    /// Without --to, the target is the opposite of the dialect detected in --ddl.
    /// The table comment is taken from --ddl when present.
    ///
    /// EXAMPLES:
    ///   # MySQL DDL to Doris
    ///   tablewright convert --schema users.yaml --ddl users_mysql.sql
    ///
    ///   # Explicit target without a source DDL
    ///   tablewright convert --schema users.yaml --to mysql
    Convert {
        /// Table definition file (YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Source CREATE TABLE statement
        #[arg(long, value_name = "FILE")]
        ddl: Option<PathBuf>,

        /// Target dialect (mysql or doris)
        #[arg(long, value_name = "DIALECT")]
        to: Option<String>,
    },

    /// Validate a table definition against a target dialect
    ///
    /// EXAMPLES:
    ///   tablewright validate --schema users.yaml --dialect doris
    Validate {
        /// Table definition file (YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Target dialect (mysql, postgresql, doris, oracle, sqlserver)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,
    },
}
