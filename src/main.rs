use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process;
use tablewright::cli::command_context::CommandContext;
use tablewright::cli::commands::convert::{ConvertCommand, ConvertCommandHandler};
use tablewright::cli::commands::ddl::{DdlCommand, DdlCommandHandler};
use tablewright::cli::commands::detect::{DetectCommand, DetectCommandHandler};
use tablewright::cli::commands::dml::{DmlCommand, DmlCommandHandler};
use tablewright::cli::commands::extract::{ExtractCommand, ExtractCommandHandler};
use tablewright::cli::commands::import::{ImportCommand, ImportCommandHandler};
use tablewright::cli::commands::validate::{ValidateCommand, ValidateCommandHandler};
use tablewright::cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    setup_logging(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

/// ログ出力を初期化する
///
/// RUST_LOG が優先され、未設定時は warn（--verbose 指定時は debug）。
/// SQLを標準出力に出すため、ログは標準エラー出力へ書き込む。
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    let context = CommandContext::load_with_config(&project_path, config_path)?;

    match cli.command {
        Commands::Ddl { schema, dialect } => {
            let handler = DdlCommandHandler::new();
            let command = DdlCommand {
                schema_path: schema,
                dialect: context.resolve_dialect(dialect.as_deref())?,
            };
            handler.execute(&command)
        }

        Commands::Dml {
            schema,
            kind,
            dialect,
        } => {
            let handler = DmlCommandHandler::new();
            let command = DmlCommand {
                schema_path: schema,
                kind: kind.parse()?,
                dialect: context.resolve_dialect(dialect.as_deref())?,
            };
            handler.execute(&command)
        }

        Commands::Extract {
            grid,
            template,
            table,
            dialect,
        } => {
            let handler = ExtractCommandHandler::new();
            let command = ExtractCommand {
                grid_path: grid,
                template: context.config.get_template(template.as_deref())?.clone(),
                table_name: table,
                dialect: context.resolve_dialect(dialect.as_deref())?,
            };
            handler.execute(&command)
        }

        Commands::Import {
            schema,
            data,
            mapping,
            dialect,
        } => {
            let handler = ImportCommandHandler::new();
            let command = ImportCommand {
                schema_path: schema,
                data_path: data,
                mapping_path: mapping,
                dialect: context.resolve_dialect(dialect.as_deref())?,
            };
            handler.execute(&command)
        }

        Commands::Detect { ddl } => {
            let handler = DetectCommandHandler::new();
            let command = DetectCommand { ddl_path: ddl };
            handler.execute(&command)
        }

        Commands::Convert { schema, ddl, to } => {
            let handler = ConvertCommandHandler::new();
            let command = ConvertCommand {
                schema_path: schema,
                ddl_path: ddl,
                target: to.as_deref().map(str::parse).transpose()?,
            };
            handler.execute(&command)
        }

        Commands::Validate { schema, dialect } => {
            let handler = ValidateCommandHandler::new();
            let command = ValidateCommand {
                schema_path: schema,
                dialect: context.resolve_dialect(dialect.as_deref())?,
            };
            handler.execute(&command)
        }
    }
}
