// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の読み込み、検証、
// 既定の出力方言とスプレッドシートテンプレートの管理を行います。

use crate::core::error::IoError;
use crate::core::naming;
use crate::core::schema::SpreadsheetTemplate;
use crate::services::column_address::letter_to_index;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// データベース方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "mysql")]
    MySQL,
    #[serde(rename = "postgresql", alias = "postgres")]
    PostgreSQL,
    #[serde(rename = "doris")]
    Doris,
    #[serde(rename = "oracle")]
    Oracle,
    #[serde(rename = "sqlserver", alias = "mssql")]
    SQLServer,
}

impl Dialect {
    /// すべての方言
    pub const ALL: [Dialect; 5] = [
        Dialect::MySQL,
        Dialect::PostgreSQL,
        Dialect::Doris,
        Dialect::Oracle,
        Dialect::SQLServer,
    ];

    /// カラムコメントをCREATE TABLE内に記述できるかどうか
    pub fn supports_inline_comments(&self) -> bool {
        match self {
            Dialect::MySQL | Dialect::Doris => true,
            Dialect::PostgreSQL | Dialect::Oracle | Dialect::SQLServer => false,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySQL => write!(f, "mysql"),
            Dialect::PostgreSQL => write!(f, "postgresql"),
            Dialect::Doris => write!(f, "doris"),
            Dialect::Oracle => write!(f, "oracle"),
            Dialect::SQLServer => write!(f, "sqlserver"),
        }
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySQL),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSQL),
            "doris" => Ok(Dialect::Doris),
            "oracle" => Ok(Dialect::Oracle),
            "sqlserver" | "sql server" | "mssql" => Ok(Dialect::SQLServer),
            other => Err(anyhow!(
                "Unsupported database dialect: {}. Please specify one of: mysql, postgresql, doris, oracle, sqlserver.",
                other
            )),
        }
    }
}

/// 名前付きスプレッドシートテンプレート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTemplate {
    /// テンプレート名
    pub name: String,

    /// 説明
    #[serde(default)]
    pub description: Option<String>,

    /// カラム定義が始まる行（1始まり）
    pub data_start_row: usize,

    /// カラム名の列
    pub name_col: String,

    /// 型の列
    pub type_col: String,

    /// コメントの列
    #[serde(default)]
    pub comment_col: Option<String>,

    /// プライマリキーフラグの列
    #[serde(default)]
    pub pk_col: Option<String>,
}

impl NamedTemplate {
    /// 抽出器に渡すテンプレートへ変換
    pub fn to_template(&self) -> SpreadsheetTemplate {
        SpreadsheetTemplate {
            data_start_row: self.data_start_row,
            name_col: self.name_col.clone(),
            type_col: self.type_col.clone(),
            comment_col: self.comment_col.clone(),
            pk_col: self.pk_col.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("Template name is not specified"));
        }
        if self.data_start_row == 0 {
            return Err(anyhow!("data_start_row must be 1 or greater"));
        }

        let optional = [self.comment_col.as_deref(), self.pk_col.as_deref()];
        let letters = [Some(self.name_col.as_str()), Some(self.type_col.as_str())]
            .into_iter()
            .chain(optional.into_iter().map(|c| c.filter(|c| !c.trim().is_empty())))
            .flatten();

        for letters in letters {
            letter_to_index(letters)?;
        }

        Ok(())
    }
}

/// 組み込みテンプレート
pub fn builtin_templates() -> Vec<NamedTemplate> {
    vec![
        NamedTemplate {
            name: naming::DEFAULT_TEMPLATE.to_string(),
            description: Some(
                "Row 1 Header, Data starts Row 2. Col A:Name, B:Type, C:Comment".to_string(),
            ),
            data_start_row: 2,
            name_col: "A".to_string(),
            type_col: "B".to_string(),
            comment_col: Some("C".to_string()),
            pk_col: None,
        },
        NamedTemplate {
            name: "simple".to_string(),
            description: Some("Col A: Field Name, Col B: Data Type".to_string()),
            data_start_row: 1,
            name_col: "A".to_string(),
            type_col: "B".to_string(),
            comment_col: None,
            pk_col: None,
        },
    ]
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_template_name() -> String {
    naming::DEFAULT_TEMPLATE.to_string()
}

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 設定ファイルのバージョン
    #[serde(default = "default_version")]
    pub version: String,

    /// 既定の出力方言
    #[serde(default)]
    pub dialect: Dialect,

    /// スプレッドシートテンプレート
    #[serde(default = "builtin_templates")]
    pub templates: Vec<NamedTemplate>,

    /// 既定のテンプレート名
    #[serde(default = "default_template_name")]
    pub default_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            dialect: Dialect::default(),
            templates: builtin_templates(),
            default_template: default_template_name(),
        }
    }
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = naming::CONFIG_FILE;

    /// 設定ファイルを読み込んで検証する
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).map_err(|e| IoError::FileRead {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let config: Config = content.parse()?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// 名前でテンプレートを取得（None の場合は既定テンプレート）
    pub fn get_template(&self, name: Option<&str>) -> Result<&NamedTemplate> {
        let name = name.unwrap_or(&self.default_template);
        self.templates.iter().find(|t| t.name == name).ok_or_else(|| {
            anyhow!(
                "Template '{}' not found. Available templates: {:?}",
                name,
                self.templates.iter().map(|t| &t.name).collect::<Vec<_>>()
            )
        })
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(anyhow!("Config file version is not specified"));
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.name.as_str()) {
                return Err(anyhow!("Duplicate template name '{}'", template.name));
            }
            template
                .validate()
                .with_context(|| format!("Invalid template '{}'", template.name))?;
        }

        if !self.templates.iter().any(|t| t.name == self.default_template) {
            return Err(anyhow!(
                "Default template '{}' is not defined",
                self.default_template
            ));
        }

        Ok(())
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}
