// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "tablewright";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".tablewright.yaml";

/// 既定のテンプレート名
pub const DEFAULT_TEMPLATE: &str = "standard";
