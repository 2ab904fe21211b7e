// Tablewrightライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインモデル（テーブル定義、方言、設定、エラー型）
// - adapters: 方言ごとの型マッピング、識別子のクォート、DDL生成
// - services: 抽出・DDL/DML/インポート合成・検証・入力ファイル読み込み

pub mod cli;
pub mod core;
pub mod adapters;
pub mod services;
