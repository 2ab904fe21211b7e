// Core Domain
// テーブル定義・方言・エラーなど、SQL合成の純粋なドメインモデル

pub mod config;
pub mod error;
pub mod naming;
pub mod schema;
pub mod type_category;
