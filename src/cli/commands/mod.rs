// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod convert;
pub mod ddl;
pub mod detect;
pub mod dml;
pub mod extract;
pub mod import;
pub mod validate;
