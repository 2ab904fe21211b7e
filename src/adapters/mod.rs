// Adapters
// 方言ごとのSQL構文（識別子クォート、型変換、CREATE TABLE生成）を抽象化

pub mod sql_generator;
pub mod sql_quote;
pub mod type_mapping;
