// Services Layer
// ドメインロジックを実行するサービス層

pub mod column_address;
pub mod ddl_converter;
pub mod ddl_detector;
pub mod ddl_service;
pub mod dml_generator;
pub mod import_generator;
pub mod input_loader;
pub mod schema_validator;
pub mod spreadsheet_extractor;
