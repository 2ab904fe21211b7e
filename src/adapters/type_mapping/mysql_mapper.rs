// MySQL用型マッパー

use super::TypeMapper;

/// MySQL用型マッパー
///
/// 型トークンは素通しし、プライマリキーには AUTO_INCREMENT を付与します。
pub struct MySqlTypeMapper;

impl TypeMapper for MySqlTypeMapper {
    fn auto_increment_clause(&self) -> Option<&'static str> {
        Some("AUTO_INCREMENT")
    }
}
