// Doris用型マッパー

use super::TypeMapper;

/// Doris用型マッパー
///
/// 型トークンは素通しで、インラインの自動採番構文は持ちません。
pub struct DorisTypeMapper;

impl TypeMapper for DorisTypeMapper {}
