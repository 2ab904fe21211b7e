// DDL方言判定
//
// 既存のCREATE TABLE文がMySQLとDorisのどちらの方言で書かれているかを判定します。

use crate::core::config::Dialect;
use tracing::debug;

/// Doris固有のキーワード（大文字で比較）
const DORIS_MARKERS: [&str; 6] = [
    "ENGINE=OLAP",
    "ENGINE = OLAP",
    "DISTRIBUTED BY HASH",
    "DUPLICATE KEY",
    "AGGREGATE KEY",
    "BUCKETS",
];

/// DDL文の方言を判定
///
/// Doris固有のキーワードを含む場合、または `ENGINE=INNODB` を伴わない `UNIQUE KEY`
/// を含む場合は `Doris`、それ以外（空文字列を含む）は `MySQL` を返します。
pub fn detect_dialect_from_ddl(ddl: &str) -> Dialect {
    let upper = ddl.to_uppercase();

    let dialect = if DORIS_MARKERS.iter().any(|marker| upper.contains(marker))
        || (upper.contains("UNIQUE KEY") && !upper.contains("ENGINE=INNODB"))
    {
        Dialect::Doris
    } else {
        Dialect::MySQL
    };

    debug!(dialect = %dialect, "Detected DDL dialect");
    dialect
}
