//! SQLite 目录元数据只读查询
//!
//! 所有查询均为目录自省（sqlite_master / PRAGMA table_info / COUNT / LIMIT 抽样），
//! 连接以只读标志打开，整个生命周期内不会发出任何写操作。

use crate::error::Result;
use crate::explorer::types::{ColumnInfo, SampleRow, TableInfo};
use rusqlite::{Connection, OpenFlags};
use rusqlite::types::ValueRef;
use std::path::Path;

/// 只读数据库探查器
///
/// 持有一个 SQLite 连接，在一次探索运行中复用，最后显式关闭。
pub struct Inspector {
    conn: Connection,
}

/// SQL 标识符转义：双引号包裹，内部双引号成对转义
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// 将一个单元格值字符串化
///
/// NULL 渲染为 `None`，BLOB 渲染为占位符，其余类型按字面值输出。
fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}

impl Inspector {
    /// 以只读标志打开数据库文件
    ///
    /// # Errors
    /// 文件无法打开（不存在、无权限、非 SQLite 文件等）时返回 SQLite 错误。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        #[cfg(feature = "logging")]
        tracing::debug!("以只读方式打开数据库: {}", path.as_ref().display());

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// 查询目录中的所有表名，按字母顺序排列
    ///
    /// # Errors
    /// 目录查询失败时返回 SQLite 错误。
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        #[cfg(feature = "logging")]
        tracing::debug!("目录中共有 {} 个表", names.len());

        Ok(names)
    }

    /// 统计指定表的总行数
    ///
    /// # Errors
    /// 表不存在或查询失败时返回 SQLite 错误。
    pub fn row_count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    /// 读取指定表的列元数据，保持目录顺序
    ///
    /// # Errors
    /// PRAGMA 查询失败时返回 SQLite 错误。
    pub fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let sql = format!("PRAGMA table_info({})", quote_ident(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    cid: row.get(0)?,
                    name: row.get(1)?,
                    // 声明类型可能缺失，统一回退为空字符串
                    decl_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    not_null: row.get::<_, i64>(3)? != 0,
                    default_value: row.get(4)?,
                    pk_position: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// 组合行数与列元数据，构造一个表描述符
    ///
    /// # Errors
    /// 任一目录查询失败时返回 SQLite 错误。
    pub fn table_info(&self, table: &str) -> Result<TableInfo> {
        Ok(TableInfo {
            name: table.to_string(),
            row_count: self.row_count(table)?,
            columns: self.columns(table)?,
        })
    }

    /// 抽取指定表的前若干行，全部列按字符串返回
    ///
    /// 截断和列数限制由渲染层负责，这里返回完整的行。
    ///
    /// # Errors
    /// 查询或取值失败（例如异常数据无法读取）时返回 SQLite 错误。
    pub fn sample_rows(&self, table: &str, limit: usize) -> Result<Vec<SampleRow>> {
        let sql = format!("SELECT * FROM {} LIMIT ?1", quote_ident(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let column_count = stmt.column_count();
        let rows = stmt
            .query_map([limit as i64], |row| {
                let mut values = Vec::with_capacity(column_count);
                for i in 0..column_count {
                    values.push(value_to_string(row.get_ref(i)?));
                }
                Ok(values)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        #[cfg(feature = "logging")]
        tracing::trace!("表 {} 抽样 {} 行", table, rows.len());

        Ok(rows)
    }

    /// 显式关闭连接
    ///
    /// # Errors
    /// 连接关闭失败时返回 SQLite 错误。
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }
}
