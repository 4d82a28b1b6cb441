//! 占位符方言
//!
//! 构建器内部统一使用 `?` 作为占位符，渲染时再根据驱动类型转换。

use crate::error::{Result, SqlError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbDriver {
    #[default]
    MySql,
    Postgres,
    Sqlite,
}

impl DbDriver {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("mysql://") || url.starts_with("mariadb://") {
            Ok(DbDriver::MySql)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbDriver::Postgres)
        } else if url.starts_with("sqlite://") || url.starts_with("sqlite:") {
            Ok(DbDriver::Sqlite)
        } else {
            Err(SqlError::UnsupportedDatabase(url.to_string()))
        }
    }

    /// 第 `index` 个（从 0 开始）参数的占位符
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            DbDriver::MySql | DbDriver::Sqlite => "?".to_string(),
            DbDriver::Postgres => format!("${}", index + 1),
        }
    }

    /// 将 `?` 占位符转换为当前驱动的写法
    ///
    /// 字符串字面量和带引号的标识符内的 `?` 保持原样，规则见 [`placeholder_offsets`]。
    pub fn convert_placeholders(&self, sql: &str) -> String {
        match self {
            DbDriver::MySql | DbDriver::Sqlite => sql.to_string(),
            DbDriver::Postgres => {
                let mut result = String::with_capacity(sql.len() + 8);
                let mut last = 0;
                for (index, offset) in placeholder_offsets(sql).into_iter().enumerate() {
                    result.push_str(&sql[last..offset]);
                    result.push_str(&self.placeholder(index));
                    last = offset + 1;
                }
                result.push_str(&sql[last..]);
                result
            }
        }
    }
}

/// 统计 SQL 文本中（引号之外）的 `?` 占位符个数
pub fn count_placeholders(sql: &str) -> usize {
    placeholder_offsets(sql).len()
}

/// 找出所有占位符 `?` 的字节偏移
///
/// 跳过 `'...'` 字符串、`"..."` 和 `` `...` `` 标识符；连写的引号（`''`）
/// 相当于先闭合再打开，结果不变。单引号字符串内的 `\` 转义下一个字符，
/// 与 MySQL 默认行为一致；PostgreSQL 的 `standard_conforming_strings`
/// 下反斜杠不是转义符，`'...\'` 这样以反斜杠结尾的字面量会被误判。
/// 注释（`--`、`/* */`）不做识别。
pub(crate) fn placeholder_offsets(sql: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (offset, ch) in sql.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some('\'') if ch == '\\' => escaped = true,
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '?' => offsets.push(offset),
                _ => {}
            },
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        assert_eq!(DbDriver::from_url("mysql://root@localhost/db"), Ok(DbDriver::MySql));
        assert_eq!(DbDriver::from_url("mariadb://localhost"), Ok(DbDriver::MySql));
        assert_eq!(DbDriver::from_url("postgresql://localhost"), Ok(DbDriver::Postgres));
        assert_eq!(DbDriver::from_url("sqlite::memory:"), Ok(DbDriver::Sqlite));
        assert_eq!(
            DbDriver::from_url("oracle://localhost"),
            Err(SqlError::UnsupportedDatabase("oracle://localhost".to_string()))
        );
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(DbDriver::MySql.placeholder(3), "?");
        assert_eq!(DbDriver::Sqlite.placeholder(0), "?");
        assert_eq!(DbDriver::Postgres.placeholder(0), "$1");
        assert_eq!(DbDriver::Postgres.placeholder(4), "$5");
    }

    #[test]
    fn test_convert_placeholders_postgres() {
        let sql = "SELECT * FROM users WHERE id = ? AND name = ?";
        assert_eq!(
            DbDriver::Postgres.convert_placeholders(sql),
            "SELECT * FROM users WHERE id = $1 AND name = $2"
        );
        assert_eq!(DbDriver::MySql.convert_placeholders(sql), sql);
    }

    #[test]
    fn test_convert_skips_literals() {
        let sql = "SELECT * FROM t WHERE a = '?' AND b = ?";
        assert_eq!(
            DbDriver::Postgres.convert_placeholders(sql),
            "SELECT * FROM t WHERE a = '?' AND b = $1"
        );
        assert_eq!(count_placeholders(sql), 1);
    }

    #[test]
    fn test_escaped_quotes_and_quoted_identifiers() {
        let sql = r#"SELECT * FROM t WHERE a = 'it\'s ?' AND "we'ird?" = ? AND `b?` = ? AND c = 'x''?'"#;
        assert_eq!(count_placeholders(sql), 2);
        assert_eq!(
            DbDriver::Postgres.convert_placeholders(sql),
            r#"SELECT * FROM t WHERE a = 'it\'s ?' AND "we'ird?" = $1 AND `b?` = $2 AND c = 'x''?'"#
        );
    }

    #[test]
    fn test_placeholder_offsets() {
        assert_eq!(placeholder_offsets("a = ? AND b = ?"), vec![4, 14]);
        assert_eq!(placeholder_offsets("'?' ?"), vec![4]);
        assert!(placeholder_offsets("note = '\\?'").is_empty());
    }
}
