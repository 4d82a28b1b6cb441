//! 语句核心：SQL 文本缓冲区 + 有序参数列表
//!
//! `Sql` 只负责原样追加文本和参数，不做任何校验；占位符与参数的对齐由
//! 子句构建器保证。调用 [`Sql::to_statement`] 得到不可变的 [`Statement`] 快照。

use crate::bind_value::BindValue;
use crate::db_driver::{count_placeholders, placeholder_offsets, DbDriver};
use crate::error::{Result, SqlError};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sql {
    content: String,
    params: Vec<BindValue>,
}

impl Sql {
    pub fn new() -> Self {
        Self::default()
    }

    /// 原样追加一段 SQL 文本
    pub fn append(&mut self, fragment: &str) -> &mut Self {
        self.content.push_str(fragment);
        self
    }

    /// 按顺序追加参数
    pub fn add_params<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        self.params.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn add_param(&mut self, value: impl Into<BindValue>) -> &mut Self {
        self.params.push(value.into());
        self
    }

    /// 合并另一个语句：先追加其文本，再追加其参数
    pub fn append_sql(&mut self, other: &Sql) -> &mut Self {
        self.content.push_str(&other.content);
        self.params.extend_from_slice(&other.params);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_to_string(&self) -> String {
        self.content.clone()
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    pub fn params_to_vec(&self) -> Vec<BindValue> {
        self.params.clone()
    }

    pub fn params_to_strings(&self) -> Vec<String> {
        self.params.iter().map(ToString::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.params.is_empty()
    }

    pub fn to_statement(&self) -> Statement {
        Statement {
            sql: self.content.clone(),
            params: self.params.clone(),
        }
    }
}

/// 构建完成的语句：SQL 文本（`?` 占位符）与按位置对应的参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    sql: String,
    params: Vec<BindValue>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    pub fn params_to_strings(&self) -> Vec<String> {
        self.params.iter().map(ToString::to_string).collect()
    }

    pub fn into_parts(self) -> (String, Vec<BindValue>) {
        (self.sql, self.params)
    }

    /// 按驱动方言渲染占位符（PostgreSQL 为 `$1, $2, ...`）
    pub fn to_sql(&self, driver: DbDriver) -> String {
        driver.convert_placeholders(&self.sql)
    }

    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.sql)
    }

    /// 检查占位符数量与参数数量是否一致
    ///
    /// 构建器本身不会产生不一致，但 `raw` 片段由调用方负责。
    pub fn check(&self) -> Result<()> {
        let placeholders = self.placeholder_count();
        if placeholders != self.params.len() {
            tracing::warn!(
                sql = %self.sql,
                placeholders,
                params = self.params.len(),
                "placeholder count does not match parameter count"
            );
            return Err(SqlError::PlaceholderMismatch {
                placeholders,
                params: self.params.len(),
            });
        }
        Ok(())
    }

    /// 将参数内联为字面量，得到便于阅读的 SQL，仅用于日志
    ///
    /// 引号内的 `?` 不会被替换；参数不足时保留多出的 `?`。
    pub fn interpolate(&self) -> String {
        let mut result = String::with_capacity(self.sql.len());
        let mut params = self.params.iter();
        let mut last = 0;
        for offset in placeholder_offsets(&self.sql) {
            let Some(value) = params.next() else {
                break;
            };
            result.push_str(&self.sql[last..offset]);
            result.push_str(&value.to_sql_value());
            last = offset + 1;
        }
        result.push_str(&self.sql[last..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_params() {
        let mut sql = Sql::new();
        sql.append("SELECT * FROM users WHERE id = ?")
            .add_params([1i64])
            .append(" AND name = ?")
            .add_param("bob");
        assert_eq!(sql.content(), "SELECT * FROM users WHERE id = ? AND name = ?");
        assert_eq!(
            sql.params(),
            &[BindValue::Int64(1), BindValue::String("bob".to_string())]
        );
        assert_eq!(sql.params_to_strings(), vec!["1", "bob"]);
    }

    #[test]
    fn test_empty() {
        let sql = Sql::new();
        assert!(sql.is_empty());
        assert_eq!(sql.content_to_string(), "");
        assert!(sql.params_to_vec().is_empty());
    }

    #[test]
    fn test_append_sql() {
        let mut inner = Sql::new();
        inner.append("SELECT id FROM a WHERE x = ?").add_param(1);
        let mut outer = Sql::new();
        outer.append("INSERT INTO b (id) ").append_sql(&inner);
        assert_eq!(outer.content(), "INSERT INTO b (id) SELECT id FROM a WHERE x = ?");
        assert_eq!(outer.params(), &[BindValue::Int32(1)]);
    }

    #[test]
    fn test_statement_is_a_snapshot() {
        let mut sql = Sql::new();
        sql.append("SELECT 1 WHERE a = ?").add_param(1);
        let stmt = sql.to_statement();
        sql.append(" AND b = ?").add_param(2);
        assert_eq!(stmt.sql(), "SELECT 1 WHERE a = ?");
        assert_eq!(stmt.params().len(), 1);
    }

    #[test]
    fn test_check() {
        let mut sql = Sql::new();
        sql.append("SELECT * FROM t WHERE a = ? AND b = ?").add_param(1);
        assert_eq!(
            sql.to_statement().check(),
            Err(SqlError::PlaceholderMismatch {
                placeholders: 2,
                params: 1
            })
        );
        sql.add_param(2);
        assert!(sql.to_statement().check().is_ok());
    }

    #[test]
    fn test_to_sql_postgres() {
        let mut sql = Sql::new();
        sql.append("SELECT * FROM t WHERE a = ? AND b = ?").add_params([1, 2]);
        let stmt = sql.to_statement();
        assert_eq!(
            stmt.to_sql(DbDriver::Postgres),
            "SELECT * FROM t WHERE a = $1 AND b = $2"
        );
        assert_eq!(stmt.to_sql(DbDriver::Sqlite), stmt.sql());
    }

    #[test]
    fn test_interpolate() {
        let mut sql = Sql::new();
        sql.append("SELECT * FROM t WHERE name = ? AND note = '?' AND age > ?")
            .add_param("O'Brien")
            .add_param(18);
        assert_eq!(
            sql.to_statement().interpolate(),
            "SELECT * FROM t WHERE name = 'O''Brien' AND note = '?' AND age > 18"
        );
    }

    #[test]
    fn test_into_parts() {
        let mut sql = Sql::new();
        sql.append("DELETE FROM t WHERE id = ?").add_param(9i64);
        let (text, params) = sql.to_statement().into_parts();
        assert_eq!(text, "DELETE FROM t WHERE id = ?");
        assert_eq!(params, vec![BindValue::Int64(9)]);
    }

    #[test]
    fn test_interpolate_skips_escaped_and_identifier_quotes() {
        let mut sql = Sql::new();
        sql.append(r#"SELECT * FROM t WHERE note = 'it\'s ?' AND "col?" = ? AND id = ?"#)
            .add_param("x")
            .add_param(7i64);
        let stmt = sql.to_statement();
        assert!(stmt.check().is_ok());
        assert_eq!(
            stmt.interpolate(),
            r#"SELECT * FROM t WHERE note = 'it\'s ?' AND "col?" = 'x' AND id = 7"#
        );
    }
}
