//! Replace Builder - REPLACE INTO 语句门面

use super::select_builder::SelectSql;
use crate::clause::{ClauseState, ClauseSyntax, ColumnList, ReplaceValues};
use crate::mapper::Mapper;
use crate::sql::{Sql, Statement};

/// REPLACE INTO 语句构建器
///
/// `values` 每调用一次追加一行；`select_from` 用查询结果作为数据来源。
/// 两者不要混用。
#[derive(Debug, Clone, Default)]
pub struct ReplaceSql {
    sql: Sql,
    values_state: ClauseState,
    columns: Vec<String>,
}

/// `REPLACE INTO <table>`
pub fn replace_into(table: &str) -> ReplaceSql {
    ReplaceSql::new(table)
}

impl ReplaceSql {
    pub fn new(table: &str) -> Self {
        let mut sql = Sql::new();
        sql.append("REPLACE INTO ").append(table);
        Self {
            sql,
            values_state: ClauseState::default(),
            columns: Vec::new(),
        }
    }

    /// 以模型的全部列生成单行 REPLACE INTO
    pub fn of<M: Mapper>(model: &M) -> Self {
        Self::new(M::TABLE).values(|row| {
            for (column, value) in model.values() {
                row.value(column, value);
            }
        })
    }

    /// 追加一行数据（链式调用，可多次调用）
    ///
    /// 第一行决定列名和列顺序，之后的行按列名对齐；列集合不同的行会被丢弃。
    pub fn values<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ReplaceValues),
    {
        let mut row = ReplaceValues::default();
        f(&mut row);
        row.emit(&mut self.sql, &mut self.values_state, &mut self.columns);
        self
    }

    /// `REPLACE INTO <table> (c1,c2) SELECT ...`
    pub fn select_from<I, S>(mut self, columns: I, select: &SelectSql) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut column_sql = Sql::new();
        let mut state = ClauseState::default();
        ColumnList::new(&mut column_sql, &mut state, ClauseSyntax::COLUMNS).columns(columns);
        if state.is_started() {
            self.sql.append(" (").append_sql(&column_sql).append(")");
        }
        self.sql.append(" ").append_sql(select.sql());
        self
    }

    pub fn sql(&self) -> &Sql {
        &self.sql
    }

    /// 生成语句快照，不修改构建器，可重复调用
    pub fn build(&self) -> Statement {
        let statement = self.sql.to_statement();
        tracing::debug!(
            sql = %statement.sql(),
            params = statement.params().len(),
            "built replace statement"
        );
        statement
    }
}
