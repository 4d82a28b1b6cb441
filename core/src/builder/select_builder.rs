//! Select Builder - SELECT 语句门面

use crate::clause::{ClauseEmitter, ClauseState, ClauseSyntax, ColumnList, Conditions, Having, Where};
use crate::mapper::Mapper;
use crate::sql::{Sql, Statement};

/// SELECT 语句构建器
///
/// 独占一个 [`Sql`]，每类子句各持有一个 [`ClauseState`]，因此多次调用
/// `where_` / `having` 会累加到同一个子句上。
///
/// ```ignore
/// let stmt = select(["id", "name"])
///     .from("users")
///     .where_(|w| {
///         w.gt("age", 18).eq("name", "Bob");
///     })
///     .build();
/// assert_eq!(stmt.sql(), "SELECT id,name FROM users WHERE age > ? AND name = ?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectSql {
    sql: Sql,
    where_state: ClauseState,
    having_state: ClauseState,
    group_by_state: ClauseState,
    order_by_state: ClauseState,
}

/// `SELECT c1,c2`，列为空时输出 `SELECT *`
pub fn select<I, S>(columns: I) -> SelectSql
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SelectSql::new(columns)
}

/// 通过回调配置列清单
pub fn select_with<F>(f: F) -> SelectSql
where
    F: FnOnce(&mut ColumnList<'_>),
{
    SelectSql::with_columns(f)
}

impl SelectSql {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_columns(|c| {
            c.columns(columns);
        })
    }

    pub fn with_columns<F>(f: F) -> Self
    where
        F: FnOnce(&mut ColumnList<'_>),
    {
        let mut sql = Sql::new();
        sql.append("SELECT ");
        let mut columns = ClauseState::default();
        f(&mut ColumnList::new(&mut sql, &mut columns, ClauseSyntax::COLUMNS));
        if !columns.is_started() {
            sql.append("*");
        }
        Self {
            sql,
            ..Self::default()
        }
    }

    /// `SELECT <COLUMNS> FROM <TABLE>`
    pub fn of<M: Mapper>() -> Self {
        Self::new(M::COLUMNS).from(M::TABLE)
    }

    pub fn from(mut self, table: &str) -> Self {
        self.sql.append(" FROM ").append(table);
        self
    }

    pub fn join(self, table: &str, on: &str) -> Self {
        self.join_with("JOIN", table, on)
    }

    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.join_with("LEFT JOIN", table, on)
    }

    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.join_with("RIGHT JOIN", table, on)
    }

    fn join_with(mut self, kind: &str, table: &str, on: &str) -> Self {
        self.sql
            .append(" ")
            .append(kind)
            .append(" ")
            .append(table)
            .append(" ON ")
            .append(on);
        self
    }

    /// 配置 WHERE 子句（链式调用，可多次调用，条件之间用 AND 连接）
    pub fn where_<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Where<'_>),
    {
        f(&mut Conditions::new(
            &mut self.sql,
            &mut self.where_state,
            ClauseSyntax::WHERE,
        ));
        self
    }

    /// 配置 HAVING 子句（链式调用，可多次调用）
    pub fn having<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Having<'_>),
    {
        f(&mut Conditions::new(
            &mut self.sql,
            &mut self.having_state,
            ClauseSyntax::HAVING,
        ));
        self
    }

    /// 添加 GROUP BY 字段（链式调用，可多次调用添加多个字段）
    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ColumnList::new(
            &mut self.sql,
            &mut self.group_by_state,
            ClauseSyntax::GROUP_BY,
        )
        .columns(columns);
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        let mut emitter = ClauseEmitter::new(
            &mut self.sql,
            &mut self.order_by_state,
            ClauseSyntax::ORDER_BY,
        );
        let sql = emitter.next_fragment();
        sql.append(column);
        if !ascending {
            sql.append(" DESC");
        }
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.sql.append(&format!(" LIMIT {}", n));
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.sql.append(&format!(" OFFSET {}", n));
        self
    }

    /// 当前的语句核心（只读）
    pub fn sql(&self) -> &Sql {
        &self.sql
    }

    /// 生成语句快照，不修改构建器，可重复调用
    pub fn build(&self) -> Statement {
        let statement = self.sql.to_statement();
        tracing::debug!(
            sql = %statement.sql(),
            params = statement.params().len(),
            "built select statement"
        );
        statement
    }
}
