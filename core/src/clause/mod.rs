//! 子句构建器
//!
//! 所有子句共享同一套输出规则：第一段片段前输出子句关键字，之后每段片段前
//! 输出分隔符；一段片段都没有时什么也不输出。

pub mod columns;
pub mod conditions;
pub mod values;

pub use columns::ColumnList;
pub use conditions::{Conditions, Having, Operator, Where};
pub use values::ReplaceValues;

use crate::sql::Sql;

/// 某一类子句是否已经输出过片段
///
/// 由门面持有，同类子句多次配置时会累加到同一个子句上。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClauseState {
    started: bool,
}

impl ClauseState {
    pub fn is_started(&self) -> bool {
        self.started
    }
}

/// 子句关键字与分隔符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClauseSyntax {
    pub keyword: &'static str,
    pub separator: &'static str,
}

impl ClauseSyntax {
    pub const WHERE: ClauseSyntax = ClauseSyntax {
        keyword: " WHERE ",
        separator: " AND ",
    };
    pub const HAVING: ClauseSyntax = ClauseSyntax {
        keyword: " HAVING ",
        separator: " AND ",
    };
    pub const COLUMNS: ClauseSyntax = ClauseSyntax {
        keyword: "",
        separator: ",",
    };
    pub const GROUP_BY: ClauseSyntax = ClauseSyntax {
        keyword: " GROUP BY ",
        separator: ",",
    };
    pub const ORDER_BY: ClauseSyntax = ClauseSyntax {
        keyword: " ORDER BY ",
        separator: ", ",
    };
    pub const VALUES: ClauseSyntax = ClauseSyntax {
        keyword: " VALUES ",
        separator: ",",
    };
    pub const AND_GROUP: ClauseSyntax = ClauseSyntax {
        keyword: "",
        separator: " AND ",
    };
    pub const OR_GROUP: ClauseSyntax = ClauseSyntax {
        keyword: "",
        separator: " OR ",
    };
}

/// 子句输出器：借用语句核心和子句状态，负责关键字和分隔符
pub(crate) struct ClauseEmitter<'a> {
    sql: &'a mut Sql,
    state: &'a mut ClauseState,
    syntax: ClauseSyntax,
}

impl<'a> ClauseEmitter<'a> {
    pub fn new(sql: &'a mut Sql, state: &'a mut ClauseState, syntax: ClauseSyntax) -> Self {
        Self { sql, state, syntax }
    }

    /// 输出一段片段之前调用，返回语句核心以便追加片段文本和参数
    pub fn next_fragment(&mut self) -> &mut Sql {
        if self.state.started {
            self.sql.append(self.syntax.separator);
        } else {
            self.sql.append(self.syntax.keyword);
            self.state.started = true;
        }
        &mut *self.sql
    }
}
