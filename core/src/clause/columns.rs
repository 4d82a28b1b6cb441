use super::{ClauseEmitter, ClauseState, ClauseSyntax};
use crate::sql::Sql;

/// 列清单构建器：SELECT 列、GROUP BY 列等逗号分隔的清单，不带参数
pub struct ColumnList<'a> {
    emitter: ClauseEmitter<'a>,
}

impl<'a> ColumnList<'a> {
    pub(crate) fn new(sql: &'a mut Sql, state: &'a mut ClauseState, syntax: ClauseSyntax) -> Self {
        Self {
            emitter: ClauseEmitter::new(sql, state, syntax),
        }
    }

    pub fn column(&mut self, name: &str) -> &mut Self {
        self.emitter.next_fragment().append(name);
        self
    }

    pub fn columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.column(name.as_ref());
        }
        self
    }

    /// `name AS alias`
    pub fn column_as(&mut self, name: &str, alias: &str) -> &mut Self {
        self.emitter
            .next_fragment()
            .append(name)
            .append(" AS ")
            .append(alias);
        self
    }
}
