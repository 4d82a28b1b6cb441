use super::{ClauseEmitter, ClauseState, ClauseSyntax};
use crate::bind_value::BindValue;
use crate::sql::Sql;

/// REPLACE INTO 的一行数据
///
/// 列名以第一行为准，之后的行按列名重新排列为第一行的顺序。
/// 列集合与第一行不同的行会被丢弃并记录警告。
#[derive(Debug, Default, Clone)]
pub struct ReplaceValues {
    row: Vec<(String, BindValue)>,
}

impl ReplaceValues {
    pub fn value(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.row.push((column.to_string(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    /// `columns` 保存第一行的列名，由门面持有
    pub(crate) fn emit(self, sql: &mut Sql, state: &mut ClauseState, columns: &mut Vec<String>) {
        if self.row.is_empty() {
            return;
        }
        let values = if state.is_started() {
            match self.aligned_to(columns) {
                Some(values) => values,
                None => {
                    let row: Vec<&str> = self.row.iter().map(|(c, _)| c.as_str()).collect();
                    tracing::warn!(
                        expected = %columns.join(","),
                        got = %row.join(","),
                        "skipping REPLACE row whose columns differ from the first row"
                    );
                    return;
                }
            }
        } else {
            columns.clear();
            columns.extend(self.row.iter().map(|(c, _)| c.clone()));
            sql.append(" (").append(&columns.join(",")).append(")");
            self.row.into_iter().map(|(_, v)| v).collect()
        };
        let placeholders = vec!["?"; values.len()].join(",");
        ClauseEmitter::new(sql, state, ClauseSyntax::VALUES)
            .next_fragment()
            .append("(")
            .append(&placeholders)
            .append(")")
            .add_params(values);
    }

    /// 按 `columns` 的顺序取值；列集合不一致时返回 None
    fn aligned_to(&self, columns: &[String]) -> Option<Vec<BindValue>> {
        if self.row.len() != columns.len() {
            return None;
        }
        columns
            .iter()
            .map(|column| {
                self.row
                    .iter()
                    .find(|(c, _)| c == column)
                    .map(|(_, v)| v.clone())
            })
            .collect()
    }
}
