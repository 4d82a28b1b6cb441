use super::{ClauseEmitter, ClauseState, ClauseSyntax};
use crate::bind_value::BindValue;
use crate::sql::Sql;

/// SQL 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// 等于: =
    Eq,
    /// 不等于: !=
    Ne,
    /// 大于: >
    Gt,
    /// 大于等于: >=
    Ge,
    /// 小于: <
    Lt,
    /// 小于等于: <=
    Le,
    /// LIKE 匹配
    Like,
    /// NOT LIKE 匹配
    NotLike,
}

impl Operator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }
}

/// 条件构建器，WHERE 和 HAVING 共用
///
/// 每个条件在同一次调用中追加文本和参数，占位符和参数始终按顺序一一对应。
/// 条件之间默认用 `AND` 连接，`any` / `all` 用于构造带括号的 OR / AND 分组。
pub struct Conditions<'a> {
    emitter: ClauseEmitter<'a>,
}

pub type Where<'a> = Conditions<'a>;
pub type Having<'a> = Conditions<'a>;

impl<'a> Conditions<'a> {
    pub(crate) fn new(sql: &'a mut Sql, state: &'a mut ClauseState, syntax: ClauseSyntax) -> Self {
        Self {
            emitter: ClauseEmitter::new(sql, state, syntax),
        }
    }

    /// `<column> <op> ?`
    pub fn cond(&mut self, column: &str, op: Operator, value: impl Into<BindValue>) -> &mut Self {
        self.emitter
            .next_fragment()
            .append(column)
            .append(" ")
            .append(op.as_sql())
            .append(" ?")
            .add_param(value);
        self
    }

    pub fn eq(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Eq, value)
    }

    pub fn ne(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Ne, value)
    }

    pub fn gt(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Gt, value)
    }

    pub fn ge(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Ge, value)
    }

    pub fn lt(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Lt, value)
    }

    pub fn le(&mut self, column: &str, value: impl Into<BindValue>) -> &mut Self {
        self.cond(column, Operator::Le, value)
    }

    /// LIKE 自定义模式匹配（模式原样绑定）
    pub fn like(&mut self, column: &str, pattern: impl Into<String>) -> &mut Self {
        self.cond(column, Operator::Like, pattern.into())
    }

    pub fn not_like(&mut self, column: &str, pattern: impl Into<String>) -> &mut Self {
        self.cond(column, Operator::NotLike, pattern.into())
    }

    /// LIKE 包含匹配（%value%）
    pub fn contains(&mut self, column: &str, value: impl Into<String>) -> &mut Self {
        self.like(column, format!("%{}%", value.into()))
    }

    /// LIKE 前缀匹配（value%）
    pub fn like_prefix(&mut self, column: &str, value: impl Into<String>) -> &mut Self {
        self.like(column, format!("{}%", value.into()))
    }

    /// LIKE 后缀匹配（%value）
    pub fn like_suffix(&mut self, column: &str, value: impl Into<String>) -> &mut Self {
        self.like(column, format!("%{}", value.into()))
    }

    pub fn is_null(&mut self, column: &str) -> &mut Self {
        self.emitter.next_fragment().append(column).append(" IS NULL");
        self
    }

    pub fn is_not_null(&mut self, column: &str) -> &mut Self {
        self.emitter.next_fragment().append(column).append(" IS NOT NULL");
        self
    }

    /// `<column> IN (?, ?, ...)`，空列表输出恒假条件 `1 = 0`
    pub fn in_list<I, V>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        self.membership(column, "IN", "1 = 0", values)
    }

    /// `<column> NOT IN (?, ?, ...)`，空列表输出恒真条件 `1 = 1`
    pub fn not_in<I, V>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        self.membership(column, "NOT IN", "1 = 1", values)
    }

    fn membership<I, V>(&mut self, column: &str, keyword: &str, when_empty: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        let values: Vec<BindValue> = values.into_iter().map(Into::into).collect();
        let sql = self.emitter.next_fragment();
        if values.is_empty() {
            sql.append(when_empty);
            return self;
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        sql.append(column)
            .append(" ")
            .append(keyword)
            .append(" (")
            .append(&placeholders)
            .append(")")
            .add_params(values);
        self
    }

    /// `<column> BETWEEN ? AND ?`
    pub fn between(
        &mut self,
        column: &str,
        low: impl Into<BindValue>,
        high: impl Into<BindValue>,
    ) -> &mut Self {
        self.emitter
            .next_fragment()
            .append(column)
            .append(" BETWEEN ? AND ?")
            .add_param(low)
            .add_param(high);
        self
    }

    /// 原样追加一段条件片段及其参数，参数个数需与片段中的 `?` 一致
    pub fn raw<I, V>(&mut self, fragment: &str, params: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        self.emitter.next_fragment().append(fragment).add_params(params);
        self
    }

    /// 原样追加一段不带参数的条件片段
    pub fn expr(&mut self, fragment: &str) -> &mut Self {
        self.emitter.next_fragment().append(fragment);
        self
    }

    /// 带括号的 OR 分组：`(a = ? OR b = ?)`，分组为空时不输出
    pub fn any<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Conditions<'_>),
    {
        self.group(ClauseSyntax::OR_GROUP, f)
    }

    /// 带括号的 AND 分组，通常嵌套在 `any` 中使用
    pub fn all<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Conditions<'_>),
    {
        self.group(ClauseSyntax::AND_GROUP, f)
    }

    fn group<F>(&mut self, syntax: ClauseSyntax, f: F) -> &mut Self
    where
        F: FnOnce(&mut Conditions<'_>),
    {
        // 先输出到临时缓冲区，确认非空后再连同分隔符一起写入
        let mut inner = Sql::new();
        let mut state = ClauseState::default();
        f(&mut Conditions::new(&mut inner, &mut state, syntax));
        if state.is_started() {
            self.emitter
                .next_fragment()
                .append("(")
                .append_sql(&inner)
                .append(")");
        }
        self
    }
}
