//! minisql：流式 SQL 语句构建器
//!
//! 通过回调配置子句，生成带 `?` 占位符的 SQL 文本和按顺序排列的绑定参数，
//! 本身不执行任何语句。

pub mod bind_value;
pub mod builder;
pub mod clause;
pub mod db_driver;
pub mod error;
pub mod mapper;
pub mod sql;

#[cfg(feature = "sqlx")]
pub mod bind;

pub use bind_value::BindValue;
pub use builder::{replace_into, select, select_with, ReplaceSql, SelectSql};
pub use clause::{ColumnList, Conditions, Having, Operator, ReplaceValues, Where};
pub use db_driver::DbDriver;
pub use mapper::Mapper;
pub use sql::{Sql, Statement};

// 重新导出 derive 的所有公共 API（宏）
pub use error::{Result, SqlError};
pub use minisql_derive::*;
