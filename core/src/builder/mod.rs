//! 语句门面模块
//!
//! 提供 SelectSql 和 ReplaceSql，分别负责 SELECT 和 REPLACE INTO 语句的组装。
//! 子句按调用顺序写入缓冲区，调用方需要按 SQL 语法顺序配置子句
//! （FROM / JOIN → WHERE → GROUP BY → HAVING → ORDER BY → LIMIT / OFFSET）。

pub mod replace_builder;
pub mod select_builder;

pub use replace_builder::{replace_into, ReplaceSql};
pub use select_builder::{select, select_with, SelectSql};
