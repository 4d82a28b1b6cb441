//! sqlx 参数绑定桥接
//!
//! 只负责把 [`BindValue`] 按顺序交给 sqlx，执行由调用方完成：
//!
//! ```ignore
//! let stmt = select(["id", "name"]).from("users").where_(|w| { w.eq("id", 1i64); }).build();
//! let sql = stmt.to_sql(DbDriver::Postgres);
//! let rows = minisql::bind::bind_all(sqlx::query(&sql), stmt.params())
//!     .fetch_all(&pool)
//!     .await?;
//! ```

use crate::bind_value::BindValue;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::Database;

/// 各数据库对 Decimal 的绑定方式
///
/// PostgreSQL / MySQL 以 NUMERIC / DECIMAL 绑定；SQLite 没有对应类型，以字符串绑定。
pub trait BindDialect: Database {
    fn bind_decimal<'q>(
        query: Query<'q, Self, <Self as Database>::Arguments<'q>>,
        value: &BigDecimal,
    ) -> Query<'q, Self, <Self as Database>::Arguments<'q>>;
}

#[cfg(feature = "postgres")]
impl BindDialect for sqlx::Postgres {
    fn bind_decimal<'q>(
        query: Query<'q, Self, <Self as Database>::Arguments<'q>>,
        value: &BigDecimal,
    ) -> Query<'q, Self, <Self as Database>::Arguments<'q>> {
        query.bind(value.clone())
    }
}

#[cfg(feature = "mysql")]
impl BindDialect for sqlx::MySql {
    fn bind_decimal<'q>(
        query: Query<'q, Self, <Self as Database>::Arguments<'q>>,
        value: &BigDecimal,
    ) -> Query<'q, Self, <Self as Database>::Arguments<'q>> {
        query.bind(value.clone())
    }
}

#[cfg(feature = "sqlite")]
impl BindDialect for sqlx::Sqlite {
    fn bind_decimal<'q>(
        query: Query<'q, Self, <Self as Database>::Arguments<'q>>,
        value: &BigDecimal,
    ) -> Query<'q, Self, <Self as Database>::Arguments<'q>> {
        query.bind(value.to_string())
    }
}

/// 宏：把单个绑定值应用到 sqlx 查询对象上
#[macro_export]
macro_rules! apply_bind_value {
    ($db:ty, $query:expr, $bind:expr) => {
        match $bind {
            $crate::BindValue::String(s) => {
                $query = $query.bind(s.clone());
            }
            $crate::BindValue::Int64(i) => {
                $query = $query.bind(*i);
            }
            $crate::BindValue::Int32(i) => {
                $query = $query.bind(*i);
            }
            $crate::BindValue::Int16(i) => {
                $query = $query.bind(*i);
            }
            $crate::BindValue::Float64(f) => {
                $query = $query.bind(*f);
            }
            $crate::BindValue::Float32(f) => {
                $query = $query.bind(*f);
            }
            $crate::BindValue::Bool(b) => {
                $query = $query.bind(*b);
            }
            $crate::BindValue::Bytes(b) => {
                $query = $query.bind(b.clone());
            }
            $crate::BindValue::Decimal(d) => {
                $query = <$db as $crate::bind::BindDialect>::bind_decimal($query, d);
            }
            $crate::BindValue::DateTime(dt) => {
                $query = $query.bind(*dt);
            }
            $crate::BindValue::Date(d) => {
                $query = $query.bind(*d);
            }
            $crate::BindValue::Time(t) => {
                $query = $query.bind(*t);
            }
            $crate::BindValue::Json(v) => {
                $query = $query.bind(::sqlx::types::Json(v.clone()));
            }
            $crate::BindValue::Null => {
                $query = $query.bind(Option::<String>::None);
            }
        }
    };
}

/// 按顺序绑定全部参数
pub fn bind_all<'q, DB>(
    mut query: Query<'q, DB, DB::Arguments<'q>>,
    binds: &'q [BindValue],
) -> Query<'q, DB, DB::Arguments<'q>>
where
    DB: BindDialect,
    for<'a> DB::Arguments<'a>: sqlx::IntoArguments<'a, DB>,
    String: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    i64: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    i32: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    i16: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    f64: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    f32: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    bool: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    Vec<u8>: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    NaiveDateTime: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    NaiveDate: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    NaiveTime: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    Json<serde_json::Value>: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
    Option<String>: sqlx::Type<DB> + for<'b> sqlx::Encode<'b, DB>,
{
    for bind in binds {
        crate::apply_bind_value!(DB, query, bind);
    }
    query
}
