use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 绑定值，用于安全地传递参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BindValue {
    String(String),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Float64(f64),
    Float32(f32),
    Bool(bool),
    Bytes(Vec<u8>),
    Decimal(BigDecimal),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Json(serde_json::Value),
    Null,
}

impl BindValue {
    /// 渲染为 SQL 字面量，仅用于日志和调试，不要拿去执行
    pub fn to_sql_value(&self) -> String {
        match self {
            BindValue::String(s) => quote_literal(s),
            BindValue::Int64(i) => i.to_string(),
            BindValue::Int32(i) => i.to_string(),
            BindValue::Int16(i) => i.to_string(),
            BindValue::Float64(f) => f.to_string(),
            BindValue::Float32(f) => f.to_string(),
            BindValue::Bool(b) => b.to_string(),
            BindValue::Bytes(b) => format!("X'{}'", hex(b)),
            BindValue::Decimal(d) => d.to_string(),
            BindValue::DateTime(_) | BindValue::Date(_) | BindValue::Time(_) => {
                quote_literal(&self.to_string())
            }
            BindValue::Json(v) => quote_literal(&v.to_string()),
            BindValue::Null => "NULL".to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BindValue::Null)
    }
}

fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::String(s) => f.write_str(s),
            BindValue::Int64(i) => write!(f, "{}", i),
            BindValue::Int32(i) => write!(f, "{}", i),
            BindValue::Int16(i) => write!(f, "{}", i),
            BindValue::Float64(v) => write!(f, "{}", v),
            BindValue::Float32(v) => write!(f, "{}", v),
            BindValue::Bool(b) => write!(f, "{}", b),
            BindValue::Bytes(b) => f.write_str(&hex(b)),
            BindValue::Decimal(d) => write!(f, "{}", d),
            BindValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            BindValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            BindValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            BindValue::Json(v) => write!(f, "{}", v),
            BindValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::String(s)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::String(s.to_string())
    }
}

impl From<&String> for BindValue {
    fn from(s: &String) -> Self {
        BindValue::String(s.clone())
    }
}

impl From<i64> for BindValue {
    fn from(i: i64) -> Self {
        BindValue::Int64(i)
    }
}

impl From<i32> for BindValue {
    fn from(i: i32) -> Self {
        BindValue::Int32(i)
    }
}

impl From<i16> for BindValue {
    fn from(i: i16) -> Self {
        BindValue::Int16(i)
    }
}

impl From<i8> for BindValue {
    fn from(i: i8) -> Self {
        BindValue::Int16(i as i16)
    }
}

impl From<u32> for BindValue {
    fn from(i: u32) -> Self {
        BindValue::Int64(i as i64)
    }
}

impl From<u16> for BindValue {
    fn from(i: u16) -> Self {
        BindValue::Int32(i as i32)
    }
}

impl From<u8> for BindValue {
    fn from(i: u8) -> Self {
        BindValue::Int16(i as i16)
    }
}

impl From<f64> for BindValue {
    fn from(f: f64) -> Self {
        BindValue::Float64(f)
    }
}

impl From<f32> for BindValue {
    fn from(f: f32) -> Self {
        BindValue::Float32(f)
    }
}

impl From<bool> for BindValue {
    fn from(b: bool) -> Self {
        BindValue::Bool(b)
    }
}

impl From<Vec<u8>> for BindValue {
    fn from(b: Vec<u8>) -> Self {
        BindValue::Bytes(b)
    }
}

impl From<BigDecimal> for BindValue {
    fn from(d: BigDecimal) -> Self {
        BindValue::Decimal(d)
    }
}

impl From<NaiveDateTime> for BindValue {
    fn from(dt: NaiveDateTime) -> Self {
        BindValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(dt: DateTime<Utc>) -> Self {
        BindValue::DateTime(dt.naive_utc())
    }
}

impl From<NaiveDate> for BindValue {
    fn from(d: NaiveDate) -> Self {
        BindValue::Date(d)
    }
}

impl From<NaiveTime> for BindValue {
    fn from(t: NaiveTime) -> Self {
        BindValue::Time(t)
    }
}

impl From<serde_json::Value> for BindValue {
    fn from(v: serde_json::Value) -> Self {
        BindValue::Json(v)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(BindValue::Null, Into::into)
    }
}
