use crate::bind_value::BindValue;

/// 表映射元数据，通常由 `#[derive(Mapper)]` 生成
///
/// ```ignore
/// #[derive(Mapper)]
/// #[mapper(table = "region")]
/// struct Region {
///     region_id: i64,
///     #[column(name = "region_name")]
///     name: String,
///     #[skip]
///     children: Vec<Region>,
/// }
///
/// let stmt = SelectSql::of::<Region>()
///     .where_(|w| {
///         w.eq("region_id", 1i64);
///     })
///     .build();
/// ```
pub trait Mapper {
    /// 表名
    const TABLE: &'static str;
    /// 列名，按字段声明顺序
    const COLUMNS: &'static [&'static str];

    /// 各列的值，顺序与 `COLUMNS` 一致
    fn values(&self) -> Vec<(&'static str, BindValue)>;
}
