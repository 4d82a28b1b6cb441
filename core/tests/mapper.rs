use chrono::NaiveDate;
use minisql::{replace_into, BindValue, DbDriver, Mapper, ReplaceSql, SelectSql};

#[derive(Debug, Clone, Mapper)]
#[mapper(table = "region")]
struct Region {
    region_id: i64,
    #[column(name = "region_name")]
    name: String,
    parent_id: Option<i64>,
    #[skip]
    #[allow(dead_code)]
    children: Vec<Region>,
}

#[derive(Debug, Clone, Mapper)]
struct UserProfile {
    id: i64,
    nickname: String,
    birthday: NaiveDate,
    active: bool,
}

fn region() -> Region {
    Region {
        region_id: 11,
        name: "Hangzhou".to_string(),
        parent_id: None,
        children: Vec::new(),
    }
}

#[test]
fn mapper_metadata() {
    assert_eq!(Region::TABLE, "region");
    assert_eq!(Region::COLUMNS, &["region_id", "region_name", "parent_id"]);
    assert_eq!(UserProfile::TABLE, "user_profile");
    assert_eq!(
        UserProfile::COLUMNS,
        &["id", "nickname", "birthday", "active"]
    );
}

#[test]
fn mapper_values_follow_columns() {
    let values = region().values();
    assert_eq!(
        values,
        vec![
            ("region_id", BindValue::Int64(11)),
            ("region_name", BindValue::String("Hangzhou".to_string())),
            ("parent_id", BindValue::Null),
        ]
    );
}

#[test]
fn select_by_parent() {
    let stmt = SelectSql::of::<Region>()
        .where_(|w| {
            w.raw("parent_id = ?", [1i64]);
        })
        .build();
    assert_eq!(
        stmt.sql(),
        "SELECT region_id,region_name,parent_id FROM region WHERE parent_id = ?"
    );
    assert_eq!(stmt.params(), &[BindValue::Int64(1)]);
    assert_eq!(
        stmt.to_sql(DbDriver::Postgres),
        "SELECT region_id,region_name,parent_id FROM region WHERE parent_id = $1"
    );
}

#[test]
fn replace_model() {
    let profile = UserProfile {
        id: 3,
        nickname: "bob".to_string(),
        birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        active: true,
    };
    let stmt = ReplaceSql::of(&profile).build();
    assert_eq!(
        stmt.sql(),
        "REPLACE INTO user_profile (id,nickname,birthday,active) VALUES (?,?,?,?)"
    );
    assert_eq!(stmt.params_to_strings(), vec!["3", "bob", "1990-05-17", "true"]);
    assert!(stmt.check().is_ok());
}

#[test]
fn replace_many_models() {
    let rows = vec![
        region(),
        Region {
            region_id: 12,
            name: "Ningbo".to_string(),
            parent_id: Some(11),
            children: Vec::new(),
        },
    ];
    let stmt = rows
        .iter()
        .fold(replace_into(Region::TABLE), |sql, r| {
            sql.values(|row| {
                for (column, value) in r.values() {
                    row.value(column, value);
                }
            })
        })
        .build();
    assert_eq!(
        stmt.sql(),
        "REPLACE INTO region (region_id,region_name,parent_id) VALUES (?,?,?),(?,?,?)"
    );
    assert_eq!(stmt.params().len(), 6);
    assert_eq!(stmt.params()[5], BindValue::Int64(11));
}

#[derive(Debug, Clone, Mapper)]
struct Device {
    id: i64,
    r#type: String,
}

#[test]
fn raw_identifier_fields_use_plain_column_names() {
    assert_eq!(Device::COLUMNS, &["id", "type"]);
    let device = Device {
        id: 5,
        r#type: "sensor".to_string(),
    };
    let stmt = ReplaceSql::of(&device).build();
    assert_eq!(stmt.sql(), "REPLACE INTO device (id,type) VALUES (?,?)");
    assert_eq!(stmt.params_to_strings(), vec!["5", "sensor"]);
}
