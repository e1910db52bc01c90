use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, MySqlPool, Row, TypeInfo};

/// A show record as returned by the database: column names mapped to values
/// with native SQL to JSON type conversion. The columns beyond `name` are
/// opaque to this application and pass through verbatim.
pub type ShowRecord = Map<String, Value>;

const SQL_LIST_NAMES: &str = "SELECT name FROM tv_shows ORDER BY name DESC LIMIT 20";
const SQL_FIND_BY_NAME: &str = "SELECT * FROM tv_shows WHERE name = ?";

/// Fetch at most 20 show names, descending lexicographic order
pub async fn list_show_names(pool: &MySqlPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(SQL_LIST_NAMES)
        .fetch_all(pool)
        .await
}

/// Fetch the record for an exact show name, parameter bound
///
/// `name` is not guaranteed unique at the schema level. When multiple rows
/// match, the first row in database return order wins and the rest are
/// discarded, matching the documented single-record semantics. The discard is
/// logged so the ambiguity is at least visible.
pub async fn find_show_by_name(
    pool: &MySqlPool,
    name: &str,
) -> Result<Option<ShowRecord>, sqlx::Error> {
    let rows = sqlx::query(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_all(pool)
        .await?;

    if rows.len() > 1 {
        tracing::warn!(
            name,
            matches = rows.len(),
            "Multiple rows match show name, returning the first and discarding the rest"
        );
    }

    rows.first().map(row_to_record).transpose()
}

/// Convert a MySQL row to a JSON object, keyed by column name
///
/// Decodes by the column's declared type; anything outside the handled set is
/// decoded as text, and a value that cannot be decoded at all becomes null
/// rather than failing the whole request.
fn row_to_record(row: &MySqlRow) -> Result<ShowRecord, sqlx::Error> {
    let mut record = Map::with_capacity(row.columns().len());

    for column in row.columns() {
        let idx = column.ordinal();
        let value = match column.type_info().name() {
            "BOOLEAN" => row.try_get::<Option<bool>, _>(idx)?.map(Value::Bool),
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
                row.try_get::<Option<i64>, _>(idx)?.map(Value::from)
            }
            "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
            | "BIGINT UNSIGNED" | "YEAR" => row.try_get::<Option<u64>, _>(idx)?.map(Value::from),
            "FLOAT" => row
                .try_get::<Option<f32>, _>(idx)?
                .map(|v| Value::from(v as f64)),
            "DOUBLE" => row.try_get::<Option<f64>, _>(idx)?.map(Value::from),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(idx)?
                .map(|v| Value::String(v.to_string())),
            "DATETIME" => row
                .try_get::<Option<NaiveDateTime>, _>(idx)?
                .map(|v| Value::String(v.to_string())),
            "TIMESTAMP" => row
                .try_get::<Option<DateTime<Utc>>, _>(idx)?
                .map(|v| Value::String(v.to_rfc3339())),
            "TIME" => row
                .try_get::<Option<NaiveTime>, _>(idx)?
                .map(|v| Value::String(v.to_string())),
            other => match row.try_get::<Option<String>, _>(idx) {
                Ok(value) => value.map(Value::String),
                Err(err) => {
                    tracing::debug!(
                        column = column.name(),
                        column_type = other,
                        err = %err,
                        "Undecodable column, passing through as null"
                    );
                    None
                }
            },
        };

        record.insert(column.name().to_owned(), value.unwrap_or(Value::Null));
    }

    Ok(record)
}
