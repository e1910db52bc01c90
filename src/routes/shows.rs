use askama::Template;
use axum::{
    extract::{Path, State},
    http::header::ACCEPT,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use sqlx::MySqlPool;

use crate::error::AppError;
use crate::negotiate::{negotiate, MediaType};
use crate::query::{find_show_by_name, list_show_names, ShowRecord};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub television_shows: Vec<String>,
}

#[derive(Template)]
#[template(path = "show.html")]
pub struct ShowTemplate {
    pub name: String,
    pub fields: Vec<Field>,
}

pub struct Field {
    pub key: String,
    pub value: String,
}

/// GET / - list up to 20 show names, descending by name, always HTML
pub async fn list(State(pool): State<MySqlPool>) -> Result<Html<String>, AppError> {
    let television_shows = list_show_names(&pool).await?;
    let page = IndexTemplate { television_shows }.render()?;
    Ok(Html(page))
}

/// GET /television_shows/{name} - render one show record
///
/// Exact-match lookup on the raw path segment. The representation follows
/// the Accept header; a miss is a plain-text 404.
pub async fn detail(
    State(pool): State<MySqlPool>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let record = find_show_by_name(&pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(name.clone()))?;

    let accept = headers.get(ACCEPT).and_then(|value| value.to_str().ok());

    let response = match negotiate(accept) {
        MediaType::Html => {
            let page = show_template(&name, &record).render()?;
            Html(page).into_response()
        }
        MediaType::Json => Json(Value::Object(record)).into_response(),
        MediaType::Plain => serde_json::to_string(&record)?.into_response(),
    };

    Ok(response)
}

fn show_template(name: &str, record: &ShowRecord) -> ShowTemplate {
    let fields = record
        .iter()
        .map(|(key, value)| Field {
            key: key.clone(),
            value: match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            },
        })
        .collect();

    ShowTemplate {
        name: name.to_owned(),
        fields,
    }
}
