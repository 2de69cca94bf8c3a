//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;
use crate::models::RecordInput;

/// Extract and parse a numeric record id from path
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|e| ApiError::bad_request(format!("invalid id '{}': {}", raw, e)))?;

        Ok(Self(id))
    }
}

/// Form fields in arrival order: body fields first, then query-string
/// fields. Lookups take the first value for a key.
#[derive(Debug, Default)]
struct FormFields(Vec<(String, String)>);

impl FormFields {
    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Read text fields from a `multipart/form-data` body. File parts are skipped.
async fn multipart_fields<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(key) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        fields.push((key, value));
    }

    Ok(fields)
}

/// Extract a `name`/`age` pair from form fields and validate it.
///
/// The body is read as urlencoded or multipart depending on `Content-Type`;
/// any other body is ignored. Query-string fields fill in keys the body
/// lacks. Absent fields read as empty strings.
pub struct RecordForm(pub RecordInput);

impl<S> FromRequest<S> for RecordForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let Query(query): Query<Vec<(String, String)>> = Query::from_request_parts(&mut parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let req = Request::from_parts(parts, body);

        let mut fields = if content_type.starts_with("multipart/form-data") {
            multipart_fields(req, state).await?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            fields
        } else {
            Vec::new()
        };
        fields.extend(query);
        let fields = FormFields(fields);

        let name = fields.first("name").unwrap_or_default();
        let raw_age = fields.first("age").unwrap_or_default();
        let age = raw_age
            .parse::<i64>()
            .map_err(|e| ApiError::bad_request(format!("invalid age '{}': {}", raw_age, e)))?;

        let input = RecordInput::new(name, age)?;
        Ok(Self(input))
    }
}
