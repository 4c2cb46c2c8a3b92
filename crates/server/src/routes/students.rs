use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use service::student::{Student, StudentInput};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only students with at least this many marks
    #[serde(rename = "minMarks")]
    pub min_marks: Option<i32>,
}

/// Path ids must be positive integers in canonical form: digits only, no sign,
/// whitespace or leading zero.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    let canonical = !raw.is_empty() && !raw.starts_with('0') && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<i32>() {
        Ok(id) if canonical => Ok(id),
        _ => Err(ApiError::validation(format!("invalid student id: {raw}"))),
    }
}

#[utoipa::path(
    get, path = "/students", tag = "students",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::StudentDoc]),
        (status = 400, description = "Malformed query", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let Query(q) = query?;
    let list = state.students.list(q.min_marks).await?;
    info!(count = list.len(), min_marks = ?q.min_marks, "list students");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let created = state.students.create(input).await?;
    let location = format!("/students/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&raw)?;
    Ok(Json(state.students.get(id).await?))
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&raw)?;
    let Json(input) = payload?;
    Ok(Json(state.students.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw)?;
    state.students.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("12").unwrap(), 12);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        for raw in ["0", "-3", "abc", "1.5", "", "99999999999", "+1", " 1", "1 ", "01"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.code, crate::errors::VALIDATION_ERROR, "{raw}");
        }
    }
}
