use super::AppError;
use axum::{extract::rejection::JsonRejection, Json};
use formaid::validation::{check_field, FieldCheck, FieldKind};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ValidateFieldRequest {
    pub kind: FieldKind,
    pub value: String,
}

/// Handler for `POST /validate-field`. An unknown `kind` is rejected as a bad request.
pub async fn validate_field_handler(
    payload: Result<Json<ValidateFieldRequest>, JsonRejection>,
) -> Result<Json<FieldCheck>, AppError> {
    let Json(request) = payload?;
    Ok(Json(check_field(request.kind, &request.value)))
}
