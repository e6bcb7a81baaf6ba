//! Handlers for the `/forms` resource.
//!
//! Lists the registered form schemas, describes their field rules, runs
//! dry-run validation, and accepts or rejects submitted records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::validation::rules::{Record, SchemaDescription, ValidationResult};
use storefront_core::validation::schemas::FormSchema;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/forms
///
/// Describe every registered form schema.
pub async fn list_schemas() -> Json<DataResponse<Vec<SchemaDescription>>> {
    let schemas = FormSchema::ALL.into_iter().map(FormSchema::describe).collect();
    Json(DataResponse { data: schemas })
}

/// GET /api/v1/forms/{schema}
///
/// Describe one form schema. Returns 404 for unknown names.
pub async fn get_schema(
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<SchemaDescription>>> {
    let schema: FormSchema = name.parse()?;
    Ok(Json(DataResponse {
        data: schema.describe(),
    }))
}

/// POST /api/v1/forms/{schema}/validate
///
/// Validate a JSON object against the named schema. Invalid records still
/// answer 200; the verdict is in the body.
pub async fn validate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(record): Json<Record>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let schema: FormSchema = name.parse()?;
    check_record_size(&state, &record)?;

    let result = schema.validate(&record);
    tracing::debug!(
        %schema,
        is_valid = result.is_valid,
        error_count = result.errors.len(),
        "Validated form record"
    );

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/forms/{schema}/submit
///
/// Validate a record and accept it for hand-off. Invalid records are
/// rejected with 400 `VALIDATION_ERROR`; accepted records answer 202 with
/// only the schema's declared fields.
pub async fn submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(record): Json<Record>,
) -> AppResult<(StatusCode, Json<DataResponse<Record>>)> {
    let schema: FormSchema = name.parse()?;
    check_record_size(&state, &record)?;

    if let Err(err) = schema.validate(&record).into_result() {
        tracing::debug!(%schema, error = %err, "Rejected form submission");
        return Err(err.into());
    }

    let accepted = schema.project(&record);
    tracing::info!(%schema, field_count = accepted.len(), "Accepted form submission");

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: accepted })))
}

fn check_record_size(state: &AppState, record: &Record) -> AppResult<()> {
    let max_fields = state.config.max_record_fields;
    if record.len() > max_fields {
        return Err(AppError::BadRequest(format!(
            "record has {} fields, at most {max_fields} are accepted",
            record.len()
        )));
    }
    Ok(())
}
