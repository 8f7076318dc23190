/*
 * Responsibility
 * - /staffs CRUD handlers
 * - Path<i64> gives the store-assigned id directly; a non-numeric id is a
 *   malformed request (400 from the extractor), an unknown one is 404
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::dto::staffs::{CreateStaffRequest, StaffResponse, UpdateStaffRequest},
    api::extractors::AuthCtxExtractor,
    error::AppError,
    repos::staff_repo,
    state::AppState,
};

pub async fn list_staffs(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffResponse>>, AppError> {
    let rows = staff_repo::list(&state.db).await?;
    let res = rows.into_iter().map(StaffResponse::from).collect();

    Ok(Json(res))
}

pub async fn create_staff(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateStaffRequest>,
) -> Result<(StatusCode, Json<StaffResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let row = staff_repo::create(
        &state.db,
        &req.name,
        req.address.as_deref(),
        &req.contact,
        &req.nip,
    )
    .await?;

    tracing::info!(user_id = %auth.user_id, staff_id = row.id, "staff created");

    Ok((StatusCode::CREATED, Json(StaffResponse::from(row))))
}

pub async fn get_staff(
    State(state): State<AppState>,
    Path(staff_id): Path<i64>,
) -> Result<Json<StaffResponse>, AppError> {
    let row = staff_repo::get(&state.db, staff_id)
        .await?
        .ok_or_else(|| AppError::not_found("staff"))?;

    Ok(Json(StaffResponse::from(row)))
}

pub async fn replace_staff(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(staff_id): Path<i64>,
    Json(req): Json<CreateStaffRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let row = staff_repo::replace(
        &state.db,
        staff_id,
        &req.name,
        req.address.as_deref(),
        &req.contact,
        &req.nip,
    )
    .await?
    .ok_or_else(|| AppError::not_found("staff"))?;

    tracing::info!(user_id = %auth.user_id, staff_id, "staff replaced");

    Ok(Json(StaffResponse::from(row)))
}

pub async fn update_staff(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(staff_id): Path<i64>,
    Json(req): Json<UpdateStaffRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    // address tri-state:
    // - None: do not update
    // - Some(None): set NULL
    // - Some(Some(v)): set v
    let address: Option<Option<&str>> = req.address.as_ref().map(|inner| inner.as_deref());

    let row = staff_repo::update(
        &state.db,
        staff_id,
        req.name.as_deref(),
        address,
        req.contact.as_deref(),
        req.nip.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::not_found("staff"))?;

    tracing::info!(user_id = %auth.user_id, staff_id, "staff updated");

    Ok(Json(StaffResponse::from(row)))
}

pub async fn delete_staff(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(staff_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = staff_repo::delete(&state.db, staff_id).await?;

    if !deleted {
        return Err(AppError::not_found("staff"));
    }

    tracing::info!(user_id = %auth.user_id, staff_id, "staff deleted");

    Ok(StatusCode::NO_CONTENT)
}
