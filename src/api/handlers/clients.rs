/*
 * Responsibility
 * - /clients handlers (list + create, the whole observed surface)
 * - Json in via DTO, validate() before any repo call
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::dto::clients::{ClientResponse, CreateClientRequest},
    api::extractors::AuthCtxExtractor,
    error::AppError,
    repos::client_repo,
    state::AppState,
};

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let rows = client_repo::list(&state.db).await?;
    let res = rows.into_iter().map(ClientResponse::from).collect();

    Ok(Json(res))
}

pub async fn create_client(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let row =
        client_repo::create(&state.db, &req.name, req.address.as_deref(), &req.contact).await?;

    tracing::info!(user_id = %auth.user_id, client_id = row.id, "client created");

    Ok((StatusCode::CREATED, Json(ClientResponse::from(row))))
}
