//! User CRUD handlers.
//!
//! Thin translations from HTTP to service calls; no business logic here.
//! The `{id}` segment is extracted as a raw string so an unparsable id
//! becomes a 400 in the uniform error shape instead of a framework
//! rejection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{UsuarioPayload, UsuarioResponse};
use crate::errors::{AppError, AppResult, ErrorBody};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::BadArgument(format!("ID inválido: {}", raw)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Usuarios",
    request_body = UsuarioPayload,
    responses(
        (status = 201, description = "Usuario creado", body = UsuarioResponse),
        (status = 400, description = "Error de validación", body = ErrorBody),
        (status = 409, description = "El email ya está registrado", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UsuarioPayload>,
) -> AppResult<(StatusCode, Json<UsuarioResponse>)> {
    let usuario = state.user_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(UsuarioResponse::from(usuario))))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Listado de usuarios", body = [UsuarioResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UsuarioResponse>>> {
    let usuarios = state.user_service.list().await?;

    Ok(Json(
        usuarios.into_iter().map(UsuarioResponse::from).collect(),
    ))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Identificador del usuario")),
    responses(
        (status = 200, description = "Usuario encontrado", body = UsuarioResponse),
        (status = 400, description = "ID inválido o inexistente", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UsuarioResponse>> {
    let id = parse_id(&raw_id)?;
    let usuario = state.user_service.get(id).await?;

    Ok(Json(UsuarioResponse::from(usuario)))
}

/// Replace an existing user
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Identificador del usuario")),
    request_body = UsuarioPayload,
    responses(
        (status = 200, description = "Usuario actualizado", body = UsuarioResponse),
        (status = 400, description = "Error de validación o ID inexistente", body = ErrorBody),
        (status = 409, description = "El email ya está registrado", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UsuarioPayload>,
) -> AppResult<Json<UsuarioResponse>> {
    let id = parse_id(&raw_id)?;
    let usuario = state.user_service.update(id, payload).await?;

    Ok(Json(UsuarioResponse::from(usuario)))
}

/// Delete a user.
///
/// Not idempotent: repeating the delete returns 400, not 204.
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Identificador del usuario")),
    responses(
        (status = 204, description = "Usuario eliminado"),
        (status = 400, description = "ID inválido o inexistente", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, AppError::BadArgument(_)));
        assert_eq!(err.detalles(), vec!["ID inválido: abc"]);
    }
}
