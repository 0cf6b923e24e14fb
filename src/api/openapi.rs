//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{UsuarioPayload, UsuarioResponse};
use crate::errors::ErrorBody;

/// OpenAPI documentation for the Usuarios API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Gestión de Usuarios",
        version = "1.0.0",
        description = "Esta API permite administrar usuarios con operaciones CRUD completas.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Soporte", email = "soporte@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Servidor de desarrollo")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(UsuarioPayload, UsuarioResponse, ErrorBody)
    ),
    tags(
        (name = "Usuarios", description = "Operaciones CRUD sobre usuarios")
    )
)]
pub struct ApiDoc;
