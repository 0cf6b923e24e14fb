//! Usuario domain entity and data transfer objects.
//!
//! `Usuario` deliberately does not implement `Serialize`: the only shape
//! that may ever reach a client is [`UsuarioResponse`], which omits the
//! password. Field names are the Spanish wire names so validation
//! messages and JSON bodies line up without renames.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Usuario domain entity.
///
/// `id` is assigned by the store on creation and never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Request body for both create (POST) and update (PUT).
///
/// Updates are full replacements, so the two operations share this shape.
/// Every rule is evaluated independently; a request can violate several
/// at once and all of them are reported together.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UsuarioPayload {
    /// Display name, 2 to 100 characters
    #[schema(example = "Juan Pérez", min_length = 2, max_length = 100)]
    #[validate(custom(function = "nombre_not_blank"))]
    #[validate(length(
        min = 2,
        max = 100,
        message = "El nombre debe tener entre 2 y 100 caracteres"
    ))]
    pub nombre: String,

    /// Email address, unique across all users
    #[schema(example = "juan@example.com")]
    #[validate(custom(function = "email_not_blank"))]
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,

    /// Password, at least 6 characters (stored as given)
    #[schema(example = "pass123456", min_length = 6)]
    #[validate(custom(function = "password_not_blank"))]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
}

/// Usuario projection returned to clients. Never carries the password.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsuarioResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "Juan Pérez")]
    pub nombre: String,
    /// Email address
    #[schema(example = "juan@example.com")]
    pub email: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nombre: usuario.nombre,
            email: usuario.email,
        }
    }
}

fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(message.into());
        return Err(error);
    }
    Ok(())
}

pub fn nombre_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "El nombre no puede estar vacío")
}

pub fn email_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "El email no puede estar vacío")
}

pub fn password_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "La contraseña no puede estar vacía")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: &str, email: &str, password: &str) -> UsuarioPayload {
        UsuarioPayload {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn messages_for(payload: &UsuarioPayload, field: &str) -> Vec<String> {
        let errors = payload.validate().unwrap_err();
        errors
            .field_errors()
            .get(field)
            .map(|errs| {
                errs.iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload("Juan Pérez", "juan@example.com", "pass123456")
            .validate()
            .is_ok());
    }

    #[test]
    fn blank_nombre_violates_both_rules() {
        let msgs = messages_for(&payload("  ", "juan@example.com", "pass123456"), "nombre");
        assert!(msgs.contains(&"El nombre no puede estar vacío".to_string()));
    }

    #[test]
    fn nombre_length_bounds_are_enforced() {
        let msgs = messages_for(&payload("J", "juan@example.com", "pass123456"), "nombre");
        assert_eq!(msgs, vec!["El nombre debe tener entre 2 y 100 caracteres"]);

        let long = "x".repeat(101);
        let msgs = messages_for(&payload(&long, "juan@example.com", "pass123456"), "nombre");
        assert_eq!(msgs, vec!["El nombre debe tener entre 2 y 100 caracteres"]);

        let max = "x".repeat(100);
        assert!(payload(&max, "juan@example.com", "pass123456")
            .validate()
            .is_ok());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let msgs = messages_for(&payload("Juan", "juanexample.com", "pass123456"), "email");
        assert_eq!(msgs, vec!["Formato de email inválido"]);
    }

    #[test]
    fn short_password_is_rejected() {
        let msgs = messages_for(&payload("Juan", "juan@example.com", "corta"), "password");
        assert_eq!(msgs, vec!["La contraseña debe tener al menos 6 caracteres"]);
    }

    #[test]
    fn multiple_fields_fail_together() {
        let errors = payload("J", "sin-arroba", "corta").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombre"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn response_projection_drops_the_password() {
        let usuario = Usuario {
            id: 1,
            nombre: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            password: "pass123456".to_string(),
        };

        let response = UsuarioResponse::from(usuario);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["nombre"], "Juan Pérez");
        assert_eq!(json["email"], "juan@example.com");
        assert!(json.get("password").is_none());
    }
}
