//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that validates the payload before the handler runs.
///
/// An unreadable body is a `BadArgument` (400); rule violations are
/// collected into one `Validation` error carrying every violated rule
/// as a `"campo: mensaje"` string, never just the first.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadArgument(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(collect_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validation errors into sorted `"campo: mensaje"` strings.
///
/// Sorting keeps the order deterministic; the underlying map is hashed.
fn collect_validation_errors(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut detalles: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match e.message.as_ref() {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: valor inválido", field),
            })
        })
        .collect();
    detalles.sort();
    detalles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UsuarioPayload;

    #[test]
    fn all_violations_are_collected_and_prefixed_with_the_field() {
        let payload = UsuarioPayload {
            nombre: "J".to_string(),
            email: "sin-arroba".to_string(),
            password: "corta".to_string(),
        };

        let detalles = collect_validation_errors(&payload.validate().unwrap_err());

        assert!(detalles
            .contains(&"nombre: El nombre debe tener entre 2 y 100 caracteres".to_string()));
        assert!(detalles.contains(&"email: Formato de email inválido".to_string()));
        assert!(detalles
            .contains(&"password: La contraseña debe tener al menos 6 caracteres".to_string()));
    }

    #[test]
    fn output_is_sorted() {
        let payload = UsuarioPayload {
            nombre: String::new(),
            email: String::new(),
            password: String::new(),
        };

        let detalles = collect_validation_errors(&payload.validate().unwrap_err());
        let mut sorted = detalles.clone();
        sorted.sort();
        assert_eq!(detalles, sorted);
        // A blank payload violates the non-blank rule on every field
        assert!(detalles.len() >= 3);
    }
}
