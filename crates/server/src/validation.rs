use aide::{gen::GenContext, openapi::Operation, operation::OperationInput};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path},
    http::{request::Parts, Request},
    Json,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Wrapper for [`axum`] JSON value validation.
///
/// Equivalent to the [`axum`]'s [`Json`] struct
/// with [`validator`] crate support.
///
/// Both malformed JSON bodies and failed validations are
/// rejected with [`AppError::Validation`].
///
/// [`JSON`]: axum::extract::Json
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for ValidatedJson<T>
where
    T: Validate,
    B: Send + 'static,
    S: Sync,
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::from_request(req, state)
            .await
            .map_err(|err| AppError::validation(err.body_text()))?;

        value
            .validate()
            .map_err(|err| AppError::validation(err.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

impl<T: JsonSchema> OperationInput for ValidatedJson<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}

/// Wrapper for [`axum`] path parameters.
///
/// Path segments that fail to deserialize are rejected with
/// [`AppError::Validation`] instead of a plain text response.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::validation(err.body_text()))?;

        Ok(ValidatedPath(value))
    }
}

impl<T: JsonSchema> OperationInput for ValidatedPath<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Path::<T>::operation_input(ctx, operation);
    }
}
