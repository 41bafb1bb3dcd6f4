use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::schemas::{ErrorResponse, error_response};

type Rejection = (StatusCode, Json<ErrorResponse>);

fn validation_rejection(errors: ValidationErrors) -> Rejection {
    debug!("Request failed validation: {}", errors);
    error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", errors.to_string())
}

/// Query string deserialized into `T` and validated.
///
/// Malformed queries and validation failures are answered with an
/// `ErrorResponse` body.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                error_response(StatusCode::BAD_REQUEST, "INVALID_QUERY", rejection.body_text())
            })?;
        value.validate().map_err(validation_rejection)?;
        Ok(ValidQuery(value))
    }
}

/// JSON body deserialized into `T` and validated.
///
/// Keeps the status of body rejections (400, 415 or 422) and answers with an
/// `ErrorResponse` body.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                error_response(rejection.status(), "INVALID_BODY", rejection.body_text())
            })?;
        value.validate().map_err(validation_rejection)?;
        Ok(ValidJson(value))
    }
}
