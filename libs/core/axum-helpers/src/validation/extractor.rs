use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use super::{Location, RequestInput, RuleSet, ValidationErrorBody, evaluate};
use crate::errors::AppError;

/// Error gate extractor.
///
/// Collects path parameters and the JSON body, evaluates `T::RULES` and
/// rejects with `400 {"errors": [...]}` if any rule fails. The handler only
/// ever sees a `T` built from input that passed every rule.
///
/// The body is only read when `T::RULES` has a body rule. Bodies sent with a
/// non-JSON `Content-Type`, and empty bodies, are read as having no fields. A
/// JSON body that does not parse is rejected with an [`AppError::InvalidJson`].
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: RuleSet + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
        {
            Ok(Path(params)) => params,
            Err(_) => HashMap::new(),
        };
        let reads_body = T::RULES.iter().any(|rule| rule.location == Location::Body);

        let body = if reads_body && is_json(&parts.headers) {
            let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
                .await
                .map_err(IntoResponse::into_response)?;
            parse_body(&bytes).map_err(IntoResponse::into_response)?
        } else {
            Value::Null
        };

        let input = RequestInput::new(params, body);
        let errors = evaluate(T::RULES, &input);
        if !errors.is_empty() {
            return Err(ValidationErrorBody { errors }.into_response());
        }

        T::from_input(input)
            .map(Validated)
            .map_err(IntoResponse::into_response)
    }
}

/// A missing `Content-Type` is treated as JSON
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    content_type
        .to_str()
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse_body(bytes: &Bytes) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::InvalidJson(e.to_string()))
}
