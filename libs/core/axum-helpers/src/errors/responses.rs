//! Reusable OpenAPI response definitions.

use super::ErrorResponse;
use crate::validation::ValidationErrorBody;
use serde::Serialize;
use utoipa::{ToResponse, ToSchema};

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one or more fields failed validation",
    content_type = "application/json",
    example = json!({
        "errors": [
            {
                "value": "",
                "msg": "El nombre del producto no puede ir vacio",
                "param": "name",
                "location": "body"
            },
            {
                "value": -5,
                "msg": "Precio No Válido",
                "param": "price",
                "location": "body"
            }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorBody);

/// Either failure a JSON body endpoint can answer with
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BadRequestBody {
    Validation(ValidationErrorBody),
    InvalidJson(ErrorResponse),
}

/// `400` for endpoints that read a JSON body: field rules or the JSON parser rejected it.
#[derive(ToResponse)]
#[response(
    description = "Bad Request - a field failed validation or the body is not valid JSON",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_JSON",
        "message": "Invalid JSON format",
        "details": "EOF while parsing an object at line 1 column 15"
    })
)]
pub struct BadRequestPayloadResponse(pub BadRequestBody);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - origin not allowed",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "FORBIDDEN",
        "message": "Error de CORS"
    })
)]
pub struct ForbiddenResponse(pub ErrorResponse);
