use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::{ToResponse, ToSchema};

pub const NOT_FOUND_MESSAGE: &str = "Producto No Encontrado";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Body of a product 404
#[derive(Debug, Serialize, ToSchema, ToResponse)]
#[response(
    description = "Product not found",
    example = json!({"error": "Producto No Encontrado"})
)]
pub struct NotFoundBody {
    #[schema(example = "Producto No Encontrado")]
    pub error: String,
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                let body = NotFoundBody {
                    error: NOT_FOUND_MESSAGE.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}
