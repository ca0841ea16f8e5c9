//! Products API routes

use axum::Router;
use domain_products::{
    handlers, PgProductRepository, ProductService, UnavailableProductRepository,
};

use crate::state::AppState;

/// Create products router
///
/// Backed by PostgreSQL when the startup connection succeeded, otherwise by a
/// repository that fails every call.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        None => handlers::router(ProductService::new(UnavailableProductRepository)),
    }
}
