use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, Validated, ValidationErrorBody,
    errors::responses::{
        BadRequestBody, BadRequestPayloadResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse,
    },
    validation::{Location, Violation},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::TAG;
use crate::error::{NotFoundBody, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{CreateProductRequest, ProductId, UpdateProductRequest};

pub const DELETED_MESSAGE: &str = "Producto Eliminado";

/// Every (method, path) pair served by [`router`], relative to its mount point
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/"),
    ("GET", "/{id}"),
    ("PUT", "/{id}"),
    ("PATCH", "/{id}"),
    ("DELETE", "/{id}"),
];

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            ValidationErrorBody,
            Violation,
            Location,
            ErrorResponse,
            BadRequestBody,
            NotFoundBody
        ),
        responses(
            BadRequestValidationResponse,
            BadRequestPayloadResponse,
            ForbiddenResponse,
            InternalServerErrorResponse,
            NotFoundBody
        )
    ),
    tags(
        (name = TAG, description = "API operations related to products")
    )
)]
pub struct ApiDoc;

/// Product routes with the service applied as state
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Get a list of Products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    description = "Return a list of Products",
    responses(
        (status = 200, description = "Successful Response", body = Vec<Product>),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a Product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    description = "Return a Product based on its unique ID",
    params(
        ("id" = i32, Path, description = "The ID of the Product to retrieve")
    ),
    responses(
        (status = 200, description = "Successful Response", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Creates a new Product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    description = "Returns a new record in the database",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Successful Response", body = Product),
        (status = 400, response = BadRequestPayloadResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(CreateProductRequest(input)): Validated<CreateProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Updates a Product with user input
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    description = "Returns the updated Product",
    params(
        ("id" = i32, Path, description = "The ID of the Product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Successful Response", body = Product),
        (status = 400, response = BadRequestPayloadResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(UpdateProductRequest { id, input }): Validated<UpdateProductRequest>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Update Product availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    description = "Inverts the availability of the Product and returns it",
    params(
        ("id" = i32, Path, description = "The ID of the Product to update")
    ),
    responses(
        (status = 200, description = "Successful Response", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<Product>> {
    let product = service.toggle_availability(id).await?;
    Ok(Json(product))
}

/// Delete a Product by a given ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    description = "Returns a confirmation message",
    params(
        ("id" = i32, Path, description = "The ID of the Product to delete")
    ),
    responses(
        (status = 200, description = "Successful Response", body = String, example = json!("Producto Eliminado")),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<&'static str>> {
    service.delete_product(id).await?;
    Ok(Json(DELETED_MESSAGE))
}
