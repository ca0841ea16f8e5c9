//! OpenAPI documentation configuration

use domain_products::ROUTES;
use eyre::{bail, eyre};
use utoipa::openapi::{path::PathItem, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

pub const PRODUCTS_PATH: &str = "/api/products";

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Axum / Rust",
        description = "API Docs for Products"
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;

/// Build the document served at `/api-docs/openapi.json`.
///
/// Fails if any route of the product router is missing from the document, or
/// if the document describes an operation the router does not serve.
pub fn api_doc() -> eyre::Result<OpenApiDocument> {
    let doc = ApiDoc::openapi();

    for (method, path) in ROUTES {
        let full_path = format!("{}{}", PRODUCTS_PATH, path.trim_end_matches('/'));
        let item = doc
            .paths
            .paths
            .get(&full_path)
            .ok_or_else(|| eyre!("OpenAPI document is missing path {}", full_path))?;

        let operation = match *method {
            "GET" => &item.get,
            "POST" => &item.post,
            "PUT" => &item.put,
            "PATCH" => &item.patch,
            "DELETE" => &item.delete,
            other => bail!("Unsupported route method {}", other),
        };
        if operation.is_none() {
            bail!("OpenAPI document is missing {} {}", method, full_path);
        }
    }

    let documented: usize = doc.paths.paths.values().map(operation_count).sum();
    if documented != ROUTES.len() {
        bail!(
            "OpenAPI document lists {} operations but {} routes are served",
            documented,
            ROUTES.len()
        );
    }

    Ok(doc)
}

fn operation_count(item: &PathItem) -> usize {
    [
        &item.get,
        &item.put,
        &item.post,
        &item.delete,
        &item.options,
        &item.head,
        &item.patch,
        &item.trace,
    ]
    .into_iter()
    .filter(|operation| operation.is_some())
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;

    #[test]
    fn test_api_doc_lists_every_product_route() {
        let doc = api_doc().unwrap();

        let mut paths: Vec<&String> = doc.paths.paths.keys().collect();
        paths.sort();
        assert_eq!(paths, vec!["/api/products", "/api/products/{id}"]);

        let total: usize = doc.paths.paths.values().map(operation_count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_api_doc_info() {
        let doc = api_doc().unwrap();

        assert_eq!(doc.info.title, "REST API Axum / Rust");
        assert_eq!(doc.info.description.as_deref(), Some("API Docs for Products"));
    }

    #[test]
    fn test_api_doc_operations_are_tagged() {
        let doc = api_doc().unwrap();
        let item = &doc.paths.paths["/api/products/{id}"];
        let operation = item.patch.as_ref().unwrap();

        assert_eq!(operation.tags.as_deref(), Some(&["Products".to_string()][..]));
    }

    fn response_ref(doc: &OpenApiDocument, path: &str, method: &str, status: &str) -> String {
        let item = &doc.paths.paths[path];
        let operation = match method {
            "GET" => &item.get,
            "POST" => &item.post,
            "PUT" => &item.put,
            "PATCH" => &item.patch,
            "DELETE" => &item.delete,
            other => panic!("unexpected method {other}"),
        };
        let responses = &operation.as_ref().unwrap().responses.responses;
        match responses.get(status) {
            Some(RefOr::Ref(reference)) => reference.ref_location.clone(),
            Some(RefOr::T(_)) => panic!("{method} {path} {status} is inline"),
            None => panic!("{method} {path} does not document {status}"),
        }
    }

    #[test]
    fn test_api_doc_documents_cors_rejection_on_every_route() {
        let doc = api_doc().unwrap();

        for (method, path) in ROUTES {
            let full_path = format!("{}{}", PRODUCTS_PATH, path.trim_end_matches('/'));
            assert_eq!(
                response_ref(&doc, &full_path, method, "403"),
                "#/components/responses/ForbiddenResponse"
            );
        }
    }

    #[test]
    fn test_api_doc_documents_malformed_json_on_body_routes() {
        let doc = api_doc().unwrap();

        assert_eq!(
            response_ref(&doc, "/api/products", "POST", "400"),
            "#/components/responses/BadRequestPayloadResponse"
        );
        assert_eq!(
            response_ref(&doc, "/api/products/{id}", "PUT", "400"),
            "#/components/responses/BadRequestPayloadResponse"
        );
        assert_eq!(
            response_ref(&doc, "/api/products/{id}", "PATCH", "400"),
            "#/components/responses/BadRequestValidationResponse"
        );

        let components = doc.components.as_ref().unwrap();
        for name in ["BadRequestPayloadResponse", "ForbiddenResponse"] {
            assert!(components.responses.contains_key(name), "missing response {name}");
        }
        assert!(components.schemas.contains_key("BadRequestBody"));
    }

    #[test]
    fn test_api_doc_registers_schemas() {
        let doc = api_doc().unwrap();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        for name in ["Product", "CreateProduct", "UpdateProduct", "ValidationErrorBody", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
