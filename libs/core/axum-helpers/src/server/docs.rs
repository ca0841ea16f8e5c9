use axum::Router;
use core_config::docs::DocsConfig;
use utoipa::openapi::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Documentation viewers for an already built OpenAPI document.
///
/// - `/docs`: Scalar, branded with `DocsConfig`
/// - `/swagger-ui`, `/redoc`, `/rapidoc`: alternative viewers
/// - `/api-docs/openapi.json`: the raw document
pub fn docs_router(openapi: OpenApi, docs: &DocsConfig) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url(DOCS_PATH, openapi).custom_html(branded_page(docs)))
}

/// Scalar page template; `$spec` is substituted with the document by utoipa-scalar.
fn branded_page(docs: &DocsConfig) -> String {
    let title = escape_html(&docs.title);
    let favicon = escape_html(&docs.favicon_url);
    let topbar = escape_html(&docs.topbar_color);

    format!(
        r#"<!doctype html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <link rel="icon" href="{favicon}"/>
    <style>
        .docs-topbar {{
            display: flex;
            align-items: center;
            gap: 1rem;
            padding: 0.5rem 1.5rem;
            background-color: {topbar};
            color: #ffffff;
            font-family: sans-serif;
        }}
        .docs-topbar img {{
            height: 48px;
            width: auto;
        }}
    </style>
</head>
<body>
<header class="docs-topbar">
    <img src="{favicon}" alt=""/>
    <span>{title}</span>
</header>
<script id="api-reference" type="application/json">
    $spec
</script>
<script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
</body>
</html>"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
