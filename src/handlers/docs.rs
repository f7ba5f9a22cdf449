use actix_web::{HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::errors::{ApiException, ApiResponse};
use crate::handlers::products;
use crate::models::products::{CreateProduct, ProductToReturnDto, UpdateProduct};

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        products::get_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(schemas(
        ProductToReturnDto,
        CreateProduct,
        UpdateProduct,
        ApiException,
        ApiResponse
    )),
    tags((name = "products", description = "Product catalog CRUD"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Interactive API reference served at `/scalar`.
pub fn scalar() -> Scalar<utoipa::openapi::OpenApi> {
    Scalar::with_url("/scalar", ApiDoc::openapi())
}
