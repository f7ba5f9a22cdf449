use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::products as product_db;
use crate::errors::{ApiError, ApiException, ApiResponse};
use crate::models::products::{CreateProduct, ProductToReturnDto, UpdateProduct};
use crate::models::{Pagination, PaginationQuery};

pub const TAG: &str = "products";

/// GET /products — one page of products ordered by id.
#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "A page of products", body = Pagination<ProductToReturnDto>),
        (status = 400, description = "Malformed query", body = ApiException),
        (status = 500, description = "Unexpected failure", body = ApiException)
    )
)]
pub async fn get_products(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let page_index = query.page_index();
    let page_size = query.page_size();

    let count = product_db::count_products(db.get_ref()).await?;
    let products = product_db::get_products_page(db.get_ref(), page_index, page_size).await?;
    let data: Vec<ProductToReturnDto> = products.into_iter().map(ProductToReturnDto::from).collect();

    tracing::debug!(page_index, page_size, count, returned = data.len(), "listed products");
    Ok(HttpResponse::Ok().json(Pagination::new(page_index, page_size, count, data)))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductToReturnDto),
        (status = 404, description = "No product with this id", body = ApiException),
        (status = 500, description = "Unexpected failure", body = ApiException)
    )
)]
pub async fn get_product(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match product_db::get_product_by_id(db.get_ref(), id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(ProductToReturnDto::from(product))),
        None => Err(ApiError::NotFound(format!("Product {id}"))),
    }
}

/// POST /products — the new product's id is returned in the confirmation.
#[utoipa::path(
    post,
    path = "/products",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ApiResponse),
        (status = 400, description = "Malformed body", body = ApiException),
        (status = 500, description = "Unexpected failure", body = ApiException)
    )
)]
pub async fn create_product(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProduct>,
) -> Result<HttpResponse, ApiError> {
    let product = product_db::insert_product(db.get_ref(), body.into_inner()).await?;
    tracing::info!(id = product.id, "product created");

    Ok(HttpResponse::Ok().json(ApiResponse::created(
        "Product Added Successfully",
        product.id,
    )))
}

/// PUT /products/{id} — overwrites name, description and price.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse),
        (status = 400, description = "Malformed body", body = ApiException),
        (status = 404, description = "No product with this id", body = ApiException),
        (status = 500, description = "Unexpected failure", body = ApiException)
    )
)]
pub async fn update_product(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateProduct>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match product_db::update_product(db.get_ref(), id, body.into_inner()).await? {
        Some(_) => {
            tracing::info!(id, "product updated");
            Ok(HttpResponse::Ok().json(ApiResponse::ok("Product Updated Successfully")))
        }
        None => Err(ApiError::NotFound(format!("Product {id}"))),
    }
}

/// DELETE /products/{id}
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 404, description = "No product with this id", body = ApiException),
        (status = 500, description = "Unexpected failure", body = ApiException)
    )
)]
pub async fn delete_product(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if product_db::delete_product(db.get_ref(), id).await? {
        tracing::info!(id, "product deleted");
        Ok(HttpResponse::Ok().json(ApiResponse::ok("Product Deleted Successfully")))
    } else {
        Err(ApiError::NotFound(format!("Product {id}")))
    }
}
