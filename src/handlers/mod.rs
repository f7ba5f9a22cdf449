pub mod docs;
pub mod products;

use actix_cors::Cors;
use actix_web::middleware::from_fn;
use actix_web::{HttpRequest, web};

use crate::errors::ApiError;
use crate::middleware::catch_panic;

/// Permissive CORS policy: any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Binding failures answer with the same payload as every other error.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    }));

    cfg.service(
        web::resource("/products")
            .wrap(from_fn(catch_panic))
            .route(web::get().to(products::get_products))
            .route(web::post().to(products::create_product)),
    );
    cfg.service(
        web::resource("/products/{id}")
            .wrap(from_fn(catch_panic))
            .route(web::get().to(products::get_product))
            .route(web::put().to(products::update_product))
            .route(web::delete().to(products::delete_product)),
    );
}

/// Documentation routes, registered only in development.
pub fn init_docs_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(docs::openapi_json))
        .service(docs::scalar());
}
