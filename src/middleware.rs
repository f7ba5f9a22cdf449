use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse, web};
use futures_util::FutureExt;

use crate::config::Settings;
use crate::errors::{ApiError, ApiException};

/// Process-wide safety net, installed on the `App` with `middleware::from_fn`.
///
/// 5xx responses produced from an error are logged and re-rendered as an
/// [`ApiException`], so no handler-specific body reaches the client. Details are
/// only attached when the app runs in development.
pub async fn exception_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let expose_details = req
        .app_data::<web::Data<Settings>>()
        .is_some_and(|settings| settings.is_development());
    let method = req.method().clone();
    let path = req.path().to_owned();

    // Routing still needs unique ownership of the request here, so it cannot be
    // cloned; failures without a response are left for the server to render.
    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(Ok(res)) => Ok(render_failure(res, expose_details)),
        Ok(Err(err)) => {
            let status = err.as_response_error().status_code();
            tracing::error!(%method, %path, status = status.as_u16(), error = %err, "request failed");
            Err(exception(status, err.to_string(), expose_details).into())
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!(%method, %path, panic = %message, "handler panicked");
            Err(exception(StatusCode::INTERNAL_SERVER_ERROR, message, expose_details).into())
        }
    }
}

/// Per-resource guard that turns a panicking or failing handler into a 500
/// response. Mounted with `Resource::wrap`, after routing has finished, so the
/// response still passes through the outer middleware (CORS, [`exception_middleware`]).
pub async fn catch_panic(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let http_req = req.request().clone();

    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(Ok(res)) => Ok(res.map_into_boxed_body()),
        Ok(Err(err)) => Ok(ServiceResponse::new(http_req, HttpResponse::from_error(err))),
        Err(panic) => {
            let err = ApiError::Panic(panic_message(panic.as_ref()));
            Ok(ServiceResponse::new(http_req, HttpResponse::from_error(err)))
        }
    }
}

fn render_failure<B>(res: ServiceResponse<B>, expose_details: bool) -> ServiceResponse<BoxBody>
where
    B: MessageBody + 'static,
{
    let status = res.status();
    let detail = match res.response().error() {
        Some(err) if status.is_server_error() => Some(err.to_string()),
        _ => None,
    };
    let Some(detail) = detail else {
        return res.map_into_boxed_body();
    };

    tracing::error!(
        method = %res.request().method(),
        path = %res.request().path(),
        status = status.as_u16(),
        error = %detail,
        "request failed"
    );

    let (req, _) = res.into_parts();
    ServiceResponse::new(req, exception(status, detail, expose_details).into_response())
}

fn exception(status: StatusCode, detail: String, expose_details: bool) -> ApiException {
    let exception = ApiException::new(status);
    if expose_details {
        exception.with_details(detail)
    } else {
        exception
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
