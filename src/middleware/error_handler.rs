use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;
use crate::middleware::request_id::RequestIdValue;

/// Middleware that logs failed requests
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let path = req.path().to_string();
            let request_id = request_id_of(&req);
            let result = service.call(req).await;

            match &result {
                Err(err) => tracing::error!(
                    request_id = %request_id,
                    path = %path,
                    "Request error: {:?}",
                    err
                ),
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(
                                request_id = %request_id,
                                path = %path,
                                status = %status,
                                "Request failed: {}",
                                err
                            );
                        } else {
                            tracing::warn!(
                                request_id = %request_id,
                                path = %path,
                                status = %status,
                                "Request rejected: {}",
                                err
                            );
                        }
                    }
                }
            }

            result
        })
    }
}

/// Request ID set by the `RequestId` middleware, or `-` when it is not mounted
fn request_id_of(req: &ServiceRequest) -> String {
    req.extensions()
        .get::<RequestIdValue>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// Turns JSON body errors into the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid request body: {}", err)).into()
}
