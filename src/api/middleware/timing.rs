//! HTTP timing middleware
//!
//! Logs method, path, status and latency of every request through `tracing`.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

/// HTTP timing middleware factory
#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = srv.call(req).await;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        warn!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    } else {
                        debug!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    }
                }
                Err(e) => {
                    warn!("{} {} failed: {} ({:.2} ms)", method, path, e, elapsed_ms);
                }
            }

            result
        })
    }
}
