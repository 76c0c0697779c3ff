//! Per-request structured logging.

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use tokio::time::Instant;

/// Logs one structured line per completed request.
///
/// Server errors are logged at error level so 5xx responses stand out in the
/// collected stream; everything else is info. The remote address is only
/// present when the router is served with connection info (it is absent in
/// in-process tests).
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let version = request.version();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();
    let code = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!(
            %method,
            path,
            ?version,
            remote_addr = ?remote_addr,
            code,
            latency_ms = latency.as_millis() as u64,
            "request"
        );
    } else {
        tracing::info!(
            %method,
            path,
            ?version,
            remote_addr = ?remote_addr,
            code,
            latency_ms = latency.as_millis() as u64,
            "request"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use crate::server::dispatch::dispatcher::Dispatcher;
    use crate::server::http::router;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;
    use tracing_test::traced_test;

    #[traced_test]
    #[tokio::test]
    async fn logs_completed_requests_with_status() {
        let app = router(Dispatcher::spawn(5));

        app.clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        app.oneshot(Request::builder().uri("/500").body(Body::empty()).unwrap())
            .await
            .unwrap();

        logs_assert(|lines: &[&str]| {
            let request_lines: Vec<_> = lines
                .iter()
                .filter(|line| line.contains("request") && line.contains("method=GET"))
                .collect();
            if request_lines.len() != 2 {
                return Err(format!("expected 2 request lines, saw {}", request_lines.len()));
            }
            if !request_lines[0].contains("code=200") {
                return Err(format!("expected code=200 in {:?}", request_lines[0]));
            }
            if !(request_lines[1].contains("code=500") && request_lines[1].contains("ERROR")) {
                return Err(format!(
                    "expected an error-level code=500 line, got {:?}",
                    request_lines[1]
                ));
            }
            Ok(())
        });
    }
}
