//! Telemetry HTTP server: landing page plus the metrics path.

use anyhow::Result;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, error, info};
use vega_config::ExporterConfig;
use vega_exporter::{metrics, Scraper};

/// Runs the HTTP server until it fails or the process is terminated.
///
/// Each request to the metrics path triggers one independent scrape cycle;
/// concurrent scrapes are not coalesced.
pub async fn run(config: &ExporterConfig, scraper: Scraper) -> Result<()> {
    let scraper = Arc::new(scraper);
    let metrics_path: Arc<str> = Arc::from(config.metrics_path.as_str());

    let make_service = make_service_fn(move |_conn| {
        let scraper = scraper.clone();
        let metrics_path = metrics_path.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |request| {
                handle(request, scraper.clone(), metrics_path.clone())
            }))
        }
    });

    let server = Server::try_bind(&config.listen_address)?.serve(make_service);
    info!(
        address = %config.listen_address,
        path = %config.metrics_path,
        "listening for scrapes"
    );
    server.await?;
    Ok(())
}

async fn handle(
    request: Request<Body>,
    scraper: Arc<Scraper>,
    metrics_path: Arc<str>,
) -> Result<Response<Body>, Infallible> {
    let response = match (request.method(), request.uri().path()) {
        (&Method::GET, path) if path == metrics_path.as_ref() => {
            let outcome = scraper.scrape().await;
            debug!(up = outcome.up, validators = outcome.facts.len(), "scrape served");
            match metrics::render(&outcome) {
                Ok(text) => text_response(
                    StatusCode::OK,
                    "text/plain; version=0.0.4; charset=utf-8",
                    text,
                ),
                Err(err) => {
                    error!(error = %err, "failed to render metrics");
                    text_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "text/plain; charset=utf-8",
                        "failed to render metrics\n".to_string(),
                    )
                }
            }
        }
        (&Method::GET, "/") => text_response(
            StatusCode::OK,
            "text/html; charset=utf-8",
            landing_page(&metrics_path),
        ),
        _ => text_response(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            "not found\n".to_string(),
        ),
    };
    Ok(response)
}

fn landing_page(metrics_path: &str) -> String {
    format!(
        "<html>\n\
         <head><title>Vega Signing Exporter</title></head>\n\
         <body>\n\
         <h1>Vega Signing Exporter</h1>\n\
         <p><a href='{metrics_path}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

fn text_response(status: StatusCode, content_type: &'static str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
