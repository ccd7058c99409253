use crate::archive::{ArchiveSummary, Archiver};
use crate::config::Options;
use crate::connector::Connector;
use crate::error::ArchiveError;
use crate::metrics::{
    ARCHIVED_SLIDES_TOTAL, ARCHIVE_RUNS_TOTAL, HTTP_REQUESTS_ERRORS, HTTP_REQUESTS_TOTAL,
    HTTP_RESPONSE_TIME_SECONDS,
};
use crate::response::ArchiveResponse;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, App, HttpServer};
use actix_web::error::ErrorInternalServerError;
use actix_web::guard::Get;
use actix_web::web::{self, Data, ServiceConfig, resource};
use actix_web::http::header::ContentType;
use actix_web::dev::Service;
use askama::Template;
use page::IndexTemplate;
use prometheus::{TextEncoder, Encoder};
use std::sync::Arc;
use tracing::{error, info};

pub use middleware::{ArchiveOutcome, Logger, BindRequestId, RequestId};

mod middleware;
mod page;

pub struct AppState {
    pub options: Options,
    pub connector: Arc<dyn Connector>,
}

async fn index(state: Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let body = IndexTemplate::new(&state.options)
        .render()
        .map_err(ErrorInternalServerError)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

async fn archive(state: Data<AppState>, req: HttpRequest) -> HttpResponse {
    let request_id = RequestId::of(&req);
    info!(request_id = request_id.as_str(), "archive request received");
    match perform_archive(&state).await {
        Ok(summary) => {
            req.extensions_mut().insert(ArchiveOutcome {
                stage: "done",
                copied_slides: summary.copied_slides,
                deleted_slides: summary.deleted_slides,
            });
            ARCHIVE_RUNS_TOTAL.with_label_values(&["success"]).inc();
            ARCHIVED_SLIDES_TOTAL.with_label_values(&["copied"]).inc_by(summary.copied_slides as u64);
            ARCHIVED_SLIDES_TOTAL.with_label_values(&["deleted"]).inc_by(summary.deleted_slides as u64);
            HttpResponse::Ok().json(ArchiveResponse::success(summary))
        }
        Err(err) => {
            error!(
                request_id = request_id.as_str(),
                stage = err.stage(),
                message = err.to_string().as_str(),
                "archive process failed"
            );
            req.extensions_mut().insert(ArchiveOutcome {
                stage: err.stage(),
                copied_slides: 0,
                deleted_slides: 0,
            });
            ARCHIVE_RUNS_TOTAL.with_label_values(&["failure"]).inc();
            HTTP_REQUESTS_ERRORS.with_label_values(&[]).inc();
            HttpResponse::InternalServerError().json(ArchiveResponse::failure(&err))
        }
    }
}

async fn perform_archive(state: &AppState) -> Result<ArchiveSummary, ArchiveError> {
    let config = state.options.archive_config()?;
    let service = state.connector.connect(&config);
    Archiver::new(&*service, &config).run().await
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ArchiveResponse::method_not_allowed())
}

async fn metrics() -> Result<HttpResponse, actix_web::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    encoder.encode(&prometheus::gather(), &mut buffer).map_err(ErrorInternalServerError)?;
    let response = String::from_utf8(buffer).map_err(ErrorInternalServerError)?;
    Ok(HttpResponse::Ok()
        .insert_header(ContentType(mime::TEXT_PLAIN))
        .body(response))
}

/// Registers every route of the service. Shared by `run` and the integration tests.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(resource("/").guard(Get()).to(index))
        .service(resource("/api/archive")
            .route(web::post().to(archive))
            .default_service(web::to(method_not_allowed))
            .wrap_fn(|req, srv| {
                HTTP_REQUESTS_TOTAL.with_label_values(&[]).inc();
                let timer = HTTP_RESPONSE_TIME_SECONDS.with_label_values(&[])
                    .start_timer();
                let fut = srv.call(req);
                async move {
                    let res = fut.await?;
                    timer.observe_duration();
                    Ok(res)
                }
            })
        )
        .service(resource("/metrics").guard(Get()).to(metrics));
}

pub async fn run(options: Options, connector: Arc<dyn Connector>) -> std::io::Result<()> {
    let address = options.bind_address();
    let state = Data::new(AppState { options, connector });
    info!(host = address.0.as_str(), port = address.1, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger {})
            .wrap(BindRequestId {})
            .configure(configure)
    })
    .bind(address)?
    .run()
    .await
}
