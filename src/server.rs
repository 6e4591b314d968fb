use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::http::header::{self, HeaderValue};
use actix_web::middleware::{Logger, Next, from_fn};
use actix_web::{App, Error, HttpResponse, HttpServer, Responder, get, web};
use anyhow::Result;
use log::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::dto::{TranscriptionRequest, TranscriptionResult};
use crate::error::RelayError;
use crate::groq::transcriber::GroqTranscriber;

const JSON_LIMIT: usize = 50 * 1024 * 1024; // 50MB

pub struct AppState {
    pub transcriber: GroqTranscriber,
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    debug!("Health check endpoint called");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Resono transcription relay is running"
    }))
}

async fn transcribe(
    data: web::Data<AppState>,
    payload: web::Json<TranscriptionRequest>,
) -> Result<HttpResponse, RelayError> {
    let request = payload.into_inner();
    debug!(
        "Transcription request received: origin={}, name={}, {} base64 chars",
        request.origin,
        request.name,
        request.data.len()
    );

    let transcription = data
        .transcriber
        .transcribe(&request.origin, &request.name, &request.data)
        .await
        .inspect_err(|e| error!("Transcription failed: {e}"))?;

    info!(
        "Transcription completed for '{}': {} characters",
        request.name,
        transcription.len()
    );

    Ok(HttpResponse::Ok().json(TranscriptionResult { transcription }))
}

/// Answers preflight requests and stamps the CORS headers on every response.
pub async fn cors(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let mut res = if req.method() == Method::OPTIONS {
        req.into_response(HttpResponse::Ok().finish())
    } else {
        next.call(req).await?
    };

    let headers = res.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );

    Ok(res)
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            warn!("Rejecting transcription request body: {err}");
            RelayError::InvalidInput.into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(health_check).service(
        web::resource("/transcribe")
            .wrap(from_fn(cors))
            .route(web::post().to(transcribe)),
    );
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let ServerConfig { host, port, groq } = config;

    info!("Starting Resono transcription relay");
    info!(
        "Using configuration: endpoint={}, timeout={:?}, api_key_set={}",
        groq.endpoint,
        groq.timeout,
        groq.has_api_key()
    );
    if !groq.has_api_key() {
        warn!("GROQ_API_KEY is not set; transcription requests will fail until it is provided");
    }

    let transcriber = GroqTranscriber::new(groq)?;
    let app_state = web::Data::new(AppState { transcriber });

    info!("Resono API running on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
