use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use pantheon_algo::config::Settings;
use pantheon_algo::models::ResonanceWeights;
use pantheon_algo::routes::diagnosis::AppState;
use pantheon_algo::routes::configure_routes;
use pantheon_algo::services::{CorpusStore, QuestionCatalog};
use pantheon_algo::Matcher;

/// Structured body for malformed-payload rejections
#[derive(Debug, serde::Serialize)]
pub struct PayloadError {
    pub error: String,
    pub message: String,
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl error::ResponseError for PayloadError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::BAD_REQUEST)
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    PayloadError {
        error: "invalid_json".to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    PayloadError {
        error: "invalid_query".to_string(),
        message: err.to_string(),
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Pantheon Algo matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the figure corpus (read-only for the process lifetime)
    let corpus = CorpusStore::load(&settings.corpus.path).unwrap_or_else(|e| {
        error!("Failed to load figure corpus: {}", e);
        panic!("Corpus error: {}", e);
    });

    info!("Figure corpus loaded ({} profiles)", corpus.len());

    // Built-in question catalog
    let catalog = Arc::new(QuestionCatalog::builtin());

    info!("Question catalog ready ({} questions)", catalog.len());

    // Initialize matcher with configured weights
    let weights = ResonanceWeights {
        personality: settings.scoring.weights.personality,
        talent: settings.scoring.weights.talent,
    };

    let matcher = Matcher::new(corpus.profiles(), weights);

    info!("Matcher initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        matcher,
        catalog,
        corpus,
        limits: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
