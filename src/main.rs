use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use payterm::config::{AppConfig, Config, LogFormat};
use payterm::middleware::{json_error_handler, ErrorHandler, RequestId, REQUEST_ID_HEADER};
use payterm::modules;
use payterm::pricing::PricingCalculator;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config.app);

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting PayTerm Payment Term Generator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let calculator = web::Data::new(PricingCalculator::new());
    let pricing = web::Data::new(config.pricing.clone());
    let json_config = web::JsonConfig::default().error_handler(json_error_handler);
    let allowed_origin = config.server.cors_allowed_origin.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .allowed_header(REQUEST_ID_HEADER)
            .expose_headers(vec![REQUEST_ID_HEADER])
            .max_age(3600);

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config.clone())
            .app_data(calculator.clone())
            .app_data(pricing.clone())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("payterm={},actix_web=info", app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
