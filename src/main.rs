use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agendly::{
  adapters::http::{TemplateEngine, WebRouteDependencies, configure_web_routes},
  domain::signin::ports::Authenticator,
  infrastructure::{auth::HttpAuthenticator, config::Config},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "agendly=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Agendly sign-in screen");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!(
    "Configuration loaded, auth API at {}",
    config.auth_api.base_url
  );

  // Initialize the auth provider adapter
  let authenticator: Arc<dyn Authenticator> = Arc::new(
    HttpAuthenticator::new(&config.auth_api).expect("Failed to create auth API client"),
  );

  // Initialize template engine
  let templates = TemplateEngine::new().expect("Failed to initialize template engine");
  tracing::info!("Template engine initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            authenticator: authenticator.clone(),
          },
        )
      })
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", actix_web::web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
