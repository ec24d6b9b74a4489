use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use tripmate_api::config::AppConfig;
use tripmate_api::routes;
use tripmate_api::services::assistant::GeminiClient;
use tripmate_api::services::itinerary_generation_service::TripPlanner;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Startup failed: {}", err);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
        }
    };

    let backend = GeminiClient::new(&config.gemini).map_err(|err| {
        error!("Failed to build Gemini client: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;
    info!("Generative backend ready: {:?}", backend);
    info!("Environment: {}", config.environment);

    let planner = web::Data::new(TripPlanner::new(Arc::new(backend)));
    let frontend_url = config.frontend_url.clone();

    info!("Attempting to bind to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST", "PATCH", "PUT"])
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(planner.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
