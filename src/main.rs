use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;

use energy_chatbot::db::establish_connection_pool;
use energy_chatbot::models::config::ServerConfig;
use energy_chatbot::repository::DieselRepository;
use energy_chatbot::routes;

/// Layered settings: `config/default.yaml`, then `config/{APP_ENV}.yaml`,
/// then `APP_*` environment variables.
fn load_config() -> Result<ServerConfig, ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let address = server_config.address.clone();
    let port = server_config.port;
    log::info!("Starting energy chatbot on {address}:{port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((address, port))?
    .run()
    .await
}
