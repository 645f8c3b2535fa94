use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use exerlog::config::Config;
use exerlog::logs::LogService;
use exerlog::routes;
use exerlog::store::{ExerciseStore, PgExerciseStore, PgUserDirectory, UserDirectory};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Storage collaborators are built once and injected; nothing else in the
    // application touches the pool directly.
    let users: Arc<dyn UserDirectory> = Arc::new(PgUserDirectory::new(pool.clone()));
    let exercises: Arc<dyn ExerciseStore> = Arc::new(PgExerciseStore::new(pool));
    let log_service = LogService::new(users.clone(), exercises);

    let users_data = web::Data::from(users);
    let logs_data = web::Data::new(log_service);

    log::info!("Starting exerlog server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(users_data.clone())
            .app_data(logs_data.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::landing)
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
