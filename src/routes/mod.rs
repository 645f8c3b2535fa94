pub mod exercises;
pub mod health;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(users::login)
            .service(users::register)
            .service(users::list_users)
            .service(exercises::record_exercise)
            .service(exercises::get_log),
    );
}
